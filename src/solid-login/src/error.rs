//! Error types for the login coordinator.
//!
//! Only input errors surface to callers. Collaborator failures during
//! polling, probing, or enrichment are caught at their call sites and
//! degrade to "treat as absent / continue"; the flow ends in a silent
//! terminal outcome instead of an error.

/// Errors that can be returned from login operations.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("identifier is empty after trimming")]
    EmptyIdentifier,
    #[error("no provider is awaiting an identifier")]
    NoPendingProvider,
    #[error("invalid provider URI: {0}")]
    InvalidProviderUri(String),
}
