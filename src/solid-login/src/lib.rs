//! Solid Login - out-of-band login coordinator for the Solid shim.
//!
//! Authenticates a user against a self-hosted identity provider when no
//! direct in-page redirect/callback channel exists: open a separate
//! authentication surface at the provider's login page, poll the shared
//! authentication state for completion, and fall back to heuristic
//! detection when the surface closes without a direct signal.
//!
//! Collaborators (the identity layer, the shared triple store, and the
//! surface itself) are injected via the traits in [`solid_logic`]; the
//! coordinator's only output is a subscribable [`SessionProjection`].

// Core modules
pub mod constants;
mod error;
mod types;
mod uris;

// Flow internals
mod fallback;
mod flow;
mod probe;
mod profile;

// Re-exports from types
pub use types::{LoginState, Provider, SessionProjection, TerminalOutcome};

// Re-exports from error
pub use error::LoginError;

// Re-exports from flow
pub use flow::{FlowOptions, LoginFlow};

// Re-exports from probe
pub use probe::{CredentialProbe, HttpCredentialProbe};

// Re-export the collaborator interfaces for convenience
pub use solid_logic::{AuthStateSource, AuthSurface, Identity, ProfileResolver, SurfaceOpener};
