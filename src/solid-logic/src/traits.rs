//! Interfaces the login coordinator consumes.

use anyhow::Result;
use async_trait::async_trait;

/// Source of the ambient authentication state.
///
/// Backed by whatever session/token storage the identity layer maintains;
/// the coordinator never inspects its internals, it only asks "who is
/// logged in right now" and "sign out".
#[async_trait]
pub trait AuthStateSource: Send + Sync {
    /// The WebID of the currently authenticated user, if any.
    fn current_user(&self) -> Option<String>;

    /// Terminate the session on the identity layer's side.
    async fn sign_out(&self) -> Result<()>;
}

/// Access to the shared triple store via its normal reactive loader.
#[async_trait]
pub trait ProfileResolver: Send + Sync {
    /// Load a document's triples into the shared store.
    async fn load(&self, document_uri: &str) -> Result<()>;

    /// Look up a single value for `(subject, predicate)` in the store.
    ///
    /// Returns the object as a plain string (URI or literal), or `None`
    /// when the store holds no matching triple.
    fn query(&self, subject_uri: &str, predicate: &str) -> Option<String>;
}

/// An opaque secondary display context showing a provider login page.
///
/// In a browser this is a popup window; any out-of-band mechanism with
/// the same open/closed lifecycle fits.
pub trait AuthSurface: Send + Sync {
    /// Whether the surface is still open.
    fn is_open(&self) -> bool;

    /// Close the surface. Must be safe to call more than once.
    fn close(&self);
}

/// Opens an [`AuthSurface`] at a login-page URI.
pub trait SurfaceOpener: Send + Sync {
    fn open(&self, uri: &str) -> Result<std::sync::Arc<dyn AuthSurface>>;
}
