//! Solid Logic - collaborator interfaces for the Solid shim.
//!
//! The login coordinator never talks to the identity layer, the triple
//! store, or the browser surface directly; it goes through the traits
//! defined here. Production code wires these to the real session and
//! store machinery, tests wire them to fakes.

mod identity;
mod traits;
pub mod vocab;

pub use identity::Identity;
pub use traits::{AuthStateSource, AuthSurface, ProfileResolver, SurfaceOpener};
