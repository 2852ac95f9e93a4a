//! Constants for the solid-login crate.

use std::time::Duration;

/// Delay between polls of the authentication state.
pub const POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Maximum number of polls per attempt (2-minute ceiling at 1 s each).
pub const MAX_POLL_ATTEMPTS: u32 = 120;

/// Settling delay before the fallback probe sequence starts, giving the
/// provider time to finish writing its session cookie.
pub const FALLBACK_SETTLE_DELAY: Duration = Duration::from_millis(1000);

/// Path segment of a provider's password login page.
pub const PASSWORD_LOGIN_PATH: &str = "/.account/login/password/";

/// Conventional path of a pod's WebID profile document.
pub const PROFILE_CARD_PATH: &str = "/profile/card";

/// Default timeout for HTTP requests.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// User-Agent string for HTTP requests.
pub const USER_AGENT: &str = concat!("solid-shim/", env!("CARGO_PKG_VERSION"));
