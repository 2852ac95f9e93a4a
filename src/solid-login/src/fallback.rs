//! Heuristic detection after the auth surface closed without a signal.
//!
//! The user closing the login surface usually means login succeeded
//! server-side (a session cookie exists) but the client-side signal
//! channel missed it. The sequence below runs exactly once per attempt
//! and is never retried. Every step's failure degrades to "continue";
//! only exhausting all steps yields `None`.

use std::time::Duration;

use solid_logic::{AuthStateSource, ProfileResolver, vocab};
use tracing::debug;

use crate::probe::CredentialProbe;
use crate::uris;

/// Run the fallback detection sequence and return the detected WebID.
///
/// Steps, in fixed order; later steps do not run once an identity is found:
/// 1. Credentialed fetch of the profile resource, purely to surface any
///    session cookie (response unused, failure non-fatal).
/// 2. Load the profile document into the shared store via the resolver's
///    normal reactive loader.
/// 3. Re-query the auth state source directly.
/// 4. Query the store for a document-to-person linking relation
///    (`foaf:maker`, then `foaf:primaryTopic`) anchored at the profile
///    document. A weaker signal than step 3, accepted as best effort.
pub(crate) async fn detect_after_surface_closed(
    probe: &dyn CredentialProbe,
    auth: &dyn AuthStateSource,
    resolver: &dyn ProfileResolver,
    base_uri: &str,
    settle_delay: Duration,
) -> Option<String> {
    // Give the provider a moment to finish establishing the session.
    tokio::time::sleep(settle_delay).await;

    let profile_doc = uris::profile_card_uri(base_uri);
    debug!(profile_doc = %profile_doc, "Surface closed without signal, starting fallback detection");

    if let Err(e) = probe.probe(&profile_doc).await {
        debug!(error = %e, "Credentialed probe failed, continuing");
    }

    if let Err(e) = resolver.load(&profile_doc).await {
        debug!(error = %e, "Profile document load failed, continuing");
    }

    if let Some(web_id) = auth.current_user() {
        debug!(web_id = %web_id, "Auth state source reported a user after re-check");
        return Some(web_id);
    }

    let linked = resolver
        .query(&profile_doc, vocab::foaf::MAKER)
        .or_else(|| resolver.query(&profile_doc, vocab::foaf::PRIMARY_TOPIC));

    match &linked {
        Some(web_id) => {
            debug!(web_id = %web_id, "Detected identity via linking relation")
        }
        None => debug!("Fallback detection exhausted without finding an identity"),
    }

    linked
}
