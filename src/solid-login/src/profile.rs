//! Profile enrichment.
//!
//! Given a freshly detected WebID, load its profile document and read a
//! display name and avatar. Strictly best-effort: enrichment failures
//! never fail authentication, they only degrade the display name to a
//! label synthesized from the WebID itself.

use solid_logic::{Identity, ProfileResolver, vocab};
use tracing::debug;

use crate::uris;

/// Load the identity's document and fill in display name and avatar.
///
/// The WebID is already committed to the projection by the time this
/// runs; the returned identity carries the same WebID plus whatever
/// display fields could be derived.
pub(crate) async fn enrich_identity(resolver: &dyn ProfileResolver, web_id: &str) -> Identity {
    let mut identity = Identity::new(web_id);
    let document = uris::web_id_document(web_id);

    match resolver.load(document).await {
        Ok(()) => {
            identity.display_name = resolver
                .query(web_id, vocab::foaf::NAME)
                .or_else(|| resolver.query(web_id, vocab::vcard::FN))
                .or_else(|| synthesize_label(web_id));
            identity.avatar_uri = resolver
                .query(web_id, vocab::foaf::IMG)
                .or_else(|| resolver.query(web_id, vocab::vcard::HAS_PHOTO));
        }
        Err(e) => {
            debug!(web_id = %web_id, error = %e, "Could not load profile document");
            if identity.display_name.is_none() {
                identity.display_name = host_label(web_id);
            }
        }
    }

    identity
}

/// Synthesize a display label from the last non-empty path segment of the
/// WebID, stripping the conventional `#me` / `#i` fragment suffixes.
pub(crate) fn synthesize_label(web_id: &str) -> Option<String> {
    let parsed = url::Url::parse(web_id).ok()?;
    parsed
        .path_segments()?
        .rev()
        .find(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// Fall back to the WebID's host as a display label.
pub(crate) fn host_label(web_id: &str) -> Option<String> {
    url::Url::parse(web_id)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
}
