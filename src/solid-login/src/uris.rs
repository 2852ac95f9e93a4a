//! URI derivation helpers for the login flow.

use crate::constants::{PASSWORD_LOGIN_PATH, PROFILE_CARD_PATH};
use crate::error::LoginError;

/// Compose a pod URI from a username and a stock provider label.
///
/// The username must be non-empty after trimming; no other validation is
/// applied. A malformed username yields a non-resolving surface, which the
/// flow handles as an eventual timeout rather than a validation error.
pub fn compose_pod_uri(username: &str, provider_label: &str) -> Result<String, LoginError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(LoginError::EmptyIdentifier);
    }
    Ok(format!("https://{username}.{provider_label}"))
}

/// Normalize a free-text provider or pod URI: a bare host gains `https://`.
///
/// Unparseable input is rejected up front as an input error rather than
/// being handed to the opener to fail as an eventual timeout.
pub fn normalize_base_uri(input: &str) -> Result<String, LoginError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(LoginError::EmptyIdentifier);
    }
    let with_scheme = if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("https://{input}")
    };
    url::Url::parse(&with_scheme)
        .map_err(|_| LoginError::InvalidProviderUri(with_scheme.clone()))?;
    Ok(with_scheme)
}

/// Derive the provider's password login page from a pod or profile URI.
///
/// If the URI already denotes a profile document, the profile path is
/// replaced; otherwise the login path segment is appended.
pub fn login_page_uri(base_uri: &str) -> String {
    if let Some(idx) = base_uri.find(PROFILE_CARD_PATH) {
        format!("{}{PASSWORD_LOGIN_PATH}", &base_uri[..idx])
    } else {
        format!("{}{PASSWORD_LOGIN_PATH}", base_uri.trim_end_matches('/'))
    }
}

/// The pod's profile document URI, used by the fallback probe.
pub fn profile_card_uri(base_uri: &str) -> String {
    if base_uri.contains(PROFILE_CARD_PATH) {
        // Already a profile document; drop any fragment.
        match base_uri.split_once('#') {
            Some((doc, _)) => doc.to_string(),
            None => base_uri.to_string(),
        }
    } else {
        format!("{}{PROFILE_CARD_PATH}", base_uri.trim_end_matches('/'))
    }
}

/// The document part of a WebID (the URI without its fragment).
pub fn web_id_document(web_id: &str) -> &str {
    match web_id.split_once('#') {
        Some((doc, _)) => doc,
        None => web_id,
    }
}
