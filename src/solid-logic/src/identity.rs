//! The authenticated identity.

/// An authenticated user, keyed by WebID URI.
///
/// The WebID is the sole identifying key; display fields are filled in
/// later by profile enrichment and may lag behind the WebID becoming
/// visible. That is accepted eventual consistency, not an error.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Identity {
    /// The WebID URI identifying the user.
    pub web_id: String,
    /// Display name, if the profile provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Avatar image URI, if the profile provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_uri: Option<String>,
}

impl Identity {
    /// Create a bare identity carrying only the WebID.
    pub fn new(web_id: impl Into<String>) -> Self {
        Self {
            web_id: web_id.into(),
            display_name: None,
            avatar_uri: None,
        }
    }

    /// Whether enrichment has produced a display name yet.
    pub fn is_enriched(&self) -> bool {
        self.display_name.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_identity() {
        let id = Identity::new("https://alice.example.org/profile/card#me");
        assert_eq!(id.web_id, "https://alice.example.org/profile/card#me");
        assert!(!id.is_enriched());
        assert!(id.avatar_uri.is_none());
    }

    #[test]
    fn test_serde_skips_absent_fields() {
        let id = Identity::new("https://alice.example.org/profile/card#me");
        let json = serde_json::to_string(&id).unwrap();
        assert!(!json.contains("display_name"));
        assert!(!json.contains("avatar_uri"));
    }
}
