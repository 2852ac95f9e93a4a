//! Type definitions for the login coordinator.

use solid_logic::Identity;

/// An identity provider a user can log in against.
///
/// Immutable; supplied by configuration or free-text user input. Not
/// persisted by the coordinator.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Provider {
    /// Human-readable label, usually the provider's host name.
    pub label: String,
    /// Base URI of the provider (or of the user's pod, for direct entry).
    pub base_uri: String,
    /// Whether a username is needed to compose the pod URI.
    ///
    /// Stock providers host one pod per user at
    /// `https://{username}.{label}`; a free-text pod URI already names
    /// the pod and goes straight to polling.
    pub requires_username: bool,
}

impl Provider {
    /// A stock provider that prompts for a username.
    pub fn with_username_prompt(label: impl Into<String>) -> Self {
        let label = label.into();
        let base_uri = format!("https://{label}");
        Self {
            label,
            base_uri,
            requires_username: true,
        }
    }

    /// A provider addressed directly by pod URI or WebID.
    pub fn direct(base_uri: impl Into<String>) -> Self {
        let base_uri = base_uri.into();
        Self {
            label: base_uri.clone(),
            base_uri,
            requires_username: false,
        }
    }

    /// The stock provider list offered by the login dialog.
    pub fn defaults() -> Vec<Self> {
        [
            "solidcommunity.net",
            "inrupt.net",
            "solidweb.org",
            "solidweb.me",
        ]
        .into_iter()
        .map(Self::with_username_prompt)
        .collect()
    }
}

/// Observable state of the coordinator.
///
/// Terminal states of an attempt are not represented here: once an
/// attempt ends the coordinator returns to `Idle` and the outcome is
/// recorded as a [`TerminalOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LoginState {
    /// No attempt in progress.
    Idle,
    /// A provider was chosen that needs a username before polling can start.
    AwaitingInput,
    /// The auth surface is open and the state source is being polled.
    Polling,
    /// The surface closed without a direct signal; heuristic detection is
    /// running.
    FallbackProbing,
}

impl std::fmt::Display for LoginState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginState::Idle => write!(f, "idle"),
            LoginState::AwaitingInput => write!(f, "awaiting_input"),
            LoginState::Polling => write!(f, "polling"),
            LoginState::FallbackProbing => write!(f, "fallback_probing"),
        }
    }
}

/// How the most recent attempt ended.
///
/// All four are silent from the caller's point of view: the only
/// user-visible failure signal is the projection staying unauthenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TerminalOutcome {
    /// The user authenticated (directly or via fallback detection).
    Authenticated,
    /// Fallback detection ran and found nothing.
    Failed,
    /// The attempt hit its polling ceiling.
    TimedOut,
    /// The attempt was cancelled.
    Cancelled,
}

/// The coordinator's sole externally observable output.
///
/// Mutated only by the coordinator; readers must treat it as read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionProjection {
    /// The currently authenticated identity, if any.
    pub identity: Option<Identity>,
}

impl SessionProjection {
    /// Whether an authenticated identity is present.
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_provider_composes_base_uri() {
        let p = Provider::with_username_prompt("solidcommunity.net");
        assert_eq!(p.base_uri, "https://solidcommunity.net");
        assert!(p.requires_username);
    }

    #[test]
    fn test_direct_provider_skips_prompt() {
        let p = Provider::direct("https://alice.example.org");
        assert!(!p.requires_username);
        assert_eq!(p.label, "https://alice.example.org");
    }

    #[test]
    fn test_default_provider_list() {
        let providers = Provider::defaults();
        assert_eq!(providers.len(), 4);
        assert!(providers.iter().all(|p| p.requires_username));
    }

    #[test]
    fn test_projection_defaults_unauthenticated() {
        let projection = SessionProjection::default();
        assert!(!projection.is_authenticated());
    }
}
