//! The login flow coordinator.
//!
//! Owns at most one active login attempt at a time. An attempt opens an
//! auth surface at the provider's login page and polls the auth state
//! source on a fixed interval until one of: the user shows up
//! (authenticated), the surface closes without a signal (fallback
//! detection), the polling ceiling is hit (timed out), or the caller
//! cancels. All terminal outcomes return the coordinator to idle; the
//! only user-visible output is the [`SessionProjection`].

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use solid_logic::{AuthStateSource, AuthSurface, Identity, ProfileResolver, SurfaceOpener};
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::constants::{FALLBACK_SETTLE_DELAY, MAX_POLL_ATTEMPTS, POLL_INTERVAL};
use crate::error::LoginError;
use crate::probe::{CredentialProbe, HttpCredentialProbe};
use crate::types::{LoginState, Provider, SessionProjection, TerminalOutcome};
use crate::{fallback, profile, uris};

/// Tunable knobs for the polling loop.
#[derive(Debug, Clone)]
pub struct FlowOptions {
    /// Delay between polls of the auth state source.
    pub poll_interval: Duration,
    /// Hard ceiling on polls per attempt.
    pub max_poll_attempts: u32,
    /// Settling delay before fallback detection starts.
    pub settle_delay: Duration,
}

impl Default for FlowOptions {
    fn default() -> Self {
        Self {
            poll_interval: POLL_INTERVAL,
            max_poll_attempts: MAX_POLL_ATTEMPTS,
            settle_delay: FALLBACK_SETTLE_DELAY,
        }
    }
}

/// Mutable coordinator state, guarded by one lock.
struct Inner {
    state: LoginState,
    /// Bumped whenever an attempt starts or is cancelled. An attempt task
    /// may only commit a transition while its generation is current; a
    /// cancelled attempt's late success is discarded, not applied.
    generation: u64,
    /// Provider waiting for a username, when in `AwaitingInput`.
    pending_provider: Option<Provider>,
    /// Surface of the active attempt. Closed on every exit path.
    surface: Option<Arc<dyn AuthSurface>>,
    /// Polling task of the active attempt.
    task: Option<JoinHandle<()>>,
    /// How the most recent attempt ended.
    last_outcome: Option<TerminalOutcome>,
}

/// The out-of-band login coordinator.
pub struct LoginFlow {
    auth: Arc<dyn AuthStateSource>,
    resolver: Arc<dyn ProfileResolver>,
    opener: Arc<dyn SurfaceOpener>,
    probe: Arc<dyn CredentialProbe>,
    options: FlowOptions,
    inner: Arc<Mutex<Inner>>,
    projection_tx: watch::Sender<SessionProjection>,
}

impl LoginFlow {
    /// Create a coordinator with the default HTTP probe and poll settings.
    pub fn new(
        auth: Arc<dyn AuthStateSource>,
        resolver: Arc<dyn ProfileResolver>,
        opener: Arc<dyn SurfaceOpener>,
    ) -> Result<Self> {
        let probe = Arc::new(HttpCredentialProbe::new()?);
        Ok(Self::with_options(
            auth,
            resolver,
            opener,
            probe,
            FlowOptions::default(),
        ))
    }

    /// Create a coordinator with explicit probe and poll settings.
    pub fn with_options(
        auth: Arc<dyn AuthStateSource>,
        resolver: Arc<dyn ProfileResolver>,
        opener: Arc<dyn SurfaceOpener>,
        probe: Arc<dyn CredentialProbe>,
        options: FlowOptions,
    ) -> Self {
        let (projection_tx, _) = watch::channel(SessionProjection::default());
        Self {
            auth,
            resolver,
            opener,
            probe,
            options,
            inner: Arc::new(Mutex::new(Inner {
                state: LoginState::Idle,
                generation: 0,
                pending_provider: None,
                surface: None,
                task: None,
                last_outcome: None,
            })),
            projection_tx,
        }
    }

    /// Subscribe to projection updates for re-rendering.
    pub fn subscribe(&self) -> watch::Receiver<SessionProjection> {
        self.projection_tx.subscribe()
    }

    /// Snapshot of the current projection.
    pub fn projection(&self) -> SessionProjection {
        self.projection_tx.borrow().clone()
    }

    /// The coordinator's current state.
    pub async fn state(&self) -> LoginState {
        self.inner.lock().await.state
    }

    /// How the most recent attempt ended, if any has ended.
    pub async fn last_outcome(&self) -> Option<TerminalOutcome> {
        self.inner.lock().await.last_outcome
    }

    /// Check for a session the identity layer already holds.
    ///
    /// Runs outside any attempt. When the auth state source already knows
    /// a user (e.g. after a page reload), project and enrich it exactly
    /// like the primary success path. Returns whether a user was found.
    pub async fn check_session(&self) -> bool {
        let Some(web_id) = self.auth.current_user() else {
            return false;
        };
        debug!(web_id = %web_id, "Existing session detected");
        self.project_and_enrich(web_id).await;
        true
    }

    /// Choose a provider, cancelling any active attempt first.
    ///
    /// Providers that need a username transition to `AwaitingInput`;
    /// direct pod URIs proceed straight to polling.
    pub async fn select_provider(&self, provider: Provider) -> Result<LoginState, LoginError> {
        let mut inner = self.inner.lock().await;
        self.cancel_active_locked(&mut inner);

        if provider.requires_username {
            debug!(provider = %provider.label, "Provider chosen, awaiting username");
            inner.pending_provider = Some(provider);
            inner.state = LoginState::AwaitingInput;
            return Ok(LoginState::AwaitingInput);
        }

        let base_uri = uris::normalize_base_uri(&provider.base_uri)?;
        Ok(self.begin_polling_locked(&mut inner, base_uri))
    }

    /// Supply the username a stock provider asked for.
    ///
    /// Composes the pod URI as `https://{username}.{provider.label}` and
    /// starts polling. An empty username refuses to proceed and leaves
    /// the coordinator in `AwaitingInput`.
    pub async fn submit_identifier(&self, username: &str) -> Result<LoginState, LoginError> {
        let mut inner = self.inner.lock().await;
        let provider = inner
            .pending_provider
            .as_ref()
            .ok_or(LoginError::NoPendingProvider)?
            .clone();

        let pod_uri = uris::compose_pod_uri(username, &provider.label)?;
        inner.pending_provider = None;
        Ok(self.begin_polling_locked(&mut inner, pod_uri))
    }

    /// Cancel the active attempt, if any. Idempotent.
    ///
    /// Stops the polling task, closes the surface, and invalidates the
    /// attempt's generation so an in-flight tick cannot commit a late
    /// success.
    pub async fn cancel(&self) {
        let mut inner = self.inner.lock().await;
        self.cancel_active_locked(&mut inner);
    }

    /// Sign out of the identity layer and clear the projection.
    ///
    /// The sign-out outcome is ignored: a failed remote sign-out must
    /// never leave the UI claiming a session it can no longer act on.
    pub async fn logout(&self) {
        if let Err(e) = self.auth.sign_out().await {
            warn!(error = %e, "Remote sign-out failed; clearing local session anyway");
        }
        self.projection_tx.send_modify(|p| p.identity = None);
        info!("Signed out");
    }

    /// Cancel bookkeeping under the lock. No-op when nothing is active.
    fn cancel_active_locked(&self, inner: &mut Inner) {
        let was_active = inner.state != LoginState::Idle;
        inner.generation += 1;
        inner.pending_provider = None;
        if let Some(task) = inner.task.take() {
            task.abort();
        }
        if let Some(surface) = inner.surface.take() {
            surface.close();
        }
        if was_active {
            debug!("Login attempt cancelled");
            inner.state = LoginState::Idle;
            inner.last_outcome = Some(TerminalOutcome::Cancelled);
        }
    }

    /// Open the auth surface and spawn the polling task.
    fn begin_polling_locked(&self, inner: &mut Inner, base_uri: String) -> LoginState {
        let login_uri = uris::login_page_uri(&base_uri);

        let surface = match self.opener.open(&login_uri) {
            Ok(surface) => surface,
            Err(e) => {
                // Collaborator failure: silent terminal outcome, no error
                // crosses the coordinator boundary.
                warn!(error = %e, login_uri = %login_uri, "Could not open auth surface");
                inner.state = LoginState::Idle;
                inner.last_outcome = Some(TerminalOutcome::Failed);
                return LoginState::Idle;
            }
        };

        inner.generation += 1;
        inner.surface = Some(surface.clone());
        inner.state = LoginState::Polling;
        inner.last_outcome = None;
        info!(
            login_uri = %login_uri,
            interval_ms = self.options.poll_interval.as_millis() as u64,
            max_attempts = self.options.max_poll_attempts,
            "Auth surface opened, polling for login"
        );

        let attempt = AttemptTask {
            generation: inner.generation,
            base_uri,
            surface,
            auth: self.auth.clone(),
            resolver: self.resolver.clone(),
            probe: self.probe.clone(),
            options: self.options.clone(),
            inner: self.inner.clone(),
            projection_tx: self.projection_tx.clone(),
        };
        inner.task = Some(tokio::spawn(attempt.run()));

        LoginState::Polling
    }

    /// Project the bare WebID immediately, then enrich best-effort.
    async fn project_and_enrich(&self, web_id: String) {
        self.projection_tx
            .send_modify(|p| p.identity = Some(Identity::new(web_id.clone())));
        let enriched = profile::enrich_identity(self.resolver.as_ref(), &web_id).await;
        self.projection_tx.send_modify(move |p| {
            // Drop the enrichment if the session changed underneath it.
            if let Some(identity) = &mut p.identity {
                if identity.web_id == enriched.web_id {
                    *identity = enriched;
                }
            }
        });
    }
}

/// One run of the polling loop. Owns the attempt for its lifetime.
struct AttemptTask {
    generation: u64,
    base_uri: String,
    surface: Arc<dyn AuthSurface>,
    auth: Arc<dyn AuthStateSource>,
    resolver: Arc<dyn ProfileResolver>,
    probe: Arc<dyn CredentialProbe>,
    options: FlowOptions,
    inner: Arc<Mutex<Inner>>,
    projection_tx: watch::Sender<SessionProjection>,
}

impl AttemptTask {
    async fn run(self) {
        for attempt in 1..=self.options.max_poll_attempts {
            tokio::time::sleep(self.options.poll_interval).await;

            if !self.is_current().await {
                return;
            }

            if let Some(web_id) = self.auth.current_user() {
                debug!(attempt, web_id = %web_id, "Auth state source reported a user");
                self.commit_authenticated(web_id).await;
                return;
            }

            if !self.surface.is_open() {
                debug!(attempt, "Auth surface closed without a direct signal");
                if !self.enter_fallback_probing().await {
                    return;
                }
                let detected = fallback::detect_after_surface_closed(
                    self.probe.as_ref(),
                    self.auth.as_ref(),
                    self.resolver.as_ref(),
                    &self.base_uri,
                    self.options.settle_delay,
                )
                .await;
                match detected {
                    Some(web_id) => self.commit_authenticated(web_id).await,
                    None => self.finish(TerminalOutcome::Failed).await,
                }
                return;
            }

            if attempt >= self.options.max_poll_attempts {
                debug!(attempt, "Polling ceiling reached");
                self.finish(TerminalOutcome::TimedOut).await;
                return;
            }
        }
    }

    /// Whether this attempt is still the coordinator's active one.
    async fn is_current(&self) -> bool {
        self.inner.lock().await.generation == self.generation
    }

    /// Transition to `FallbackProbing`, unless the attempt was cancelled.
    async fn enter_fallback_probing(&self) -> bool {
        let mut inner = self.inner.lock().await;
        if inner.generation != self.generation {
            return false;
        }
        inner.state = LoginState::FallbackProbing;
        true
    }

    /// Commit authentication: projection first, enrichment after.
    ///
    /// The WebID becomes visible to subscribers before enrichment runs,
    /// so a slow profile load never delays the auth signal.
    async fn commit_authenticated(&self, web_id: String) {
        {
            let mut inner = self.inner.lock().await;
            if inner.generation != self.generation {
                debug!(web_id = %web_id, "Discarding late success from a cancelled attempt");
                return;
            }
            if let Some(surface) = inner.surface.take() {
                surface.close();
            }
            inner.task = None;
            inner.state = LoginState::Idle;
            inner.last_outcome = Some(TerminalOutcome::Authenticated);
            self.projection_tx
                .send_modify(|p| p.identity = Some(Identity::new(web_id.clone())));
        }
        info!(web_id = %web_id, "Authenticated");

        let enriched = profile::enrich_identity(self.resolver.as_ref(), &web_id).await;
        self.projection_tx.send_modify(move |p| {
            // Drop the enrichment if the session changed underneath it.
            if let Some(identity) = &mut p.identity {
                if identity.web_id == enriched.web_id {
                    *identity = enriched;
                }
            }
        });
    }

    /// End the attempt without authentication. Silent to callers.
    async fn finish(&self, outcome: TerminalOutcome) {
        let mut inner = self.inner.lock().await;
        if inner.generation != self.generation {
            return;
        }
        if let Some(surface) = inner.surface.take() {
            surface.close();
        }
        inner.task = None;
        inner.state = LoginState::Idle;
        inner.last_outcome = Some(outcome);
        info!(?outcome, "Login attempt ended without authentication");
    }
}
