//! Credentialed HTTP probe used by fallback detection.
//!
//! The probe exists purely to surface any session cookie the provider set
//! during login to the client's cookie store; the response body is never
//! read and a failed probe is never fatal.

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::debug;

use crate::constants::{HTTP_TIMEOUT, USER_AGENT};

/// Issues a credentialed fetch against a provider resource.
#[async_trait]
pub trait CredentialProbe: Send + Sync {
    /// Fetch `uri` with credentials included. The outcome is advisory.
    async fn probe(&self, uri: &str) -> Result<()>;
}

/// Production probe backed by a cookie-keeping reqwest client.
pub struct HttpCredentialProbe {
    client: reqwest::Client,
}

impl HttpCredentialProbe {
    /// Build the probe's HTTP client.
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(HTTP_TIMEOUT)
            .cookie_store(true)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CredentialProbe for HttpCredentialProbe {
    async fn probe(&self, uri: &str) -> Result<()> {
        let response = self
            .client
            .get(uri)
            .send()
            .await
            .with_context(|| format!("credentialed probe of {uri} failed"))?;
        debug!(
            uri = %uri,
            status = %response.status(),
            "Credentialed probe completed"
        );
        Ok(())
    }
}
