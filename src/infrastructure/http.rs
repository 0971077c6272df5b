use crate::domain::form::{SignInData, SignUpData};
use crate::domain::ports::{AuthProvider, UserGateway};
use crate::infrastructure::config::AppConfig;
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, trace};

/// HTTP client for the remote API. Success is any 2xx response; no response
/// schema is consumed on either endpoint.
pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl UserGateway for HttpApiClient {
    #[instrument(skip(self, req), fields(email = %req.email))]
    async fn create_user(&self, req: &SignUpData) -> Result<()> {
        let url = self.url("/users");
        trace!(url = %url, "Posting user record");

        let response = self
            .client
            .post(&url)
            .json(req)
            .send()
            .await
            .context("User creation request failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("User creation rejected with status {status}");
        }

        debug!(status = %status, "User record created");
        Ok(())
    }
}

#[async_trait]
impl AuthProvider for HttpApiClient {
    #[instrument(skip(self, req), fields(email = %req.email))]
    async fn sign_in(&self, req: &SignInData) -> Result<()> {
        let url = self.url("/sessions");
        trace!(url = %url, "Posting credentials");

        let response = self
            .client
            .post(&url)
            .json(req)
            .send()
            .await
            .context("Credential exchange request failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("Credential exchange rejected with status {status}");
        }

        debug!(status = %status, "Session established");
        Ok(())
    }
}
