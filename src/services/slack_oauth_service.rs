//! Slack OAuth token exchange for workspace installation.
//!
//! Slack redirects the installing user to `/auth/redirect?code=...`; the code
//! is traded for a token via `oauth.access`. The token itself is not stored,
//! the installation only needs the exchange to succeed.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::error::{AppError, Result};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Runtime configuration for the OAuth service.
#[derive(Clone)]
pub struct SlackOAuthConfig {
    /// Base of the Slack Web API, `https://slack.com/api` in production.
    pub api_base: String,
    /// Slack app client ID.
    pub client_id: Option<String>,
    /// Slack app client secret.
    pub client_secret: Option<SecretString>,
    /// Redirect URI registered with the Slack app.
    pub redirect_uri: Option<String>,
}

impl SlackOAuthConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            client_id: None,
            client_secret: None,
            redirect_uri: None,
        }
    }

    pub fn with_client(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        let client_secret: String = client_secret.into();
        self.client_id = Some(client_id.into());
        self.client_secret = Some(SecretString::from(client_secret));
        self
    }

    pub fn with_redirect_uri(mut self, uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(uri.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Result of a code exchange that reached Slack.
#[derive(Debug, Clone, PartialEq)]
pub enum OAuthOutcome {
    Installed,
    /// `ok` was false (or missing); the whole response object is kept.
    Rejected(Value),
}

impl OAuthOutcome {
    pub fn from_response(response: Value) -> Self {
        if response.get("ok").and_then(Value::as_bool) == Some(true) {
            OAuthOutcome::Installed
        } else {
            OAuthOutcome::Rejected(response)
        }
    }
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

pub struct SlackOAuthService {
    http: Client,
    config: SlackOAuthConfig,
}

impl SlackOAuthService {
    pub fn new(http: Client, config: SlackOAuthConfig) -> Self {
        Self { http, config }
    }

    /// Exchange a temporary OAuth `code` via `GET {api_base}/oauth.access`.
    pub async fn exchange_code(&self, code: &str) -> Result<OAuthOutcome> {
        let client_id = self
            .config
            .client_id
            .as_deref()
            .ok_or_else(|| AppError::Configuration("CLIENT_ID not configured".into()))?;
        let client_secret = self
            .config
            .client_secret
            .as_ref()
            .ok_or_else(|| AppError::Configuration("CLIENT_SECRET not configured".into()))?;
        let redirect_uri = self.config.redirect_uri.as_deref().unwrap_or_default();

        let url = format!("{}/oauth.access", self.config.api_base.trim_end_matches('/'));

        let response = self
            .http
            .get(&url)
            .query(&[
                ("code", code),
                ("client_id", client_id),
                ("client_secret", client_secret.expose_secret()),
                ("redirect_uri", redirect_uri),
            ])
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Slack OAuth request failed: {e}")))?;

        let body: Value = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse Slack OAuth response: {e}"))
        })?;

        tracing::info!(response = %body, "Slack OAuth exchange finished");
        Ok(OAuthOutcome::from_response(body))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
