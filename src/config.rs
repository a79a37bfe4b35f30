use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::models::{default_groups, parse_group_list, Group};

/// Application configuration loaded from environment variables
#[derive(Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Slack app signing secret, the HMAC key for slash-command requests.
    /// Only the HTTP server needs it.
    pub signing_secret: Option<SecretString>,

    /// Incoming-webhook URL for scheduled posts. Unset means pushing is a no-op.
    pub webhook_url: Option<String>,

    pub client_id: Option<String>,

    pub client_secret: Option<SecretString>,

    pub redirect_uri: Option<String>,

    #[serde(default = "default_meetup_api_url")]
    pub meetup_api_url: String,

    #[serde(default = "default_slack_api_url")]
    pub slack_api_url: String,

    /// Comma-separated override of the built-in group list.
    pub meetup_groups: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_meetup_api_url() -> String {
    "https://api.meetup.com".to_string()
}

fn default_slack_api_url() -> String {
    "https://slack.com/api".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Get the signing secret as bytes for HMAC
    pub fn signing_secret_bytes(&self) -> Option<&[u8]> {
        self.signing_secret
            .as_ref()
            .map(|secret| secret.expose_secret().as_bytes())
    }

    /// Fail unless a signing secret is set. Checked before serving slash commands.
    pub fn require_signing_secret(&self) -> Result<()> {
        if self.signing_secret.is_none() {
            anyhow::bail!("SIGNING_SECRET must be set to serve slash commands");
        }
        Ok(())
    }

    /// Groups to relay: `MEETUP_GROUPS` when set, the built-in list otherwise.
    pub fn groups(&self) -> Result<Vec<Group>> {
        match self.meetup_groups.as_deref() {
            Some(raw) => parse_group_list(raw).map_err(|e| anyhow::anyhow!("MEETUP_GROUPS: {e}")),
            None => Ok(default_groups()),
        }
    }
}
