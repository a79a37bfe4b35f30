pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::services::{
    EventService, GroupResolver, GroupSource, MeetupService, SlackOAuthConfig, SlackOAuthService,
    WebhookDelivery,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub meetups: MeetupService,
    pub oauth: Arc<SlackOAuthService>,
    pub delivery: WebhookDelivery,
}

impl AppState {
    /// Build every service from configuration. One HTTP client is shared by
    /// all outbound calls.
    pub fn from_config(config: Config) -> Result<Self> {
        let http = reqwest::Client::new();

        let groups: Arc<dyn GroupSource> = Arc::new(GroupResolver::new(
            http.clone(),
            config.meetup_api_url.clone(),
            config.groups()?,
        ));
        Ok(Self::with_groups(config, http, groups))
    }

    /// Same as [`AppState::from_config`] but with a caller-provided group
    /// source, e.g. a fixed list in tests.
    pub fn with_groups(
        config: Config,
        http: reqwest::Client,
        groups: Arc<dyn GroupSource>,
    ) -> Self {
        let events = EventService::new(http.clone(), config.meetup_api_url.clone());

        let mut oauth_config = SlackOAuthConfig::new(config.slack_api_url.clone());
        oauth_config.client_id = config.client_id.clone();
        oauth_config.client_secret = config.client_secret.clone();
        oauth_config.redirect_uri = config.redirect_uri.clone();

        Self {
            meetups: MeetupService::new(groups, events),
            oauth: Arc::new(SlackOAuthService::new(http.clone(), oauth_config)),
            delivery: WebhookDelivery::new(http, config.webhook_url.clone()),
            config,
        }
    }
}

/// Create the application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::app_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
