//! Shared helpers for integration tests.
//!
//! This module provides:
//! - `TestApp` – the real router driven in-process with `oneshot`
//! - `test_config` – configuration pointing upstream calls at a mock server
//! - `FixedGroups` – a group source that needs no lookups
//! - signed slash-command request builders

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use secrecy::SecretString;
use tower::ServiceExt;

use meetup_slack::{
    config::Config,
    create_app,
    error::Result,
    models::GroupIds,
    services::{compute_signature, GroupSource},
    AppState,
};

#[allow(dead_code)]
pub const SIGNING_SECRET: &str = "8f742231b10e8888abcd99yyyzzz85a5";
#[allow(dead_code)]
pub const TIMESTAMP: &str = "1531420618";

/// Response as seen by a test: status, content type and body text.
#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

/// Minimal test application wrapper.
///
/// Wraps an Axum `Router` so tests can issue HTTP requests without
/// spinning up a real TCP listener.
#[allow(dead_code)]
pub struct TestApp {
    router: Router,
}

#[allow(dead_code)]
impl TestApp {
    /// Create a `TestApp` from any `Router`.
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// The real application, with upstream APIs at `upstream` and a fixed
    /// group list.
    pub fn with_upstream(upstream: &str) -> Self {
        Self::with_config(test_config(upstream))
    }

    /// The real application over an explicit configuration.
    pub fn with_config(config: Config) -> Self {
        let state = AppState::with_groups(
            config,
            reqwest::Client::new(),
            Arc::new(FixedGroups(vec![17631212, 5946782])),
        );
        Self::new(create_app(state))
    }

    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        TestResponse {
            status,
            content_type,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    /// Send a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        let req = Request::builder()
            .uri(path)
            .method("GET")
            .body(Body::empty())
            .unwrap();
        self.send(req).await
    }

    /// POST a form body signed with the test signing secret.
    pub async fn post_signed(&self, form: &str) -> TestResponse {
        let signature = compute_signature(SIGNING_SECRET.as_bytes(), TIMESTAMP, form.as_bytes());
        self.post_with_signature(form, Some(&signature)).await
    }

    /// POST a form body with an arbitrary (or no) signature header.
    pub async fn post_with_signature(&self, form: &str, signature: Option<&str>) -> TestResponse {
        let mut builder = Request::builder()
            .uri("/")
            .method("POST")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header("X-Slack-Request-Timestamp", TIMESTAMP);
        if let Some(signature) = signature {
            builder = builder.header("X-Slack-Signature", signature);
        }
        self.send(builder.body(Body::from(form.to_owned())).unwrap())
            .await
    }
}

/// Configuration with every upstream pointed at `upstream`.
#[allow(dead_code)]
pub fn test_config(upstream: &str) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        signing_secret: Some(SecretString::from(SIGNING_SECRET)),
        webhook_url: None,
        client_id: Some("client-id".to_string()),
        client_secret: Some(SecretString::from("client-secret")),
        redirect_uri: Some("https://meetups.example.com/auth/redirect".to_string()),
        meetup_api_url: upstream.to_string(),
        slack_api_url: upstream.to_string(),
        meetup_groups: None,
    }
}

/// Group source with a fixed ID list.
#[allow(dead_code)]
pub struct FixedGroups(pub Vec<u64>);

#[async_trait]
impl GroupSource for FixedGroups {
    async fn group_ids(&self) -> Result<GroupIds> {
        Ok(GroupIds::new(self.0.clone()))
    }
}
