use reqwest::{Client, Url};

use crate::{
    error::{AppError, Result},
    models::SlackMessage,
};

/// What happened to a scheduled push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// No webhook configured; nothing was sent.
    Skipped,
    /// The webhook answered; its raw body is kept for logging.
    Delivered { status: u16, body: String },
}

/// Posts listings to a Slack incoming webhook.
#[derive(Debug, Clone)]
pub struct WebhookDelivery {
    http: Client,
    webhook_url: Option<String>,
}

impl WebhookDelivery {
    pub fn new(http: Client, webhook_url: Option<String>) -> Self {
        let delivery = Self { http, webhook_url };
        if delivery.is_configured() && !delivery.uses_tls() {
            // The webhook URL is a bearer credential
            tracing::warn!("WEBHOOK_URL is not an https URL, listings will be posted in the clear");
        }
        delivery
    }

    pub fn is_configured(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Whether the configured webhook URL has the `https` scheme.
    pub fn uses_tls(&self) -> bool {
        self.webhook_url
            .as_deref()
            .and_then(|url| Url::parse(url).ok())
            .is_some_and(|url| url.scheme() == "https")
    }

    /// Single POST of `message`. The webhook's response body is logged
    /// whatever the status; only transport failures are errors.
    pub async fn push(&self, message: &SlackMessage) -> Result<PushOutcome> {
        let Some(url) = self.webhook_url.as_deref() else {
            tracing::info!("No Webhook url");
            return Ok(PushOutcome::Skipped);
        };

        let response = self
            .http
            .post(url)
            .json(message)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Slack webhook request failed: {e}")))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to read Slack webhook response: {e}"))
        })?;

        tracing::info!(status, body = %body, "Slack webhook responded");
        Ok(PushOutcome::Delivered { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::message_formatter;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_push_without_url_is_noop() {
        let delivery = WebhookDelivery::new(Client::new(), None);
        assert!(!delivery.is_configured());
        let outcome = delivery.push(&message_formatter::list_message(&[])).await.unwrap();
        assert_eq!(outcome, PushOutcome::Skipped);
    }

    #[test]
    fn test_uses_tls_only_for_https() {
        let https = WebhookDelivery::new(
            Client::new(),
            Some("https://hooks.slack.com/services/T000/B000/XXXX".into()),
        );
        assert!(https.uses_tls());

        let plain = WebhookDelivery::new(
            Client::new(),
            Some("http://hooks.slack.com/services/T000/B000/XXXX".into()),
        );
        assert!(!plain.uses_tls());

        assert!(!WebhookDelivery::new(Client::new(), Some("not a url".into())).uses_tls());
        assert!(!WebhookDelivery::new(Client::new(), None).uses_tls());
    }

    #[tokio::test]
    async fn test_push_posts_envelope_once() {
        let server = MockServer::start().await;
        let message = message_formatter::list_message(&[]);
        Mock::given(method("POST"))
            .and(path("/services/T000/B000/XXXX"))
            .and(header("content-type", "application/json"))
            .and(body_json(&message))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let delivery = WebhookDelivery::new(
            Client::new(),
            Some(format!("{}/services/T000/B000/XXXX", server.uri())),
        );
        let outcome = delivery.push(&message).await.unwrap();
        assert_eq!(
            outcome,
            PushOutcome::Delivered {
                status: 200,
                body: "ok".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_push_rejection_is_reported_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("invalid_blocks"))
            .expect(1)
            .mount(&server)
            .await;

        let delivery = WebhookDelivery::new(Client::new(), Some(server.uri()));
        let outcome = delivery
            .push(&message_formatter::list_message(&[]))
            .await
            .unwrap();
        assert_eq!(
            outcome,
            PushOutcome::Delivered {
                status: 400,
                body: "invalid_blocks".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_push_transport_failure_is_error() {
        let delivery = WebhookDelivery::new(Client::new(), Some("http://127.0.0.1:9/hook".into()));
        let err = delivery
            .push(&message_formatter::list_message(&[]))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ExternalService(_)));
    }
}
