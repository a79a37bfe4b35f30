//! Integration tests for the OAuth redirect (`GET /auth/redirect`).

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::TestApp;

async fn slack_answering(body: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oauth.access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn successful_exchange_says_exito() {
    let server = slack_answering(json!({"ok": true, "access_token": "xoxp-1"})).await;
    let app = TestApp::with_upstream(&server.uri());

    let res = app.get("/auth/redirect?code=abc").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, "Exito!");
}

#[tokio::test]
async fn rejected_exchange_echoes_slack_response() {
    let server = slack_answering(json!({"ok": false, "error": "x"})).await;
    let app = TestApp::with_upstream(&server.uri());

    let res = app.get("/auth/redirect?code=abc").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("\"error\":\"x\""), "body was {}", res.body);
    let echoed: Value = serde_json::from_str(&res.body).unwrap();
    assert_eq!(echoed, json!({"ok": false, "error": "x"}));
}

#[tokio::test]
async fn exchange_forwards_code_and_client_settings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oauth.access"))
        .and(query_param("code", "abc"))
        .and(query_param("client_id", "client-id"))
        .and(query_param("client_secret", "client-secret"))
        .and(query_param(
            "redirect_uri",
            "https://meetups.example.com/auth/redirect",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;
    let app = TestApp::with_upstream(&server.uri());

    let res = app.get("/auth/redirect?code=abc").await;

    assert_eq!(res.body, "Exito!");
}

#[tokio::test]
async fn missing_code_is_still_exchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oauth.access"))
        .and(query_param("code", ""))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"ok": false, "error": "invalid_code"})),
        )
        .mount(&server)
        .await;
    let app = TestApp::with_upstream(&server.uri());

    let res = app.get("/auth/redirect").await;

    assert!(res.body.contains("invalid_code"));
}

#[tokio::test]
async fn unreadable_slack_response_is_bad_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oauth.access"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;
    let app = TestApp::with_upstream(&server.uri());

    let res = app.get("/auth/redirect?code=abc").await;

    assert_eq!(res.status, StatusCode::BAD_GATEWAY);
}
