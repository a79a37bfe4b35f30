//! Slack-facing endpoints
//!
//! Endpoints:
//!   GET  /               – Liveness text, also what Slack sees on a bad signature
//!   POST /               – Slash command (`/meetups list`)
//!   GET  /auth/redirect  – OAuth redirect after installing the app

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::{
    error::AppError,
    middleware::SignedRequest,
    models::{CommandArgs, OAuthRedirectParams},
    services::OAuthOutcome,
    AppState,
};

/// Body returned for plain GETs and for requests that fail verification.
pub const ACK_BODY: &str = "200 OK";

pub const UNKNOWN_COMMAND_BODY: &str = "Comando incorrecto";

pub const INSTALLED_BODY: &str = "Exito!";

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /
async fn acknowledge() -> &'static str {
    ACK_BODY
}

/// POST /
///
/// Slash command entry point. Requests that fail signature verification get
/// the same bland `200 OK` as a plain GET, so callers learn nothing about why.
/// An unreadable or oversized body is treated the same way.
async fn slash_command(
    State(state): State<AppState>,
    request: Result<SignedRequest, Response>,
) -> Result<Response, AppError> {
    let request = match request {
        Ok(request) => request,
        Err(rejection) => {
            tracing::warn!(
                status = %rejection.status(),
                "Ignoring slash command with unreadable body"
            );
            return Ok(ACK_BODY.into_response());
        }
    };

    let Some(secret) = state.config.signing_secret_bytes() else {
        tracing::warn!("Ignoring slash command, SIGNING_SECRET is not configured");
        return Ok(ACK_BODY.into_response());
    };

    if !request.verify(secret) {
        tracing::warn!(
            has_signature = request.signature.is_some(),
            "Ignoring slash command with invalid Slack signature"
        );
        return Ok(ACK_BODY.into_response());
    }

    let args = CommandArgs::from_form(&request.body);
    if !args.is_list() {
        tracing::info!(args = ?args.0, "Unknown slash command arguments");
        return Ok(UNKNOWN_COMMAND_BODY.into_response());
    }

    let message = state.meetups.list_message().await?;
    Ok(Json(message).into_response())
}

/// GET /auth/redirect
///
/// Slack OAuth redirect handler. The `code` is exchanged right away; a
/// rejection from Slack is echoed back verbatim to the installing user.
async fn oauth_redirect(
    State(state): State<AppState>,
    Query(params): Query<OAuthRedirectParams>,
) -> Result<Response, AppError> {
    let code = params.code.unwrap_or_default();

    match state.oauth.exchange_code(&code).await? {
        OAuthOutcome::Installed => Ok(INSTALLED_BODY.into_response()),
        OAuthOutcome::Rejected(body) => Ok(body.to_string().into_response()),
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(acknowledge).post(slash_command))
        .route("/auth/redirect", get(oauth_redirect))
}
