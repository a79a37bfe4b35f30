use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};

use crate::services::verify_signature;

pub const SIGNATURE_HEADER: &str = "x-slack-signature";
pub const TIMESTAMP_HEADER: &str = "x-slack-request-timestamp";

/// Raw inbound request as Slack signed it: the signing headers plus the
/// untouched body bytes.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    pub timestamp: String,
    pub signature: Option<String>,
    pub body: Bytes,
}

impl SignedRequest {
    /// `false` when the signature header is absent or does not match.
    pub fn verify(&self, secret: &[u8]) -> bool {
        match self.signature.as_deref() {
            Some(signature) => verify_signature(secret, &self.timestamp, &self.body, signature),
            None => false,
        }
    }
}

impl<S> FromRequest<S> for SignedRequest
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Header borrows must end before the body is awaited
        let (timestamp, signature) = {
            let headers = req.headers();
            let header = |name: &str| {
                headers
                    .get(name)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_owned)
            };
            (header(TIMESTAMP_HEADER).unwrap_or_default(), header(SIGNATURE_HEADER))
        };

        let body = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        Ok(Self {
            timestamp,
            signature,
            body,
        })
    }
}
