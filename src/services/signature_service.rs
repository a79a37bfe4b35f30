//! Slack request signing (`X-Slack-Signature`).
//!
//! Slack signs every slash-command request with HMAC-SHA256 over
//! `v0:<timestamp>:<raw body>`, keyed with the app's signing secret, and sends
//! the result as `v0=<lowercase hex>`.
//!
//! The request timestamp is part of the signed string but its age is not
//! checked, so a captured request can be replayed indefinitely.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Version prefix used both in the base string and in the header value.
pub const SIGNATURE_VERSION: &str = "v0";

fn signing_mac(secret: &[u8], timestamp: &str, body: &[u8]) -> HmacSha256 {
    let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(SIGNATURE_VERSION.as_bytes());
    mac.update(b":");
    mac.update(timestamp.as_bytes());
    mac.update(b":");
    mac.update(body);
    mac
}

/// Computes the header value Slack would send for this request.
pub fn compute_signature(secret: &[u8], timestamp: &str, body: &[u8]) -> String {
    let digest = signing_mac(secret, timestamp, body).finalize().into_bytes();
    format!("{}={}", SIGNATURE_VERSION, hex::encode(digest))
}

/// Parses `v0=<hex>` into raw bytes. `None` for any other shape.
pub fn parse_signature_header(header: &str) -> Option<Vec<u8>> {
    let hex_sig = header
        .strip_prefix(SIGNATURE_VERSION)
        .and_then(|rest| rest.strip_prefix('='))?;
    hex::decode(hex_sig).ok()
}

/// Checks `provided` against the signature recomputed from the request.
///
/// The comparison runs in constant time. Returns `false` for malformed
/// headers instead of erroring; the caller decides what to do.
pub fn verify_signature(secret: &[u8], timestamp: &str, body: &[u8], provided: &str) -> bool {
    let Some(expected) = parse_signature_header(provided) else {
        return false;
    };
    signing_mac(secret, timestamp, body)
        .verify_slice(&expected)
        .is_ok()
}
