//! Transport layer
//!
//! `HttpClient` is the seam every API facade is written against. The network
//! implementation talks to a real backend over reqwest; the in-process one
//! drives an axum `Router` directly and is what the integration tests use.

pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;

pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;

use serde::de::DeserializeOwned;

use crate::{ClientError, ClientResult};

/// Decode a 2xx body. Empty bodies decode as JSON `null`.
pub(crate) fn decode_body<T: DeserializeOwned>(bytes: &[u8]) -> ClientResult<T> {
    let bytes = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null".as_slice()
    } else {
        bytes
    };
    serde_json::from_slice(bytes)
        .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
}

/// `Authorization` header value for a token
pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
