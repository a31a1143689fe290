//! In-process HTTP client
//!
//! Requires the "in-process" feature.

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tower::ServiceExt;

use super::http::HttpClient;
use super::{bearer, decode_body};
use crate::{ClientError, ClientResult};

/// Oneshot HTTP client (in-memory calls)
///
/// Calls the Router through Tower's `oneshot`, with no socket in between.
/// Used by tests and by embedders that host a backend in the same process.
///
/// # Example
///
/// ```ignore
/// let router: Router = mock_backend();
/// let client = OneshotHttpClient::new(router);
/// let stores: Vec<Store> = client.get("/api/stores").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    token: Arc<RwLock<Option<String>>>,
}

impl OneshotHttpClient {
    /// `router` must already have its state attached
    pub fn new(router: Router) -> Self {
        Self {
            router,
            token: Arc::new(RwLock::new(None)),
        }
    }

    async fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<Request<Body>> {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = self.token.read().await.as_deref() {
            builder = builder.header(header::AUTHORIZATION, bearer(token));
        }

        let body = match body {
            Some(bytes) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(bytes)
            }
            None => Body::empty(),
        };

        builder
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    async fn build_request_with_body<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Request<Body>> {
        let bytes = serde_json::to_vec(body)?;
        self.build_request(method, path, Some(bytes)).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body_bytes).to_string();
            return Err(ClientError::from_response(status.as_u16(), text));
        }

        decode_body(&body_bytes)
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::GET, path, None).await?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self
            .build_request_with_body(Method::POST, path, body)
            .await?;
        self.execute(request).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::POST, path, None).await?;
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_request_with_body(Method::PUT, path, body).await?;
        self.execute(request).await
    }

    async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::PUT, path, None).await?;
        self.execute(request).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::DELETE, path, None).await?;
        self.execute(request).await
    }

    async fn set_token(&self, token: Option<String>) {
        *self.token.write().await = token;
    }

    async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::get;

    fn router() -> Router {
        Router::new()
            .route(
                "/echo-auth",
                get(|headers: HeaderMap| async move {
                    let auth = headers
                        .get(header::AUTHORIZATION)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("")
                        .to_string();
                    axum::Json(auth)
                }),
            )
            .route(
                "/missing",
                get(|| async { (StatusCode::NOT_FOUND, r#"{"error":"Store not found"}"#) }),
            )
    }

    #[tokio::test]
    async fn test_bearer_header_sent() {
        let client = OneshotHttpClient::new(router());
        let auth: String = client.get("/echo-auth").await.unwrap();
        assert_eq!(auth, "");

        client.set_token(Some("tok".into())).await;
        let auth: String = client.get("/echo-auth").await.unwrap();
        assert_eq!(auth, "Bearer tok");
    }

    #[tokio::test]
    async fn test_error_body_mapped() {
        let client = OneshotHttpClient::new(router());
        let err = client.get::<serde_json::Value>("/missing").await.unwrap_err();
        assert_eq!(err.server_message(), Some("Store not found"));
    }
}
