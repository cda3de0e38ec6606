//! Development API proxy
//!
//! Forwards the backend prefixes (`/predict`, `/chat` by default) to the
//! configured backend origin so the front-end can call them same-origin.
//! Requests are passed through untouched apart from hop-by-hop headers and
//! `Host`, which is rewritten to the backend origin.

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, Bytes},
    extract::{DefaultBodyLimit, State, rejection::BytesRejection},
    http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
    routing::any,
};
use serde::Serialize;

use super::config::Config;

/// Largest request body forwarded upstream (medical images included)
pub const MAX_BODY_BYTES: usize = 20 * 1024 * 1024;

/// Headers that describe a single connection and must not be forwarded
const HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

/// Shared proxy state
#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    backend_url: String,
}

impl ProxyState {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            backend_url: backend_url.into(),
        }
    }

    /// Upstream URL for a request path and optional query
    pub fn upstream_url(&self, path: &str, query: Option<&str>) -> String {
        match query {
            Some(query) => format!("{}{}?{}", self.backend_url, path, query),
            None => format!("{}{}", self.backend_url, path),
        }
    }
}

/// Proxy error types
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Failed to read request body: {0}")]
    Body(String),

    #[error("Request body exceeds {} bytes", MAX_BODY_BYTES)]
    TooLarge,

    #[error("Backend unavailable: {0}")]
    Upstream(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    message: String,
    code: u16,
}

impl From<BytesRejection> for ProxyError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ProxyError::TooLarge
        } else {
            ProxyError::Body(rejection.body_text())
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::Body(_) => StatusCode::BAD_REQUEST,
            ProxyError::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                message: self.to_string(),
                code: status.as_u16(),
            },
        };

        (status, axum::Json(body)).into_response()
    }
}

/// Create the proxy router
///
/// Each prefix is matched exactly and with any sub-path, e.g. `/chat` and
/// `/chat/history`. Request bodies are capped at [`MAX_BODY_BYTES`].
pub fn proxy_router(config: &Config) -> Router {
    let state = Arc::new(ProxyState::new(config.backend_url.clone()));

    config
        .proxy_prefixes
        .iter()
        .fold(Router::new(), |router, prefix| {
            router
                .route(prefix, any(proxy_handler))
                .route(&format!("{prefix}/{{*rest}}"), any(proxy_handler))
        })
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

async fn proxy_handler(
    State(state): State<Arc<ProxyState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ProxyError> {
    let url = state.upstream_url(uri.path(), uri.query());
    let body = body.inspect_err(|e| tracing::warn!("Rejected body for {}: {}", url, e))?;

    tracing::debug!("proxy {} {} ({} bytes)", method, url, body.len());

    let mut headers = strip_hop_by_hop(headers);
    headers.remove(header::HOST);
    headers.remove(header::CONTENT_LENGTH);

    let upstream = state
        .client
        .request(method, &url)
        .headers(headers)
        .body(body)
        .send()
        .await
        .inspect_err(|e| tracing::warn!("Failed to reach backend at {}: {}", url, e))?;

    let status = upstream.status();
    tracing::info!("proxy {} -> {}", url, status);

    let headers = strip_hop_by_hop(upstream.headers().clone());
    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = headers;

    Ok(response)
}

fn strip_hop_by_hop(mut headers: HeaderMap) -> HeaderMap {
    for name in HOP_BY_HOP.iter() {
        headers.remove(name);
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Request;
    use axum::routing::get;
    use tower::ServiceExt;

    /// Spawn a backend that echoes method, URI, Host and body
    async fn spawn_echo_backend() -> String {
        let app = Router::new().fallback(any(|request: Request| async move {
            let (parts, body) = request.into_parts();
            let host = parts
                .headers
                .get(header::HOST)
                .and_then(|h| h.to_str().ok())
                .unwrap_or_default()
                .to_string();
            let body = axum::body::to_bytes(body, usize::MAX).await.unwrap();
            (
                StatusCode::ACCEPTED,
                [("x-echo-host", host)],
                format!(
                    "{} {} {}",
                    parts.method,
                    parts.uri,
                    String::from_utf8_lossy(&body)
                ),
            )
        }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn config_for(backend_url: String) -> Config {
        Config {
            backend_url,
            ..Config::default()
        }
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_upstream_url() {
        let state = ProxyState::new("http://localhost:5000");
        assert_eq!(
            state.upstream_url("/predict", None),
            "http://localhost:5000/predict"
        );
        assert_eq!(
            state.upstream_url("/chat/history", Some("limit=5")),
            "http://localhost:5000/chat/history?limit=5"
        );
    }

    #[test]
    fn test_strip_hop_by_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONNECTION, "keep-alive".parse().unwrap());
        headers.insert(header::TRANSFER_ENCODING, "chunked".parse().unwrap());
        headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());

        let headers = strip_hop_by_hop(headers);
        assert_eq!(headers.len(), 1);
        assert!(headers.contains_key(header::CONTENT_TYPE));
    }

    #[tokio::test]
    async fn test_forwards_method_path_query_and_body() {
        let backend = spawn_echo_backend().await;
        let backend_host = backend.trim_start_matches("http://").to_string();
        let app = proxy_router(&config_for(backend));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .method(Method::POST)
                    .uri("/chat?lang=en")
                    .header(header::HOST, "localhost:3000")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"message":"hello"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(
            response.headers().get("x-echo-host").unwrap(),
            backend_host.as_str()
        );
        assert_eq!(
            body_string(response).await,
            r#"POST /chat?lang=en {"message":"hello"}"#
        );
    }

    #[tokio::test]
    async fn test_forwards_sub_paths() {
        let backend = spawn_echo_backend().await;
        let app = proxy_router(&config_for(backend));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/predict/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(body_string(response).await, "GET /predict/status ");
    }

    #[tokio::test]
    async fn test_unproxied_path_is_not_routed() {
        let backend = spawn_echo_backend().await;
        let app = proxy_router(&config_for(backend));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/chatroom")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_backend_down_returns_bad_gateway() {
        // Reserve a port, then free it so nothing is listening there
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let app = proxy_router(&config_for(format!("http://{}", addr)));
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .method(Method::POST)
                    .uri("/predict")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], 502);
    }

    #[tokio::test]
    async fn test_oversized_body_returns_payload_too_large() {
        let backend = spawn_echo_backend().await;
        let app = proxy_router(&config_for(backend));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .method(Method::POST)
                    .uri("/predict")
                    .body(Body::from(vec![0u8; MAX_BODY_BYTES + 1]))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"]["code"], 413);
    }

    #[tokio::test]
    async fn test_body_under_limit_is_forwarded() {
        let backend = spawn_echo_backend().await;
        let app = proxy_router(&config_for(backend));

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .method(Method::POST)
                    .uri("/predict")
                    .body(Body::from(vec![b'a'; 1024]))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
    }

    #[test]
    fn test_router_merges_with_page_routes() {
        let config = Config::from_vars(None, Some("/predict,/chat,/health".to_string())).unwrap();
        let pages = crate::core::RouteTable::application()
            .iter()
            .fold(Router::new(), |router, route| {
                router.route(route.path, get(|| async { "page" }))
            });

        // Overlapping routes would panic here
        let _app: Router = pages.merge(proxy_router(&config));
    }
}
