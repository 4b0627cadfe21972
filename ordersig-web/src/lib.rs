//! Static responder for the order-signing demo page.
//!
//! Serves one fixed HTML file on `/` and `/index.html`, `404 Not found` on
//! every other path, and `500 Error loading index.html` when the file
//! cannot be read. The file is read per request; there is no caching and
//! no shared mutable state across requests.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Responder configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Port to listen on (env `PORT`, default 3000).
    pub port: u16,
    /// Path of the HTML file to serve (env `INDEX_FILE`,
    /// default `public/index.html`).
    pub index_file: PathBuf,
}

impl WebConfig {
    /// Reads `PORT` and `INDEX_FILE` from the environment, applying
    /// defaults when unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(3000);
        let index_file = std::env::var("INDEX_FILE")
            .map_or_else(|_| PathBuf::from("public/index.html"), PathBuf::from);
        Self { port, index_file }
    }
}

/// Builds the responder router for the given index file.
#[must_use]
pub fn router(index_file: PathBuf) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/index.html", get(serve_index))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(index_file))
}

async fn serve_index(State(index): State<Arc<PathBuf>>) -> Response {
    match tokio::fs::read(index.as_path()).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "text/html")], bytes).into_response(),
        Err(err) => {
            warn!(path = %index.display(), error = %err, "failed to read index file");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error loading index.html").into_response()
        }
    }
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    fn temp_index(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "ordersig-web-{}-{name}.html",
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    async fn get_path(app: Router, path: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|value| value.to_str().unwrap().to_owned());
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, content_type, body.to_vec())
    }

    #[tokio::test]
    async fn root_serves_index_file_bytes() {
        let html = "<html><body>order signing demo</body></html>";
        let app = router(temp_index("root", html));
        let (status, content_type, body) = get_path(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/html"));
        assert_eq!(body, html.as_bytes());
    }

    #[tokio::test]
    async fn index_html_path_serves_same_file() {
        let html = "<html><body>alias</body></html>";
        let app = router(temp_index("alias", html));
        let (status, content_type, body) = get_path(app, "/index.html").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/html"));
        assert_eq!(body, html.as_bytes());
    }

    #[tokio::test]
    async fn other_paths_return_not_found() {
        let app = router(temp_index("notfound", "<html></html>"));
        for path in ["/other", "/index", "/index.htm", "/public/index.html"] {
            let (status, _, body) = get_path(app.clone(), path).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "path {path}");
            assert_eq!(body, b"Not found");
        }
    }

    #[tokio::test]
    async fn unreadable_file_returns_server_error() {
        let app = router(PathBuf::from("/nonexistent/ordersig/index.html"));
        for path in ["/", "/index.html"] {
            let (status, _, body) = get_path(app.clone(), path).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "path {path}");
            assert_eq!(body, b"Error loading index.html");
        }
    }
}
