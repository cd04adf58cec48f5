//! Shared utilities for integration testing.

use std::sync::{Mutex, Once};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;

use redirects_evaluator::{AssetFetcher, BoxError};

static INIT: Once = Once::new();

/// Initialize tracing output for tests; respects `RUST_LOG`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// In-process asset backend that records the URLs it was asked to fetch and
/// answers with a canned body.
#[derive(Default)]
pub struct MockAssets {
    requests: Mutex<Vec<String>>,
    body: String,
}

impl MockAssets {
    pub fn with_body(body: &str) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            body: body.to_string(),
        }
    }

    /// URLs fetched so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetFetcher for MockAssets {
    async fn fetch(&self, request: Request<Body>) -> Result<Response, BoxError> {
        self.requests.lock().unwrap().push(request.uri().to_string());
        Ok(Response::builder()
            .status(StatusCode::OK)
            .body(Body::from(self.body.clone()))?)
    }
}

/// Asset backend that always fails, for propagation tests.
pub struct FailingAssets;

#[async_trait]
impl AssetFetcher for FailingAssets {
    async fn fetch(&self, _request: Request<Body>) -> Result<Response, BoxError> {
        Err("backend unavailable".into())
    }
}
