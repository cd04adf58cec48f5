//! The asset-fetching seam for proxy rules.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;

use crate::error::BoxError;

/// Abstract backend that resolves a rewritten request to a response.
///
/// The evaluator treats implementations as opaque: the response comes back
/// unmodified, and a failure propagates to the caller without retries. One
/// evaluator may be shared across many concurrent requests, so implementations
/// must be `Send + Sync`.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    async fn fetch(&self, request: Request<Body>) -> Result<Response, BoxError>;
}
