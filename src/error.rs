//! Error types for request evaluation.

use thiserror::Error;

/// Boxed error type used at the asset-fetcher seam.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while evaluating a request against the rule table.
///
/// Nothing here is fatal to the process: configuration problems degrade to an
/// empty rule table long before evaluation, and a missing match is `Ok(None)`,
/// not an error.
#[derive(Debug, Error)]
pub enum EvaluateError {
    /// The request carries neither an absolute-form URI nor a Host header,
    /// so no base URL can be reconstructed for it.
    #[error("request URL could not be determined")]
    MissingRequestUrl,

    /// The reconstructed request URL failed to parse.
    #[error("invalid request URL: {0}")]
    RequestUrl(#[source] url::ParseError),

    /// A matched rule's destination does not resolve against the request URL.
    #[error("destination `{to}` does not resolve: {source}")]
    Destination {
        to: String,
        #[source]
        source: url::ParseError,
    },

    /// The rewritten proxy URL is not a valid HTTP URI.
    #[error("rewritten proxy URI is invalid: {0}")]
    ProxyUri(#[from] axum::http::uri::InvalidUri),

    /// A redirect response could not be assembled.
    #[error("redirect response could not be built: {0}")]
    Response(#[from] axum::http::Error),

    /// The asset-fetching capability rejected a proxied request.
    /// Propagated unmodified; no retry is attempted.
    #[error("asset fetch failed: {0}")]
    Fetch(BoxError),
}
