//! The redirects evaluator: rule table construction wired to per-request
//! matching and response synthesis.
//!
//! # Data Flow
//! ```text
//! redirects file (text)
//!     → RedirectsEvaluator::new (parse → metadata → RuleTable, once)
//!
//! Per request:
//!     Request
//!     → reconstruct absolute URL
//!     → RuleTable::find_match
//!     → status 200: rewrite path, keep original query, delegate to AssetFetcher
//!     → status 3xx: assemble Location, build redirect response
//!     → no match: Ok(None), caller falls through to normal handling
//! ```
//!
//! # Design Decisions
//! - The rule table is parsed and compiled exactly once; evaluation only
//!   reads it, so one evaluator serves concurrent requests without locking
//! - Evaluation suspends only at the fetcher await
//! - Proxying discards the destination's own query string and carries the
//!   request's query verbatim; redirects prefer the destination's query when
//!   it is non-empty (see `redirect_location`)

use axum::body::Body;
use axum::http::{header, Request, Uri};
use axum::response::Response;
use url::Url;

use crate::error::EvaluateError;
use crate::http::fetch::AssetFetcher;
use crate::http::response::{redirect_for_status, RedirectOptions};
use crate::routing::matcher::{MatchResult, RuleTable};
use crate::rules::{build_metadata, parse_redirects};

/// Evaluates incoming requests against a redirects rule table.
///
/// Built once from redirects-file text; immutable afterwards.
#[derive(Debug)]
pub struct RedirectsEvaluator {
    table: RuleTable,
}

impl RedirectsEvaluator {
    /// Parse redirects-file contents and compile the rule table.
    ///
    /// Malformed lines are skipped and an unrecognized schema version
    /// degrades to an empty table, so construction never fails.
    pub fn new(redirects_file_contents: &str) -> Self {
        let parsed = parse_redirects(redirects_file_contents);
        let metadata = build_metadata(parsed);
        let table = RuleTable::from_metadata(&metadata);
        if table.is_empty() {
            tracing::debug!("no redirect rules configured");
        }
        Self { table }
    }

    /// Evaluate one request.
    ///
    /// Returns `Ok(None)` when no rule applies; the caller must fall through
    /// to its normal request handling. For proxy rules (status 200) the
    /// fetcher's response is returned unmodified; a fetch failure propagates
    /// without retry.
    pub async fn evaluate(
        &self,
        request: Request<Body>,
        assets: &dyn AssetFetcher,
    ) -> Result<Option<Response>, EvaluateError> {
        let url = request_url(&request)?;

        let matched = match self.table.find_match(&url) {
            Some(matched) => matched,
            None => return Ok(None),
        };

        tracing::debug!(
            path = url.path(),
            status = matched.status,
            to = %matched.to,
            "redirect rule matched"
        );

        if matched.status == 200 {
            self.proxy(&matched, &url, request, assets).await.map(Some)
        } else {
            self.redirect(&matched, &url).map(Some)
        }
    }

    /// Transparent rewrite: fetch a different asset path without changing
    /// the client-visible URL.
    async fn proxy(
        &self,
        matched: &MatchResult,
        url: &Url,
        request: Request<Body>,
        assets: &dyn AssetFetcher,
    ) -> Result<Response, EvaluateError> {
        let destination = resolve(url, &matched.to)?;

        // Only the destination's path survives; the original query string is
        // carried over verbatim and the destination's own query is discarded.
        let mut proxy_url = url.clone();
        proxy_url.set_path(destination.path());

        let (mut parts, body) = request.into_parts();
        parts.uri = proxy_url.as_str().parse::<Uri>()?;
        let proxied = Request::from_parts(parts, body);

        assets.fetch(proxied).await.map_err(EvaluateError::Fetch)
    }

    fn redirect(&self, matched: &MatchResult, url: &Url) -> Result<Response, EvaluateError> {
        let destination = resolve(url, &matched.to)?;
        let location = redirect_location(&destination, url);
        let options = RedirectOptions {
            prevent_leading_double_slash: false,
        };
        Ok(redirect_for_status(matched.status, &location, options)?)
    }
}

/// Reconstruct the absolute URL of an incoming request: the URI itself when
/// absolute-form, otherwise `http://{Host header}{uri}`.
fn request_url(request: &Request<Body>) -> Result<Url, EvaluateError> {
    let uri = request.uri();
    if uri.scheme().is_some() && uri.authority().is_some() {
        return Url::parse(&uri.to_string()).map_err(EvaluateError::RequestUrl);
    }

    let host = request
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .ok_or(EvaluateError::MissingRequestUrl)?;
    Url::parse(&format!("http://{host}{uri}")).map_err(EvaluateError::RequestUrl)
}

fn resolve(base: &Url, to: &str) -> Result<Url, EvaluateError> {
    base.join(to).map_err(|source| EvaluateError::Destination {
        to: to.to_string(),
        source,
    })
}

/// Assemble the Location value for a redirect.
///
/// Query precedence: the destination's own non-empty query wins outright;
/// otherwise the request's query is carried over. The destination's fragment
/// is appended after whichever query was chosen. Same-origin destinations
/// yield a relative Location; cross-origin destinations keep their
/// scheme+host+path verbatim with the merged query and fragment appended.
fn redirect_location(destination: &Url, request_url: &Url) -> String {
    let query = match non_empty(destination.query()) {
        Some(query) => format!("?{query}"),
        None => non_empty(request_url.query())
            .map(|query| format!("?{query}"))
            .unwrap_or_default(),
    };
    let fragment = non_empty(destination.fragment())
        .map(|fragment| format!("#{fragment}"))
        .unwrap_or_default();

    if destination.origin() == request_url.origin() {
        format!("{}{}{}", destination.path(), query, fragment)
    } else {
        let mut stripped = destination.clone();
        stripped.set_query(None);
        stripped.set_fragment(None);
        format!("{stripped}{query}{fragment}")
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
