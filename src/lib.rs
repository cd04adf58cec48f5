//! Request-time redirect and rewrite evaluator.
//!
//! Given the text of a redirects rule file and an incoming HTTP request, this
//! crate decides whether the request should be answered with an HTTP redirect,
//! transparently proxied to a different backend asset path, or passed through
//! unmodified.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │              REDIRECTS EVALUATOR             │
//!                     │                                              │
//!   redirects file    │  ┌─────────┐   ┌──────────┐   ┌──────────┐  │
//!   ──────────────────┼─▶│  rules  │──▶│ metadata │──▶│ routing  │  │  (once, at
//!                     │  │ parser  │   │  build   │   │RuleTable │  │   startup)
//!                     │  └─────────┘   └──────────┘   └────┬─────┘  │
//!                     │                                    │        │
//!   Request           │  ┌───────────┐                     ▼        │
//!   ──────────────────┼─▶│ evaluator │◀────────── find_match        │
//!                     │  └─────┬─────┘                              │
//!                     │        │ 3xx: http::response (Location)     │
//!   Response / None   │        │ 200: http::fetch  (AssetFetcher)───┼──▶ backend
//!   ◀─────────────────┼────────┘                                    │
//!                     └──────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use redirects_evaluator::RedirectsEvaluator;
//!
//! let evaluator = RedirectsEvaluator::new("/old /new 301\n/docs/* /manual/:splat\n");
//! // share the evaluator, then per request:
//! // evaluator.evaluate(request, &assets).await?
//! ```

pub mod error;
pub mod evaluator;
pub mod http;
pub mod routing;
pub mod rules;

pub use error::{BoxError, EvaluateError};
pub use evaluator::RedirectsEvaluator;
pub use http::fetch::AssetFetcher;
pub use routing::matcher::MatchResult;
pub use rules::schema::{RedirectRule, RedirectsMetadata, RuleTarget, REDIRECTS_VERSION};
