//! HTTP-facing seams of the evaluator.
//!
//! # Data Flow
//! ```text
//! MatchResult + request URL
//!     → response.rs (Location assembly, redirect response per status)
//!     → Send to client
//!
//! Proxy rules (status 200):
//!     rewritten request
//!     → fetch.rs (AssetFetcher trait, implemented by the caller)
//!     → backend response forwarded unmodified
//! ```

pub mod fetch;
pub mod response;

pub use fetch::AssetFetcher;
pub use response::RedirectOptions;
