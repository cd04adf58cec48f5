//! Rule table construction subsystem.
//!
//! # Data Flow
//! ```text
//! redirects file (text)
//!     → parser.rs (best-effort line parsing)
//!     → metadata.rs (static/dynamic split, rule ceilings)
//!     → RedirectsMetadata (versioned, immutable)
//!     → compiled into routing::RuleTable at evaluator construction
//!
//! engine.rs compiles dynamic rule sources into anchored regexes
//! and substitutes captured values into destinations.
//! ```
//!
//! # Design Decisions
//! - Parsing is best-effort: malformed lines are skipped with a warning,
//!   never aborting the remainder of the file
//! - The metadata schema is versioned; consumers must check the version
//!   and degrade to an empty rule set on mismatch
//! - Rules are parsed and compiled once per evaluator, never per request

pub mod engine;
pub mod metadata;
pub mod parser;
pub mod schema;

pub use metadata::build_metadata;
pub use parser::parse_redirects;
pub use schema::{RedirectRule, RedirectsMetadata, RuleTarget, REDIRECTS_VERSION};
