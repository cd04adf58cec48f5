//! Rule lookup subsystem.
//!
//! # Data Flow
//! ```text
//! RedirectsMetadata (versioned)
//!     → matcher.rs (version check, pattern compilation)
//!     → RuleTable (immutable, shared)
//!
//! Per request:
//!     request URL
//!     → exact pathname lookup in the static table
//!     → else first matching dynamic pattern, in file order
//!     → Return: MatchResult or None
//! ```
//!
//! # Design Decisions
//! - Static and dynamic tables stay separate; the static table always wins,
//!   regardless of dynamic rule order
//! - Table compiled once at construction, immutable at runtime
//! - An unrecognized metadata version degrades to an empty table

pub mod matcher;

pub use matcher::{MatchResult, RuleTable};
