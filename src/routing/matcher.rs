//! Rule table lookup.
//!
//! # Responsibilities
//! - Compile versioned metadata into an immutable lookup table
//! - Resolve one request URL to at most one rule
//!
//! # Design Decisions
//! - Exact pathname lookup short-circuits the dynamic table entirely; this is
//!   a precedence guarantee, so the two tables are never merged
//! - Pathnames are compared literally, trailing slashes included
//! - First matching dynamic rule wins, in file order

use std::collections::HashMap;

use url::Url;

use crate::rules::engine::{self, CompiledPattern};
use crate::rules::schema::{RedirectsMetadata, RuleTarget, REDIRECTS_VERSION};

/// The resolved outcome of a rule lookup: the rule's status code and its
/// destination with placeholders already substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub status: u16,
    pub to: String,
}

#[derive(Debug)]
struct CompiledRule {
    pattern: CompiledPattern,
    target: RuleTarget,
}

/// Immutable rule lookup table, safe for concurrent reads.
#[derive(Debug, Default)]
pub struct RuleTable {
    static_rules: HashMap<String, RuleTarget>,
    dynamic_rules: Vec<CompiledRule>,
}

impl RuleTable {
    /// Compile metadata into a lookup table.
    ///
    /// Metadata carrying an unknown schema version yields an empty table:
    /// the evaluator degrades to "no redirects configured" instead of failing.
    pub fn from_metadata(metadata: &RedirectsMetadata) -> Self {
        if metadata.version != REDIRECTS_VERSION {
            tracing::warn!(
                version = metadata.version,
                supported = REDIRECTS_VERSION,
                "unrecognized redirects metadata version, ignoring all rules"
            );
            return Self::default();
        }

        let dynamic_rules = metadata
            .rules
            .iter()
            .filter_map(|rule| {
                engine::compile(&rule.source).map(|pattern| CompiledRule {
                    pattern,
                    target: RuleTarget {
                        status: rule.status,
                        to: rule.to.clone(),
                    },
                })
            })
            .collect();

        Self {
            static_rules: metadata.static_rules.clone(),
            dynamic_rules,
        }
    }

    /// True when no rule could ever match.
    pub fn is_empty(&self) -> bool {
        self.static_rules.is_empty() && self.dynamic_rules.is_empty()
    }

    /// Resolve a request URL to the single applicable rule, if any.
    pub fn find_match(&self, url: &Url) -> Option<MatchResult> {
        if let Some(target) = self.static_rules.get(url.path()) {
            return Some(MatchResult {
                status: target.status,
                to: target.to.clone(),
            });
        }

        self.dynamic_rules.iter().find_map(|rule| {
            rule.pattern.captures(url).map(|captures| MatchResult {
                status: rule.target.status,
                to: engine::substitute(&rule.target.to, &captures),
            })
        })
    }
}
