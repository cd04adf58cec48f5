//! Rule and metadata schema definitions.
//!
//! All types derive Serde traits so the versioned metadata object can be
//! serialized and consumed by other tooling unchanged.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The single metadata schema version this evaluator understands.
pub const REDIRECTS_VERSION: u32 = 1;

/// Status assigned to rules whose status column is omitted.
pub const DEFAULT_STATUS: u16 = 302;

/// Status codes a rule may carry. 200 means proxy; the rest are redirects.
pub const VALID_STATUSES: [u16; 6] = [200, 301, 302, 303, 307, 308];

/// Ceiling on exact-path rules kept from one redirects file.
pub const MAX_STATIC_RULES: usize = 2000;

/// Ceiling on pattern rules kept from one redirects file.
pub const MAX_DYNAMIC_RULES: usize = 100;

/// One parsed rule line: a source (exact path or pattern), a destination,
/// and a status code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectRule {
    pub source: String,
    pub to: String,
    pub status: u16,
}

/// The destination side of a rule, stored per static key and per pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTarget {
    pub status: u16,
    pub to: String,
}

/// Versioned rule metadata: exact-path rules keyed by source, pattern rules
/// in file order.
///
/// Consumers must check `version` against [`REDIRECTS_VERSION`] before
/// trusting `static_rules` or `rules`; an unknown version means "no redirects
/// configured", not an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RedirectsMetadata {
    pub version: u32,

    #[serde(default)]
    pub static_rules: HashMap<String, RuleTarget>,

    #[serde(default)]
    pub rules: Vec<RedirectRule>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_tolerates_missing_tables() {
        let metadata: RedirectsMetadata = serde_json::from_str(r#"{"version": 1}"#).unwrap();
        assert_eq!(metadata.version, REDIRECTS_VERSION);
        assert!(metadata.static_rules.is_empty());
        assert!(metadata.rules.is_empty());
    }

    #[test]
    fn metadata_from_future_version_still_parses() {
        let metadata: RedirectsMetadata = serde_json::from_str(
            r#"{"version": 2, "static_rules": {}, "rules": [{"source": "/a", "to": "/b", "status": 302}]}"#,
        )
        .unwrap();
        assert_eq!(metadata.version, 2);
        assert_eq!(metadata.rules.len(), 1);
    }
}
