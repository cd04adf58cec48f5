//! Normalization of parsed rules into the versioned metadata schema.
//!
//! # Responsibilities
//! - Split rules into the exact-path static table and the ordered dynamic list
//! - Enforce per-table rule ceilings
//! - Apply the first-wins policy for duplicate static sources

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::rules::engine::has_pattern_tokens;
use crate::rules::schema::{
    RedirectRule, RedirectsMetadata, RuleTarget, MAX_DYNAMIC_RULES, MAX_STATIC_RULES,
    REDIRECTS_VERSION,
};

/// Build the versioned metadata object from parsed rules.
///
/// A rule is static when its source is a plain path with no `*` or `:name`
/// tokens; everything else stays in the dynamic list in file order.
pub fn build_metadata(parsed: Vec<RedirectRule>) -> RedirectsMetadata {
    let mut static_rules = HashMap::new();
    let mut rules = Vec::new();

    for rule in parsed {
        if rule.source.starts_with('/') && !has_pattern_tokens(&rule.source) {
            if static_rules.len() >= MAX_STATIC_RULES {
                tracing::warn!(source = %rule.source, limit = MAX_STATIC_RULES, "static rule limit reached, skipping rule");
                continue;
            }
            match static_rules.entry(rule.source) {
                Entry::Occupied(entry) => {
                    tracing::warn!(source = entry.key().as_str(), "ignoring duplicate static rule");
                }
                Entry::Vacant(entry) => {
                    entry.insert(RuleTarget {
                        status: rule.status,
                        to: rule.to,
                    });
                }
            }
        } else {
            if rules.len() >= MAX_DYNAMIC_RULES {
                tracing::warn!(source = %rule.source, limit = MAX_DYNAMIC_RULES, "dynamic rule limit reached, skipping rule");
                continue;
            }
            rules.push(rule);
        }
    }

    RedirectsMetadata {
        version: REDIRECTS_VERSION,
        static_rules,
        rules,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(source: &str, to: &str, status: u16) -> RedirectRule {
        RedirectRule {
            source: source.into(),
            to: to.into(),
            status,
        }
    }

    #[test]
    fn splits_static_and_dynamic_rules() {
        let metadata = build_metadata(vec![
            rule("/foo", "/bar", 302),
            rule("/blog/*", "/news/:splat", 301),
            rule("/users/:id", "/profiles/:id", 302),
        ]);

        assert_eq!(metadata.version, REDIRECTS_VERSION);
        assert_eq!(metadata.static_rules.len(), 1);
        assert_eq!(metadata.static_rules["/foo"].to, "/bar");
        assert_eq!(metadata.rules.len(), 2);
        assert_eq!(metadata.rules[0].source, "/blog/*");
    }

    #[test]
    fn cross_host_rules_are_never_static() {
        let metadata = build_metadata(vec![rule("https://example.com/plain", "/landed", 302)]);
        assert!(metadata.static_rules.is_empty());
        assert_eq!(metadata.rules.len(), 1);
    }

    #[test]
    fn first_static_rule_wins_on_duplicate_source() {
        let metadata = build_metadata(vec![
            rule("/foo", "/first", 302),
            rule("/foo", "/second", 301),
        ]);
        assert_eq!(metadata.static_rules.len(), 1);
        assert_eq!(metadata.static_rules["/foo"].to, "/first");
        assert_eq!(metadata.static_rules["/foo"].status, 302);
    }

    #[test]
    fn enforces_rule_ceilings() {
        let mut parsed = Vec::new();
        for i in 0..MAX_STATIC_RULES + 5 {
            parsed.push(rule(&format!("/static-{i}"), "/dest", 302));
        }
        for i in 0..MAX_DYNAMIC_RULES + 5 {
            parsed.push(rule(&format!("/dynamic-{i}/*"), "/dest/:splat", 302));
        }

        let metadata = build_metadata(parsed);
        assert_eq!(metadata.static_rules.len(), MAX_STATIC_RULES);
        assert_eq!(metadata.rules.len(), MAX_DYNAMIC_RULES);
    }
}
