//! Best-effort parsing of redirects-file text.
//!
//! # Responsibilities
//! - Split the file into rule lines, skipping blanks and `#` comments
//! - Tokenize each line into source, destination, and optional status
//! - Validate sources, destinations, and status codes per line
//!
//! # Design Decisions
//! - A malformed line is skipped with a line-numbered warning; it never
//!   aborts parsing of the remainder of the file
//! - No deduplication here; duplicate policy belongs to metadata build

use crate::rules::schema::{RedirectRule, DEFAULT_STATUS, VALID_STATUSES};

/// Parse redirects-file contents into rules, in file order.
pub fn parse_redirects(contents: &str) -> Vec<RedirectRule> {
    let mut rules = Vec::new();

    for (index, raw) in contents.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let (source, to, status_token) = match tokens.as_slice() {
            [source, to] => (*source, *to, None),
            [source, to, status] => (*source, *to, Some(*status)),
            _ => {
                tracing::warn!(
                    line = line_number,
                    "expected `source destination [status]`, skipping rule"
                );
                continue;
            }
        };

        if !source.starts_with('/') && !source.starts_with("https://") {
            tracing::warn!(line = line_number, source, "source must be a path or https:// URL, skipping rule");
            continue;
        }

        if !to.starts_with('/') && !to.starts_with("http://") && !to.starts_with("https://") {
            tracing::warn!(line = line_number, to, "destination must be a path or URL, skipping rule");
            continue;
        }

        let status = match status_token {
            None => DEFAULT_STATUS,
            Some(token) => match token.parse::<u16>() {
                Ok(status) if VALID_STATUSES.contains(&status) => status,
                _ => {
                    tracing::warn!(line = line_number, status = token, "unsupported status code, skipping rule");
                    continue;
                }
            },
        };

        rules.push(RedirectRule {
            source: source.to_string(),
            to: to.to_string(),
            status,
        });
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rules_with_default_status() {
        let rules = parse_redirects("/foo /bar");
        assert_eq!(
            rules,
            vec![RedirectRule {
                source: "/foo".into(),
                to: "/bar".into(),
                status: 302,
            }]
        );
    }

    #[test]
    fn parses_explicit_status_codes() {
        let rules = parse_redirects("/cat /dog 301\n/proxy /proxy-me 200");
        assert_eq!(rules[0].status, 301);
        assert_eq!(rules[1].status, 200);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let rules = parse_redirects("# a comment\n\n/foo /bar\n   \n# another\n");
        assert_eq!(rules.len(), 1);
    }

    #[test]
    fn skips_lines_with_wrong_token_counts() {
        let rules = parse_redirects("/lonely\n/foo /bar 301 extra\n/ok /fine");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].source, "/ok");
    }

    #[test]
    fn skips_unsupported_status_codes() {
        let rules = parse_redirects("/foo /bar 404\n/foo /bar teapot\n/foo /bar 308");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].status, 308);
    }

    #[test]
    fn skips_relative_sources_and_opaque_destinations() {
        let rules = parse_redirects("foo /bar\n/foo mailto:someone\n/foo https://example.com/bar");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].to, "https://example.com/bar");
    }

    #[test]
    fn keeps_parsing_after_a_malformed_line() {
        let rules = parse_redirects("garbage\n/a /b\nmore garbage here and there\n/c /d 301");
        assert_eq!(rules.len(), 2);
    }
}
