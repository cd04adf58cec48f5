//! Pattern compilation and placeholder substitution for dynamic rules.
//!
//! # Responsibilities
//! - Compile a rule source into an anchored regex: `*` becomes the `splat`
//!   capture, `:name` becomes a named capture
//! - Match compiled patterns against a request URL and collect captures
//! - Substitute captured values into destination templates
//!
//! # Design Decisions
//! - Path placeholders match one segment (`[^/]+`); host placeholders in
//!   cross-host rules match one label (`[^/.]+`)
//! - Cross-host rules (source starts with `https://`) are tested against
//!   `https://{host}{pathname}`, everything else against the bare pathname
//! - A source that does not compile (e.g. two `*` produce a duplicate group
//!   name) is skipped with a warning rather than failing table construction

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":([A-Za-z]\w*)").expect("placeholder regex is valid"));

/// Returns true when a rule source contains a `*` or `:name` token and must
/// therefore be evaluated as a pattern rather than an exact path.
pub(crate) fn has_pattern_tokens(source: &str) -> bool {
    source.contains('*') || PLACEHOLDER.is_match(source)
}

/// A rule source compiled for matching.
#[derive(Debug)]
pub struct CompiledPattern {
    regex: Regex,
    cross_host: bool,
}

/// Compile a rule source, or `None` if it does not form a valid pattern.
pub fn compile(source: &str) -> Option<CompiledPattern> {
    let cross_host = source.starts_with("https://");

    let mut pattern = String::from("^");
    if cross_host {
        let rest = &source["https://".len()..];
        let (host, path) = match rest.find('/') {
            Some(i) => (&rest[..i], &rest[i..]),
            None => (rest, ""),
        };
        pattern.push_str("https://");
        pattern.push_str(&expand(host, "[^/.]+"));
        pattern.push_str(&expand(path, "[^/]+"));
    } else {
        pattern.push_str(&expand(source, "[^/]+"));
    }
    pattern.push('$');

    match Regex::new(&pattern) {
        Ok(regex) => Some(CompiledPattern { regex, cross_host }),
        Err(error) => {
            tracing::warn!(rule = source, %error, "rule pattern does not compile, skipping");
            None
        }
    }
}

/// Escape literal text and expand `*` and `:name` tokens into capture groups.
fn expand(section: &str, placeholder_class: &str) -> String {
    let escaped = section
        .split('*')
        .map(|part| regex::escape(part))
        .collect::<Vec<_>>()
        .join("(?<splat>.*)");

    PLACEHOLDER
        .replace_all(&escaped, |captures: &regex::Captures| {
            format!("(?<{}>{})", &captures[1], placeholder_class)
        })
        .into_owned()
}

impl CompiledPattern {
    /// Match this pattern against a request URL, returning captured
    /// placeholder values in group order.
    pub fn captures(&self, url: &Url) -> Option<Vec<(String, String)>> {
        let target = if self.cross_host {
            format!("https://{}{}", url.host_str().unwrap_or_default(), url.path())
        } else {
            url.path().to_string()
        };

        let captures = self.regex.captures(&target)?;
        Some(
            self.regex
                .capture_names()
                .flatten()
                .filter_map(|name| {
                    captures
                        .name(name)
                        .map(|value| (name.to_string(), value.as_str().to_string()))
                })
                .collect(),
        )
    }
}

/// Replace every `:name` occurrence in a destination template with the
/// corresponding captured value.
pub fn substitute(template: &str, captures: &[(String, String)]) -> String {
    let mut out = template.to_string();
    for (name, value) in captures {
        out = out.replace(&format!(":{name}"), value);
    }
    out
}
