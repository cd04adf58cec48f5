//! Redirect response construction.
//!
//! # Responsibilities
//! - Build the concrete redirect response for each supported status code
//! - Optionally collapse a leading run of slashes in the Location value
//!
//! # Design Decisions
//! - 302 is the fallback for any unrecognized status
//! - The leading-double-slash option guards against protocol-relative
//!   redirects when a Location is assembled from untrusted input; the
//!   evaluator assembles Location itself and disables it

use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::Response;

/// Options shared by all redirect constructors.
#[derive(Debug, Clone, Copy)]
pub struct RedirectOptions {
    /// Collapse a leading `//` (or longer run) in the Location to a single
    /// `/`, so the value cannot be read as a protocol-relative URL.
    pub prevent_leading_double_slash: bool,
}

impl Default for RedirectOptions {
    fn default() -> Self {
        Self {
            prevent_leading_double_slash: true,
        }
    }
}

/// Build the redirect response variant for a rule's status code.
///
/// 301 → moved permanently, 303 → see other, 307 → temporary redirect,
/// 308 → permanent redirect, 302 and anything else → found.
pub fn redirect_for_status(
    status: u16,
    location: &str,
    options: RedirectOptions,
) -> Result<Response, axum::http::Error> {
    match status {
        301 => moved_permanently(location, options),
        303 => see_other(location, options),
        307 => temporary_redirect(location, options),
        308 => permanent_redirect(location, options),
        _ => found(location, options),
    }
}

pub fn moved_permanently(
    location: &str,
    options: RedirectOptions,
) -> Result<Response, axum::http::Error> {
    redirect(StatusCode::MOVED_PERMANENTLY, location, options)
}

pub fn found(location: &str, options: RedirectOptions) -> Result<Response, axum::http::Error> {
    redirect(StatusCode::FOUND, location, options)
}

pub fn see_other(location: &str, options: RedirectOptions) -> Result<Response, axum::http::Error> {
    redirect(StatusCode::SEE_OTHER, location, options)
}

pub fn temporary_redirect(
    location: &str,
    options: RedirectOptions,
) -> Result<Response, axum::http::Error> {
    redirect(StatusCode::TEMPORARY_REDIRECT, location, options)
}

pub fn permanent_redirect(
    location: &str,
    options: RedirectOptions,
) -> Result<Response, axum::http::Error> {
    redirect(StatusCode::PERMANENT_REDIRECT, location, options)
}

fn redirect(
    status: StatusCode,
    location: &str,
    options: RedirectOptions,
) -> Result<Response, axum::http::Error> {
    let location = if options.prevent_leading_double_slash {
        collapse_leading_slashes(location)
    } else {
        location.to_string()
    };

    Response::builder()
        .status(status)
        .header(header::LOCATION, location)
        .body(Body::empty())
}

fn collapse_leading_slashes(location: &str) -> String {
    if location.starts_with("//") {
        let trimmed = location.trim_start_matches('/');
        format!("/{trimmed}")
    } else {
        location.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location_header(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
    }

    #[test]
    fn maps_statuses_to_response_variants() {
        let options = RedirectOptions {
            prevent_leading_double_slash: false,
        };
        for (status, expected) in [
            (301, StatusCode::MOVED_PERMANENTLY),
            (302, StatusCode::FOUND),
            (303, StatusCode::SEE_OTHER),
            (307, StatusCode::TEMPORARY_REDIRECT),
            (308, StatusCode::PERMANENT_REDIRECT),
            // anything unrecognized falls back to found
            (399, StatusCode::FOUND),
        ] {
            let response = redirect_for_status(status, "/dest", options).unwrap();
            assert_eq!(response.status(), expected, "status {status}");
            assert_eq!(location_header(&response), "/dest");
        }
    }

    #[test]
    fn collapses_leading_double_slash_when_enabled() {
        let response = found("//evil.example/path", RedirectOptions::default()).unwrap();
        assert_eq!(location_header(&response), "/evil.example/path");

        let response = found("///deep", RedirectOptions::default()).unwrap();
        assert_eq!(location_header(&response), "/deep");
    }

    #[test]
    fn preserves_location_verbatim_when_disabled() {
        let options = RedirectOptions {
            prevent_leading_double_slash: false,
        };
        let response = found("//host.example/path", options).unwrap();
        assert_eq!(location_header(&response), "//host.example/path");
    }
}
