//! Shape checks for emails and URLs.
//!
//! Both checks answer with a plain `bool` and never fail. [`parse_url`] is
//! the typed companion for callers that need the parsed value or the reason
//! it was rejected.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use url::Url;

use crate::{Error, Result};

/// `local@domain.tld`: no whitespace, exactly one `@`, and a dot after it.
///
/// This is a shape check, not RFC 5322 validation.
#[allow(clippy::expect_used)] // Pattern is a compile-time constant
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Whether `email` looks like `local@domain.tld`.
///
/// # Examples
///
/// ```
/// use bindkit_core::validate::is_valid_email;
///
/// assert!(is_valid_email("a@b.com"));
/// assert!(!is_valid_email("not-an-email"));
/// assert!(!is_valid_email("a b@c.com"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Whether `url` parses as an absolute URL.
///
/// # Examples
///
/// ```
/// use bindkit_core::validate::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/path?q=1"));
/// assert!(is_valid_url("mailto:someone@example.com"));
/// assert!(!is_valid_url("example.com"));
/// ```
#[must_use]
pub fn is_valid_url(url: &str) -> bool {
    parse_url(url).is_ok()
}

/// Parse `input` as an absolute URL.
pub fn parse_url(input: &str) -> Result<Url> {
    Url::parse(input).map_err(|e| {
        debug!(url = %input, error = %e, "URL failed to parse");
        Error::InvalidUrl(format!("{input}: {e}"))
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        let valid = [
            "a@b.com",
            "first.last@example.co.uk",
            "user+tag@sub.domain.io",
            "x@y.z",
        ];
        for email in valid {
            assert!(is_valid_email(email), "should accept {email}");
        }
    }

    #[test]
    fn test_invalid_emails() {
        let invalid = [
            "",
            "not-an-email",
            "@example.com",
            "user@",
            "user@domain",
            "user@@domain.com",
            "user name@domain.com",
            "user@domain.com ",
            "user@.",
        ];
        for email in invalid {
            assert!(!is_valid_email(email), "should reject {email:?}");
        }
    }

    #[test]
    fn test_valid_urls() {
        let valid = [
            "https://example.com",
            "http://localhost:8080/api",
            "ftp://files.example.com/pub",
            "file:///tmp/report.txt",
            "data:text/plain,hello",
        ];
        for url in valid {
            assert!(is_valid_url(url), "should accept {url}");
        }
    }

    #[test]
    fn test_invalid_urls() {
        let invalid = ["", "example.com", "/relative/path", "http://", "https://exa mple.com"];
        for url in invalid {
            assert!(!is_valid_url(url), "should reject {url:?}");
        }
    }

    #[test]
    fn test_parse_url_returns_parsed_value() {
        let url = parse_url("https://example.com:8443/a/b?x=1").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
        assert_eq!(url.port(), Some(8443));
        assert_eq!(url.path(), "/a/b");
    }

    #[test]
    fn test_parse_url_error_carries_input() {
        let err = parse_url("not a url").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
        assert!(err.to_string().contains("not a url"));
    }
}
