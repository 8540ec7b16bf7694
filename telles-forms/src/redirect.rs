//! Redirect URL construction.

use crate::error::FormError;

/// Percent-encode a query value the way the browser's
/// `encodeURIComponent` does.
///
/// `urlencoding` also escapes `!'()*`, which the browser leaves alone.
pub fn encode_uri_component(value: &str) -> String {
    urlencoding::encode(value)
        .replace("%21", "!")
        .replace("%27", "'")
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%2A", "*")
}

/// `path?name=value` with the value encoded.
pub fn with_query(path: &str, name: &str, value: &str) -> String {
    format!("{path}?{name}={}", encode_uri_component(value))
}

/// A redirect target supplied by the page. Only a missing or empty value is
/// rejected; whitespace is passed on for the browser to resolve.
pub fn require_target(url: Option<&str>) -> Result<&str, FormError> {
    match url {
        Some(url) if !url.is_empty() => Ok(url),
        _ => Err(FormError::MissingRedirectUrl),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_matches_browser() {
        assert_eq!(
            encode_uri_component("2025年7月15日"),
            "2025%E5%B9%B47%E6%9C%8815%E6%97%A5"
        );
        assert_eq!(encode_uri_component("a b&c=d"), "a%20b%26c%3Dd");
        assert_eq!(encode_uri_component("(x)!*'~-_."), "(x)!*'~-_.");
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/attendance_form/", "date", "x y"), "/attendance_form/?date=x%20y");
    }

    #[test]
    fn test_require_target() {
        assert_eq!(require_target(Some("/login/")), Ok("/login/"));
        assert_eq!(require_target(Some("  ")), Ok("  "));
        assert_eq!(require_target(Some("")), Err(FormError::MissingRedirectUrl));
        assert_eq!(require_target(None), Err(FormError::MissingRedirectUrl));
    }
}
