// src/extract.rs
//! Published file ID extraction from item links.
//!
//! Workshop links come in two shapes: `.../filedetails/?id=123` and
//! path-style links ending in a numeric segment. The rules are tried in
//! order and the first match wins.

use crate::types::PublishedFileId;
use once_cell::sync::Lazy;
use regex::Regex;

static QUERY_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[?&]id=(\d+)").expect("Failed to compile query ID regex - this is a bug in the code")
});

static PATH_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"/(\d+)(?:/|$)").expect("Failed to compile path ID regex - this is a bug in the code")
});

/// Ordered extraction rules, tried first to last.
static RULES: [&Lazy<Regex>; 2] = [&QUERY_ID_REGEX, &PATH_ID_REGEX];

/// Extracts the published file ID from a link, or `None` if no rule matches.
pub fn extract_published_file_id(link: &str) -> Option<PublishedFileId> {
    RULES.iter().find_map(|rule| {
        rule.captures(link)
            .and_then(|captures| captures.get(1))
            .map(|digits| PublishedFileId::from_digits(digits.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(link: &str) -> Option<String> {
        extract_published_file_id(link).map(|id| id.as_str().to_string())
    }

    #[test]
    fn test_query_parameter() {
        assert_eq!(
            extract("https://steamcommunity.com/sharedfiles/filedetails/?id=3317449166"),
            Some("3317449166".to_string())
        );
        assert_eq!(
            extract("https://steamcommunity.com/sharedfiles/filedetails/?l=en&id=42&searchtext="),
            Some("42".to_string())
        );
    }

    #[test]
    fn test_query_parameter_wins_over_path() {
        assert_eq!(
            extract("https://example.com/app/999/item?id=123"),
            Some("123".to_string())
        );
    }

    #[test]
    fn test_path_segment_fallback() {
        assert_eq!(
            extract("https://steamcommunity.com/workshop/456/"),
            Some("456".to_string())
        );
        assert_eq!(
            extract("https://steamcommunity.com/workshop/456"),
            Some("456".to_string())
        );
        // Leftmost purely numeric segment
        assert_eq!(extract("https://x.test/12/34/"), Some("12".to_string()));
    }

    #[test]
    fn test_partial_segments_are_ignored() {
        assert_eq!(extract("https://x.test/v2a/abc123/"), None);
        assert_eq!(extract("https://x.test/item-77/"), None);
        // `uid=` is not `id=`
        assert_eq!(extract("https://x.test/page?uid=5"), None);
    }

    #[test]
    fn test_no_normalization() {
        assert_eq!(extract("https://x.test/?id=000123"), Some("000123".to_string()));
        assert_eq!(
            extract("https://x.test/?id=123456789012345678901234567890"),
            Some("123456789012345678901234567890".to_string())
        );
    }

    #[test]
    fn test_nothing_found() {
        assert_eq!(extract(""), None);
        assert_eq!(extract("https://steamcommunity.com/id/someone/"), None);
        assert_eq!(extract("javascript:void(0)"), None);
        assert_eq!(extract("https://x.test/?id="), None);
    }
}
