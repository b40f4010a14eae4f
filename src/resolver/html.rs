// src/resolver/html.rs
// =============================================================================
// Finds the favicon <link> tag in a page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Never fails on broken markup (html5ever repairs it like a browser would)
//
// The patterns are tried in a fixed order and the first one that matches an
// element with a non-empty href wins, even if a later pattern matches an
// element that comes earlier in the document.
//
// HTML selectors compare `rel` values case-insensitively by default. The
// `s` flag turns that off: only the exact spellings below count.
// =============================================================================

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

/// `<link>` patterns carrying a favicon, most specific first.
pub const ICON_PATTERNS: [&str; 3] = [
    r#"link[rel="shortcut icon" s][href]"#,
    r#"link[rel="SHORTCUT ICON" s][href]"#,
    r#"link[rel="icon" s][href]"#,
];

static ICON_SELECTORS: Lazy<[Selector; 3]> = Lazy::new(|| {
    ICON_PATTERNS.map(|pattern| Selector::parse(pattern).expect("favicon selector is valid CSS"))
});

// Returns the raw href of the favicon link, exactly as written in the page.
//
// Example:
//   html = r#"<link rel="icon" href="/static/f.png">"#
//   result = Some("/static/f.png")
pub fn find_icon_href(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    ICON_SELECTORS.iter().find_map(|selector| {
        let element = document.select(selector).next()?;
        let href = element.value().attr("href")?.trim();
        (!href.is_empty()).then(|| href.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_parse() {
        for pattern in ICON_PATTERNS {
            assert!(Selector::parse(pattern).is_ok(), "bad selector {pattern}");
        }
        assert_eq!(ICON_SELECTORS.len(), ICON_PATTERNS.len());
    }

    #[test]
    fn test_plain_icon() {
        let html = r#"<html><head><link rel="icon" href="/f.png"></head></html>"#;
        assert_eq!(find_icon_href(html), Some("/f.png".to_string()));
    }

    #[test]
    fn test_shortcut_icon() {
        let html = r#"<link rel="shortcut icon" href="/favicon.ico">"#;
        assert_eq!(find_icon_href(html), Some("/favicon.ico".to_string()));
    }

    #[test]
    fn test_uppercase_shortcut_icon() {
        let html = r#"<LINK REL="SHORTCUT ICON" HREF="/old.ico">"#;
        assert_eq!(find_icon_href(html), Some("/old.ico".to_string()));
    }

    #[test]
    fn test_rel_value_is_case_sensitive() {
        assert_eq!(find_icon_href(r#"<link rel="ICON" href="/u.png">"#), None);
        assert_eq!(find_icon_href(r#"<link rel="Shortcut Icon" href="/m.ico">"#), None);
        assert_eq!(find_icon_href(r#"<link rel="Icon" href="/c.png">"#), None);
    }

    #[test]
    fn test_uppercase_shortcut_icon_found_by_its_own_pattern() {
        let html = r#"
            <link rel="SHORTCUT ICON" href="/upper.ico">
            <link rel="icon" href="/lower.png">
        "#;
        assert_eq!(find_icon_href(html), Some("/upper.ico".to_string()));

        // Lowercase "shortcut icon" still wins over it
        let html = r#"
            <link rel="SHORTCUT ICON" href="/upper.ico">
            <link rel="shortcut icon" href="/lower.ico">
        "#;
        assert_eq!(find_icon_href(html), Some("/lower.ico".to_string()));
    }

    #[test]
    fn test_pattern_order_beats_document_order() {
        let html = r#"
            <link rel="icon" href="/second.png">
            <link rel="shortcut icon" href="/first.ico">
        "#;
        assert_eq!(find_icon_href(html), Some("/first.ico".to_string()));
    }

    #[test]
    fn test_empty_href_falls_through_to_next_pattern() {
        let html = r#"
            <link rel="shortcut icon" href="">
            <link rel="icon" href="/real.png">
        "#;
        assert_eq!(find_icon_href(html), Some("/real.png".to_string()));
    }

    #[test]
    fn test_other_rel_values_ignored() {
        let html = r#"
            <link rel="stylesheet" href="/style.css">
            <link rel="apple-touch-icon" href="/apple.png">
        "#;
        assert_eq!(find_icon_href(html), None);
    }

    #[test]
    fn test_garbage_markup() {
        assert_eq!(find_icon_href("<<<not html at all"), None);
        assert_eq!(find_icon_href(""), None);
    }
}
