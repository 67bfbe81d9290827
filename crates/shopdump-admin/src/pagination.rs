//! Admin API cursor pagination via the `Link` response header.
//!
//! Each page response carries the URLs of adjacent pages in its `Link`
//! header. The cursor lives in an opaque `page_info` query parameter, so the
//! next URL is followed verbatim rather than rebuilt.
//!
//! ## Header format
//!
//! Single next link:
//! ```text
//! <https://shop.myshopify.com/admin/api/2025-10/products.json?limit=250&page_info=CURSOR>; rel="next"
//! ```
//!
//! Combined previous and next:
//! ```text
//! <https://shop.myshopify.com/admin/api/2025-10/products.json?limit=250&page_info=PREV>; rel="previous",
//! <https://shop.myshopify.com/admin/api/2025-10/products.json?limit=250&page_info=NEXT>; rel="next"
//! ```

use std::sync::LazyLock;

use regex::Regex;

static NEXT_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<([^>]+)>; rel="next""#).expect("valid regex"));

/// Parses a `Link` header value and returns the URL of the next page.
///
/// Returns `None` if:
/// - `link_header` is `None` (no header was present),
/// - there is no `rel="next"` relation (last page reached),
/// - the `rel="next"` relation is not preceded by an `<URL>` target.
#[must_use]
pub fn extract_next_url(link_header: Option<&str>) -> Option<String> {
    let header = link_header?;
    if !header.contains(r#"rel="next""#) {
        return None;
    }

    NEXT_LINK_RE
        .captures(header)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_none_when_header_is_none() {
        assert!(extract_next_url(None).is_none());
    }

    #[test]
    fn returns_none_when_header_is_empty() {
        assert!(extract_next_url(Some("")).is_none());
    }

    #[test]
    fn extracts_url_from_single_next_link() {
        let header = r#"<https://ladani-store-2.myshopify.com/admin/api/2025-10/products.json?limit=250&page_info=eyJsYXN0X2lkIjo2fQ>; rel="next""#;
        assert_eq!(
            extract_next_url(Some(header)).as_deref(),
            Some("https://ladani-store-2.myshopify.com/admin/api/2025-10/products.json?limit=250&page_info=eyJsYXN0X2lkIjo2fQ")
        );
    }

    #[test]
    fn extracts_next_url_from_combined_prev_next_link() {
        let header = concat!(
            r#"<https://shop.example/admin/api/2025-10/products.json?limit=250&page_info=PREV>; rel="previous", "#,
            r#"<https://shop.example/admin/api/2025-10/products.json?limit=250&page_info=NEXT>; rel="next""#
        );
        assert_eq!(
            extract_next_url(Some(header)).as_deref(),
            Some("https://shop.example/admin/api/2025-10/products.json?limit=250&page_info=NEXT")
        );
    }

    #[test]
    fn extracts_next_url_when_next_precedes_previous() {
        let header = concat!(
            r#"<https://shop.example/p.json?page_info=NEXT>; rel="next", "#,
            r#"<https://shop.example/p.json?page_info=PREV>; rel="previous""#
        );
        assert_eq!(
            extract_next_url(Some(header)).as_deref(),
            Some("https://shop.example/p.json?page_info=NEXT")
        );
    }

    #[test]
    fn returns_none_when_only_previous_link_present() {
        let header = r#"<https://shop.example/p.json?page_info=PREV>; rel="previous""#;
        assert!(extract_next_url(Some(header)).is_none());
    }

    #[test]
    fn returns_none_when_next_relation_has_no_url_target() {
        assert!(extract_next_url(Some(r#"rel="next""#)).is_none());
    }

    #[test]
    fn returns_none_when_separator_is_not_semicolon_space() {
        // The relation must follow the target as `>; rel="next"`.
        let header = r#"<https://shop.example/p.json?page_info=X>;rel="next""#;
        assert!(extract_next_url(Some(header)).is_none());
    }

    #[test]
    fn keeps_query_string_verbatim() {
        let header = r#"<https://shop.example/p.json?limit=250&page_info=a%2Bb>; rel="next""#;
        assert_eq!(
            extract_next_url(Some(header)).as_deref(),
            Some("https://shop.example/p.json?limit=250&page_info=a%2Bb")
        );
    }
}
