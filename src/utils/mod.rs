//! Utility functions and helpers.

pub mod http;

use scraper::Selector;
use url::Url;

use crate::error::{AppError, Result};

/// Resolve a potentially relative URL against a base URL.
pub fn resolve_url(base: &Url, href: &str) -> String {
    base.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}

/// Parse a CSS selector, mapping failures to `AppError::Selector`.
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        let base = Url::parse("https://datos.madrid.es").unwrap();
        assert_eq!(
            resolve_url(&base, "/egob/catalogo/300229-0-calidad.zip"),
            "https://datos.madrid.es/egob/catalogo/300229-0-calidad.zip"
        );
        assert_eq!(
            resolve_url(&base, "files/a.zip"),
            "https://datos.madrid.es/files/a.zip"
        );
        assert_eq!(
            resolve_url(&base, "https://other.com/x.zip"),
            "https://other.com/x.zip"
        );
    }

    #[test]
    fn test_parse_selector_valid() {
        assert!(parse_selector("ul.asociada-list.trancateList.docs").is_ok());
        assert!(parse_selector("li.asociada-item").is_ok());
    }

    #[test]
    fn test_parse_selector_invalid() {
        let err = parse_selector("[[invalid").unwrap_err();
        assert!(matches!(err, AppError::Selector { .. }));
    }
}
