//! Shared fixtures for pipeline tests.

use std::io;

use crate::error::{AppError, Result};
use crate::utils::http::PageFetcher;

/// Fetcher serving one canned page, or failing every request.
pub struct StaticPage(Option<String>);

impl StaticPage {
    pub fn new(html: impl Into<String>) -> Self {
        Self(Some(html.into()))
    }

    pub fn failing() -> Self {
        Self(None)
    }
}

impl PageFetcher for StaticPage {
    fn fetch(&self, _url: &str) -> Result<String> {
        self.0.clone().ok_or_else(|| {
            AppError::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))
        })
    }
}

/// Build a listing page from `(year, "month month ...")` pairs.
///
/// Every month links to `/files/{year}-{month}.zip`.
pub fn listing_page(years: &[(&str, &str)]) -> String {
    let mut html = String::from(r#"<html><body><ul class="asociada-list trancateList docs">"#);
    for (year, months) in years {
        html.push_str(&format!(
            r#"<li class="asociada-item"><p class="info-title">{year}</p><ul class="asociada-list">"#
        ));
        for month in months.split_whitespace() {
            html.push_str(&format!(
                r#"<li class="asociada-item"><p class="info-title">{month}</p>
                   <ul><li class="asociada-item">
                     <a class="asociada-link ico-zip" href="/files/{year}-{month}.zip">ZIP</a>
                   </li></ul></li>"#
            ));
        }
        html.push_str("</ul></li>");
    }
    html.push_str("</ul></body></html>");
    html
}
