// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::blocking::Client;
use scraper::Html;

use crate::error::Result;
use crate::models::HttpConfig;

/// Source of listing page markup.
///
/// Implemented by the blocking HTTP client; tests substitute canned pages.
pub trait PageFetcher {
    /// Fetch the raw markup at `url`. Error statuses are failures.
    fn fetch(&self, url: &str) -> Result<String>;
}

impl PageFetcher for Client {
    fn fetch(&self, url: &str) -> Result<String> {
        let response = self.get(url).send()?.error_for_status()?;
        Ok(response.text()?)
    }
}

/// Create a configured blocking HTTP client.
pub fn create_client(config: &HttpConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a page and parse it as HTML.
pub fn fetch_page(fetcher: &dyn PageFetcher, url: &str) -> Result<Html> {
    let text = fetcher.fetch(url)?;
    Ok(Html::parse_document(&text))
}
