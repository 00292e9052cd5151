// src/services/listing.rs

//! Archive listing walker.
//!
//! The listing page nests its archives as year entries, each holding month
//! entries, each holding a link container with the ZIP anchor. All three
//! levels share the same item markup:
//!
//! ```text
//! ul.asociada-list.trancateList.docs
//! └── li.asociada-item              (year, direct child)
//!     ├── p.info-title              "2025"
//!     └── ul
//!         └── li.asociada-item      (month, any depth)
//!             ├── p.info-title      "Marzo"
//!             └── ul
//!                 └── li.asociada-item   (link container)
//!                     └── a.asociada-link.ico-zip[href]
//! ```
//!
//! Missing structure at the container or year level means the page layout
//! changed and aborts the walk. Missing pieces inside a single month are
//! logged and skipped.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{Checkpoint, Config, DiscoveryRecord, ListingSelectors};
use crate::utils::http::{PageFetcher, fetch_page};
use crate::utils::{parse_selector, resolve_url};

/// Walks the archive listing and collects ZIP links newer than a checkpoint.
pub struct ListingWalker {
    listing: Selector,
    item: Selector,
    title: Selector,
    zip_link: Selector,
    base_url: Url,
}

impl ListingWalker {
    /// Compile the selectors and parse the base origin.
    pub fn new(selectors: &ListingSelectors, base_url: &str) -> Result<Self> {
        Ok(Self {
            listing: parse_selector(&selectors.listing)?,
            item: parse_selector(&selectors.item)?,
            title: parse_selector(&selectors.title)?,
            zip_link: parse_selector(&selectors.zip_link)?,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Create a walker from the application configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.selectors, &config.source.base_url)
    }

    /// Fetch `source_url` and walk it, stopping at `checkpoint`.
    pub fn walk(
        &self,
        fetcher: &dyn PageFetcher,
        source_url: &str,
        checkpoint: &Checkpoint,
    ) -> Result<Vec<DiscoveryRecord>> {
        log::info!("Fetching archive listing from {}", source_url);
        let document = fetch_page(fetcher, source_url)?;
        self.walk_document(&document, checkpoint)
    }

    /// Walk an already parsed listing page.
    ///
    /// Records come back in document order, newest first. The entry matching
    /// `checkpoint` and everything after it are left out.
    pub fn walk_document(
        &self,
        document: &Html,
        checkpoint: &Checkpoint,
    ) -> Result<Vec<DiscoveryRecord>> {
        log::info!("Retrieving ZIP file links...");

        let container = document
            .select(&self.listing)
            .next()
            .ok_or_else(|| AppError::structure("listing container not found"))?;

        let years: Vec<ElementRef> = container
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|child| self.item.matches(child))
            .collect();

        if years.is_empty() {
            return Err(AppError::structure("no year entries found"));
        }

        let mut records = Vec::new();

        'years: for year in years {
            let year_label = self
                .label(year)
                .ok_or_else(|| AppError::structure("year entry without a title"))?;

            let months: Vec<ElementRef> = year.select(&self.item).collect();
            if months.is_empty() {
                return Err(AppError::structure(format!(
                    "no month entries found for year {year_label}"
                )));
            }

            for month in months {
                // Link containers share the item markup but carry no title.
                let Some(month_label) = self.label(month) else {
                    log::debug!("Untitled entry under {}, skipping", year_label);
                    continue;
                };

                if checkpoint.is_reached(&year_label, &month_label) {
                    log::info!(
                        "Reached {} {}; the rest has already been recorded",
                        year_label,
                        month_label
                    );
                    break 'years;
                }

                match self.zip_href(month) {
                    Ok(href) => {
                        let link = resolve_url(&self.base_url, href);
                        log::info!("{} {}: {}", year_label, month_label, link);
                        records.push(DiscoveryRecord::new(&year_label, month_label, link));
                    }
                    Err(missing) => {
                        log::warn!(
                            "{} not found in {} {}, skipping",
                            missing,
                            year_label,
                            month_label
                        );
                    }
                }
            }
        }

        Ok(records)
    }

    /// Text of the first title element under `entry`, whitespace stripped.
    fn label(&self, entry: ElementRef) -> Option<String> {
        entry
            .select(&self.title)
            .next()
            .map(|title| title.text().map(str::trim).collect())
    }

    /// The ZIP anchor's `href` within a month entry, or what was missing.
    fn zip_href<'a>(&self, month: ElementRef<'a>) -> std::result::Result<&'a str, &'static str> {
        let container = month
            .select(&self.item)
            .next()
            .ok_or("Links container")?;
        let anchor = container
            .select(&self.zip_link)
            .next()
            .ok_or("ZIP link")?;
        anchor
            .value()
            .attr("href")
            .map(str::trim)
            .filter(|href| !href.is_empty())
            .ok_or("ZIP link href")
    }
}
