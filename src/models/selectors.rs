// src/models/selectors.rs

//! CSS selectors describing the archive listing markup.

use serde::{Deserialize, Serialize};

/// CSS selectors for walking the year/month listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingSelectors {
    /// Selector for the top-level container holding the year entries
    #[serde(default = "default_listing")]
    pub listing: String,

    /// Selector shared by year entries, month entries and link containers
    #[serde(default = "default_item")]
    pub item: String,

    /// Selector for the label inside a year or month entry
    #[serde(default = "default_title")]
    pub title: String,

    /// Selector for the ZIP download anchor inside a link container
    #[serde(default = "default_zip_link")]
    pub zip_link: String,
}

fn default_listing() -> String {
    "ul.asociada-list.trancateList.docs".to_string()
}

fn default_item() -> String {
    "li.asociada-item".to_string()
}

fn default_title() -> String {
    "p.info-title".to_string()
}

fn default_zip_link() -> String {
    "a.asociada-link.ico-zip".to_string()
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            listing: default_listing(),
            item: default_item(),
            title: default_title(),
            zip_link: default_zip_link(),
        }
    }
}

impl ListingSelectors {
    /// All selectors paired with their config key, for validation and reporting.
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        [
            ("selectors.listing", self.listing.as_str()),
            ("selectors.item", self.item.as_str()),
            ("selectors.title", self.title.as_str()),
            ("selectors.zip_link", self.zip_link.as_str()),
        ]
    }
}
