//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::ListingSelectors;
use crate::utils::parse_selector;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Listing page location
    #[serde(default)]
    pub source: SourceConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Listing markup selectors
    #[serde(default)]
    pub selectors: ListingSelectors,

    /// Record file location
    #[serde(default)]
    pub paths: PathsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        Url::parse(&self.source.listing_url).map_err(|e| {
            AppError::validation(format!(
                "source.listing_url '{}' is not a valid URL: {e}",
                self.source.listing_url
            ))
        })?;
        Url::parse(&self.source.base_url).map_err(|e| {
            AppError::validation(format!(
                "source.base_url '{}' is not a valid URL: {e}",
                self.source.base_url
            ))
        })?;
        for (key, selector) in self.selectors.entries() {
            parse_selector(selector)
                .map_err(|e| AppError::validation(format!("{key}: {e}")))?;
        }
        if self.paths.records_file.trim().is_empty() {
            return Err(AppError::validation("paths.records_file is empty"));
        }
        Ok(())
    }
}

/// Where the archive listing is published.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Page holding the year/month listing
    #[serde(default = "defaults::listing_url")]
    pub listing_url: String,

    /// Origin that relative download links are resolved against
    #[serde(default = "defaults::base_url")]
    pub base_url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            listing_url: defaults::listing_url(),
            base_url: defaults::base_url(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header; the portal rejects default client identifiers
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// File path configuration, relative to the storage directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "defaults::records_file")]
    pub records_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            records_file: defaults::records_file(),
        }
    }
}

mod defaults {
    pub fn listing_url() -> String {
        concat!(
            "https://datos.madrid.es/portal/site/egob/menuitem.c05c1f754a33a9fbe4b2e4b284f1a5a0/",
            "?vgnextoid=33cb30c367e78410VgnVCM1000000b205a0aRCRD",
            "&vgnextchannel=374512b9ace9f310VgnVCM100000171f5a0aRCRD"
        )
        .into()
    }
    pub fn base_url() -> String {
        "https://datos.madrid.es".into()
    }

    pub fn user_agent() -> String {
        "Mozilla/5.0".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    pub fn records_file() -> String {
        "files-data.json".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.http.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.http.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_relative_base_url() {
        let mut config = Config::default();
        config.source.base_url = "/portal".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_selector() {
        let mut config = Config::default();
        config.selectors.zip_link = "[[invalid".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("selectors.zip_link"));
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [http]
            timeout_secs = 5

            [paths]
            records_file = "links.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.http.timeout_secs, 5);
        assert_eq!(config.http.user_agent, "Mozilla/5.0");
        assert_eq!(config.source.base_url, "https://datos.madrid.es");
        assert_eq!(config.selectors.item, "li.asociada-item");
        assert_eq!(config.paths.records_file, "links.json");
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = Config::load_or_default(tmp.path().join("missing.toml"));
        assert_eq!(config.paths.records_file, "files-data.json");
    }
}
