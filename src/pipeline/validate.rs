// src/pipeline/validate.rs

use crate::error::Result;
use crate::models::Config;

/// Validate the configuration and log the values a run would use.
pub fn run_validate(config: &Config) -> Result<()> {
    log::info!("Validating configuration...");

    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {}", e);
        return Err(e);
    }

    log::info!("✓ Config OK");
    log::info!("    Listing URL: {}", config.source.listing_url);
    log::info!("    Base URL: {}", config.source.base_url);
    log::info!("    User agent: {}", config.http.user_agent);
    log::info!("    Timeout: {}s", config.http.timeout_secs);
    for (key, selector) in config.selectors.entries() {
        log::info!("    {}: {}", key, selector);
    }
    log::info!("    Record file: {}", config.paths.records_file);

    Ok(())
}
