use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// chromedriver (or any W3C WebDriver) endpoint.
    pub webdriver_url: String,
    /// How long each site gets for its result list to appear.
    pub page_wait: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            webdriver_url: lookup("WEBDRIVER_URL")
                .unwrap_or_else(|| "http://localhost:9515".to_string()),
            page_wait: Duration::from_millis(
                lookup("PAGE_WAIT_MS")
                    .unwrap_or_else(|| "10000".to_string())
                    .parse::<u64>()
                    .context("PAGE_WAIT_MS must be a whole number of milliseconds")?,
            ),
        })
    }
}
