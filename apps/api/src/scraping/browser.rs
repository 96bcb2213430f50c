//! Browser seam — the narrow slice of headless-browser behaviour the site
//! adapters rely on. Production uses `WebDriverBrowser`; tests script their own.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("WebDriver error: {0}")]
    Driver(String),

    #[error("Timed out after {waited_ms}ms waiting for '{selector}'")]
    Timeout { selector: String, waited_ms: u64 },

    #[error("Session error: {0}")]
    Session(String),
}

impl BrowserError {
    pub fn timeout(selector: &str, waited: Duration) -> Self {
        BrowserError::Timeout {
            selector: selector.to_string(),
            waited_ms: waited.as_millis() as u64,
        }
    }
}

/// Launches browser sessions. Shared across requests via `AppState`.
#[async_trait]
pub trait Browser: Send + Sync {
    async fn open(&self) -> Result<Box<dyn BrowserSession>, BrowserError>;
}

/// One live page. Owned by a single adapter run; `close` is called exactly once.
#[async_trait]
pub trait BrowserSession: Send + Sync {
    async fn goto(&mut self, url: &str) -> Result<(), BrowserError>;

    /// Resolves once an element matching `selector` exists, or fails with
    /// `BrowserError::Timeout` after `deadline`.
    async fn wait_for(&mut self, selector: &str, deadline: Duration) -> Result<(), BrowserError>;

    async fn find_all(&self, selector: &str) -> Result<Vec<Box<dyn BrowserElement>>, BrowserError>;

    async fn close(&mut self) -> Result<(), BrowserError>;
}

#[async_trait]
pub trait BrowserElement: Send + Sync {
    /// Visible text of the first descendant matching `selector`, or `None`
    /// when no descendant matches.
    async fn child_text(&self, selector: &str) -> Result<Option<String>, BrowserError>;
}
