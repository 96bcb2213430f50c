use std::sync::Arc;

use crate::scraping::adapter::SiteAdapter;
use crate::scraping::browser::Browser;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Launches one browser session per site per request.
    pub browser: Arc<dyn Browser>,
    /// Scraped in order; earlier sites' listings come first in the response.
    pub sites: Arc<Vec<SiteAdapter>>,
}
