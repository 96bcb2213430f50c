// Scraping: browser seam, per-site adapters and the aggregator that runs them.

pub mod adapter;
pub mod browser;
pub mod sites;
pub mod webdriver;

#[cfg(test)]
pub mod testing;

use rand::Rng;
use tracing::info;

use crate::models::listing::Listing;
use crate::scraping::adapter::SiteAdapter;
use crate::scraping::browser::Browser;

/// Runs each adapter in turn and concatenates the results in adapter order.
/// Sessions are strictly sequential: one is closed before the next opens.
pub async fn collect_listings<R: Rng + Send + ?Sized>(
    browser: &dyn Browser,
    adapters: &[SiteAdapter],
    rng: &mut R,
) -> Vec<Listing> {
    let mut combined = Vec::new();

    for adapter in adapters {
        let outcome = adapter.scrape(browser, rng).await;
        info!(
            site = adapter.name,
            count = outcome.listings().len(),
            unavailable = outcome.is_unavailable(),
            "Site results collected"
        );
        combined.extend(outcome.into_listings());
    }

    combined
}
