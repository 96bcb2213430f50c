//! Site Adapter: one browser session against one job board.
//!
//! Failures never escape an adapter run. They come back as
//! `ScrapeOutcome::Unavailable`, carrying whatever rows were collected before
//! the failure, so callers can tell "site down" apart from "no listings" while
//! still treating both as a plain listing sequence.

use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::internships::synthesizer::synthesize_listing;
use crate::models::listing::Listing;
use crate::scraping::browser::{Browser, BrowserElement, BrowserError, BrowserSession};

/// Selectors for the three fields read from each result item.
#[derive(Debug, Clone)]
pub struct FieldSelectors {
    pub title: &'static str,
    pub company: &'static str,
    pub location: &'static str,
}

#[derive(Debug, Clone)]
pub struct SiteAdapter {
    pub name: &'static str,
    pub url: &'static str,
    pub item_selector: &'static str,
    pub fields: FieldSelectors,
    /// Only the first `max_items` matched items are read.
    pub max_items: Option<usize>,
    pub page_wait: Duration,
}

#[derive(Debug)]
pub enum ScrapeOutcome {
    Complete(Vec<Listing>),
    Unavailable {
        partial: Vec<Listing>,
        reason: BrowserError,
    },
}

impl ScrapeOutcome {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, ScrapeOutcome::Unavailable { .. })
    }

    pub fn listings(&self) -> &[Listing] {
        match self {
            ScrapeOutcome::Complete(listings) => listings,
            ScrapeOutcome::Unavailable { partial, .. } => partial,
        }
    }

    pub fn into_listings(self) -> Vec<Listing> {
        match self {
            ScrapeOutcome::Complete(listings) => listings,
            ScrapeOutcome::Unavailable { partial, .. } => partial,
        }
    }
}

/// Owns an open session for one adapter run. `close` releases it in line; if
/// the run is dropped first (client disconnect cancels the request future)
/// the close is handed to a background task instead.
struct SessionGuard {
    site: &'static str,
    session: Option<Box<dyn BrowserSession>>,
}

impl SessionGuard {
    fn session_mut(&mut self) -> Result<&mut (dyn BrowserSession + 'static), BrowserError> {
        self.session
            .as_deref_mut()
            .ok_or_else(|| BrowserError::Session("session already closed".to_string()))
    }

    async fn close(mut self) {
        if let Some(mut session) = self.session.take() {
            if let Err(e) = session.close().await {
                warn!(site = self.site, error = %e, "Failed to close browser session");
            }
        }
    }
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        let site = self.site;

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                warn!(site, "Scrape cancelled, closing browser session in background");
                handle.spawn(async move {
                    if let Err(e) = session.close().await {
                        warn!(site, error = %e, "Failed to close abandoned browser session");
                    }
                });
            }
            Err(_) => warn!(site, "No runtime left to close abandoned browser session"),
        }
    }
}

struct ScrapedRow {
    title: String,
    company: String,
    location: String,
}

impl SiteAdapter {
    /// Scrapes the site once. The browser session is closed exactly once on
    /// every path that managed to open it, including cancellation.
    pub async fn scrape<R: Rng + Send + ?Sized>(
        &self,
        browser: &dyn Browser,
        rng: &mut R,
    ) -> ScrapeOutcome {
        info!(site = self.name, url = self.url, "Scraping site");

        let session = match browser.open().await {
            Ok(session) => session,
            Err(reason) => {
                warn!(site = self.name, error = %reason, "Could not open browser session");
                return ScrapeOutcome::Unavailable {
                    partial: Vec::new(),
                    reason,
                };
            }
        };

        let mut guard = SessionGuard {
            site: self.name,
            session: Some(session),
        };
        let mut listings = Vec::new();
        let result = self.extract(&mut guard, rng, &mut listings).await;
        guard.close().await;

        match result {
            Ok(()) => {
                info!(site = self.name, count = listings.len(), "Scrape complete");
                ScrapeOutcome::Complete(listings)
            }
            Err(reason) => {
                warn!(
                    site = self.name,
                    collected = listings.len(),
                    error = %reason,
                    "Scrape abandoned"
                );
                ScrapeOutcome::Unavailable {
                    partial: listings,
                    reason,
                }
            }
        }
    }

    async fn extract<R: Rng + Send + ?Sized>(
        &self,
        guard: &mut SessionGuard,
        rng: &mut R,
        out: &mut Vec<Listing>,
    ) -> Result<(), BrowserError> {
        let session = guard.session_mut()?;
        session.goto(self.url).await?;

        // Hard ceiling on the page wait in case the driver stops answering.
        match tokio::time::timeout(
            self.page_wait,
            session.wait_for(self.item_selector, self.page_wait),
        )
        .await
        {
            Ok(ready) => ready?,
            Err(_) => return Err(BrowserError::timeout(self.item_selector, self.page_wait)),
        }

        let items = session.find_all(self.item_selector).await?;
        let limit = self.max_items.unwrap_or(items.len());

        for (index, item) in items.iter().take(limit).enumerate() {
            match self.extract_row(item.as_ref()).await? {
                Some(row) => out.push(synthesize_listing(
                    &row.title,
                    &row.company,
                    &row.location,
                    rng,
                )),
                None => debug!(site = self.name, index, "Skipping item with missing fields"),
            }
        }

        Ok(())
    }

    async fn extract_row(
        &self,
        item: &dyn BrowserElement,
    ) -> Result<Option<ScrapedRow>, BrowserError> {
        let Some(title) = item.child_text(self.fields.title).await? else {
            return Ok(None);
        };
        let Some(company) = item.child_text(self.fields.company).await? else {
            return Ok(None);
        };
        let Some(location) = item.child_text(self.fields.location).await? else {
            return Ok(None);
        };

        Ok(Some(ScrapedRow {
            title: title.trim().to_string(),
            company: company.trim().to_string(),
            location: location.trim().to_string(),
        }))
    }
}
