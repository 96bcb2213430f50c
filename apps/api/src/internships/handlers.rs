//! Axum route handlers for the scrape API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::internships::filter::filter_internships;
use crate::models::listing::Listing;
use crate::models::preferences::Preferences;
use crate::scraping::collect_listings;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    pub internships: Vec<Listing>,
}

/// POST /scrape_internships
///
/// Scrapes every configured site, then filters the combined listings against
/// the caller's preferences. Site failures only shrink the result; the worst
/// case is an empty `internships` array.
pub async fn handle_scrape_internships(
    State(state): State<AppState>,
    payload: Result<Json<Preferences>, JsonRejection>,
) -> Result<Json<ScrapeResponse>, AppError> {
    let Json(prefs) = payload?;

    let mut rng = StdRng::from_os_rng();
    let combined = collect_listings(state.browser.as_ref(), &state.sites, &mut rng).await;
    let outcome = filter_internships(&combined, &prefs);

    info!(
        scraped = combined.len(),
        returned = outcome.listings.len(),
        pass = ?outcome.pass,
        "Internships filtered"
    );

    Ok(Json(ScrapeResponse {
        internships: outcome.listings,
    }))
}
