//! Filter Engine: strict preference match with a relaxed fallback.
//!
//! Pass 1 applies all five criteria. If nothing survives, pass 2 drops the
//! skills and sectors criteria. Either way the result is the first
//! `MAX_RESULTS` matches in aggregate order; there is no ranking.

use crate::models::listing::Listing;
use crate::models::preferences::{Preferences, ANY, ANY_LOCATION};

pub const MAX_RESULTS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPass {
    Strict,
    Relaxed,
}

#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub pass: FilterPass,
    pub listings: Vec<Listing>,
}

pub fn filter_internships(listings: &[Listing], prefs: &Preferences) -> FilterOutcome {
    let strict = select(listings, |l| matches_strict(l, prefs));
    if !strict.is_empty() {
        return FilterOutcome {
            pass: FilterPass::Strict,
            listings: strict,
        };
    }

    FilterOutcome {
        pass: FilterPass::Relaxed,
        listings: select(listings, |l| matches_relaxed(l, prefs)),
    }
}

/// All five criteria.
pub fn matches_strict(listing: &Listing, prefs: &Preferences) -> bool {
    matches_relaxed(listing, prefs)
        && overlaps(&prefs.skills, &listing.skills)
        && overlaps(&prefs.sectors, &listing.sectors)
}

/// Location, type and duration only.
pub fn matches_relaxed(listing: &Listing, prefs: &Preferences) -> bool {
    location_matches(&prefs.location, &listing.location)
        && (prefs.work_mode == ANY || prefs.work_mode == listing.work_mode.as_str())
        && (prefs.duration == ANY || prefs.duration == listing.duration.as_str())
}

fn select(listings: &[Listing], keep: impl Fn(&Listing) -> bool) -> Vec<Listing> {
    listings
        .iter()
        .filter(|&l| keep(l))
        .take(MAX_RESULTS)
        .cloned()
        .collect()
}

fn location_matches(wanted: &str, actual: &str) -> bool {
    wanted == ANY_LOCATION || actual.to_lowercase().contains(&wanted.to_lowercase())
}

// Empty preference list is a wildcard.
fn overlaps(wanted: &[String], actual: &[String]) -> bool {
    wanted.is_empty() || wanted.iter().any(|w| actual.contains(w))
}
