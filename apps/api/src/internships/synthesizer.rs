//! Record Synthesizer: fills in the display fields the job boards don't expose.
//!
//! The scraped pages only give us title, company and location. Everything else
//! on a `Listing` is sampled from fixed vocabularies using the caller's RNG, so
//! a seeded generator reproduces the same records.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::models::listing::{
    Listing, Term, WorkMode, PLACEHOLDER_IMAGE_URL, SEATS_TOTAL, STATUS_RECOMMENDED,
};

pub const SKILLS: [&str; 14] = [
    "Python",
    "JavaScript",
    "React",
    "Node.js",
    "C++",
    "Java",
    "TypeScript",
    "SQL",
    "NoSQL",
    "ML",
    "AI",
    "AWS",
    "Docker",
    "Kubernetes",
];

pub const SECTORS: [&str; 11] = [
    "Tech",
    "Finance",
    "Marketing",
    "Design",
    "Healthcare",
    "Research",
    "Energy",
    "Government",
    "Non-Profit",
    "Telecom",
    "Manufacturing",
];

const SKILLS_PER_LISTING: usize = 3;
const SECTORS_PER_LISTING: usize = 2;
const MAX_SEATS_FILLED: u32 = 15;

/// Builds a full `Listing` from a scraped (title, company, location) triple.
pub fn synthesize_listing<R: Rng + ?Sized>(
    title: &str,
    company: &str,
    location: &str,
    rng: &mut R,
) -> Listing {
    let work_mode = WorkMode::ALL[rng.random_range(0..WorkMode::ALL.len())];
    let duration = Term::ALL[rng.random_range(0..Term::ALL.len())];

    Listing {
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        work_mode,
        duration,
        skills: sample_distinct(&SKILLS, SKILLS_PER_LISTING, rng),
        sectors: sample_distinct(&SECTORS, SECTORS_PER_LISTING, rng),
        status: STATUS_RECOMMENDED.to_string(),
        image_url: PLACEHOLDER_IMAGE_URL.to_string(),
        seats_filled: rng.random_range(0..=MAX_SEATS_FILLED),
        seats_total: SEATS_TOTAL,
    }
}

fn sample_distinct<R: Rng + ?Sized>(vocabulary: &[&str], amount: usize, rng: &mut R) -> Vec<String> {
    vocabulary
        .choose_multiple(rng, amount)
        .map(|item| item.to_string())
        .collect()
}
