// Internship matching: record synthesis, preference filtering and the
// scrape endpoint that ties them to the site adapters.

pub mod filter;
pub mod handlers;
pub mod synthesizer;
