//! Fixed job-board definitions. Selectors track third-party markup and break
//! whenever the boards redesign their result pages.

use std::time::Duration;

use crate::scraping::adapter::{FieldSelectors, SiteAdapter};

pub fn internshala(page_wait: Duration) -> SiteAdapter {
    SiteAdapter {
        name: "internshala",
        url: "https://internshala.com/internships",
        item_selector: "div.container > div.row > div.internship_meta",
        fields: FieldSelectors {
            title: ".profile",
            company: ".company_name",
            location: ".location_link",
        },
        max_items: None,
        page_wait,
    }
}

pub fn linkedin(page_wait: Duration) -> SiteAdapter {
    SiteAdapter {
        name: "linkedin",
        url: "https://www.linkedin.com/jobs/internship-jobs/",
        item_selector: "ul.jobs-search__results-list li",
        fields: FieldSelectors {
            title: "h3",
            company: "h4",
            location: ".job-search-card__location",
        },
        max_items: Some(50),
        page_wait,
    }
}

/// Adapters in the order their results are concatenated.
pub fn default_sites(page_wait: Duration) -> Vec<SiteAdapter> {
    vec![internshala(page_wait), linkedin(page_wait)]
}
