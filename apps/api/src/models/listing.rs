use serde::Serialize;

pub const STATUS_RECOMMENDED: &str = "Recommended";
pub const PLACEHOLDER_IMAGE_URL: &str = "https://placehold.co/400x200/555/fff?text=Internship";
pub const SEATS_TOTAL: u32 = 20;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum WorkMode {
    Online,
    Offline,
    Hybrid,
}

impl WorkMode {
    pub const ALL: [WorkMode; 3] = [WorkMode::Online, WorkMode::Offline, WorkMode::Hybrid];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkMode::Online => "Online",
            WorkMode::Offline => "Offline",
            WorkMode::Hybrid => "Hybrid",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Term {
    #[serde(rename = "Short-term")]
    ShortTerm,
    #[serde(rename = "Long-term")]
    LongTerm,
}

impl Term {
    pub const ALL: [Term; 2] = [Term::ShortTerm, Term::LongTerm];

    pub fn as_str(&self) -> &'static str {
        match self {
            Term::ShortTerm => "Short-term",
            Term::LongTerm => "Long-term",
        }
    }
}

/// A scraped internship with its synthesized display fields filled in.
/// Serialized in the camelCase shape the dashboard frontend reads.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub work_mode: WorkMode,
    pub duration: Term,
    pub skills: Vec<String>,
    pub sectors: Vec<String>,
    pub status: String,
    pub image_url: String,
    pub seats_filled: u32,
    pub seats_total: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Listing {
        Listing {
            title: "Backend Intern".to_string(),
            company: "Acme".to_string(),
            location: "Bangalore".to_string(),
            work_mode: WorkMode::Hybrid,
            duration: Term::ShortTerm,
            skills: vec!["Python".to_string(), "SQL".to_string(), "AWS".to_string()],
            sectors: vec!["Tech".to_string(), "Finance".to_string()],
            status: STATUS_RECOMMENDED.to_string(),
            image_url: PLACEHOLDER_IMAGE_URL.to_string(),
            seats_filled: 4,
            seats_total: SEATS_TOTAL,
        }
    }

    #[test]
    fn test_listing_serializes_frontend_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["type"], "Hybrid");
        assert_eq!(value["duration"], "Short-term");
        assert_eq!(value["imageUrl"], PLACEHOLDER_IMAGE_URL);
        assert_eq!(value["seatsFilled"], 4);
        assert_eq!(value["seatsTotal"], 20);
        assert_eq!(value["status"], "Recommended");
        assert!(value.get("work_mode").is_none());
    }

    #[test]
    fn test_labels_match_serialized_form() {
        for mode in WorkMode::ALL {
            assert_eq!(serde_json::to_value(mode).unwrap(), mode.as_str());
        }
        for term in Term::ALL {
            assert_eq!(serde_json::to_value(term).unwrap(), term.as_str());
        }
    }
}
