use serde::Deserialize;

pub const ANY_LOCATION: &str = "Anywhere";
pub const ANY: &str = "Any";

/// Filter criteria supplied with each scrape request.
///
/// `location == "Anywhere"`, `type == "Any"`, `duration == "Any"` and empty
/// `skills` / `sectors` are wildcards. Every field is required on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct Preferences {
    pub location: String,
    #[serde(rename = "type")]
    pub work_mode: String,
    pub duration: String,
    pub skills: Vec<String>,
    pub sectors: Vec<String>,
}

#[cfg(test)]
impl Preferences {
    /// Preferences that match every listing.
    pub fn any() -> Self {
        Preferences {
            location: ANY_LOCATION.to_string(),
            work_mode: ANY.to_string(),
            duration: ANY.to_string(),
            skills: Vec::new(),
            sectors: Vec::new(),
        }
    }
}
