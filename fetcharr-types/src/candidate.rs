use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One raw search result from the search collaborator. Ephemeral; ranked
/// and discarded within a single processing run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchCandidate {
    pub title: String,
    pub seeders: u64,
    pub size: u64,
    pub date: Option<DateTime<FixedOffset>>,
    /// Usable as-is when present.
    pub magnet_uri: Option<String>,
    /// Traceable link, resolved before the acquisition attempt.
    pub link: Option<String>,
}

impl SearchCandidate {
    /// The locator handed to the resolver: magnet wins over link.
    pub fn locator(&self) -> Option<&str> {
        self.magnet_uri
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.link.as_deref().filter(|s| !s.is_empty()))
    }
}
