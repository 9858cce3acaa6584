use std::collections::HashMap;

use fetcharr_types::{QualityTier, WantTarget};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    metadata::MetadataConfig, processor::SearchConfig, sink::SinkConfig, source::SourceConfig,
};

#[derive(Deserialize)]
pub struct Config {
    pub db_file: String,
    pub search: SearchConfig,
    pub matching: MatchingConfig,
    pub sources: HashMap<String, SourceConfig>,
    pub sinks: HashMap<String, SinkConfig>,
    pub metadata: HashMap<String, MetadataConfig>,
    /// Custom quality profiles, appended to the built-in catalog.
    #[serde(default)]
    pub profiles: IndexMap<String, Vec<QualityTier>>,
    /// Wants seeded into the database at startup.
    #[serde(default)]
    pub wants: Vec<WantSeed>,
}

#[derive(Deserialize, Clone)]
pub struct MatchingConfig {
    /// Default quality profile for movie wants.
    pub profile_movies: String,
    /// Default quality profile for TV wants.
    pub profile_tv: String,
    #[serde(default)]
    pub allow_hardcoded_subs: bool,
    /// Whole-word, case-insensitive rejects applied to raw release names.
    #[serde(default)]
    pub exclude_keywords: Vec<String>,
}

#[derive(Deserialize, Clone)]
pub struct WantSeed {
    #[serde(flatten)]
    pub target: WantTarget,
    #[serde(default)]
    pub profile: Option<String>,
}

lazy_static::lazy_static! {
    pub static ref CONFIG: Config = {
        let mut path = std::env::var("FETCHARR_CONFIG").unwrap_or_default();
        if path.is_empty() {
            path = "config.yml".to_string();
        }
        let raw = std::fs::read_to_string(path).expect("failed to read config");
        serde_yaml::from_str(&raw).expect("failed to parse config")
    };
}
