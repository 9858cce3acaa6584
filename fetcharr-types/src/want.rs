use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Movie,
    Tv,
}

/// What a want points at. Titles are the canonical metadata-provider titles,
/// not release-name fragments.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind")]
#[serde(rename_all = "snake_case")]
pub enum WantTarget {
    Movie {
        tmdb_id: u64,
        title: String,
        year: Option<u32>,
    },
    TvSeason {
        tmdb_show_id: u64,
        title: String,
        season: u32,
    },
    TvEpisode {
        tmdb_show_id: u64,
        title: String,
        season: u32,
        episode: u32,
    },
}

impl WantTarget {
    pub fn kind(&self) -> MediaKind {
        match self {
            WantTarget::Movie { .. } => MediaKind::Movie,
            WantTarget::TvSeason { .. } | WantTarget::TvEpisode { .. } => MediaKind::Tv,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            WantTarget::Movie { title, .. } => title,
            WantTarget::TvSeason { title, .. } => title,
            WantTarget::TvEpisode { title, .. } => title,
        }
    }

    /// Stable storage key, unique per target.
    pub fn key(&self) -> String {
        match self {
            WantTarget::Movie { tmdb_id, .. } => format!("movie-{}", tmdb_id),
            WantTarget::TvSeason {
                tmdb_show_id,
                season,
                ..
            } => format!("tv-{}-S{:02}", tmdb_show_id, season),
            WantTarget::TvEpisode {
                tmdb_show_id,
                season,
                episode,
                ..
            } => format!("tv-{}-S{:02}E{:02}", tmdb_show_id, season, episode),
        }
    }
}

impl fmt::Display for WantTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WantTarget::Movie { title, year, .. } => match year {
                Some(year) => write!(f, "{} ({})", title, year),
                None => write!(f, "{}", title),
            },
            WantTarget::TvSeason { title, season, .. } => {
                write!(f, "{} - Season {}", title, season)
            }
            WantTarget::TvEpisode {
                title,
                season,
                episode,
                ..
            } => write!(f, "{} {}x{}", title, season, episode),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state")]
#[serde(rename_all = "snake_case")]
pub enum WantState {
    /// Nothing acquired yet; eligible for the next search scan.
    Wanted,
    /// A torrent was added and released; waiting on the download client.
    Snatched {
        torrent_id: i64,
        hash: String,
        name: String,
    },
    /// The download client reported the torrent complete.
    Collected,
}

/// One watch-list record: the intent to acquire a movie, a whole season, or
/// a single episode.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Want {
    #[serde(flatten)]
    pub target: WantTarget,
    /// Per-item quality profile override; falls back to the kind default.
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default = "default_state")]
    pub state: WantState,
    #[serde(default = "Utc::now")]
    pub added: DateTime<Utc>,
    #[serde(default)]
    pub last_attempt: Option<DateTime<Utc>>,
}

fn default_state() -> WantState {
    WantState::Wanted
}

impl Want {
    pub fn new(target: WantTarget) -> Self {
        Self {
            target,
            profile: None,
            state: WantState::Wanted,
            added: Utc::now(),
            last_attempt: None,
        }
    }

    pub fn key(&self) -> String {
        self.target.key()
    }

    pub fn snatched_torrent_id(&self) -> Option<i64> {
        match &self.state {
            WantState::Snatched { torrent_id, .. } => Some(*torrent_id),
            _ => None,
        }
    }
}

/// One episode as reported by the metadata collaborator, used when a season
/// want falls back to per-episode wants.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EpisodeRef {
    pub episode_number: u32,
    pub air_date: Option<chrono::NaiveDate>,
    pub provider_episode_id: u64,
}
