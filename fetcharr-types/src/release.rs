use chrono::NaiveDate;

use crate::quality::{QualityTier, Resolution};

/// Structured interpretation of one release name. Built fresh per raw
/// string, never mutated afterwards.
///
/// Invariant: `episode_numbers` non-empty implies `season_numbers` non-empty
/// (TV parsing defaults the season to 1 when the name carries none).
#[derive(Clone, Debug)]
pub struct ParsedRelease {
    /// First-pass normalized title fragment; may be empty when the release
    /// has identifiable numbering but no discernible title.
    pub title: String,
    pub season_numbers: Vec<u32>,
    /// Empty for season-pack releases.
    pub episode_numbers: Vec<u32>,
    /// Release year, movies only.
    pub year: Option<u32>,
    /// Air date for date-based episode releases.
    pub air_date: Option<NaiveDate>,
    pub quality: QualityTier,
    pub resolution: Resolution,
    pub hardcoded_subs: bool,
    /// Label of the cascade rule that produced this interpretation.
    pub rule: &'static str,
}

impl ParsedRelease {
    /// A season pack names at least one season but no individual episodes.
    pub fn is_season_pack(&self) -> bool {
        !self.season_numbers.is_empty() && self.episode_numbers.is_empty()
    }
}
