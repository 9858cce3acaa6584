use std::fmt;

use crate::parser::{normalize_media_title, MovieParser, TvParser};
use crate::quality::Profile;
use crate::release::ParsedRelease;
use crate::want::WantTarget;

/// Why a candidate was turned away, surfaced in logs so a misconfigured
/// profile or an off-by-one season is diagnosable from the trace alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchRejection {
    /// No cascade rule produced an interpretation of the name.
    Unidentifiable,
    TitleMismatch,
    YearMismatch,
    /// Season/episode numbering does not cover the wanted target, or an
    /// episode release showed up for a season-pack want.
    NumberingMismatch,
    QualityRejected(String),
    HardcodedSubs,
    KeywordExcluded(String),
}

impl fmt::Display for MatchRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchRejection::Unidentifiable => write!(f, "unidentifiable release name"),
            MatchRejection::TitleMismatch => write!(f, "title mismatch"),
            MatchRejection::YearMismatch => write!(f, "year mismatch"),
            MatchRejection::NumberingMismatch => write!(f, "season/episode mismatch"),
            MatchRejection::QualityRejected(tier) => write!(f, "quality {} not in profile", tier),
            MatchRejection::HardcodedSubs => write!(f, "hardcoded subtitles"),
            MatchRejection::KeywordExcluded(word) => write!(f, "excluded keyword '{}'", word),
        }
    }
}

/// Everything the accept/reject decision needs besides the candidate itself.
pub struct MatchPolicy<'a> {
    pub profile: &'a Profile,
    pub allow_hardcoded_subs: bool,
    pub exclude_keywords: &'a [String],
}

impl MatchPolicy<'_> {
    /// Full verdict for one raw release name against one want target.
    /// Checks run cheapest-first; the first failure wins.
    pub fn evaluate(
        &self,
        target: &WantTarget,
        raw_title: &str,
    ) -> Result<ParsedRelease, MatchRejection> {
        if let Some(word) = self.excluded_keyword(raw_title) {
            return Err(MatchRejection::KeywordExcluded(word));
        }

        let release = match target {
            WantTarget::Movie { .. } => MovieParser::parse(raw_title),
            WantTarget::TvSeason { .. } | WantTarget::TvEpisode { .. } => {
                TvParser::parse(raw_title)
            }
        }
        .ok_or(MatchRejection::Unidentifiable)?;

        if !titles_equal(target.title(), &release.title) {
            return Err(MatchRejection::TitleMismatch);
        }

        match target {
            WantTarget::Movie { year, .. } => {
                // Year gates only when both sides carry one; release names
                // and metadata are each allowed to omit it.
                if let (Some(wanted), Some(parsed)) = (year, release.year) {
                    if *wanted != parsed {
                        return Err(MatchRejection::YearMismatch);
                    }
                }
            }
            WantTarget::TvSeason { season, .. } => {
                if !release.is_season_pack() || !release.season_numbers.contains(season) {
                    return Err(MatchRejection::NumberingMismatch);
                }
            }
            WantTarget::TvEpisode {
                season, episode, ..
            } => {
                if !release.season_numbers.contains(season)
                    || !release.episode_numbers.contains(episode)
                {
                    return Err(MatchRejection::NumberingMismatch);
                }
            }
        }

        if release.hardcoded_subs && !self.allow_hardcoded_subs {
            return Err(MatchRejection::HardcodedSubs);
        }
        if !self.profile.contains(release.quality) {
            return Err(MatchRejection::QualityRejected(release.quality.to_string()));
        }

        Ok(release)
    }

    /// Whole-word, case-insensitive scan of the raw (pre-normalization) name.
    fn excluded_keyword(&self, raw_title: &str) -> Option<String> {
        if self.exclude_keywords.is_empty() {
            return None;
        }
        let words: Vec<String> = raw_title
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(|w| w.to_lowercase())
            .collect();
        self.exclude_keywords
            .iter()
            .find(|kw| words.iter().any(|w| w == &kw.to_lowercase()))
            .cloned()
    }
}

/// Title equality under media-title normalization, which already strips
/// punctuation (apostrophes included) and stop words from both sides.
pub fn titles_equal(wanted: &str, parsed: &str) -> bool {
    let wanted = normalize_media_title(wanted);
    !wanted.is_empty() && wanted == normalize_media_title(parsed)
}
