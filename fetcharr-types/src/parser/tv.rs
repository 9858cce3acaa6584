use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Captures;

use super::{
    first_match, normalize_title, parse_hardcoded_subs, parse_number_token, parse_quality,
    parse_resolution, release_title, scan_number_pairs, scan_numbers, ReleaseRule,
};
use crate::release::ParsedRelease;

// The cascade is ordered most-specific first; a rule earlier in the list
// always wins over a later one. Several rules intentionally overlap, so
// insertion position matters as much as the pattern itself.
//
// The upstream patterns lean on lookarounds and repeated capture groups;
// these rewrites capture multi-episode runs as a single `episodes` span that
// is scanned for numbers afterwards, and spell out the separator guards the
// lookarounds used to enforce.
lazy_static! {
    static ref TV_RULES: Vec<ReleaseRule> = vec![
        ReleaseRule::new(
            "Multi-Part episodes without a title (S01E05.S01E06)",
            r"^(?i)\W*S?(?P<season>\d{1,2}|\d{4})(?P<episodes>(?:[ex]{1,2}\d{1,3})+)(?:\W*S?(?P<season2>\d{1,2}|\d{4})(?P<episodes2>(?:[ex]{1,2}\d{1,3})+))+",
        ),
        ReleaseRule::new(
            "Episodes without a title, Multi (S01E04E05, 1x04x05, etc)",
            r"^(?i)S?(?P<season>\d{1,2}|\d{4})(?P<episodes>(?:(?:[-_]|[ex]){1,2}\d{2,3}){2,})(?:\W|_|$)",
        ),
        ReleaseRule::new(
            "Episodes without a title, Single (S01E05, 1x05)",
            r"^(?i)S?(?P<season>\d{1,2}|\d{4})[-_ ]?[ex](?P<episodes>\d{2,3})(?:\D|$)",
        ),
        ReleaseRule::new(
            "Anime - [SubGroup] Title Episode Absolute Episode Number",
            r"^(?i)\[(?P<subgroup>[^\]]+?)\][-_. ]?(?P<title>.+?)[-_. ]Episode[-_. ]+(?P<absoluteepisode>\d{2,3})",
        ),
        ReleaseRule::new(
            "Anime - [SubGroup] Title Absolute Episode Number + Season+Episode",
            r"^(?i)\[(?P<subgroup>[^\]]+?)\][-_. ]?(?P<title>.+?)[-_. ]+(?P<absoluteepisode>\d{2,3})[-_. ]+S?(?P<season>\d{1,2})(?P<episodes>(?:(?:-|[ex]|\W[ex]){1,2}\d{2})+)",
        ),
        ReleaseRule::new(
            "Anime - [SubGroup] Title Season+Episode + Absolute Episode Number",
            r"^(?i)\[(?P<subgroup>[^\]]+?)\][-_. ]?(?P<title>.+?)[-_\W]+S?(?P<season>\d{1,2})(?P<episodes>(?:(?:-|[ex]|\W[ex]){1,2}\d{2})+)[-_. ]+(?P<absoluteepisode>\d{2,3})(?:\D|$)",
        ),
        ReleaseRule::new(
            "Anime - [SubGroup] Title Season+Episode",
            r"^(?i)\[(?P<subgroup>[^\]]+?)\][-_. ]?(?P<title>.+?)[-_\W]+S?(?P<season>\d{1,2})(?P<episodes>(?:(?:[ex]|\W[ex]){1,2}\d{2})+)[\s.]",
        ),
        ReleaseRule::new(
            "Anime - [SubGroup] Title with trailing number Absolute Episode Number",
            r"^(?i)\[(?P<subgroup>[^\]]+?)\][-_. ]?(?P<title>[^-]+?\d+?)[-_. ]+(?P<absoluteepisode>\d{3})(?:[-_. ]+(?P<special>special|ova|ovd))?(?:\D|$)",
        ),
        ReleaseRule::new(
            "Anime - [SubGroup] Title - Absolute Episode Number",
            r"^(?i)\[(?P<subgroup>[^\]]+?)\][-_. ]?(?P<title>.+?)[. ]-[. ](?P<absoluteepisode>\d{2,3})(?:[^\d-]|$)",
        ),
        ReleaseRule::new(
            "Anime - [SubGroup] Title Absolute Episode Number",
            r"^(?i)\[(?P<subgroup>[^\]]+?)\][-_. ]?(?P<title>.+?)[-_. ]+\(?#?(?P<absoluteepisode>\d{2,3})\)?(?:[-_. ]+(?P<special>special|ova|ovd))?(?:[-_. ]|$)",
        ),
        ReleaseRule::new(
            "Multi-episode Repeated (S01E05 - S01E06, 1x05 - 1x06, etc)",
            r"^(?i)(?P<title>.+?)[-_\W]+S?(?P<season>\d{1,2}|\d{4})(?P<episodes>(?:(?:[ex]|[-_. ]e){1,2}\d{1,3})+)[-_\W]+S?(?P<season2>\d{1,2})(?P<episodes2>(?:(?:[ex]|[-_. ]e){1,2}\d{1,3})+)",
        ),
        // Multi runs ahead of the single-episode variant; without lookahead
        // the single rule would swallow the first episode of a pair.
        ReleaseRule::new(
            "Multi-Episode with a title (S01E05E06, etc) and trailing info in slashes",
            r"^(?i)(?P<title>.+?)(?:[-_\W]*[-_. ])+S?(?P<season>\d{1,2})(?:[ex]|\W[ex]|_){1,2}(?P<episodes>\d{2,3}(?:(?:-|[ex]|\W[ex]|_){1,2}\d{2,3})+)[^\[\]]+?\[[^\]]+\]",
        ),
        ReleaseRule::new(
            "Single episodes with a title (S01E05, 1x05, etc) and trailing info in slashes",
            r"^(?i)(?P<title>.+?)(?:[-_\W]*[-_. ])+S?(?P<season>\d{1,2})(?:[ex]|\W[ex]|_){1,2}(?P<episodes>\d{2,3})[^\[\]]+?\[[^\]]+\]",
        ),
        ReleaseRule::new(
            "Anime - Title Season EpisodeNumber + Absolute Episode Number [SubGroup]",
            r"^(?i)(?P<title>.+?)(?:[-_\W]*[-_. ])+S?(?P<season>\d{1,2})(?:[ex]|\W[ex]){1,2}(?P<episodes>\d{2})[^\[]+?[-_. ]?(?P<absoluteepisode>\d{3})[^\[]*?\[(?P<subgroup>[^\]]+?)\]",
        ),
        ReleaseRule::new(
            "Anime - Title Absolute Episode Number [SubGroup]",
            r"^(?i)(?P<title>.+?)[-_. ]+(?P<absoluteepisode>\d{3})[^\[\]]+?\[(?P<subgroup>[^\]]+?)\]",
        ),
        ReleaseRule::new(
            "Anime - Title Absolute Episode Number [Hash]",
            r"^(?i)(?P<title>.+?)(?P<episodes>(?:[-_. ]+\d{2,3})+)(?:[-_. ]+(?P<special>special|ova|ovd))?[-_. ]+.*?\[\w{8}\](?:$|\.)",
        ),
        ReleaseRule::new(
            "Episodes with airdate AND season/episode number, capture season/episode only",
            r"^(?i)(?P<title>.+?)?\W*(?P<airdate>\d{4}\W+[0-1][0-9]\W+[0-3][0-9])[-_. ]s?(?P<season>\d{1,2})[ex](?P<episodes>\d{1,3})",
        ),
        ReleaseRule::new(
            "Episodes with airdate AND season/episode number",
            r"^(?i)(?P<title>.+?)?\W*(?P<airyear>\d{4})\W+(?P<airmonth>[0-1][0-9])\W+(?P<airday>[0-3][0-9]).+?s?(?P<season>\d{1,2})[ex](?P<episodes>\d{1,3})",
        ),
        ReleaseRule::new(
            "Episodes with a title, Single (S01E05, 1x05) & Multi (S01E05E06, S01E05-06)",
            r"^(?i)(?P<title>.+?)(?:[-_\W]*[-_. ])+S?(?P<season>\d{1,2})(?:[ex]|\W[ex]){1,2}(?P<episodes>\d{2,3}(?:(?:-|[ex]|\W[ex]|_){1,2}\d{2,3})*)\W?",
        ),
        ReleaseRule::new(
            "Episodes with a title, 4 digit season number (S2016E05)",
            r"^(?i)(?P<title>.+?)(?:[-_\W]*[-_. ])+S(?P<season>\d{4})(?:e|\We|_){1,2}(?P<episodes>\d{2,3}(?:(?:-|e|\We|_){1,2}\d{2,3})*)\W?",
        ),
        ReleaseRule::new(
            "Episodes with a title, 4 digit season number (2016x05)",
            r"^(?i)(?P<title>.+?)(?:[-_\W]*[-_. ])+(?P<season>\d{4})(?:x|\Wx){1,2}(?P<episodes>\d{2,3}(?:(?:-|x|\Wx|_){1,2}\d{2,3})*)\W?",
        ),
        ReleaseRule::new(
            "Partial season pack",
            r"^(?i)(?P<title>.+?)\W+S(?P<season>\d{1,2})\W+Part\W?(?P<seasonpart>\d{1,2})(?:\D|$)",
        ),
        ReleaseRule::new(
            "Mini-Series with year in title, episodes labelled as Part01, Part 01, Part.1",
            r"^(?i)(?P<title>.+?\d{4})\W+(?:Part\W?|e)(?P<episodes>\d{1,2})(?:\D|$)",
        ),
        ReleaseRule::new(
            "Mini-Series, multi episodes labelled as E1-E2",
            r"^(?i)(?P<title>.+?)[-._ ]e(?P<episodes>\d{2,3}(?:-?e\d{2,3})+)(?:\D|$)",
        ),
        ReleaseRule::new(
            "Mini-Series, episodes labelled as Part01, Part 01, Part.1",
            r"^(?i)(?P<title>.+?)\W+Part\W?(?P<episodes>\d{1,2})(?:\D|$)",
        ),
        // The title must end in a letter so a stray season/episode marker
        // ("S01 - E01") is never mistaken for a mini-series episode label.
        ReleaseRule::new(
            "Mini-Series, episodes labelled as E1",
            r"^(?i)(?P<title>.+?[^\W\d])\W+e(?P<episodes>\d{1,2})(?:\D|$)",
        ),
        ReleaseRule::new(
            "Mini-Series, episodes labelled as Part One/Two/...Nine",
            r"^(?i)(?P<title>.+?)\W+Part[-._ ](?P<episodes>one|two|three|four|five|six|seven|eight|nine)(?:[-._ ]|$)",
        ),
        ReleaseRule::new(
            "Mini-Series, episodes labelled as XofY",
            r"^(?i)(?P<title>.+?)\W+(?P<episodes>\d{1,2})of\d+",
        ),
        ReleaseRule::new(
            "Supports Season 01 Episode 03",
            r"^(?i)(?P<title>.*?)[-_\W]+Season\W?(?P<season>\d{1,2})[\W_]+Episode\W[-_. ]?(?P<episodes>\d{1,2})",
        ),
        ReleaseRule::new(
            "Multi-episode with episodes in square brackets ([S01E11E12], [S01E11-12])",
            r"^(?i)(?P<title>.*?)[-._ ]+\[S(?P<season>\d{2})(?P<episodes>(?:[E-]{1,2}\d{2})+)\]",
        ),
        ReleaseRule::new(
            "Multi-episode release with no space between series title and season (S01E11E12)",
            r"^(?i)(?P<title>.*?)S(?P<season>\d{2})(?P<episodes>(?:E\d{2})+)",
        ),
        ReleaseRule::new(
            "Multi-episode with single episode numbers (S6.E1-E2, S6.E1E2, S6E1E2)",
            r"^(?i)(?P<title>.+?)[-_. ]S(?P<season>\d{1,2}|\d{4})(?P<episodes>(?:[-_. ]?e[-_. ]?\d{1,2})+)(?:\D|$)",
        ),
        ReleaseRule::new(
            "Single episode season or episode S1E1 or S1-E1 or S1.Ep1",
            r"^(?i)(?P<title>.*?)(?:\W|_)?S(?P<season>\d{1,2})(?:\W|_)?Ep?(?P<episodes>\d{1,2})(?:\D|$)",
        ),
        ReleaseRule::new(
            "3 digit season S010E05",
            r"^(?i)(?P<title>.*?)(?:\W|_)?S(?P<season>\d{3})(?:\W|_)?E(?P<episodes>\d{1,2})(?:\D|$)",
        ),
        ReleaseRule::new(
            "5 digit episode number with a title",
            r"^(?i)(?P<title>.+?)[-_. ]+S?(?P<season>\d{1,2})(?:-|[ex]|\W[ex]|_){1,2}(?P<episodes>\d{5})(?:\D|$)",
        ),
        ReleaseRule::new(
            "5 digit multi-episode with a title",
            r"^(?i)(?P<title>.+?)[-_. ]+S?(?P<season>\d{1,2})(?:[-_. ]{1,3}ep){1,2}(?P<episodes>\d{5})(?:\D|$)",
        ),
        ReleaseRule::new(
            "Separated season and episode numbers S01 - E01",
            r"^(?i)(?P<title>.+?)[-_. ]+S(?P<season>\d{2})\W-\WE(?P<episodes>\d{2})(?:\D|$)",
        ),
        ReleaseRule::new(
            "Anime - Title with season number - Absolute Episode Number (Title S01 - EP14)",
            r"^(?i)(?P<title>.+?S\d{1,2})[-_. ]{3,}(?:EP)?(?P<absoluteepisode>\d{2,3})(?:[^\d-]|$)",
        ),
        ReleaseRule::new(
            "Season only releases",
            r"^(?i)(?P<title>.+?)\W(?:S|Season|Series)\W?(?P<season>\d{1,2})(?:\W+|_|$)(?P<extras>EXTRAS|SUBPACK)?",
        ),
        ReleaseRule::new(
            "4 digit season only releases",
            r"^(?i)(?P<title>.+?)\W(?:S|Season)\W?(?P<season>\d{4})(?:\W+|_|$)(?P<extras>EXTRAS|SUBPACK)?",
        ),
        ReleaseRule::new(
            "Episodes with a title and season/episode in square brackets",
            r"^(?i)(?P<title>.+?)(?:[-_\W]*[-_. ])+\[S?(?P<season>\d{1,2})(?P<episodes>(?:(?:-|[ex]|\W[ex]|_){1,2}\d{2})+)\]\W?",
        ),
        ReleaseRule::new(
            "Supports 103/113 naming",
            r"^(?i)(?P<title>.+?)(?:[-_\W]*[-_. ])+(?P<season>[1-9])(?P<episodes>[1-9][0-9]|0[1-9])(?:[^a-z0-9]|$)",
        ),
        ReleaseRule::new(
            "4 digit episode number - Episodes without a title",
            r"^(?i)S?(?P<season>\d{1,2})(?:-|[ex]|\W[ex]|_){1,2}(?P<episodes>\d{4})(?:\W|_|$)",
        ),
        ReleaseRule::new(
            "4 digit episode number - Episodes with a title",
            r"^(?i)(?P<title>.+?)(?:[-_\W]*[-_. ])+S?(?P<season>\d{1,2})(?:-|[ex]|\W[ex]|_){1,2}(?P<episodes>\d{4})(?:\W|_|$)",
        ),
        ReleaseRule::new(
            "Episodes with airdate (2018.04.28)",
            r"^(?i)(?P<title>.+?)?\W*(?P<airyear>\d{4})[-_. ]+(?P<airmonth>[0-1][0-9])[-_. ]+(?P<airday>[0-3][0-9])(?:\D|$)",
        ),
        ReleaseRule::new(
            "Episodes with airdate (04.28.2018)",
            r"^(?i)(?P<title>.+?)?\W*(?P<airmonth>[0-1][0-9])[-_. ]+(?P<airday>[0-3][0-9])[-_. ]+(?P<airyear>\d{4})(?:\D|$)",
        ),
        ReleaseRule::new(
            "Supports 1103/1113 naming",
            r"^(?i)(?:(?P<title>.+?)?[-_\W]*[-_. ])?(?P<season>\d{2})(?P<episodes>\d{2})(?:\W|_|$)",
        ),
        ReleaseRule::new(
            "Episodes with single digit episode number (S01E1, S01E5E6)",
            r"^(?i)(?P<title>.*?)(?:[-_\W]*[-_. ])+S?(?P<season>\d{1,2})(?P<episodes>(?:(?:-|[ex]){1,2}\d)+)(?:\W|_|$)",
        ),
        ReleaseRule::new(
            "iTunes Season 1\\05 Title (Quality)",
            r"^(?i)Season[-_. ](?P<season>\d{1,2})[-_. \\](?P<episodes>\d{1,2})(?:\D|$)",
        ),
        ReleaseRule::new(
            "iTunes 1-05 Title (Quality)",
            r"^(?i)(?P<season>\d{1,2})-(?P<episodes>\d{2,3})(?:\D|$)",
        ),
        ReleaseRule::new(
            "Anime - Title Absolute Episode Number (e66)",
            r"^(?i)(?:\[(?P<subgroup>[^\]]+?)\][-_. ]?)?(?P<title>.+?)[-_. ]+ep?(?P<absoluteepisode>\d{2,3})(?:\D|$)",
        ),
        ReleaseRule::new(
            "Anime - Title Episode Absolute Episode Number (Series Title Episode 01)",
            r"^(?i)(?P<title>.+?)[-_. ]Episode[-_. ]+(?P<absoluteepisode>\d{2,3})(?:\D|$)",
        ),
        ReleaseRule::new(
            "Anime - Title Absolute Episode Number",
            r"^(?i)(?:\[(?P<subgroup>[^\]]+?)\][-_. ]?)?(?P<title>.+?)[-_. ]+(?P<absoluteepisode>\d{2,3})(?:[-_. ]|$)",
        ),
        ReleaseRule::new(
            "Anime - Title {Absolute Episode Number}",
            r"^(?i)(?:\[(?P<subgroup>[^\]]+?)\][-_. ]?)?(?P<title>.+?)[-_\W]+(?P<absoluteepisode>\d{2,3})(?:[-_. ]|$)",
        ),
        ReleaseRule::new(
            "Extant, terrible multi-episode naming (extant.10708.hdtv-lol.mp4)",
            r"^(?i)(?P<title>.+?)[-_. ](?P<season>0?\d)(?P<episodepairs>(?:\d{2}){2})[-_. ]",
        ),
    ];
}

/// Release-name parser for episodic media.
pub struct TvParser;

impl TvParser {
    /// Runs the normalized name down the cascade; `None` means no rule
    /// produced an interpretation.
    pub fn parse(raw: &str) -> Option<ParsedRelease> {
        let normalized = normalize_title(raw);
        let (rule, caps) = first_match(&TV_RULES, &normalized)?;
        Some(Self::build(rule, &caps, raw))
    }

    fn build(rule: &'static ReleaseRule, caps: &Captures<'_>, raw: &str) -> ParsedRelease {
        let title = caps
            .name("title")
            .map(|m| release_title(m.as_str()))
            .unwrap_or_default();

        let mut season_numbers: Vec<u32> = ["season", "season2"]
            .iter()
            .filter_map(|g| caps.name(g))
            .filter_map(|m| parse_number_token(m.as_str()))
            .collect();
        season_numbers.dedup();

        let mut episode_numbers = Vec::new();
        for group in ["episodes", "episodes2"] {
            if let Some(span) = caps.name(group) {
                episode_numbers.extend(scan_numbers(span.as_str()));
            }
        }
        if let Some(span) = caps.name("episodepairs") {
            episode_numbers.extend(scan_number_pairs(span.as_str()));
        }
        // Absolute (airing-order) numbering folds into the episode list so a
        // single want predicate covers both numbering schemes.
        if let Some(m) = caps.name("absoluteepisode") {
            episode_numbers.extend(parse_number_token(m.as_str()));
        }

        // A name that carries episodes but no season is assumed to be season 1.
        if season_numbers.is_empty() {
            season_numbers.push(1);
        }

        ParsedRelease {
            title,
            season_numbers,
            episode_numbers,
            year: None,
            air_date: Self::air_date(caps),
            quality: parse_quality(raw),
            resolution: parse_resolution(raw),
            hardcoded_subs: parse_hardcoded_subs(raw),
            rule: rule.label,
        }
    }

    fn air_date(caps: &Captures<'_>) -> Option<NaiveDate> {
        let (year, month, day) = if let Some(span) = caps.name("airdate") {
            let parts = scan_numbers(span.as_str());
            match parts[..] {
                [y, m, d] => (y, m, d),
                _ => return None,
            }
        } else {
            let year = caps.name("airyear")?.as_str().parse().ok()?;
            let month = caps.name("airmonth")?.as_str().parse().ok()?;
            let day = caps.name("airday")?.as_str().parse().ok()?;
            (year, month, day)
        };
        NaiveDate::from_ymd_opt(year as i32, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::normalize_media_title;

    fn parsed(name: &str) -> ParsedRelease {
        TvParser::parse(name).unwrap_or_else(|| panic!("no rule matched '{}'", name))
    }

    #[test]
    fn test_single_episode() {
        let release = parsed("Rick.and.Morty.S01E14.720p.HDTV.x264-BATV");
        assert_eq!(release.title, "rick and morty");
        assert_eq!(release.season_numbers, vec![1]);
        assert_eq!(release.episode_numbers, vec![14]);
    }

    #[test]
    fn test_season_pack() {
        let release = parsed("Atlanta.S02.720p.AMZN.WEBRip.DDP5.1.x264-NTb[rartv]");
        assert_eq!(release.title, "atlanta");
        assert_eq!(release.season_numbers, vec![2]);
        assert!(release.episode_numbers.is_empty());
        assert!(release.is_season_pack());

        for name in [
            "The.Office.S03.720p.BluRay.x264-SiNNERS",
            "Sealab.2021.S04.iNTERNAL.DVDRip.XviD-VCDVaULT",
            "30.Rock.Season.04.HDTV.XviD-DIMENSION",
            "The Office Season 4 WS PDTV XviD FUtV",
            "Eureka Season 1 720p WEB DL DD 5 1 h264 TjHD",
        ] {
            assert!(parsed(name).is_season_pack(), "not a season pack: {}", name);
        }
    }

    // Table of (name, title, seasons, episodes) regression cases.
    #[test]
    fn test_cascade_regressions() {
        let cases: &[(&str, &str, &[u32], &[u32])] = &[
            ("Chuck.S04E05.HDTV.XviD-LOL", "chuck", &[4], &[5]),
            ("The.Shield.S01E13.x264-CtrlSD", "the shield", &[1], &[13]),
            ("the.shield.1x13.circles.ws.xvidvd-tns", "the shield", &[1], &[13]),
            ("White.Van.Man.2011.S02E01.WS.PDTV.x264-TLA", "white van man 2011", &[2], &[1]),
            ("DEXTER.S07E01.ARE.YOU.1080P.HDTV.X264-QCF", "dexter", &[7], &[1]),
            ("Law & Order: Special Victims Unit - 11x11 - Quickie", "law & order: special victims unit", &[11], &[11]),
            ("Dexter - S01E01 - Title [HDTV]", "dexter", &[1], &[1]),
            ("WEEDS.S03E01-06.DUAL.BDRip.XviD.AC3.-HELLYWOOD", "weeds", &[3], &[1, 6]),
            ("Sonny.With.a.Chance.S02E15", "sonny with a chance", &[2], &[15]),
            ("Presunto culpable 1x02 Culpabilidad [HDTV 1080i AVC-es]", "presunto culpable", &[1], &[2]),
            ("S01E05.S01E06.hdtv-lol", "", &[1], &[5, 6]),
            ("S07E23 .avi ", "", &[7], &[23]),
            ("1x05 some title", "", &[1], &[5]),
            ("Extant.10708.HDTV-LOL.mp4", "extant", &[1], &[7, 8]),
            ("Houdini.2014.Part.1.720p.HDTV.x264-BATV", "houdini 2014", &[1], &[1]),
            ("The.Kennedys.Part.2.DSR.XviD-SYS", "the kennedys", &[1], &[2]),
            ("Hatfields.and.McCoys.2012.Part.One.720p.HDTV.x264-KILLERS", "hatfields and mccoys 2012", &[1], &[1]),
            ("Shield.of.Straw.4of9.HDTV.x264", "shield of straw", &[1], &[4]),
            ("Beech30 - Season 2 Episode 9", "beech30", &[2], &[9]),
            ("Series Title [S01E11E12]", "series title", &[1], &[11, 12]),
            ("The.Nightly.Show.2016.03.14.720p.WEB.x264-spamTV", "the nightly show", &[1], &[]),
            ("My.Series.S2014E05.720p.HDTV.x264", "my series", &[2014], &[5]),
            ("[HorribleSubs] Yowamushi Pedal - 32 [720p]", "yowamushi pedal", &[1], &[32]),
            ("[HorribleSubs]_Fairy_Tail_-_145_[720p]", "fairy tail", &[1], &[145]),
            ("[Underwater-FFF] No Game No Life - 01 (720p) [27AAA0A0]", "no game no life", &[1], &[1]),
            ("[Kousei]_One_Piece_ - _609_[FHD][648A87C7].mp4", "one piece", &[1], &[609]),
            ("Ben 10 S01 - E01 720p.mkv", "ben 10", &[1], &[1]),
        ];
        for (name, title, seasons, episodes) in cases {
            let release = parsed(name);
            assert_eq!(release.title, *title, "title mismatch for '{}'", name);
            assert_eq!(
                release.season_numbers, *seasons,
                "seasons mismatch for '{}' (rule: {})",
                name, release.rule
            );
            assert_eq!(
                release.episode_numbers, *episodes,
                "episodes mismatch for '{}' (rule: {})",
                name, release.rule
            );
        }
    }

    #[test]
    fn test_airdate_release() {
        let release = parsed("The.Nightly.Show.2016.03.14.720p.WEB.x264-spamTV");
        assert_eq!(release.air_date, NaiveDate::from_ymd_opt(2016, 3, 14));
        let release = parsed("The.Daily.Show.04.28.2018.720p.HDTV.x264");
        assert_eq!(release.air_date, NaiveDate::from_ymd_opt(2018, 4, 28));
    }

    #[test]
    fn test_no_match() {
        assert!(TvParser::parse("").is_none());
        assert!(TvParser::parse("just some words here").is_none());
    }

    #[test]
    fn test_media_title_comparison() {
        let release = parsed("Rick.and.Morty.S01E14.720p.HDTV.x264-BATV");
        assert_eq!(
            normalize_media_title(&release.title),
            normalize_media_title("Rick and Morty")
        );
    }
}
