use lazy_static::lazy_static;
use regex::Captures;

use super::{
    first_match, normalize_title, parse_hardcoded_subs, parse_quality, parse_resolution,
    release_title, ReleaseRule,
};
use crate::release::ParsedRelease;

// Movie names are essentially "title, year, noise". The cascade exists for
// the exceptions: language-tagged scene names where the year drifts to the
// end, edition tags glued between title and year, and titles that contain
// brackets or parentheses themselves.
lazy_static! {
    static ref MOVIE_RULES: Vec<ReleaseRule> = vec![
        // The title must end in a non-digit so "Title.1999.German" keeps the
        // year out of the title and falls through to the normal format rule.
        ReleaseRule::new(
            "Some german or french tracker formats",
            r"^(?i)(?P<title>[^(\[](?:.*[^\d])?)[-_. ]+(?:german|french|truefrench)\b(?:(?:.*[-_. ])?(?P<year>(?:19|20)\d{2})(?:[\W_].*)?|.*)$",
        ),
        ReleaseRule::new(
            "Special, Despecialized, etc. Edition Movies",
            r"^(?i)(?P<title>[^(\[].+?)[-_. (]+(?:(?:extended|ultimate)[-_. ])?(?:director'?s|collector'?s|theatrical|ultimate|final|extended|rogue|special|despecialized|\d{2,3}(?:th)?[-_. ]anniversary|uncensored|remastered|unrated|uncut|imax|fan[-_. ]?edit|restored|[234]in1)(?:[-_. ](?:cut|edition|version))?(?:[-_. ](?:extended|uncensored|remastered|unrated|uncut|imax|fan[-_. ]?edit))?\)?[-_. ]{1,3}(?P<year>(?:19|20)\d{2})(?:\W|_|$)",
        ),
        ReleaseRule::new(
            "Normal movie format",
            r"^(?i)(?P<title>[^(\[].*?)[-_. (]+(?P<year>(?:19|20)\d{2})(?:[\W_]+[^\d].*|[\W_]+)?$",
        ),
        ReleaseRule::new(
            "PassThePopcorn torrent names: Star.Wars[PassThePopcorn]",
            r"^(?i)(?P<title>.+?)[-_\W]*\[(?P<tag>\w[\w ]*)\](?:\W|_|$)",
        ),
        ReleaseRule::new(
            "Maybe some tool uses [] for years",
            r"^(?i)(?P<title>[^(\[].*?)[-_. \]]+(?P<year>(?:19|20)\d{2})(?:[\W_]+[^\d].*|[\W_]+)?$",
        ),
        ReleaseRule::new(
            "Last resort for movies with ( or [ in their title",
            r"^(?i)(?P<title>.+?)[-_\W]+(?P<year>(?:19|20)\d{2})(?:[\W_]+[^\d].*|[\W_]+)?$",
        ),
    ];
}

/// Release-name parser for movies.
pub struct MovieParser;

impl MovieParser {
    pub fn parse(raw: &str) -> Option<ParsedRelease> {
        let normalized = normalize_title(raw);
        let (rule, caps) = first_match(&MOVIE_RULES, &normalized)?;
        Some(Self::build(rule, &caps, raw))
    }

    fn build(rule: &'static ReleaseRule, caps: &Captures<'_>, raw: &str) -> ParsedRelease {
        let title = caps
            .name("title")
            .map(|m| release_title(m.as_str()))
            .unwrap_or_default();
        let year = caps.name("year").and_then(|m| m.as_str().parse().ok());

        ParsedRelease {
            title,
            season_numbers: Vec::new(),
            episode_numbers: Vec::new(),
            year,
            air_date: None,
            quality: parse_quality(raw),
            resolution: parse_resolution(raw),
            hardcoded_subs: parse_hardcoded_subs(raw),
            rule: rule.label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::normalize_media_title;

    fn parsed(name: &str) -> ParsedRelease {
        MovieParser::parse(name).unwrap_or_else(|| panic!("no rule matched '{}'", name))
    }

    // Upstream regression table: parsed title must compare equal to the
    // canonical title under media-title normalization.
    #[test]
    fn test_movie_titles() {
        let cases: &[(&str, &str)] = &[
            ("The.Man.from.U.N.C.L.E.2015.1080p.BluRay.x264-SPARKS", "The Man from U.N.C.L.E."),
            ("1941.1979.EXTENDED.720p.BluRay.X264-AMIABLE", "1941"),
            ("MY MOVIE (2016) [R][Action, Horror][720p.WEB-DL.AVC.8Bit.6ch.AC3].mkv", "MY MOVIE"),
            ("R.I.P.D.2013.720p.BluRay.x264-SPARKS", "R.I.P.D."),
            ("V.H.S.2.2013.LIMITED.720p.BluRay.x264-GECKOS", "V.H.S. 2"),
            ("This Is A Movie (1999) [IMDB #] <Genre, Genre, Genre> {ACTORS} !DIRECTOR +MORE_SILLY_STUFF_NO_ONE_NEEDS ?", "This Is A Movie"),
            ("We Are the Best!.2013.720p.H264.mkv", "We Are the Best!"),
            ("(500).Days.Of.Summer.(2009).DTS.1080p.BluRay.x264.NLsubs", "(500) Days Of Summer"),
            ("To.Live.and.Die.in.L.A.1985.1080p.BluRay", "To Live and Die in L.A."),
            ("A.I.Artificial.Intelligence.(2001)", "A.I. Artificial Intelligence"),
            ("A.Movie.Name.(1998)", "A Movie Name"),
            ("Thor: The Dark World 2013", "Thor The Dark World"),
            ("Resident.Evil.The.Final.Chapter.2016", "Resident Evil The Final Chapter"),
            ("Der.Soldat.James.German.Bluray.FuckYou.Pso.Why.cant.you.follow.scene.rules.1998", "Der Soldat James"),
            ("Passengers.German.DL.AC3.Dubbed..BluRay.x264-PsO", "Passengers"),
            ("Valana la Legende FRENCH BluRay 720p 2016 kjhlj", "Valana la Legende"),
            ("Valana la Legende TRUEFRENCH BluRay 720p 2016 kjhlj", "Valana la Legende"),
            ("Scary.Movie.2000.FRENCH..BluRay.-AiRLiNE", "Scary Movie"),
            ("My Movie 1999 German Bluray", "My Movie"),
        ];
        for (name, title) in cases {
            let release = parsed(name);
            assert_eq!(
                normalize_media_title(&release.title),
                normalize_media_title(title),
                "title mismatch for '{}' (rule: {}, got '{}')",
                name,
                release.rule,
                release.title,
            );
        }
    }

    #[test]
    fn test_movie_years() {
        assert_eq!(parsed("1941.1979.EXTENDED.720p.BluRay.X264-AMIABLE").year, Some(1979));
        assert_eq!(parsed("Scary.Movie.2000.FRENCH..BluRay.-AiRLiNE").year, Some(2000));
        assert_eq!(parsed("Valana la Legende FRENCH BluRay 720p 2016 kjhlj").year, Some(2016));
        assert_eq!(parsed("Thor: The Dark World 2013").year, Some(2013));
        // Language-tagged name with no year at all still parses.
        assert_eq!(parsed("Passengers.German.DL.AC3.Dubbed..BluRay.x264-PsO").year, None);
    }

    #[test]
    fn test_movie_structure() {
        let release = parsed("The.Matrix.1999.1080p.BluRay.x264");
        assert!(release.season_numbers.is_empty());
        assert!(release.episode_numbers.is_empty());
        assert!(!release.is_season_pack());
    }

    #[test]
    fn test_no_match() {
        assert!(MovieParser::parse("Some Random Words").is_none());
    }
}
