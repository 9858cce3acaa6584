mod movie;
mod tv;

pub use movie::MovieParser;
pub use tv::TvParser;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::quality::{tier_from_extension, QualityTier, Resolution};

/// One entry in a pattern cascade: a human label plus the compiled matcher.
/// Cascades are consulted in declaration order and the first hit wins, so
/// reordering entries changes observable behavior.
pub(crate) struct ReleaseRule {
    pub label: &'static str,
    pub regex: Regex,
}

impl ReleaseRule {
    pub fn new(label: &'static str, pattern: &str) -> Self {
        Self {
            label,
            regex: Regex::new(pattern).expect("invalid release rule pattern"),
        }
    }
}

pub(crate) fn first_match<'t>(
    rules: &'static [ReleaseRule],
    name: &'t str,
) -> Option<(&'static ReleaseRule, Captures<'t>)> {
    for rule in rules {
        if let Some(captures) = rule.regex.captures(name) {
            return Some((rule, captures));
        }
    }
    None
}

lazy_static! {
    static ref WEBSITE_PREFIX_RE: Regex =
        Regex::new(r"(?i)^\[\s*[a-z]+(?:\.[a-z]+)+\s*\][- ]*|^www\.[a-z]+\.(?:com|net)[ -]*")
            .unwrap();
    static ref TORRENT_SUFFIX_RE: Regex =
        Regex::new(r"(?i)\[(?:ettv|rartv|rarbg|cttv)\]$").unwrap();
    static ref SIMPLE_TITLE_RE: Regex = Regex::new(
        r"(?i)(?:(?:480|720|1080|2160)[ip]|[xh][\W_]?26[45]|DD\W?5\W1|[<>?*:|]|848x480|1280x720|1920x1080|3840x2160|4096x2160|(?:8|10)b(?:it)?)\s*"
    )
    .unwrap();
    static ref QUALITY_BRACKETS_RE: Regex = Regex::new(r"\[[a-z0-9 ._-]+\]$").unwrap();
    static ref BRACKET_NUMBERING_RE: Regex = Regex::new(r"^\[s\d{2}").unwrap();
    static ref WORD_DELIMITER_RE: Regex = Regex::new(r"[\s.,_=|-]+").unwrap();
    static ref PUNCTUATION_RE: Regex = Regex::new(r"[^\w\s]").unwrap();
    static ref COMMON_WORD_RE: Regex = Regex::new(r"(?i)\b(?:a|an|the|and|or|of)\b\s?").unwrap();
    static ref DUPLICATE_SPACES_RE: Regex = Regex::new(r"\s{2,}").unwrap();
    static ref FILE_EXTENSION_RE: Regex = Regex::new(r"(?i)\.[a-z0-9]{2,4}$").unwrap();
    static ref HARDCODED_SUBS_RE: Regex = Regex::new(r"(?i)\b(?:hc|korsub)\b").unwrap();
    static ref HIGH_DEF_PDTV_RE: Regex = Regex::new(r"(?i)hr[-_. ]ws").unwrap();
    static ref NUMBER_TOKEN_RE: Regex =
        Regex::new(r"(?i)\d+|zero|one|two|three|four|five|six|seven|eight|nine").unwrap();
    static ref RESOLUTION_RE: Regex = Regex::new(
        r"(?i)\b(?:(?P<r480>480p|640x480|848x480)|(?P<r576>576p)|(?P<r720>720p|1280x720)|(?P<r1080>1080p|1920x1080|1440p|fhd|1080i)|(?P<r2160>2160p|4k[-_. ](?:uhd|hevc|bd)|(?:uhd|hevc|bd)[-_. ]4k))\b"
    )
    .unwrap();
    static ref SOURCE_RE: Regex = Regex::new(
        r"(?i)\b(?:(?P<bluray>bluray|blu-ray|hd-?dvd|bd)|(?P<webdl>web[-_. ]dl|webdl|webrip|amazonhd|ituneshd|netflixu?hd|webhd|[. ]web[. ](?:[xh]26[45]|ddp?5[. ]1)|[. ](?:amzn|nf|dsnp)[. ]web[. ]|\d+0p[. ]web[. ]|web-dlmux)|(?P<hdtv>hdtv)|(?P<bdrip>bdrip)|(?P<brrip>brrip)|(?P<dvd>dvd|dvdrip|ntsc|pal|xvidvd)|(?P<dsr>ws[-_. ]dsr|dsr)|(?P<pdtv>pdtv)|(?P<sdtv>sdtv)|(?P<tvrip>tvrip)|(?P<cam>camrip|hdcam|cam)|(?P<telesync>telesync|hd-?ts|ts[-_. ]?rip)|(?P<telecine>telecine|tc[-_. ]?rip)|(?P<screener>dvdscreener|dvdscr|screener|scr)|(?P<workprint>workprint)|(?P<regional>r5|r6))\b"
    )
    .unwrap();
}

const NUMBER_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// First-pass normalization of a raw release name: lowercase, strip site
/// prefixes, uploader suffix tags, known file extensions, resolution/codec
/// noise and a trailing bracketed quality annotation, then collapse
/// whitespace. Total and idempotent; structural matching runs on its output.
pub fn normalize_title(raw: &str) -> String {
    // Lowercasing first keeps the case-sensitive bracket strip below
    // idempotent for uppercase tags like trailing hash suffixes.
    let mut title = raw.to_lowercase();
    title = WEBSITE_PREFIX_RE.replace(&title, "").into_owned();
    title = TORRENT_SUFFIX_RE.replace(&title, "").into_owned();

    if let Some(found) = FILE_EXTENSION_RE.find(&title) {
        let ext = found.as_str().to_string();
        if crate::quality::EXTENSIONS
            .iter()
            .any(|(known, _)| *known == ext)
        {
            title.truncate(found.start());
        }
    }

    title = SIMPLE_TITLE_RE.replace_all(&title, " ").into_owned();

    // Strip trailing bracketed quality/hash tags down to a fixpoint, but
    // bracketed numbering like [S01E11E12] is structure, not a tag.
    loop {
        let trimmed = title.trim_end();
        let Some(found) = QUALITY_BRACKETS_RE.find(trimmed) else {
            break;
        };
        if BRACKET_NUMBERING_RE.is_match(found.as_str()) {
            break;
        }
        let start = found.start();
        title.truncate(start);
    }

    title = DUPLICATE_SPACES_RE.replace_all(&title, " ").into_owned();

    title.trim().to_string()
}

/// Title fragment as captured by a cascade rule: word delimiters mapped to
/// single spaces, trimmed. Input is already lowercase.
pub(crate) fn release_title(captured: &str) -> String {
    let title = WORD_DELIMITER_RE.replace_all(captured, " ").into_owned();
    DUPLICATE_SPACES_RE
        .replace_all(&title, " ")
        .trim()
        .to_string()
}

/// Strict "media title" form: delimiters to spaces, punctuation dropped,
/// stop words (a/an/the/and/or/of) removed. Used only for title-equality
/// comparison, never for structural matching.
pub fn normalize_media_title(title: &str) -> String {
    let title = WORD_DELIMITER_RE.replace_all(title, " ").into_owned();
    let title = PUNCTUATION_RE.replace_all(&title, "").into_owned();
    let title = COMMON_WORD_RE.replace_all(&title, "").into_owned();
    let title = DUPLICATE_SPACES_RE.replace_all(&title, " ").into_owned();
    title.trim().to_lowercase()
}

/// Parses a single numeric token, accepting the number words one..nine that
/// some miniseries releases use ("Part One").
pub(crate) fn parse_number_token(token: &str) -> Option<u32> {
    if token.chars().all(|c| c.is_ascii_digit()) {
        return token.parse().ok();
    }
    let lowered = token.to_lowercase();
    NUMBER_WORDS
        .iter()
        .position(|w| *w == lowered)
        .map(|i| i as u32)
}

/// Pulls every number out of an episode-cluster span ("e05e06", "05-06",
/// "Part One"), in order.
pub(crate) fn scan_numbers(span: &str) -> Vec<u32> {
    NUMBER_TOKEN_RE
        .find_iter(span)
        .filter_map(|m| parse_number_token(m.as_str()))
        .collect()
}

/// Splits a run of concatenated two-digit episode numbers ("0708" = E07+E08).
pub(crate) fn scan_number_pairs(span: &str) -> Vec<u32> {
    span.as_bytes()
        .chunks(2)
        .filter_map(|pair| std::str::from_utf8(pair).ok())
        .filter_map(|pair| pair.parse().ok())
        .collect()
}

fn extension(name: &str) -> Option<String> {
    FILE_EXTENSION_RE
        .find(name.trim())
        .map(|m| m.as_str().to_lowercase())
}

/// Which family of source markers matched, decided on the raw name. One
/// variant per decision-table row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFamily {
    Bluray,
    WebDl,
    Hdtv,
    BdRip,
    BrRip,
    Dvd,
    /// pdtv/sdtv/dsr/tvrip: standard-definition broadcast captures.
    BroadcastSd,
    Cam,
    Telesync,
    Telecine,
    Screener,
    Workprint,
    Regional,
}

pub fn parse_source(name: &str) -> Option<SourceFamily> {
    let captures = SOURCE_RE.captures(name)?;
    let groups: &[(&str, SourceFamily)] = &[
        ("bluray", SourceFamily::Bluray),
        ("webdl", SourceFamily::WebDl),
        ("hdtv", SourceFamily::Hdtv),
        ("bdrip", SourceFamily::BdRip),
        ("brrip", SourceFamily::BrRip),
        ("dvd", SourceFamily::Dvd),
        ("dsr", SourceFamily::BroadcastSd),
        ("pdtv", SourceFamily::BroadcastSd),
        ("sdtv", SourceFamily::BroadcastSd),
        ("tvrip", SourceFamily::BroadcastSd),
        ("cam", SourceFamily::Cam),
        ("telesync", SourceFamily::Telesync),
        ("telecine", SourceFamily::Telecine),
        ("screener", SourceFamily::Screener),
        ("workprint", SourceFamily::Workprint),
        ("regional", SourceFamily::Regional),
    ];
    groups
        .iter()
        .find(|(group, _)| captures.name(group).is_some())
        .map(|(_, family)| *family)
}

/// Resolution bucket from the raw name; first marker group found wins.
pub fn parse_resolution(name: &str) -> Resolution {
    let Some(captures) = RESOLUTION_RE.captures(name) else {
        return Resolution::Unknown;
    };
    if captures.name("r480").is_some() {
        Resolution::R480p
    } else if captures.name("r576").is_some() {
        Resolution::R576p
    } else if captures.name("r720").is_some() {
        Resolution::R720p
    } else if captures.name("r1080").is_some() {
        Resolution::R1080p
    } else if captures.name("r2160").is_some() {
        Resolution::R2160p
    } else {
        Resolution::Unknown
    }
}

/// Quality classification runs against the raw (non-normalized) name:
/// quality tokens and structural tokens overlap and must not corrupt each
/// other. Total: every input maps to exactly one tier.
pub fn parse_quality(raw: &str) -> QualityTier {
    let name = raw.trim().to_lowercase();
    let resolution = parse_resolution(&name);

    if let Some(family) = parse_source(&name) {
        return match family {
            SourceFamily::Bluray => {
                if name.contains("xvid") {
                    QualityTier::Dvd
                } else {
                    match resolution {
                        Resolution::R2160p => QualityTier::Bluray2160p,
                        Resolution::R1080p => QualityTier::Bluray1080p,
                        Resolution::R480p | Resolution::R576p => QualityTier::Dvd,
                        _ => QualityTier::Bluray720p,
                    }
                }
            }
            SourceFamily::WebDl => match resolution {
                Resolution::R2160p => QualityTier::Webdl2160p,
                Resolution::R1080p => QualityTier::Webdl1080p,
                Resolution::R720p => QualityTier::Webdl720p,
                _ => QualityTier::Webdl480p,
            },
            SourceFamily::Hdtv => match resolution {
                Resolution::R2160p => QualityTier::Hdtv2160p,
                Resolution::R1080p => QualityTier::Hdtv1080p,
                Resolution::R720p => QualityTier::Hdtv720p,
                _ => {
                    if name.contains("[hdtv]") {
                        QualityTier::Hdtv720p
                    } else {
                        QualityTier::Sdtv
                    }
                }
            },
            SourceFamily::BdRip | SourceFamily::BrRip => match resolution {
                Resolution::R2160p => QualityTier::Bluray2160p,
                Resolution::R1080p => QualityTier::Bluray1080p,
                Resolution::R720p => QualityTier::Bluray720p,
                _ => QualityTier::Dvd,
            },
            SourceFamily::Dvd => QualityTier::Dvd,
            SourceFamily::BroadcastSd => {
                if resolution == Resolution::R1080p || name.contains("1080p") {
                    QualityTier::Hdtv1080p
                } else if resolution == Resolution::R720p
                    || name.contains("720p")
                    || HIGH_DEF_PDTV_RE.is_match(&name)
                {
                    QualityTier::Hdtv720p
                } else {
                    QualityTier::Sdtv
                }
            }
            SourceFamily::Cam => QualityTier::Cam,
            SourceFamily::Telesync => QualityTier::Telesync,
            SourceFamily::Telecine => QualityTier::Telecine,
            SourceFamily::Screener => QualityTier::Screener,
            SourceFamily::Workprint => QualityTier::Workprint,
            SourceFamily::Regional => QualityTier::Regional,
        };
    }

    match resolution {
        Resolution::R2160p => return QualityTier::Hdtv2160p,
        Resolution::R1080p => return QualityTier::Hdtv1080p,
        Resolution::R720p => return QualityTier::Hdtv720p,
        Resolution::R480p => return QualityTier::Sdtv,
        _ => {}
    }

    if name.contains("x264") {
        return QualityTier::Sdtv;
    }
    if name.contains("bluray720p") || name.contains("bd720p") {
        return QualityTier::Bluray720p;
    }
    if name.contains("bluray1080p") || name.contains("bd1080p") {
        return QualityTier::Bluray1080p;
    }

    tier_from_extension(extension(&name).as_deref())
}

/// Independent hardcoded-subtitle marker check on the raw name.
pub fn parse_hardcoded_subs(raw: &str) -> bool {
    HARDCODED_SUBS_RE.is_match(raw)
}
