use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Resolution bucket inferred from a release name, independent of source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    R480p,
    R576p,
    R720p,
    R1080p,
    R2160p,
    Unknown,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resolution::R480p => "480p",
            Resolution::R576p => "576p",
            Resolution::R720p => "720p",
            Resolution::R1080p => "1080p",
            Resolution::R2160p => "2160p",
            Resolution::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Source+resolution classification of a release. The `rank` is a
/// human-facing weight used for display ordering only; matching is
/// strictly profile membership.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QualityTier {
    Unknown,
    Sdtv,
    Dvd,
    Hdtv720p,
    Hdtv1080p,
    Hdtv2160p,
    Webdl480p,
    Webdl720p,
    Webdl1080p,
    Webdl2160p,
    Bluray720p,
    Bluray1080p,
    Bluray2160p,
    Cam,
    Telesync,
    Telecine,
    Screener,
    Workprint,
    Regional,
}

pub const TIERS: &[QualityTier] = &[
    QualityTier::Unknown,
    QualityTier::Sdtv,
    QualityTier::Dvd,
    QualityTier::Hdtv720p,
    QualityTier::Hdtv1080p,
    QualityTier::Hdtv2160p,
    QualityTier::Webdl480p,
    QualityTier::Webdl720p,
    QualityTier::Webdl1080p,
    QualityTier::Webdl2160p,
    QualityTier::Bluray720p,
    QualityTier::Bluray1080p,
    QualityTier::Bluray2160p,
    QualityTier::Cam,
    QualityTier::Telesync,
    QualityTier::Telecine,
    QualityTier::Screener,
    QualityTier::Workprint,
    QualityTier::Regional,
];

impl QualityTier {
    pub fn name(&self) -> &'static str {
        match self {
            QualityTier::Unknown => "Unknown",
            QualityTier::Sdtv => "SDTV",
            QualityTier::Dvd => "DVD",
            QualityTier::Hdtv720p => "HDTV-720p",
            QualityTier::Hdtv1080p => "HDTV-1080p",
            QualityTier::Hdtv2160p => "HDTV-2160p",
            QualityTier::Webdl480p => "WEBDL-480p",
            QualityTier::Webdl720p => "WEBDL-720p",
            QualityTier::Webdl1080p => "WEBDL-1080p",
            QualityTier::Webdl2160p => "WEBDL-2160p",
            QualityTier::Bluray720p => "Bluray-720p",
            QualityTier::Bluray1080p => "Bluray-1080p",
            QualityTier::Bluray2160p => "Bluray-2160p",
            QualityTier::Cam => "CAM",
            QualityTier::Telesync => "TELESYNC",
            QualityTier::Telecine => "TELECINE",
            QualityTier::Screener => "SCREENER",
            QualityTier::Workprint => "WORKPRINT",
            QualityTier::Regional => "REGIONAL",
        }
    }

    /// Display weight, roughly worst to best. Matching never consults this.
    pub fn rank(&self) -> u32 {
        match self {
            QualityTier::Unknown => 0,
            QualityTier::Cam => 1,
            QualityTier::Telesync => 2,
            QualityTier::Telecine => 3,
            QualityTier::Workprint => 4,
            QualityTier::Screener => 5,
            QualityTier::Regional => 6,
            QualityTier::Sdtv => 7,
            QualityTier::Dvd => 8,
            QualityTier::Webdl480p => 9,
            QualityTier::Hdtv720p => 10,
            QualityTier::Webdl720p => 11,
            QualityTier::Bluray720p => 12,
            QualityTier::Hdtv1080p => 13,
            QualityTier::Webdl1080p => 14,
            QualityTier::Bluray1080p => 15,
            QualityTier::Hdtv2160p => 16,
            QualityTier::Webdl2160p => 17,
            QualityTier::Bluray2160p => 18,
        }
    }

}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for QualityTier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TIERS
            .iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or(())
    }
}

impl Serialize for QualityTier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.name().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for QualityTier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|_| serde::de::Error::custom(format!("unknown quality tier '{}'", raw)))
    }
}

/// A named, ordered set of acceptable quality tiers. Membership, not order,
/// drives matching.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub members: Vec<QualityTier>,
}

impl Profile {
    pub fn new(name: &str, members: &[QualityTier]) -> Self {
        Self {
            name: name.to_string(),
            members: members.to_vec(),
        }
    }

    pub fn contains(&self, tier: QualityTier) -> bool {
        self.members.contains(&tier)
    }
}

impl PartialEq for Profile {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// Built-in profile catalog. Config may append to these, never replace them.
pub fn builtin_profiles() -> Vec<Profile> {
    use QualityTier::*;
    vec![
        Profile::new(
            "any",
            &[
                Sdtv, Webdl480p, Dvd, Hdtv720p, Hdtv1080p, Webdl720p, Webdl1080p, Bluray720p,
                Bluray1080p,
            ],
        ),
        Profile::new("sd", &[Sdtv, Webdl480p, Dvd]),
        Profile::new("hd-720p", &[Hdtv720p, Webdl720p, Bluray720p]),
        Profile::new("hd-1080p", &[Hdtv1080p, Webdl1080p, Bluray1080p]),
        Profile::new(
            "hd-720p-1080p",
            &[Hdtv720p, Hdtv1080p, Webdl720p, Webdl1080p, Bluray720p, Bluray1080p],
        ),
        Profile::new("ultra-hd", &[Hdtv2160p, Webdl2160p, Bluray2160p]),
    ]
}

/// Default tier assumed from a bare file extension when nothing else in the
/// name gives the source away.
pub const EXTENSIONS: &[(&str, QualityTier)] = &[
    (".webm", QualityTier::Unknown),
    (".m4v", QualityTier::Sdtv),
    (".3gp", QualityTier::Sdtv),
    (".nsv", QualityTier::Sdtv),
    (".ty", QualityTier::Sdtv),
    (".strm", QualityTier::Sdtv),
    (".rm", QualityTier::Sdtv),
    (".rmvb", QualityTier::Sdtv),
    (".m3u", QualityTier::Sdtv),
    (".ifo", QualityTier::Sdtv),
    (".mov", QualityTier::Sdtv),
    (".qt", QualityTier::Sdtv),
    (".divx", QualityTier::Sdtv),
    (".xvid", QualityTier::Sdtv),
    (".bivx", QualityTier::Sdtv),
    (".nrg", QualityTier::Sdtv),
    (".pva", QualityTier::Sdtv),
    (".wmv", QualityTier::Sdtv),
    (".asf", QualityTier::Sdtv),
    (".asx", QualityTier::Sdtv),
    (".ogm", QualityTier::Sdtv),
    (".ogv", QualityTier::Sdtv),
    (".m2v", QualityTier::Sdtv),
    (".avi", QualityTier::Sdtv),
    (".bin", QualityTier::Sdtv),
    (".dat", QualityTier::Sdtv),
    (".dvr-ms", QualityTier::Sdtv),
    (".mpg", QualityTier::Sdtv),
    (".mpeg", QualityTier::Sdtv),
    (".mp4", QualityTier::Sdtv),
    (".avc", QualityTier::Sdtv),
    (".vp3", QualityTier::Sdtv),
    (".svq3", QualityTier::Sdtv),
    (".nuv", QualityTier::Sdtv),
    (".viv", QualityTier::Sdtv),
    (".dv", QualityTier::Sdtv),
    (".fli", QualityTier::Sdtv),
    (".flv", QualityTier::Sdtv),
    (".wpl", QualityTier::Sdtv),
    (".img", QualityTier::Dvd),
    (".iso", QualityTier::Dvd),
    (".vob", QualityTier::Dvd),
    (".mkv", QualityTier::Hdtv720p),
    (".ts", QualityTier::Hdtv720p),
    (".wtv", QualityTier::Hdtv720p),
    (".m2ts", QualityTier::Bluray720p),
];

pub fn tier_from_extension(extension: Option<&str>) -> QualityTier {
    let Some(extension) = extension else {
        return QualityTier::Unknown;
    };
    EXTENSIONS
        .iter()
        .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
        .map(|(_, tier)| *tier)
        .unwrap_or(QualityTier::Unknown)
}
