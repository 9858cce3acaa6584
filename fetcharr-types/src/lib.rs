mod candidate;
pub mod matching;
pub mod parser;
mod quality;
mod release;
mod want;

pub use candidate::*;
pub use matching::{titles_equal, MatchPolicy, MatchRejection};
pub use parser::{normalize_media_title, normalize_title, MovieParser, TvParser};
pub use quality::*;
pub use release::*;
pub use want::*;
