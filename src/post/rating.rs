//! Content rating of a Danbooru post
//! # Post Rating
//! Danbooru classifies every post with a single letter:
//! * `g`: General. Nothing suggestive.
//! * `s`: Sensitive. Mildly suggestive, swimsuits and the like.
//! * `q`: Questionable. Nudity or otherwise not safe for work.
//! * `e`: Explicit. Pornographic or otherwise graphic content.
//!
//! Only `Explicit` posts are flagged as NSFW in the mock dataset.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
pub enum Rating {
    General,
    Sensitive,
    Questionable,
    Explicit,
    /// Anything that isn't one of the four codes above.
    #[default]
    Unknown,
}

impl Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::General => write!(f, "General"),
            Self::Sensitive => write!(f, "Sensitive"),
            Self::Questionable => write!(f, "Questionable"),
            Self::Explicit => write!(f, "Explicit"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

impl Rating {
    /// Parses the rating code sent by the API. Case and surrounding whitespace are ignored.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "g" => Self::General,
            "s" => Self::Sensitive,
            "q" => Self::Questionable,
            "e" => Self::Explicit,
            _ => Self::Unknown,
        }
    }

    #[inline]
    pub const fn is_nsfw(self) -> bool {
        matches!(self, Self::Explicit)
    }
}
