//! Mock post records
//!
//! # MockPost
//! A [`MockPost`] is what ends up in the dataset file: the post's creation date, its cleaned
//! tags, an NSFW flag, an image URL and two made up engagement numbers. It is serialized with
//! camelCase keys:
//!
//! ```json
//! {"createdAt":"2020-01-01","views":57,"likes":133,"tags":["tag1","tag2"],"isNsfw":true,"imageUrl":"http://x/img.png"}
//! ```
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{danbooru::models::DanbooruPost, error::SamplerError};

use self::{rating::Rating, tags::TagFilter};

pub mod rating;
pub mod tags;

/// Engagement numbers are drawn from `[1, dimension + ENGAGEMENT_HEADROOM]`.
const ENGAGEMENT_HEADROOM: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockPost {
    /// Taken as is from the API.
    pub created_at: String,
    /// Random, bounded by the image width.
    pub views: u64,
    /// Random, bounded by the image height.
    pub likes: u64,
    pub tags: Vec<String>,
    pub is_nsfw: bool,
    pub image_url: String,
}

impl MockPost {
    /// Builds the mock record for a fetched post.
    ///
    /// `id` is the post ID that was requested and is only used for error reports.
    /// `views` and `likes` come from `rng`; everything else is deterministic.
    ///
    /// # Errors
    /// [`SamplerError::MissingField`] when the post lacks `created_at`, `rating`,
    /// `tag_string`, `image_width` or `image_height`.
    pub fn from_raw<R: Rng + ?Sized>(
        id: u64,
        raw: DanbooruPost,
        filter: &TagFilter,
        default_image_url: &str,
        rng: &mut R,
    ) -> Result<Self, SamplerError> {
        let missing = |field| SamplerError::MissingField { id, field };

        let rating = raw.rating.ok_or_else(|| missing("rating"))?;
        let tag_string = raw.tag_string.ok_or_else(|| missing("tag_string"))?;
        let width = raw.image_width.ok_or_else(|| missing("image_width"))?;
        let height = raw.image_height.ok_or_else(|| missing("image_height"))?;
        let created_at = raw.created_at.ok_or_else(|| missing("created_at"))?;

        Ok(Self {
            created_at,
            views: rng.gen_range(1..=width.saturating_add(ENGAGEMENT_HEADROOM)),
            likes: rng.gen_range(1..=height.saturating_add(ENGAGEMENT_HEADROOM)),
            tags: filter.normalize_tag_string(&tag_string),
            is_nsfw: Rating::from_code(&rating).is_nsfw(),
            image_url: raw
                .file_url
                .unwrap_or_else(|| default_image_url.to_string()),
        })
    }
}
