//! Settings for a single dataset build.
//!
//! [`SamplerConfig::default()`] reproduces the stock run: 1000 posts sampled from
//! `https://testbooru.donmai.us`, written to `mock_data/danbooru/dataset.json`.
use std::path::PathBuf;

use ahash::AHashSet;
use log::debug;

use crate::error::SamplerError;

pub const DANBOORU_API_BASE_URL: &str = "https://testbooru.donmai.us";
pub const TOTAL_POSTS_TO_FETCH: usize = 1000;
pub const MIN_POST_ID: u64 = 1;
pub const MAX_POST_ID: u64 = 10_002;
pub const FORBIDDEN_TAG_CHARS: [char; 3] = [';', ',', ':'];
pub const FORBIDDEN_TAGS: [&str; 8] = [
    "loli", "shota", "lolicon", "shotacon", "nigga", "nigger", "lowres", "low_res",
];
pub const MOCK_DATA_FOLDER: &str = "mock_data/danbooru";
pub const DATASET_FILE_NAME: &str = "dataset.json";
pub const DEFAULT_POST_PICTURE_URL: &str = "https://preview.redd.it/xcnycjjyvuz51.jpg?width=1050&format=pjpg&auto=webp&s=c801d1ad05e698d151ebf484d585ba1af1220c99";
pub const MAXIMUM_TAG_LENGTH: usize = 75;
pub const MAX_SIMULTANEOUS_FETCHES: usize = 20;

#[derive(Debug, Clone)]
pub struct SamplerConfig {
    /// Root of the API, e.g. `https://testbooru.donmai.us`.
    pub base_url: String,
    /// How many unique post IDs are sampled (and so the upper bound of posts written).
    pub target_count: usize,
    pub min_post_id: u64,
    pub max_post_id: u64,
    /// Characters stripped out of every tag.
    pub forbidden_chars: Vec<char>,
    /// Tags dropped entirely. Matched after lowercasing and trimming.
    pub forbidden_tags: AHashSet<String>,
    /// Directory holding the dataset file. Created if missing.
    pub output_dir: PathBuf,
    /// Used as `imageUrl` when a post has no `file_url`.
    pub default_image_url: String,
    /// Tags longer than this (in chars) are dropped.
    pub max_tag_length: usize,
    /// Number of requests in flight at once. `1` keeps the run strictly sequential.
    pub simultaneous_fetches: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            base_url: DANBOORU_API_BASE_URL.to_string(),
            target_count: TOTAL_POSTS_TO_FETCH,
            min_post_id: MIN_POST_ID,
            max_post_id: MAX_POST_ID,
            forbidden_chars: FORBIDDEN_TAG_CHARS.to_vec(),
            forbidden_tags: FORBIDDEN_TAGS.iter().map(|t| t.to_string()).collect(),
            output_dir: PathBuf::from(MOCK_DATA_FOLDER),
            default_image_url: DEFAULT_POST_PICTURE_URL.to_string(),
            max_tag_length: MAXIMUM_TAG_LENGTH,
            simultaneous_fetches: 1,
        }
    }
}

impl SamplerConfig {
    /// Adds user supplied tags to the blocklist.
    ///
    /// Tags are trimmed and lowercased the same way post tags are before matching, empty
    /// entries are ignored.
    pub fn extend_blacklist<S: AsRef<str>>(&mut self, tags: &[S]) {
        let extra = tags
            .iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty());

        self.forbidden_tags.extend(extra);
        debug!("Blocklist has {} tags", self.forbidden_tags.len());
    }

    /// Full path of the JSON file written at the end of the run.
    #[inline]
    pub fn dataset_path(&self) -> PathBuf {
        self.output_dir.join(DATASET_FILE_NAME)
    }

    /// Rejects settings that would make the run hang or do nothing useful.
    ///
    /// # Errors
    /// - [`SamplerError::InfeasibleSample`] if `target_count` unique IDs don't fit in
    ///   `[min_post_id, max_post_id]`.
    /// - [`SamplerError::InvalidConfig`] for a zero or oversized fetch window.
    pub fn validate(&self) -> Result<(), SamplerError> {
        let infeasible = SamplerError::InfeasibleSample {
            count: self.target_count,
            min: self.min_post_id,
            max: self.max_post_id,
        };

        if self.min_post_id > self.max_post_id {
            return Err(infeasible);
        }

        // `None` means the range spans all of u64, which holds any usize amount.
        let range_size = (self.max_post_id - self.min_post_id).checked_add(1);
        if range_size.is_some_and(|size| self.target_count as u64 > size) {
            return Err(infeasible);
        }

        if self.simultaneous_fetches == 0 || self.simultaneous_fetches > MAX_SIMULTANEOUS_FETCHES
        {
            return Err(SamplerError::InvalidConfig {
                message: format!(
                    "simultaneous fetches must be between 1 and {}, got {}",
                    MAX_SIMULTANEOUS_FETCHES, self.simultaneous_fetches
                ),
            });
        }

        Ok(())
    }
}
