//! # Tag cleanup
//!
//! Danbooru tags arrive as a single space separated `tag_string`. Before a tag lands in
//! the mock dataset it goes through [`TagFilter::normalize`]:
//!
//! 1. lowercase and trim;
//! 2. drop it if it's on the blocklist;
//! 3. strip every forbidden character;
//! 4. drop it if it's still longer than the length limit.
//!
//! Tags are never truncated, and the order and duplicates of the source string are kept.
use ahash::AHashSet;

use crate::config::SamplerConfig;

#[derive(Debug, Clone)]
pub struct TagFilter {
    forbidden_tags: AHashSet<String>,
    forbidden_chars: Vec<char>,
    max_length: usize,
}

impl TagFilter {
    #[must_use]
    pub fn new(forbidden_tags: AHashSet<String>, forbidden_chars: &[char], max_length: usize) -> Self {
        Self {
            forbidden_tags,
            forbidden_chars: forbidden_chars.to_vec(),
            max_length,
        }
    }

    #[must_use]
    pub fn from_config(config: &SamplerConfig) -> Self {
        Self::new(
            config.forbidden_tags.clone(),
            &config.forbidden_chars,
            config.max_tag_length,
        )
    }

    /// Cleans a single raw tag, or returns `None` if it must be dropped.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let tag = raw.to_lowercase();
        let tag = tag.trim();

        if self.forbidden_tags.contains(tag) {
            return None;
        }

        let cleaned: String = tag
            .chars()
            .filter(|c| !self.forbidden_chars.contains(c))
            .collect();

        if cleaned.chars().count() > self.max_length {
            return None;
        }

        Some(cleaned)
    }

    /// Splits a `tag_string` on single spaces and cleans every piece.
    pub fn normalize_tag_string(&self, tag_string: &str) -> Vec<String> {
        self.normalize_all(tag_string.split(' '))
    }

    pub fn normalize_all<'a, I>(&self, raw_tags: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        raw_tags
            .into_iter()
            .filter_map(|tag| self.normalize(tag))
            .collect()
    }
}
