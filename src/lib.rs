//! # Booru Mock Data
//!
//! booru_mock_data builds a mock post dataset out of real imageboard posts.
//!
//! It samples random post IDs, fetches each post from a Danbooru style API, cleans up its
//! tags, makes up some engagement numbers and writes everything to a single JSON file that
//! can be used as test fixture data.
pub mod config;
pub mod danbooru;
pub mod error;
mod macros;
pub mod post;
mod progress_bars;
pub mod queue;
pub mod sampler;

/// User agent sent with every request. Always follows the version in `Cargo.toml`.
pub const USER_AGENT: &str = concat!("booru_mock_data/", env!("CARGO_PKG_VERSION"));

pub use config::SamplerConfig;
pub use danbooru::DanbooruClient;
pub use error::SamplerError;
pub use post::MockPost;
pub use queue::{summary::RunSummary, DatasetBuilder};
pub use sampler::sample_post_ids;
