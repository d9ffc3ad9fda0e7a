use std::path::PathBuf;

use booru_mock_data::config::{
    SamplerConfig, DANBOORU_API_BASE_URL, MAXIMUM_TAG_LENGTH, MAX_POST_ID, MIN_POST_ID,
    MOCK_DATA_FOLDER, TOTAL_POSTS_TO_FETCH,
};
use clap::Parser;

/// Every flag is optional: running without arguments builds the stock dataset.
#[derive(Parser, Debug)]
#[clap(name = "Booru Mock Data", author, version, about, long_about = None)]
pub struct Cli {
    /// Number of random post IDs to sample
    #[clap(short = 'n', long, value_name = "NUMBER", default_value_t = TOTAL_POSTS_TO_FETCH, help_heading = "SAMPLING")]
    pub amount: usize,

    /// Lowest post ID that can be sampled
    #[clap(long, value_name = "ID", default_value_t = MIN_POST_ID, help_heading = "SAMPLING")]
    pub min_id: u64,

    /// Highest post ID that can be sampled
    #[clap(long, value_name = "ID", default_value_t = MAX_POST_ID, help_heading = "SAMPLING")]
    pub max_id: u64,

    /// Root URL of the Danbooru style API
    #[clap(long, value_name = "URL", default_value = DANBOORU_API_BASE_URL, help_heading = "GENERAL")]
    pub base_url: String,

    /// Number of simultaneous post fetches
    ///
    /// With more than 1, posts are saved in the order their requests finish.
    ///
    /// [max: 20]
    #[clap(
        short = 'd',
        value_name = "NUMBER",
        value_parser(clap::value_parser!(u8).range(1..=20)),
        default_value_t = 1,
        help_heading = "GENERAL"
    )]
    pub simultaneous_fetches: u8,

    /// Directory where dataset.json is written (created if missing)
    #[clap(short = 'o', long, value_name = "PATH", default_value = MOCK_DATA_FOLDER, help_heading = "SAVE")]
    pub output: PathBuf,

    /// Extra tags to drop from every post, comma separated
    #[clap(long, value_name = "TAGS", value_delimiter = ',', help_heading = "TAGS")]
    pub blacklist: Vec<String>,

    /// Tags longer than this are dropped
    #[clap(long, value_name = "LENGTH", default_value_t = MAXIMUM_TAG_LENGTH, help_heading = "TAGS")]
    pub max_tag_length: usize,
}

impl Cli {
    pub fn sampler_config(&self) -> SamplerConfig {
        let mut config = SamplerConfig {
            base_url: self.base_url.clone(),
            target_count: self.amount,
            min_post_id: self.min_id,
            max_post_id: self.max_id,
            output_dir: self.output.clone(),
            max_tag_length: self.max_tag_length,
            simultaneous_fetches: self.simultaneous_fetches as usize,
            ..SamplerConfig::default()
        };

        config.extend_blacklist(&self.blacklist);
        config
    }
}
