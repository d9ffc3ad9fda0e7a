//! The dataset build: sample IDs, fetch and transform every post, then write them all at once.
//!
//! # Example usage
//!
//! ```no_run
//! use booru_mock_data::{DatasetBuilder, SamplerConfig};
//!
//! async fn build_dataset() {
//!     let config = SamplerConfig {
//!         target_count: 50, // Sample 50 post IDs instead of 1000
//!         ..SamplerConfig::default()
//!     };
//!
//!     let builder = DatasetBuilder::new(config).unwrap();
//!
//!     // Writes mock_data/danbooru/dataset.json
//!     let summary = builder.run().await.unwrap();
//!
//!     summary.print();
//! }
//! ```
use std::path::PathBuf;

use ahash::AHashSet;
use futures::StreamExt;
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tokio::{
    fs::{create_dir_all, write},
    time::Instant,
};

use crate::{
    config::SamplerConfig,
    danbooru::DanbooruClient,
    error::SamplerError,
    post::{tags::TagFilter, MockPost},
    progress_bars::{collected_message, sampler_bar, set_collected},
    sampler::sample_post_ids,
};

use self::summary::RunSummary;

pub mod summary;

/// Posts gathered from a list of IDs, before they are written.
#[derive(Debug, Default)]
pub struct CollectedPosts {
    pub posts: Vec<MockPost>,
    /// IDs that came back absent.
    pub skipped: usize,
}

pub struct DatasetBuilder {
    config: SamplerConfig,
    client: DanbooruClient,
    filter: TagFilter,
}

impl DatasetBuilder {
    /// Validates `config` and prepares the HTTP client.
    ///
    /// # Errors
    /// Any error from [`SamplerConfig::validate`], or a failure to build the HTTP client.
    pub fn new(config: SamplerConfig) -> Result<Self, SamplerError> {
        config.validate()?;

        let client = DanbooruClient::from_config(&config)?;
        let filter = TagFilter::from_config(&config);

        Ok(Self {
            config,
            client,
            filter,
        })
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Runs the whole pipeline with a freshly seeded random source.
    pub async fn run(&self) -> Result<RunSummary, SamplerError> {
        let mut rng = StdRng::from_entropy();
        self.run_with_rng(&mut rng).await
    }

    /// Runs the whole pipeline. `rng` drives both the ID sample and the mock engagement numbers.
    ///
    /// Nothing touches the disk until every post has been collected, so an error midway
    /// leaves any previous dataset file intact.
    pub async fn run_with_rng<R: Rng + Send>(&self, rng: &mut R) -> Result<RunSummary, SamplerError> {
        let start = Instant::now();

        let ids = sample_post_ids(
            rng,
            self.config.target_count,
            self.config.min_post_id,
            self.config.max_post_id,
        );
        let sampled = ids.len();
        info!(
            "Sampled {} post IDs from [{}, {}]",
            sampled, self.config.min_post_id, self.config.max_post_id
        );

        let collected = self.collect(ids, rng).await?;
        let output = self.write_dataset(&collected.posts).await?;

        info!("Dataset built in {:?}", start.elapsed());

        Ok(RunSummary::new(
            sampled,
            collected.skipped,
            &collected.posts,
            output,
        ))
    }

    /// Fetches and transforms every ID in `ids`, skipping absent posts and repeated IDs.
    ///
    /// With a single simultaneous fetch the posts keep the order of `ids`; with more, they
    /// come in completion order.
    pub async fn collect<R: Rng + Send>(
        &self,
        ids: Vec<u64>,
        rng: &mut R,
    ) -> Result<CollectedPosts, SamplerError> {
        let bar = sampler_bar(ids.len() as u64);

        let mut processed: AHashSet<u64> = AHashSet::with_capacity(ids.len());
        let pending: Vec<u64> = ids.into_iter().filter(|id| processed.insert(*id)).collect();

        let client = &self.client;
        let mut fetches = futures::stream::iter(pending)
            .map(|id| async move { (id, client.fetch_post(id).await) })
            .buffer_unordered(self.config.simultaneous_fetches);

        let mut collected = CollectedPosts {
            posts: Vec::with_capacity(processed.len()),
            skipped: 0,
        };

        while let Some((id, fetched)) = fetches.next().await {
            bar.inc(1);

            let Some(raw) = fetched? else {
                collected.skipped += 1;
                continue;
            };

            let post =
                MockPost::from_raw(id, raw, &self.filter, &self.config.default_image_url, rng)?;
            collected.posts.push(post);

            info!(
                "Processed post {} ({} done)",
                id,
                collected.posts.len()
            );
            set_collected(&bar, collected.posts.len());
        }

        bar.finish_with_message(collected_message(collected.posts.len()));
        info!(
            "Collected {} posts, {} IDs skipped",
            collected.posts.len(),
            collected.skipped
        );

        Ok(collected)
    }

    /// Serializes `posts` as one JSON array into the dataset file, creating its directory first.
    pub async fn write_dataset(&self, posts: &[MockPost]) -> Result<PathBuf, SamplerError> {
        let path = self.config.dataset_path();

        create_dir_all(&self.config.output_dir).await?;

        let serialized = serde_json::to_vec(posts)?;
        write(&path, serialized).await?;

        debug!("Wrote {} posts to {}", posts.len(), path.display());
        Ok(path)
    }
}
