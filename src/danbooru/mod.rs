//! Post fetcher for Danbooru style APIs (`https://danbooru.donmai.us`, `https://testbooru.donmai.us`)
//!
//! Each post is requested on its own through `GET {base_url}/posts/{id}.json`.
//! A post that doesn't exist, was deleted or is hidden behind a login comes back with a
//! non-2xx status and is reported as absent; anything else that goes wrong is an error.
use log::debug;
use reqwest::Client;
use tokio::time::Instant;

use crate::{client, config::SamplerConfig, error::SamplerError};

use self::models::DanbooruPost;

pub mod models;

#[derive(Debug, Clone)]
pub struct DanbooruClient {
    client: Client,
    base_url: String,
}

impl DanbooruClient {
    /// # Errors
    /// Fails only if the HTTP client can't be initialized (e.g. no TLS backend).
    pub fn new(base_url: &str) -> Result<Self, SamplerError> {
        let client = client!();

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &SamplerConfig) -> Result<Self, SamplerError> {
        Self::new(&config.base_url)
    }

    #[inline]
    pub fn post_url(&self, id: u64) -> String {
        format!("{}/posts/{}.json", self.base_url, id)
    }

    /// Fetches a single post.
    ///
    /// Returns `Ok(None)` when the server answers with a non-success status.
    ///
    /// # Errors
    /// - [`SamplerError::ConnectionError`] on transport failures.
    /// - [`SamplerError::InvalidServerResponse`] when a successful response isn't a post object.
    pub async fn fetch_post(&self, id: u64) -> Result<Option<DanbooruPost>, SamplerError> {
        let url = self.post_url(id);
        debug!("Fetching {}", url);

        let start = Instant::now();
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            debug!("Post {} returned status {}. Skipping.", id, status);
            return Ok(None);
        }

        let body = response.bytes().await?;
        let post = serde_json::from_slice::<DanbooruPost>(&body)
            .map_err(|source| SamplerError::InvalidServerResponse { id, source })?;

        debug!("Post {} fetched in {:?}", id, start.elapsed());
        Ok(Some(post))
    }
}
