use std::io;

use thiserror::Error;

/// Every error that can stop a dataset build.
///
/// A post that simply doesn't exist (non-2xx status) is not an error: the fetcher
/// reports it as absent and the builder skips it.
#[derive(Error, Debug)]
pub enum SamplerError {
    /// The requested amount of unique IDs cannot be drawn from the configured range.
    #[error("Cannot sample {count} unique post IDs from the range [{min}, {max}]")]
    InfeasibleSample { count: usize, min: u64, max: u64 },

    /// A setting is out of its accepted bounds.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Connection, TLS or body read failure while talking to the imageboard.
    #[error("Connection Error: {source}")]
    ConnectionError {
        #[from]
        source: reqwest::Error,
    },

    /// The imageboard answered with a body that isn't a post object.
    #[error("Post {id} returned an invalid response: {source}")]
    InvalidServerResponse {
        id: u64,
        #[source]
        source: serde_json::Error,
    },

    /// A post is missing a field required to build its mock record.
    #[error("Post {id} is missing an essential field {field}")]
    MissingField { id: u64, field: &'static str },

    #[error("Failed to serialize post list: {source}")]
    PostSerializationError {
        #[from]
        source: serde_json::Error,
    },

    #[error("Failed to write dataset file: {source}")]
    FileIOError {
        #[from]
        source: io::Error,
    },
}
