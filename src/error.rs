//! Error types for fetching and projecting driver standings.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Connection, timeout or body-read failure, after retries were exhausted.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed with HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("response from {url} is not valid JSON: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The API answered with a document whose structure we do not recognise.
    #[error("unexpected response shape: {0}")]
    DataShape(String),

    #[error("No standings found for {year}.")]
    NotFound { year: i32 },

    #[error("standings record #{index} is missing field `{field}`")]
    FieldMissing { index: usize, field: &'static str },
}
