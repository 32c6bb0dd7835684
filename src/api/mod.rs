//! Client side of the MiniVector search service
//!
//! Wire types, the HTTP client, and the background worker thread that keeps
//! network calls off the UI thread.

use thiserror::Error;

mod client;
mod types;
mod worker;

pub use client::ApiClient;
pub use types::{Article, IndexStats, SearchHit, SearchRequest, SearchResponse};
pub use worker::{spawn_worker, ApiRequest, ApiResponse};

/// Errors at the search service boundary
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network error during a request
    #[error("Network error: {0}")]
    Network(String),

    /// Service returned an error response
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Failed to decode a response body
    #[error("Parse error: {0}")]
    Parse(String),
}
