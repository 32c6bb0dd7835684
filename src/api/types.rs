//! Wire types for the search service

use serde::{Deserialize, Serialize};

/// Body of a `POST /search` request
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub k: u32,
}

/// One ranked match
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    pub category: String,
    pub text_preview: String,
    pub score: f64,
    #[serde(default)]
    pub url: Option<String>,
}

/// Response of `POST /search`
///
/// `results` arrive in relevance order and the client never re-sorts them.
/// The service echoes the query back; `took_ms` is service time, display only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchHit>,
    pub took_ms: f64,
}

/// A full document fetched by id via `GET /article/{id}`
///
/// Any subset of the three text fields may be absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Article {
    pub id: String,
    pub category: String,
    pub title: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub full_text: Option<String>,
    #[serde(default)]
    pub text_preview: Option<String>,
}

impl Article {
    /// The canonical body: first present of `text`, `full_text`, `text_preview`
    ///
    /// `None` means the record carries no text at all.
    pub fn body(&self) -> Option<&str> {
        self.text
            .as_deref()
            .or(self.full_text.as_deref())
            .or(self.text_preview.as_deref())
    }
}

/// Index statistics from `GET /stats`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct IndexStats {
    pub num_vectors: u64,
    pub dimension: u64,
}
