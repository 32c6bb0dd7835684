//! HTTP client for the search service

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::types::{Article, IndexStats, SearchRequest, SearchResponse};
use super::ApiError;

/// Thin wrapper over reqwest bound to one service base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST /search`
    pub async fn search(&self, query: &str, k: u32) -> Result<SearchResponse, ApiError> {
        let request = SearchRequest {
            query: query.to_string(),
            k,
        };

        let response = self
            .http
            .post(format!("{}/search", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::decode(response).await
    }

    /// `GET /article/{id}`
    pub async fn article(&self, id: &str) -> Result<Article, ApiError> {
        let response = self
            .http
            .get(format!("{}/article/{}", self.base_url, id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::decode(response).await
    }

    /// `GET /stats`
    pub async fn stats(&self) -> Result<IndexStats, ApiError> {
        let response = self
            .http
            .get(format!("{}/stats", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::decode(response).await
    }

    /// Map non-2xx statuses to `ApiError::Api`, then decode the JSON body
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Api {
                code: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}
