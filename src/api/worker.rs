//! API worker thread
//!
//! Serves search-service requests in a background thread to avoid blocking
//! the UI. Receives requests via channel, performs the HTTP call, and sends
//! the outcome back to the main thread. Exactly one response is sent per
//! request; success and failure are mutually exclusive.

use std::sync::mpsc::{Receiver, Sender};

use super::client::ApiClient;
use super::types::{Article, IndexStats, SearchResponse};

/// Request messages sent to the worker thread
///
/// `request_id` correlates log lines with responses; it is never used to
/// filter or cancel anything. Overlapping requests resolve in arrival order
/// and the later response wins.
#[derive(Debug)]
pub enum ApiRequest {
    /// Run a semantic search
    Search {
        query: String,
        k: u32,
        request_id: u64,
    },
    /// Fetch a full article by id
    Article { id: String, request_id: u64 },
    /// Fetch index statistics
    Stats { request_id: u64 },
}

/// Response messages received from the worker thread
#[derive(Debug)]
pub enum ApiResponse {
    SearchResults {
        response: SearchResponse,
        request_id: u64,
    },
    SearchFailed {
        error: String,
        request_id: u64,
    },
    ArticleLoaded {
        article: Article,
        request_id: u64,
    },
    ArticleFailed {
        error: String,
        request_id: u64,
    },
    StatsLoaded {
        stats: IndexStats,
        request_id: u64,
    },
    StatsFailed {
        error: String,
        request_id: u64,
    },
}

/// Spawn the API worker thread
///
/// The thread owns a current-thread tokio runtime and serves one request at
/// a time until the request channel closes.
pub fn spawn_worker(
    client: ApiClient,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(client, request_rx, response_tx);
    });
}

/// Main worker loop, runs until the request channel is closed
fn worker_loop(
    client: ApiClient,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Failed to start API worker runtime: {}", e);
            fail_all_requests(&request_rx, &response_tx, &e.to_string());
            return;
        }
    };

    while let Ok(request) = request_rx.recv() {
        let response = match request {
            ApiRequest::Search {
                query,
                k,
                request_id,
            } => match runtime.block_on(client.search(&query, k)) {
                Ok(response) => ApiResponse::SearchResults {
                    response,
                    request_id,
                },
                Err(e) => ApiResponse::SearchFailed {
                    error: e.to_string(),
                    request_id,
                },
            },
            ApiRequest::Article { id, request_id } => {
                match runtime.block_on(client.article(&id)) {
                    Ok(article) => ApiResponse::ArticleLoaded {
                        article,
                        request_id,
                    },
                    Err(e) => ApiResponse::ArticleFailed {
                        error: e.to_string(),
                        request_id,
                    },
                }
            }
            ApiRequest::Stats { request_id } => match runtime.block_on(client.stats()) {
                Ok(stats) => ApiResponse::StatsLoaded { stats, request_id },
                Err(e) => ApiResponse::StatsFailed {
                    error: e.to_string(),
                    request_id,
                },
            },
        };

        if response_tx.send(response).is_err() {
            // Main thread disconnected, stop serving
            return;
        }
    }

    log::debug!("API worker thread shutting down");
}

/// Answer every remaining request with a failure when no runtime is available
fn fail_all_requests(
    request_rx: &Receiver<ApiRequest>,
    response_tx: &Sender<ApiResponse>,
    error: &str,
) {
    while let Ok(request) = request_rx.recv() {
        let response = match request {
            ApiRequest::Search { request_id, .. } => ApiResponse::SearchFailed {
                error: error.to_string(),
                request_id,
            },
            ApiRequest::Article { request_id, .. } => ApiResponse::ArticleFailed {
                error: error.to_string(),
                request_id,
            },
            ApiRequest::Stats { request_id } => ApiResponse::StatsFailed {
                error: error.to_string(),
                request_id,
            },
        };

        if response_tx.send(response).is_err() {
            return;
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
