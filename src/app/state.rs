use std::sync::mpsc::{self, Receiver, Sender};

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

use crate::api::{self, ApiClient, ApiRequest, ApiResponse, Article, IndexStats, SearchHit};
use crate::config::Config;

/// Which pane has focus in the search view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    QueryBox,
    ResultsPane,
}

/// Application state
///
/// Owns the whole session: the query box, the current result set, and the
/// article overlay. The rendered view is derived from this state alone, and
/// `selected_article` decides which of the two views is visible. Remote
/// failures reset the loading flags and leave everything else untouched;
/// they are logged, never shown.
pub struct App {
    /// Query input, single line
    pub input: TextArea<'static>,
    pub focus: Focus,
    /// Current result set, in the order the service ranked it
    pub results: Vec<SearchHit>,
    /// Service time of the most recent completed search; 0.0 before the first
    pub latency_ms: f64,
    /// Search request in flight
    pub loading: bool,
    /// Cursor into `results` for keyboard navigation
    pub cursor: usize,
    /// Open article, if any
    pub selected_article: Option<Article>,
    /// Article fetch in flight
    pub article_loading: bool,
    /// Scroll offset inside the article view
    pub article_scroll: u16,
    /// Index statistics for the header, once known
    pub stats: Option<IndexStats>,
    /// Number of results requested per search
    pub k: u32,
    pub should_quit: bool,
    /// Channel to send requests to the worker thread
    pub request_tx: Option<Sender<ApiRequest>>,
    /// Channel to receive responses from the worker thread
    pub response_rx: Option<Receiver<ApiResponse>>,
    /// Monotonic counter attached to requests for log correlation.
    /// Responses are never filtered by it: when two searches overlap,
    /// the later-resolving one wins.
    pub request_id: u64,
}

impl App {
    /// Create a new App instance; no worker is attached yet
    pub fn new(config: &Config) -> Self {
        let mut input = TextArea::default();

        // Configure for single-line input
        input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(Color::Cyan)),
        );

        // Remove default underline from cursor line
        input.set_cursor_line_style(Style::default());
        input.set_placeholder_text("Search for anything...");

        Self {
            input,
            focus: Focus::QueryBox,
            results: Vec::new(),
            latency_ms: 0.0,
            loading: false,
            cursor: 0,
            selected_article: None,
            article_loading: false,
            article_scroll: 0,
            stats: None,
            k: config.search.k,
            should_quit: false,
            request_tx: None,
            response_rx: None,
            request_id: 0,
        }
    }

    /// Spawn the API worker and wire its channels into the session
    pub fn start_worker(&mut self, config: &Config) {
        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();

        api::spawn_worker(
            ApiClient::new(config.server.url.clone()),
            request_rx,
            response_tx,
        );

        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the current query text
    pub fn query(&self) -> &str {
        self.input.lines()[0].as_ref()
    }

    fn next_request_id(&mut self) -> u64 {
        self.request_id += 1;
        self.request_id
    }

    fn send(&self, request: ApiRequest) {
        if let Some(tx) = &self.request_tx {
            if tx.send(request).is_err() {
                log::error!("API worker disconnected");
            }
        }
    }

    /// Submit the current query
    ///
    /// Whitespace-only input is a no-op: no state change, no request.
    /// Otherwise sends exactly one search request. An earlier search may
    /// still be in flight; nothing guards against that, the later-resolving
    /// response overwrites the result set.
    pub fn submit_query(&mut self) {
        let query = self.query().trim().to_string();
        if query.is_empty() {
            return;
        }

        let request_id = self.next_request_id();
        log::debug!("search {:?} (request {})", query, request_id);
        self.loading = true;
        self.send(ApiRequest::Search {
            query,
            k: self.k,
            request_id,
        });
    }

    /// Fetch the full article behind a result
    pub fn open_article(&mut self, id: &str) {
        let request_id = self.next_request_id();
        log::debug!("article {} (request {})", id, request_id);
        self.article_loading = true;
        self.send(ApiRequest::Article {
            id: id.to_string(),
            request_id,
        });
    }

    /// Open the article under the cursor, if any
    pub fn open_selected(&mut self) {
        if let Some(hit) = self.results.get(self.cursor) {
            let id = hit.id.clone();
            self.open_article(&id);
        }
    }

    /// Dismiss the article view
    ///
    /// Total: safe to call in any state. The search state underneath is left
    /// exactly as it was when the article was opened.
    pub fn close_article(&mut self) {
        self.selected_article = None;
        self.article_scroll = 0;
    }

    /// Ask the service for index statistics (header display only)
    pub fn request_stats(&mut self) {
        let request_id = self.next_request_id();
        self.send(ApiRequest::Stats { request_id });
    }

    /// Drain worker responses without blocking
    pub fn poll_responses(&mut self) {
        loop {
            let response = match &self.response_rx {
                Some(rx) => match rx.try_recv() {
                    Ok(response) => response,
                    Err(_) => return,
                },
                None => return,
            };
            self.handle_response(response);
        }
    }

    /// Apply one worker response to the session state
    ///
    /// Failures are logged and otherwise leave the previous state in place:
    /// a failed search keeps the old results on screen, a failed article
    /// fetch keeps the user on the search view.
    pub fn handle_response(&mut self, response: ApiResponse) {
        match response {
            ApiResponse::SearchResults {
                response,
                request_id,
            } => {
                log::debug!(
                    "search ok: {} results in {:.1}ms (request {})",
                    response.results.len(),
                    response.took_ms,
                    request_id
                );
                self.results = response.results;
                self.latency_ms = response.took_ms;
                self.loading = false;
                if self.cursor >= self.results.len() {
                    self.cursor = self.results.len().saturating_sub(1);
                }
            }
            ApiResponse::SearchFailed { error, request_id } => {
                log::error!("Search failed (request {}): {}", request_id, error);
                self.loading = false;
            }
            ApiResponse::ArticleLoaded {
                article,
                request_id,
            } => {
                log::debug!("article ok: {} (request {})", article.id, request_id);
                self.selected_article = Some(article);
                self.article_loading = false;
                self.article_scroll = 0;
            }
            ApiResponse::ArticleFailed { error, request_id } => {
                log::error!("Failed to load article (request {}): {}", request_id, error);
                self.article_loading = false;
            }
            ApiResponse::StatsLoaded { stats, request_id } => {
                log::debug!(
                    "stats: {} vectors, dim {} (request {})",
                    stats.num_vectors,
                    stats.dimension,
                    request_id
                );
                self.stats = Some(stats);
            }
            ApiResponse::StatsFailed { error, request_id } => {
                log::error!(
                    "Failed to load index stats (request {}): {}",
                    request_id,
                    error
                );
            }
        }
    }
}
