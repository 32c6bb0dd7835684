#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Receiver};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::api::{ApiRequest, Article, SearchHit, SearchResponse};
    use crate::app::App;
    use crate::config::Config;

    pub fn test_app() -> App {
        App::new(&Config::default())
    }

    /// Test app wired to a request channel so tests can inspect outgoing
    /// requests; no worker thread is running
    pub fn test_app_with_channel() -> (App, Receiver<ApiRequest>) {
        let (tx, rx) = mpsc::channel();
        let mut app = test_app();
        app.request_tx = Some(tx);
        (app, rx)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Type a string into the query box, one key at a time
    pub fn type_query(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key_event(key(KeyCode::Char(ch)));
        }
    }

    pub fn hit(id: &str, title: &str, score: f64) -> SearchHit {
        SearchHit {
            id: id.to_string(),
            title: title.to_string(),
            category: "World".to_string(),
            text_preview: format!("{} preview", title),
            score,
            url: None,
        }
    }

    pub fn search_response(results: Vec<SearchHit>, took_ms: f64) -> SearchResponse {
        SearchResponse {
            query: String::new(),
            results,
            took_ms,
        }
    }

    pub fn article(id: &str) -> Article {
        Article {
            id: id.to_string(),
            category: "World".to_string(),
            title: format!("Article {}", id),
            text: Some("Full body text.".to_string()),
            full_text: None,
            text_preview: None,
        }
    }
}
