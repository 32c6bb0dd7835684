use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::{App, Focus};

/// Poll timeout for the event loop tick; keeps worker responses flowing
/// even while no keys are pressed
const TICK_MS: u64 = 50;

impl App {
    /// Handle terminal events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(Duration::from_millis(TICK_MS))? {
            return Ok(());
        }

        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl+C: exit from anywhere
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // The article view owns all keys while it is open
        if self.selected_article.is_some() {
            self.handle_article_key(key);
            return;
        }

        match self.focus {
            Focus::QueryBox => self.handle_query_key(key),
            Focus::ResultsPane => self.handle_results_key(key),
        }
    }

    /// Keys while the article view is open
    fn handle_article_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => self.close_article(),
            KeyCode::Down | KeyCode::Char('j') => {
                self.article_scroll = self.article_scroll.saturating_add(1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.article_scroll = self.article_scroll.saturating_sub(1);
            }
            KeyCode::PageDown => {
                self.article_scroll = self.article_scroll.saturating_add(10);
            }
            KeyCode::PageUp => {
                self.article_scroll = self.article_scroll.saturating_sub(10);
            }
            _ => {}
        }
    }

    /// Keys while the query box has focus
    fn handle_query_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_query(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Down if !self.results.is_empty() => {
                self.focus = Focus::ResultsPane;
            }
            KeyCode::Tab | KeyCode::Down => {}
            _ => {
                // Everything else edits the query
                self.input.input(key);
            }
        }
    }

    /// Keys while the result list has focus
    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.open_selected(),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.results.len() {
                    self.cursor += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                // Moving above the first result returns focus to the query box
                if self.cursor == 0 {
                    self.focus = Focus::QueryBox;
                } else {
                    self.cursor -= 1;
                }
            }
            KeyCode::Home | KeyCode::Char('g') => self.cursor = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.cursor = self.results.len().saturating_sub(1);
            }
            KeyCode::Tab | KeyCode::Char('/') => self.focus = Focus::QueryBox,
            KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
