use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::state::{App, Focus};

impl App {
    /// Render the UI
    ///
    /// Derived from the session state alone: the article view when an
    /// article is open, the search view otherwise.
    pub fn render(&mut self, frame: &mut Frame) {
        if self.selected_article.is_some() {
            self.render_article_view(frame);
        } else {
            self.render_search_view(frame);
        }
    }

    /// Render the search view: header, query box, status line, result list
    fn render_search_view(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Query input
            Constraint::Length(1), // Status / latency line
            Constraint::Min(1),    // Result list
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

        self.render_header(frame, layout[0]);
        self.render_query_box(frame, layout[1]);
        self.render_status_line(frame, layout[2]);
        self.render_results(frame, layout[3]);

        let hints = Paragraph::new("Enter: search   Tab: results   Esc: quit")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hints, layout[4]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title = match &self.stats {
            Some(stats) => format!(
                "MiniVector Search ({} articles indexed)",
                stats.num_vectors
            ),
            None => "MiniVector Search".to_string(),
        };

        let header = Paragraph::new(title).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(header, area);
    }

    fn render_query_box(&mut self, frame: &mut Frame, area: Rect) {
        // Set border color based on focus
        let border_color = if self.focus == Focus::QueryBox {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        self.input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.input, area);
    }

    /// One line: the latency of the last completed search, plus any
    /// in-flight notice
    ///
    /// The latency line only exists once a search has completed; it is never
    /// cleared afterwards, so it always reflects the most recent one, even
    /// while another request is running.
    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();

        if self.latency_ms > 0.0 {
            spans.push(Span::styled(
                format!(
                    "Found {} results in {:.1}ms",
                    self.results.len(),
                    self.latency_ms
                ),
                Style::default().fg(Color::Green),
            ));
        }

        let notice = if self.loading {
            Some("Searching...")
        } else if self.article_loading {
            Some("Loading article...")
        } else {
            None
        };
        if let Some(notice) = notice {
            if !spans.is_empty() {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(notice, Style::default().fg(Color::Yellow)));
        }

        let status = Paragraph::new(Line::from(spans));
        frame.render_widget(status, area);
    }

    /// Render the ranked result list in stored order
    fn render_results(&self, frame: &mut Frame, area: Rect) {
        let border_color = if self.focus == Focus::ResultsPane {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Results ")
            .border_style(Style::default().fg(border_color));

        let preview_width = area.width.saturating_sub(4) as usize;

        let items: Vec<ListItem> = self
            .results
            .iter()
            .enumerate()
            .map(|(index, hit)| {
                let header = Line::from(vec![
                    Span::styled(
                        format!("#{}", index + 1),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw("  "),
                    Span::styled(hit.category.clone(), Style::default().fg(Color::Magenta)),
                    Span::styled(
                        format!("  score {:.3}", hit.score),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]);
                let title = Line::from(Span::styled(
                    hit.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                let preview = Line::from(Span::styled(
                    truncate_to_width(&hit.text_preview, preview_width),
                    Style::default().fg(Color::Gray),
                ));

                ListItem::new(Text::from(vec![header, title, preview, Line::default()]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::Rgb(40, 40, 60)));

        // Per-frame selection state; the session only stores the cursor
        let mut list_state = ListState::default();
        if !self.results.is_empty() && self.focus == Focus::ResultsPane {
            list_state.select(Some(self.cursor));
        }

        frame.render_stateful_widget(list, area, &mut list_state);
    }

    /// Render the article view over the whole frame
    fn render_article_view(&self, frame: &mut Frame) {
        // Checked by the caller
        let Some(article) = &self.selected_article else {
            return;
        };

        let layout = Layout::vertical([
            Constraint::Min(1),    // Article
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Article ")
            .border_style(Style::default().fg(Color::Cyan));

        let mut lines = vec![
            Line::from(Span::styled(
                // Display-only transform; the stored category keeps its case
                article.category.to_uppercase(),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                article.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        lines.extend(
            article
                .body()
                .unwrap_or("No text available.")
                .lines()
                .map(|line| Line::from(line.to_string())),
        );

        let paragraph = Paragraph::new(Text::from(lines))
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.article_scroll, 0));
        frame.render_widget(paragraph, layout[0]);

        let hints = Paragraph::new("Esc: back to search   j/k: scroll")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hints, layout[1]);
    }
}

/// Truncate to the given display width, appending an ellipsis when cut
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + width > budget {
            break;
        }
        used += width;
        out.push(ch);
    }
    // The ellipsis cannot exceed what little width remains
    out.push_str(&"..."[..max_width.min(3)]);
    out
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
