use ratatui::backend::TestBackend;
use ratatui::Terminal;

use super::truncate_to_width;
use crate::api::{Article, ApiResponse};
use crate::app::{App, Focus};
use crate::test_utils::test_helpers::{article, hit, search_response, test_app};

const TEST_WIDTH: u16 = 80;
const TEST_HEIGHT: u16 = 24;

/// Render the app into a plain string for assertions
fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            match buffer.cell((x, y)) {
                Some(cell) => out.push_str(cell.symbol()),
                None => out.push(' '),
            }
        }
        out.push('\n');
    }
    out
}

fn app_with_two_results() -> App {
    let mut app = test_app();
    app.handle_response(ApiResponse::SearchResults {
        response: search_response(
            vec![hit("a1", "First headline", 0.92), hit("a2", "Second headline", 0.81)],
            4.2,
        ),
        request_id: 1,
    });
    app
}

#[test]
fn test_no_latency_line_before_first_search() {
    let mut app = test_app();

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("MiniVector Search"));
    assert!(output.contains(" Results "));
    assert!(!output.contains("Found "));
}

#[test]
fn test_results_view_shows_rank_score_and_latency() {
    let mut app = app_with_two_results();

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("Found 2 results in 4.2ms"));
    assert!(output.contains("#1"));
    assert!(output.contains("#2"));
    assert!(output.contains("score 0.920"));
    assert!(output.contains("score 0.810"));
    assert!(output.contains("First headline"));
    assert!(output.contains("Second headline"));
}

#[test]
fn test_results_render_in_stored_order() {
    let mut app = app_with_two_results();

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    let first = output.find("First headline").unwrap();
    let second = output.find("Second headline").unwrap();
    assert!(first < second);
}

#[test]
fn test_searching_status_while_loading() {
    let mut app = test_app();
    app.loading = true;

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    // No search has completed yet, so there is no latency line to keep
    assert!(output.contains("Searching..."));
    assert!(!output.contains("Found "));
}

#[test]
fn test_latency_line_stays_while_next_search_runs() {
    let mut app = app_with_two_results();
    app.loading = true;

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    // Once shown, the latency line is never hidden; the in-flight notice
    // renders alongside it
    assert!(output.contains("Found 2 results in 4.2ms"));
    assert!(output.contains("Searching..."));
}

#[test]
fn test_article_loading_status() {
    let mut app = app_with_two_results();
    app.article_loading = true;

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    // Still the search view, latency line intact next to the notice
    assert!(output.contains("Loading article..."));
    assert!(output.contains("Found 2 results in 4.2ms"));
    assert!(output.contains("First headline"));
}

#[test]
fn test_article_view_replaces_search_view() {
    let mut app = app_with_two_results();
    app.handle_response(ApiResponse::ArticleLoaded {
        article: article("a1"),
        request_id: 2,
    });

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    // Category is shown upper-cased, display only
    assert!(output.contains("WORLD"));
    assert!(output.contains("Article a1"));
    assert!(output.contains("Full body text."));
    assert!(!output.contains("Found 2 results"));
}

#[test]
fn test_stored_category_is_not_mutated_by_rendering() {
    let mut app = app_with_two_results();
    app.handle_response(ApiResponse::ArticleLoaded {
        article: article("a1"),
        request_id: 2,
    });

    let _ = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert_eq!(
        app.selected_article.as_ref().unwrap().category,
        "World"
    );
}

#[test]
fn test_article_without_text_shows_placeholder() {
    let mut app = test_app();
    app.handle_response(ApiResponse::ArticleLoaded {
        article: Article {
            id: "a9".to_string(),
            category: "Tech".to_string(),
            title: "No body".to_string(),
            text: None,
            full_text: None,
            text_preview: None,
        },
        request_id: 1,
    });

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("No text available."));
}

#[test]
fn test_article_body_priority_in_view() {
    let mut app = test_app();
    app.handle_response(ApiResponse::ArticleLoaded {
        article: Article {
            id: "a1".to_string(),
            category: "World".to_string(),
            title: "T".to_string(),
            text: Some("canonical body".to_string()),
            full_text: Some("fallback body".to_string()),
            text_preview: None,
        },
        request_id: 1,
    });

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("canonical body"));
    assert!(!output.contains("fallback body"));
}

#[test]
fn test_header_shows_index_stats_when_known() {
    let mut app = test_app();
    app.handle_response(ApiResponse::StatsLoaded {
        stats: crate::api::IndexStats {
            num_vectors: 100000,
            dimension: 384,
        },
        request_id: 1,
    });

    let output = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    assert!(output.contains("100000 articles indexed"));
}

#[test]
fn test_focused_result_is_highlighted_without_state_change() {
    let mut app = app_with_two_results();
    app.focus = Focus::ResultsPane;
    app.cursor = 1;

    let _ = render_to_string(&mut app, TEST_WIDTH, TEST_HEIGHT);

    // Rendering derives selection from the cursor, it never writes it back
    assert_eq!(app.cursor, 1);
}

#[test]
fn test_truncate_passes_short_text_through() {
    assert_eq!(truncate_to_width("short", 20), "short");
    assert_eq!(truncate_to_width("", 0), "");
}

#[test]
fn test_truncate_cuts_long_text_with_ellipsis() {
    let out = truncate_to_width("a long preview that does not fit", 12);
    assert!(out.ends_with("..."));
    assert!(out.len() <= 12);
}

#[test]
fn test_truncate_clamps_ellipsis_to_tiny_widths() {
    assert_eq!(truncate_to_width("abcdef", 2), "..");
    assert_eq!(truncate_to_width("abcdef", 1), ".");
    assert_eq!(truncate_to_width("abcdef", 0), "");
}

#[test]
fn test_truncate_respects_wide_characters() {
    // Each CJK character is two columns wide
    let out = truncate_to_width("日本語のテキスト", 9);
    assert!(out.ends_with("..."));
    // 3 columns of ellipsis + at most 6 columns of text
    assert!(unicode_width::UnicodeWidthStr::width(out.as_str()) <= 9);
}
