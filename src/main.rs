use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;

use mvsearch::app::App;
use mvsearch::cli::Cli;
use mvsearch::config::{self, Config};

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Logging goes to stderr, which would corrupt the TUI in normal use
    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();

    // Load config before entering raw mode so errors print normally
    let config = config::load(&cli)?;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, &config);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, config: &Config) -> Result<()> {
    let mut app = App::new(config);
    app.start_worker(config);
    app.request_stats();

    while !app.should_quit() {
        // Apply any worker responses that arrived since the last tick
        app.poll_responses();

        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Handle events (returns after the poll timeout when idle)
        app.handle_events()?;
    }

    Ok(())
}
