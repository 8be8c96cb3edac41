//! Anteater Facts - random anteater facts in your terminal
//!
//! A terminal UI application that shows a random anteater fact on demand,
//! prefetching facts on startup and falling back to a built-in list when the
//! fact page is unreachable.

mod app;
mod cli;
mod facts;
mod ui;

use std::io;
use std::panic;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::{App, AppState, FETCH_FAILURE_TEXT};
use cli::{Cli, StartupConfig};
use facts::{FactProvider, FactSource};

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Initializes tracing with an env-filter, defaulting to warnings only
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

/// Prints a single random fact to stdout (--fact flag)
async fn print_single_fact() -> i32 {
    let mut provider = FactProvider::new();
    match provider.random_fact().await {
        Ok(fact) => {
            println!("{fact}");
            0
        }
        Err(err) => {
            tracing::warn!("failed to get a fact: {err}");
            eprintln!("{FETCH_FAILURE_TEXT}");
            1
        }
    }
}

/// Renders the UI based on the current application state
fn render_ui<S: FactSource>(frame: &mut ratatui::Frame, app: &App<S>) {
    match app.state {
        AppState::Loading => {
            render_loading(frame);
        }
        AppState::Ready => {
            ui::render_fact_view(frame, app);
        }
    }
}

/// Renders a loading message while facts are being prefetched
fn render_loading(frame: &mut ratatui::Frame) {
    use ratatui::{
        layout::{Alignment, Constraint, Direction, Layout},
        style::{Color, Style},
        widgets::Paragraph,
    };

    let area = frame.area();

    // Center the loading message vertically
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(area);

    let loading_text = Paragraph::new("Fetching anteater facts...")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);

    frame.render_widget(loading_text, chunks[1]);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = StartupConfig::from_cli(&cli);

    init_tracing();

    if config.print_single_fact {
        std::process::exit(print_single_fact().await);
    }

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app instance
    let mut app = App::new();

    // Initial render to show loading state
    terminal.draw(|f| render_ui(f, &app))?;

    // Warm the fact cache before first interaction
    app.prefetch().await;

    // Main event loop
    loop {
        // Render UI
        terminal.draw(|f| render_ui(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        // Serve a requested fact
        if app.fact_requested {
            app.fact_requested = false;
            app.show_random_fact().await;
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
