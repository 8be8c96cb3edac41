//! Fact box view
//!
//! Renders the fact box with the current fact, plus a footer with key hints
//! and the time of the last refresh.

use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::facts::FactSource;

/// Renders the fact view
pub fn render<S: FactSource>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Fact box
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_fact_box(frame, app, chunks[0]);
    render_footer(frame, app, chunks[1]);
}

/// Renders the bordered fact box with the current fact centered inside
fn render_fact_box<S: FactSource>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .title(" 🐜 Anteater Facts ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Center the fact vertically inside the box.
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Min(3),
            Constraint::Percentage(40),
        ])
        .split(inner);

    let fact = Paragraph::new(Line::from(Span::styled(
        app.fact_text.clone(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    frame.render_widget(fact, vertical[1]);
}

/// Renders the footer with key hints and the last refresh time
fn render_footer<S: FactSource>(frame: &mut Frame, app: &App<S>, area: Rect) {
    let mut spans = vec![
        Span::styled(" f/Space ", Style::default().fg(Color::Yellow)),
        Span::raw("new fact  "),
        Span::styled("q/Esc ", Style::default().fg(Color::Yellow)),
        Span::raw("quit"),
    ];

    if let Some(refreshed) = app.last_refresh() {
        let local = refreshed.with_timezone(&Local);
        spans.push(Span::styled(
            format!("  refreshed {}", local.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
    frame.render_widget(footer, area);
}
