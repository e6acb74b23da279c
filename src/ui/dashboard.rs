//! Dashboard rendering.
//!
//! Displays record counts and the quick actions available from the
//! dashboard screen.

use crate::app::App;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the dashboard screen.
pub fn render_dashboard(app: &App, area: Rect, buf: &mut Buffer) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(chunks[0]);

    render_stat("Total Tenants", app.stats.tenants, columns[0], buf);
    render_stat("Total Properties", app.stats.properties, columns[1], buf);
    render_stat("Total Transactions", app.stats.transactions, columns[2], buf);

    let actions = Paragraph::new(vec![
        Line::from(Span::styled(
            "Quick Actions",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  2      manage tenants"),
        Line::from("  r      refresh statistics"),
        Line::from("  b      download database backup"),
    ])
    .block(Block::default().borders(Borders::ALL));

    Widget::render(actions, chunks[1], buf);
}

fn render_stat(title: &str, value: u64, area: Rect, buf: &mut Buffer) {
    let paragraph = Paragraph::new(Span::styled(
        value.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().title(title).borders(Borders::ALL));

    Widget::render(paragraph, area, buf);
}
