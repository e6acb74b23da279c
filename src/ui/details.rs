//! Tenant details modal rendering.
//!
//! Read-only label/value listing of every attribute of one record.

use crate::app::App;
use crate::ui::popup_area;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Render the tenant details modal.
///
/// # Details
/// Every attribute is shown as a label/value pair in wire-field order, with
/// underscores in the labels rendered as spaces. Purely presentational.
pub fn render_details(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(tenant) = &app.details else {
        return;
    };

    let popup = popup_area(area, 60, 80);
    Widget::render(Clear, popup, buf);

    let mut lines: Vec<Line> = tenant
        .field_pairs()
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<22}", label.replace('_', " ")),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(value, Style::default().fg(Color::White)),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc: close",
        Style::default().fg(Color::Yellow),
    )));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Tenant Details").borders(Borders::ALL));

    Widget::render(paragraph, popup, buf);
}
