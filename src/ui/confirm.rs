//! Delete confirmation prompt rendering.

use crate::app::App;
use crate::ui::popup_area;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Render the delete confirmation prompt.
///
/// # Details
/// The delete call is only issued after the user confirms here; declining
/// performs no network call at all.
pub fn render_confirm_delete(app: &App, area: Rect, buf: &mut Buffer) {
    let Some(tenant) = &app.pending_delete else {
        return;
    };

    let popup = popup_area(area, 40, 20);
    Widget::render(Clear, popup, buf);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Delete tenant \"{}\"?", tenant.name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "y: delete   n/Esc: cancel",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title("Confirm Delete")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Red)),
        );

    Widget::render(paragraph, popup, buf);
}
