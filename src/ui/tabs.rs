//! Tabs widget rendering.
//!
//! Displays the screen tabs across the top of the console.

use crate::app::{App, Tab};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the tabs widget.
///
/// # Details
/// Displays four tabs horizontally with the active one highlighted:
/// Dashboard, Tenants, Properties, Transactions.
pub fn render_tabs(app: &App, area: Rect, buf: &mut Buffer) {
    let tabs = [
        ("1 Dashboard", Tab::Dashboard),
        ("2 Tenants", Tab::Tenants),
        ("3 Properties", Tab::Properties),
        ("4 Transactions", Tab::Transactions),
    ];

    let mut spans = Vec::new();
    for (i, (label, tab)) in tabs.iter().enumerate() {
        let is_active = *tab == app.active_tab;
        let style = if is_active {
            Style::default()
                .fg(Color::Yellow)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }

        spans.push(Span::styled(format!(" {} ", label), style));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .title("Property Management")
                .borders(Borders::ALL),
        )
        .alignment(ratatui::layout::Alignment::Center);

    Widget::render(paragraph, area, buf);
}
