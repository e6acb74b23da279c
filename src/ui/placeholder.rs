//! Placeholder panels for the screens not yet implemented.

use crate::app::Tab;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the placeholder panel for the Properties or Transactions tab.
pub fn render_placeholder(tab: Tab, area: Rect, buf: &mut Buffer) {
    let (title, items): (&str, &[&str]) = match tab {
        Tab::Properties => (
            "Properties Management",
            &[
                "List of all properties",
                "Add new property form",
                "Edit property functionality",
                "Delete property confirmation",
                "Property details and statistics",
            ],
        ),
        Tab::Transactions => (
            "Transactions Management",
            &[
                "List of all transactions",
                "Add new transaction form",
                "Edit transaction functionality",
                "Delete transaction confirmation",
                "Transaction history and reports",
            ],
        ),
        _ => return,
    };

    let mut lines = vec![
        Line::from("This screen will be implemented here."),
        Line::from(""),
        Line::from("Planned:"),
    ];
    for item in items {
        lines.push(Line::from(format!("  - {}", item)));
    }

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().title(title).borders(Borders::ALL));

    Widget::render(paragraph, area, buf);
}
