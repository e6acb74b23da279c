//! Add/edit tenant modal rendering.
//!
//! Draws the form fields over the list, with the focused field highlighted
//! and the property selector showing the current choice.

use crate::app::App;
use crate::form::{FIELD_COUNT, FIELD_LABELS, PROPERTY_FIELD, TenantForm};
use crate::ui::popup_area;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Render the add/edit tenant modal.
pub fn render_form(app: &App, area: Rect, buf: &mut Buffer) {
    let popup = popup_area(area, 60, 80);
    Widget::render(Clear, popup, buf);

    let title = if app.form.is_editing() {
        "Edit Tenant"
    } else {
        "Add Tenant"
    };

    let mut lines = Vec::with_capacity(FIELD_COUNT + 2);
    for idx in 0..FIELD_COUNT {
        let focused = idx == app.form.focus;
        let marker = if TenantForm::is_required(idx) { "*" } else { " " };
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };

        let value = if idx == PROPERTY_FIELD {
            property_value(app)
        } else {
            app.form.field_text(idx).unwrap_or_default().to_string()
        };
        let value_style = Style::default().fg(if focused { Color::White } else { Color::Gray });
        let cursor = if focused && idx != PROPERTY_FIELD {
            "_"
        } else {
            ""
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{:<21}{} ", FIELD_LABELS[idx], marker), label_style),
            Span::styled(value, value_style),
            Span::styled(cursor, Style::default().fg(Color::Yellow)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: save  Tab/Down: next field  Left/Right: choose property  Esc: cancel",
        Style::default().fg(Color::Yellow),
    )));

    let paragraph =
        Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));

    Widget::render(paragraph, popup, buf);
}

fn property_value(app: &App) -> String {
    match app
        .form
        .property_idx
        .and_then(|idx| app.properties.get(idx))
    {
        Some(property) => format!("< {} >", property.address),
        None if app.properties.is_empty() => "No properties loaded".to_string(),
        None => "< Select Property >".to_string(),
    }
}
