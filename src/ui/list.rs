//! Tenant table rendering.
//!
//! Displays the filtered tenant page with selection highlighting and
//! contract-expiry flagging.

use crate::app::App;
use chrono::Utc;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{
        Block, Borders, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget,
    },
};

/// Render the tenant table.
///
/// # Details
/// One row per tenant on the filtered page, with columns ID, Name, Property,
/// Contact No, Rent and Contract Expiry. An expiry date inside the two-month
/// warning window is drawn red and bold. Shows a loading indicator while the
/// primary list fetch is in flight.
pub fn render_list(app: &App, area: Rect, buf: &mut Buffer) {
    let title = format!(
        "Tenants ({}/{}) | Page {}/{}",
        app.filtered_tenants.len(),
        app.total_tenants,
        app.page,
        app.total_pages
    );
    let block = Block::default().title(title).borders(Borders::ALL);

    if app.loading {
        let paragraph = Paragraph::new("Loading tenants...").block(block);
        Widget::render(paragraph, area, buf);
        return;
    }

    if app.filtered_tenants.is_empty() {
        let paragraph = Paragraph::new("No tenants to display").block(block);
        Widget::render(paragraph, area, buf);
        return;
    }

    let now = Utc::now();
    let rows: Vec<Row> = app
        .filtered_tenants
        .iter()
        .map(|tenant| {
            let expiry = tenant.contract_expiry_date.clone().unwrap_or_default();
            let expiry_cell = if tenant.expires_soon(now) {
                Cell::from(expiry).style(
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Cell::from(expiry)
            };
            Row::new(vec![
                Cell::from(tenant.id.to_string()),
                Cell::from(tenant.name.clone()),
                Cell::from(tenant.property_address.clone().unwrap_or_default()),
                Cell::from(tenant.contact_no.clone().unwrap_or_default()),
                Cell::from(tenant.rent.map(|r| r.to_string()).unwrap_or_default()),
                expiry_cell,
            ])
        })
        .collect();

    let header = Row::new(["ID", "Name", "Property", "Contact No", "Rent", "Contract Expiry"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let widths = [
        Constraint::Length(6),
        Constraint::Percentage(22),
        Constraint::Percentage(28),
        Constraint::Percentage(16),
        Constraint::Length(10),
        Constraint::Percentage(18),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        );

    let selected = app
        .selected_index
        .min(app.filtered_tenants.len().saturating_sub(1));
    let mut state = TableState::default();
    state.select(Some(selected));

    StatefulWidget::render(table, area, buf, &mut state);
}
