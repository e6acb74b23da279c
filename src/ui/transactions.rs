//! Per-tenant transactions modal rendering.
//!
//! Displays the handed-off tenant's transactions and the server-computed
//! running balance.

use crate::app::App;
use crate::ui::popup_area;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Widget},
};

/// Render the transactions modal for the handed-off tenant.
pub fn render_transactions(app: &App, area: Rect, buf: &mut Buffer) {
    let Some((_, name)) = &app.tx_tenant else {
        return;
    };

    let popup = popup_area(area, 70, 70);
    Widget::render(Clear, popup, buf);

    let block = Block::default()
        .title(format!("Transactions for {}", name))
        .title_bottom(format!(
            "Balance: {:.2} | Esc: close",
            app.tx_report.total
        ))
        .borders(Borders::ALL);

    if app.tx_report.transactions.is_empty() {
        let paragraph = Paragraph::new("No transactions to display").block(block);
        Widget::render(paragraph, popup, buf);
        return;
    }

    let rows: Vec<Row> = app
        .tx_report
        .transactions
        .iter()
        .map(|tx| {
            Row::new(vec![
                Cell::from(tx.transaction_date.clone().unwrap_or_default()),
                Cell::from(tx.kind.clone()),
                Cell::from(tx.for_month.clone().unwrap_or_default()),
                Cell::from(format!("{:.2}", tx.amount)),
                Cell::from(tx.comments.clone().unwrap_or_default()),
            ])
        })
        .collect();

    let header = Row::new(["Date", "Type", "For Month", "Amount", "Comments"])
        .style(Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan));

    let widths = [
        Constraint::Length(12),
        Constraint::Percentage(25),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Percentage(35),
    ];

    let table = Table::new(rows, widths).header(header).block(block);

    Widget::render(table, popup, buf);
}
