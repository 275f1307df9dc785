use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_signed, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let records = app.ledger.records();
    if records.is_empty() {
        let msg = if let Some(err) = app.load_error() {
            vec![
                Line::from(""),
                Line::from(Span::styled(err.to_string(), theme::error_style())),
                Line::from(""),
                Line::from(Span::styled("Retry with :refresh", theme::dim_style())),
            ]
        } else if app.is_loading() {
            vec![Line::from(""), Line::from(Span::styled("Loading…", theme::dim_style()))]
        } else {
            vec![
                Line::from(""),
                Line::from(Span::styled("No transactions yet", theme::dim_style())),
                Line::from(""),
                Line::from(Span::styled(
                    "Press a, or :add Alquiler 850",
                    theme::dim_style(),
                )),
            ]
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(" Transactions (0) ", theme::title_style()));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Name", "Category", "Amount", "Alert"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let cursor = app.transaction_cursor;
    let rows: Vec<Row> = records
        .iter()
        .enumerate()
        .skip(cursor.scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let amount_style = if txn.is_income() {
                theme::income_style()
            } else {
                theme::expense_style()
            };

            let style = if i == cursor.index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let alert = if txn.has_reminder {
                txn.due_label()
            } else {
                String::new()
            };

            Row::new(vec![
                Cell::from(format!(
                    "  {}",
                    txn.created_at.with_timezone(&chrono::Local).format("%d/%m/%Y")
                )),
                Cell::from(truncate(&txn.name, 36)),
                Cell::from(truncate(&txn.category, 16)),
                Cell::from(Span::styled(format_signed(txn.signed_amount()), amount_style)),
                Cell::from(Span::styled(alert, theme::urgent_style())),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Min(20),
        Constraint::Length(18),
        Constraint::Length(14),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(
                format!(" Transactions ({}) ", records.len()),
                theme::title_style(),
            )),
    );

    f.render_widget(table, area);
}
