use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let reminders = app.summary().active_reminders;
    let title = format!(" Reminders · {} pending ", reminders.len());

    if reminders.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No active reminders", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Tick \"remind me\" when adding an expense",
                theme::dim_style(),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(title, theme::title_style()));
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Due", "Remind on", "Name", "Category", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let cursor = app.reminder_cursor;
    let rows: Vec<Row> = reminders
        .iter()
        .enumerate()
        .skip(cursor.scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let style = if i == cursor.index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            let due_style = if txn.reminder_lead_days <= 1 {
                theme::urgent_style()
            } else {
                theme::normal_style()
            };
            let remind_on = txn
                .remind_on()
                .map(|d| d.format("%d/%m/%Y").to_string())
                .unwrap_or_default();

            Row::new(vec![
                Cell::from(Span::styled(format!("  {}", txn.due_label()), due_style)),
                Cell::from(remind_on),
                Cell::from(truncate(&txn.name, 36)),
                Cell::from(truncate(&txn.category, 16)),
                Cell::from(Span::styled(format_amount(txn.amount), theme::expense_style())),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Length(12),
        Constraint::Min(20),
        Constraint::Length(18),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style())
            .title(Span::styled(title, theme::title_style())),
    );

    f.render_widget(table, area);
}
