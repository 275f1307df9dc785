use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::ledger::Summary;
use crate::models::Transaction;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_signed, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Min(6),    // Recent + alerts
        ])
        .split(area);

    let summary = app.summary();
    render_summary_cards(f, chunks[0], &summary);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_recent(f, lower[0], app);
    render_alerts(f, lower[1], &summary);
}

fn render_summary_cards(f: &mut Frame, area: Rect, summary: &Summary) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    render_card(
        f,
        cards[0],
        "Income",
        format_amount(summary.total_income),
        theme::GREEN,
        format!("{} txns", summary.income_count),
    );
    render_card(
        f,
        cards[1],
        "Expenses",
        format_amount(summary.total_expense),
        theme::RED,
        format!("{} txns", summary.expense_count),
    );
    render_card(
        f,
        cards[2],
        "Balance",
        format_amount(summary.balance),
        if summary.balance >= Decimal::ZERO {
            theme::GREEN
        } else {
            theme::RED
        },
        String::new(),
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, display: String, color: Color, subtitle: String) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(format!(" {title} "), theme::title_style()));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            display,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_recent(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style())
        .title(Span::styled(" Recent ", theme::title_style()));

    let lines: Vec<Line> = if app.is_loading() {
        vec![Line::from(""), Line::from(Span::styled("Loading…", theme::dim_style()))]
    } else if let Some(err) = app.load_error() {
        vec![
            Line::from(""),
            Line::from(Span::styled(err.to_string(), theme::error_style())),
            Line::from(""),
            Line::from(Span::styled("Retry with :refresh", theme::dim_style())),
        ]
    } else if app.ledger.is_empty() {
        vec![
            Line::from(""),
            Line::from(Span::styled("No transactions yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled("Press a to add one", theme::dim_style())),
        ]
    } else {
        let name_width = (area.width as usize).saturating_sub(24).max(8);
        app.ledger
            .records()
            .iter()
            .take(area.height.saturating_sub(2) as usize)
            .map(|txn| recent_line(txn, name_width))
            .collect()
    };

    let centered = app.is_loading() || app.load_error().is_some() || app.ledger.is_empty();
    let para = Paragraph::new(lines).block(block);
    f.render_widget(if centered { para.centered() } else { para }, area);
}

fn recent_line(txn: &Transaction, name_width: usize) -> Line<'static> {
    let style = if txn.is_income() {
        theme::income_style()
    } else {
        theme::expense_style()
    };
    Line::from(vec![
        Span::styled(
            format!(" {:<width$}", truncate(&txn.name, name_width), width = name_width),
            theme::normal_style(),
        ),
        Span::styled(format!("{:>14}", format_signed(txn.signed_amount())), style),
        Span::styled(
            if txn.has_reminder { " ⏰" } else { "" },
            theme::urgent_style(),
        ),
    ])
}

fn render_alerts(f: &mut Frame, area: Rect, summary: &Summary) {
    let pending = summary.active_reminders.len();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if pending > 0 {
            Style::default().fg(theme::AMBER)
        } else {
            theme::border_style()
        })
        .title(Span::styled(
            format!(" Upcoming alerts · {pending} pending "),
            theme::title_style(),
        ));

    if pending == 0 {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("Nothing to remind you about", theme::dim_style())),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let name_width = (area.width as usize).saturating_sub(16).max(6);
    let lines: Vec<Line> = summary
        .active_reminders
        .iter()
        .take(area.height.saturating_sub(2) as usize)
        .map(|txn| {
            let label_style = if txn.reminder_lead_days <= 1 {
                theme::urgent_style()
            } else {
                theme::dim_style()
            };
            Line::from(vec![
                Span::styled(
                    format!(" {:<width$}", truncate(&txn.name, name_width), width = name_width),
                    theme::normal_style(),
                ),
                Span::styled(format!(" {:>12}", txn.due_label()), label_style),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}
