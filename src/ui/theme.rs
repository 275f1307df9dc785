use ratatui::style::{Color, Modifier, Style};

pub(crate) const HEADER_BG: Color = Color::Rgb(28, 27, 34);
pub(crate) const HEADER_FG: Color = Color::Rgb(230, 225, 215);
pub(crate) const ACCENT: Color = Color::Rgb(120, 190, 175);
pub(crate) const GREEN: Color = Color::Rgb(150, 215, 140);
pub(crate) const RED: Color = Color::Rgb(240, 130, 120);
pub(crate) const AMBER: Color = Color::Rgb(245, 195, 110);
pub(crate) const SURFACE: Color = Color::Rgb(44, 43, 52);
pub(crate) const TEXT: Color = Color::Rgb(230, 225, 215);
pub(crate) const TEXT_DIM: Color = Color::Rgb(135, 130, 140);
pub(crate) const BORDER: Color = Color::Rgb(72, 70, 84);
pub(crate) const COMMAND_BG: Color = Color::Rgb(20, 20, 26);

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(HEADER_FG)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

pub(crate) fn title_style() -> Style {
    Style::default().fg(TEXT_DIM).add_modifier(Modifier::BOLD)
}

pub(crate) fn section_style() -> Style {
    Style::default().fg(AMBER).add_modifier(Modifier::BOLD)
}

pub(crate) fn selected_style() -> Style {
    Style::default().fg(HEADER_BG).bg(ACCENT)
}

pub(crate) fn normal_style() -> Style {
    Style::default().fg(TEXT)
}

pub(crate) fn dim_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub(crate) fn income_style() -> Style {
    Style::default().fg(GREEN)
}

pub(crate) fn expense_style() -> Style {
    Style::default().fg(RED)
}

/// Reminders due today or tomorrow.
pub(crate) fn urgent_style() -> Style {
    Style::default().fg(AMBER).add_modifier(Modifier::BOLD)
}

pub(crate) fn error_style() -> Style {
    Style::default().fg(RED).add_modifier(Modifier::BOLD)
}

pub(crate) fn alt_row_style() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(BORDER)
}

pub(crate) fn command_bar_style() -> Style {
    Style::default().fg(TEXT).bg(COMMAND_BG)
}

pub(crate) fn status_bar_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE)
}
