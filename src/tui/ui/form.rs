//! Add-user form rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use crate::form::Field;
use crate::tui::app::App;
use crate::tui::types::Focus;

/// Button background, the teal of the original "Add User" control
const ADD_BUTTON_COLOR: Color = Color::Rgb(0x4c, 0xa8, 0xaf);

/// Renders the three inputs and the "Add User" button into `area`
pub fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Age
            Constraint::Length(3), // Favourite colour
            Constraint::Length(3), // Add button
        ])
        .split(area);

    for (i, field) in Field::all().into_iter().enumerate() {
        render_input(f, chunks[i], app, field);
    }

    let focused = app.focus == Focus::AddButton;
    let button_style = if focused {
        Style::default()
            .fg(ADD_BUTTON_COLOR)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::White)
            .bg(ADD_BUTTON_COLOR)
            .add_modifier(Modifier::BOLD)
    };
    let button = Paragraph::new("ADD USER")
        .style(button_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, chunks[3]);
}

fn render_input(f: &mut Frame, area: Rect, app: &App, field: Field) {
    let focused = app.focus == Focus::from_field(field);
    let value = app.form.draft(field);

    let (text, text_style) = if value.is_empty() {
        (field.placeholder(), Style::default().fg(Color::DarkGray))
    } else {
        (value, Style::default().fg(Color::White))
    };

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let input = Paragraph::new(text).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(field.label()),
    );
    f.render_widget(input, area);

    if focused {
        // Display width, so wide characters move the cursor two columns
        let typed = Line::from(value).width();
        let last_col = usize::from(area.width.saturating_sub(3));
        let offset = u16::try_from(typed.min(last_col)).unwrap_or(0);
        f.set_cursor(area.x.saturating_add(1).saturating_add(offset), area.y.saturating_add(1));
    }
}
