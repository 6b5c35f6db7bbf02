//! User list rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use crate::store::Record;
use crate::tui::app::App;
use crate::tui::types::Focus;
use crate::tui::ui::helpers::centered_rect;
use crate::view::RowView;

/// Renders the scrollable list of users into `area`
pub fn render_user_list(f: &mut Frame, area: Rect, app: &App) {
    let list_focused = app.focus == Focus::List;
    let border_style = if list_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    if app.store.is_empty() {
        let empty_msg = Paragraph::new("No users yet. Fill in the form and press Enter to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title("Users"),
            );
        f.render_widget(empty_msg, area);
    } else {
        let items: Vec<ListItem> = app.rows().iter().map(row_item).collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title("Users"),
            )
            .highlight_symbol("→ ")
            .highlight_style(if list_focused {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            });

        // Only the rows around the selection are drawn
        let mut state = ListState::default().with_selected(Some(app.screen.selected_index));
        f.render_stateful_widget(list, area, &mut state);
    }
}

/// Renders the delete confirmation popup over the whole frame, if shown
pub fn render_delete_confirmation(f: &mut Frame, app: &App) {
    if !app.screen.show_delete_confirmation {
        return;
    }
    if let Some(record) = app.screen.pending_delete.as_ref().and_then(|id| app.store.get(id)) {
        let size = f.size();
        render_delete_confirmation_popup(f, size, record);
    }
}

fn row_item(row: &RowView) -> ListItem<'static> {
    let [name, age, colour] = row.lines();
    let text = Text::from(vec![
        Line::from(Span::styled(
            name.to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(age.to_string())),
        Line::from(Span::raw(colour.to_string())),
        Line::from(Span::styled(
            format!("[ {} ]", row.delete.label),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ]);
    ListItem::new(text)
}

fn render_delete_confirmation_popup(f: &mut Frame, area: Rect, record: &Record) {
    let popup_area = centered_rect(50, 9, area);

    let popup_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Message
            Constraint::Length(1), // Buttons
        ])
        .split(popup_area);

    f.render_widget(Clear, popup_area);
    let background = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .style(Style::default().bg(Color::Black));
    f.render_widget(background, popup_area);

    let title = Paragraph::new("Confirm Delete")
        .style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, popup_chunks[0]);

    let message = Paragraph::new(vec![
        Line::from(vec![
            Span::raw("Delete "),
            Span::styled(record.name.as_str(), Style::default().fg(Color::Cyan)),
            Span::raw(format!(" (age {}, {})?", record.age, record.favourite_colour)),
        ]),
        Line::from(""),
    ])
    .alignment(Alignment::Center);
    f.render_widget(message, popup_chunks[1]);

    let buttons = Paragraph::new(Line::from(vec![
        Span::styled("[Y]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw("es  "),
        Span::styled("[N]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw("o"),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(buttons, popup_chunks[2]);
}
