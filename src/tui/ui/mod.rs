//! UI rendering module
//!
//! The app has a single screen; this module lays it out and delegates each
//! region to its own file.

mod form;
mod user_list;
mod helpers;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use crate::tui::app::App;

// Re-export render functions
pub use form::render_form;
pub use user_list::{render_delete_confirmation, render_user_list};

// Re-export helper functions
pub use helpers::{centered_rect, help_text};

/// Height of the form region: three inputs and the button
const FORM_HEIGHT: u16 = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let size = f.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),           // Title
            Constraint::Length(FORM_HEIGHT), // Form
            Constraint::Min(6),              // User list
            Constraint::Length(3),           // Status message
            Constraint::Length(3),           // Help text
        ])
        .split(size);

    // Title
    let title = Paragraph::new(format!("User List ({} users)", app.store.len()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_form(f, chunks[1], app);
    render_user_list(f, chunks[2], app);

    // Status message
    let status_text = app.screen.status_message.as_deref().unwrap_or("");
    let status_color = if app.screen.is_error {
        Color::Red
    } else {
        Color::Green
    };
    let status_widget = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status_widget, chunks[3]);

    // Help text
    let help = Paragraph::new(help_text(app.focus))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[4]);

    // Popup goes last so nothing draws over it
    render_delete_confirmation(f, app);
}
