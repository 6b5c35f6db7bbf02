//! UI helper functions

use ratatui::layout::Rect;
use crate::tui::types::Focus;

/// A `width` x `height` rectangle centered in `area`, shrunk to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Key hints for the focused control
pub fn help_text(focus: Focus) -> &'static str {
    match focus {
        Focus::Name | Focus::Age | Focus::Colour => {
            "Type to edit | Enter: Add User | Tab/Shift+Tab: Move | Ctrl+V: Paste | Del: Clear | Ctrl+C: Quit"
        }
        Focus::AddButton => "Enter/Space: Add User | Tab/Shift+Tab: Move | Ctrl+C: Quit",
        Focus::List => "↑↓/j/k: Navigate | d/Del: Delete | Tab/Shift+Tab: Move | q/Esc: Quit",
    }
}
