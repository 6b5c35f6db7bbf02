//! Screen state structures for TUI

use crate::store::RecordId;

/// User list screen state
///
/// Everything here is presentation state; the records themselves live in
/// the store owned by [`App`](crate::tui::App).
#[derive(Debug)]
pub struct UserListScreen {
    /// Selected row index
    pub selected_index: usize,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the status is an error
    pub is_error: bool,
    /// Confirmation popup state
    pub show_delete_confirmation: bool,
    /// Record pending deletion
    pub pending_delete: Option<RecordId>,
}

impl UserListScreen {
    /// Create new user list screen
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            status_message: None,
            is_error: false,
            show_delete_confirmation: false,
            pending_delete: None,
        }
    }

    /// Move to next row
    pub fn next(&mut self, row_count: usize) {
        if row_count > 0 {
            self.selected_index = (self.selected_index + 1) % row_count;
        }
    }

    /// Move to previous row
    pub fn previous(&mut self, row_count: usize) {
        if row_count > 0 {
            if self.selected_index > 0 {
                self.selected_index -= 1;
            } else {
                self.selected_index = row_count - 1;
            }
        }
    }

    /// Keep the selection inside a list of `row_count` rows
    pub fn clamp_selection(&mut self, row_count: usize) {
        if self.selected_index >= row_count {
            self.selected_index = row_count.saturating_sub(1);
        }
    }

    /// Set informational status message
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.is_error = false;
    }

    /// Set error status message
    pub fn set_error(&mut self, message: String) {
        self.status_message = Some(message);
        self.is_error = true;
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.is_error = false;
    }

    /// Show delete confirmation popup
    pub fn show_delete_popup(&mut self, id: RecordId) {
        self.show_delete_confirmation = true;
        self.pending_delete = Some(id);
    }

    /// Hide delete confirmation popup
    pub fn hide_delete_popup(&mut self) {
        self.show_delete_confirmation = false;
        self.pending_delete = None;
    }
}

impl Default for UserListScreen {
    fn default() -> Self {
        Self::new()
    }
}
