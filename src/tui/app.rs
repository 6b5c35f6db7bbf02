//! Main TUI application state and logic

use crate::form::{DraftForm, ValidationError};
use crate::settings::Settings;
use crate::store::{Record, RecordId, RecordStore};
use crate::tui::clipboard::ClipboardProvider;
use crate::tui::screens::UserListScreen;
use crate::tui::types::Focus;
use crate::view::{self, RowView};

/// Application state
pub struct App {
    /// Records shown in the list
    pub store: RecordStore,
    /// Draft values of the add-user form
    pub form: DraftForm,
    /// List selection, status line and delete popup
    pub screen: UserListScreen,
    /// Control receiving key input
    pub focus: Focus,
    /// Should quit
    pub should_quit: bool,
    /// Loaded settings
    pub settings: Settings,
}

impl App {
    /// Create new application from settings
    pub fn new(settings: Settings) -> Self {
        let store = if settings.seed_records {
            RecordStore::seeded()
        } else {
            RecordStore::new()
        };
        Self::with_store(store, settings)
    }

    /// Create application around an existing store
    pub fn with_store(store: RecordStore, settings: Settings) -> Self {
        tracing::debug!(records = store.len(), "App created");
        Self {
            store,
            form: DraftForm::new(settings.trim_input),
            screen: UserListScreen::new(),
            focus: Focus::Name,
            should_quit: false,
            settings,
        }
    }

    /// Row views for the current records
    pub fn rows(&self) -> Vec<RowView> {
        view::render(self.store.list())
    }

    /// Record under the list selection
    pub fn selected_record(&self) -> Option<&Record> {
        self.store.list().get(self.screen.selected_index)
    }

    /// Move focus forward (Tab)
    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    /// Move focus backward (Shift+Tab)
    pub fn focus_previous(&mut self) {
        self.set_focus(self.focus.previous());
    }

    /// Move focus to `focus`
    pub fn set_focus(&mut self, focus: Focus) {
        tracing::debug!(?focus, "Focus changed");
        self.focus = focus;
    }

    /// Add character to the focused input; ignored outside inputs
    ///
    /// Editing an input clears the previous status message.
    pub fn add_char(&mut self, c: char) {
        if let Some(field) = self.focus.field() {
            self.form.push_char(field, c);
            self.screen.clear_status();
        }
    }

    /// Remove last character from the focused input
    pub fn backspace(&mut self) {
        if let Some(field) = self.focus.field() {
            self.form.pop_char(field);
            self.screen.clear_status();
        }
    }

    /// Clear the focused input
    pub fn clear_field(&mut self) {
        if let Some(field) = self.focus.field() {
            self.form.clear(field);
            self.screen.clear_status();
        }
    }

    /// Paste clipboard text into the focused input
    pub fn paste_from_clipboard(&mut self, clipboard: &mut dyn ClipboardProvider) {
        let Some(field) = self.focus.field() else {
            return;
        };
        match clipboard.get_text() {
            Ok(text) => self.form.push_str(field, text.trim()),
            Err(e) => {
                tracing::warn!(error = %e, "Paste failed");
                self.screen.set_error(format!("Paste failed: {}", e));
            }
        }
    }

    /// Submit the form ("Add User")
    ///
    /// On success the record is appended, drafts are cleared and focus goes
    /// back to the name input. On failure the first problem is shown in the
    /// status line and focus moves to the offending input.
    pub fn submit(&mut self) -> Result<Record, ValidationError> {
        match self.form.submit(&mut self.store) {
            Ok(record) => {
                self.screen.set_status(format!("Added {}", record.name));
                self.focus = Focus::Name;
                Ok(record)
            }
            Err(e) => {
                self.screen.set_error(e.to_string());
                match &e {
                    ValidationError::MissingField(field) => self.focus = Focus::from_field(*field),
                    ValidationError::InvalidAge(_) => self.focus = Focus::Age,
                }
                Err(e)
            }
        }
    }

    /// Move list selection down
    pub fn next_row(&mut self) {
        self.screen.next(self.store.len());
    }

    /// Move list selection up
    pub fn previous_row(&mut self) {
        self.screen.previous(self.store.len());
    }

    /// Ask to delete the selected record
    ///
    /// Deletes immediately when confirmation is turned off.
    pub fn request_delete(&mut self) {
        let Some(id) = self.selected_record().map(|r| r.id.clone()) else {
            return;
        };
        if self.settings.confirm_delete {
            self.screen.show_delete_popup(id);
        } else {
            self.delete_record(&id);
        }
    }

    /// Confirm the pending deletion
    pub fn confirm_delete(&mut self) {
        if let Some(id) = self.screen.pending_delete.clone() {
            self.delete_record(&id);
        }
        self.screen.hide_delete_popup();
    }

    /// Cancel the pending deletion
    pub fn cancel_delete(&mut self) {
        self.screen.hide_delete_popup();
    }

    /// Remove the record with `id`; unknown ids are ignored
    pub fn delete_record(&mut self, id: &RecordId) {
        if let Some(record) = self.store.remove(id) {
            self.screen.set_status(format!("Deleted {}", record.name));
        }
        self.screen.clamp_selection(self.store.len());
    }
}
