// App Tests - Testing App event handlers against the store and form

use crate::form::{Field, ValidationError};
use crate::settings::Settings;
use crate::store::{RecordId, RecordStore};
use crate::tui::clipboard::mock::MockClipboard;
use crate::tui::{App, Focus};

fn create_test_app() -> App {
    App::new(Settings::default())
}

fn create_test_app_without_confirm() -> App {
    App::new(Settings {
        confirm_delete: false,
        ..Settings::default()
    })
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.add_char(c);
    }
}

fn fill_form(app: &mut App, name: &str, age: &str, colour: &str) {
    app.set_focus(Focus::Name);
    type_text(app, name);
    app.set_focus(Focus::Age);
    type_text(app, age);
    app.set_focus(Focus::Colour);
    type_text(app, colour);
}

#[test]
fn test_app_initial_state() {
    let app = create_test_app();

    assert_eq!(app.store.len(), 5);
    assert_eq!(app.focus, Focus::Name);
    assert!(!app.should_quit);
    assert_eq!(app.form.draft(Field::Name), "");
    assert_eq!(app.selected_record().map(|r| r.name.as_str()), Some("Siya"));
}

#[test]
fn test_app_without_seed_records() {
    let app = App::new(Settings {
        seed_records: false,
        ..Settings::default()
    });

    assert!(app.store.is_empty());
    assert!(app.selected_record().is_none());
    assert!(app.rows().is_empty());
}

#[test]
fn test_typing_goes_to_focused_field() {
    let mut app = create_test_app();

    fill_form(&mut app, "Thabo", "41", "Orange");

    assert_eq!(app.form.draft(Field::Name), "Thabo");
    assert_eq!(app.form.draft(Field::Age), "41");
    assert_eq!(app.form.draft(Field::Colour), "Orange");
}

#[test]
fn test_typing_outside_inputs_is_ignored() {
    let mut app = create_test_app();

    app.set_focus(Focus::List);
    type_text(&mut app, "abc");
    app.set_focus(Focus::AddButton);
    app.add_char('x');
    app.backspace();
    app.clear_field();

    for field in Field::all() {
        assert_eq!(app.form.draft(field), "");
    }
}

#[test]
fn test_backspace_and_clear_field() {
    let mut app = create_test_app();
    type_text(&mut app, "Sam");

    app.backspace();
    assert_eq!(app.form.draft(Field::Name), "Sa");

    app.clear_field();
    assert_eq!(app.form.draft(Field::Name), "");
}

#[test]
fn test_submit_success() {
    let mut app = create_test_app();
    fill_form(&mut app, "Thabo", "41", "Orange");
    app.set_focus(Focus::AddButton);

    let record = app.submit().expect("submit should succeed");

    assert_eq!(app.store.len(), 6);
    assert_eq!(app.store.list().last(), Some(&record));
    assert_eq!(app.screen.status_message.as_deref(), Some("Added Thabo"));
    assert!(!app.screen.is_error);
    assert_eq!(app.focus, Focus::Name, "Focus returns to the name input");
    for field in Field::all() {
        assert_eq!(app.form.draft(field), "", "Drafts reset after submit");
    }
}

#[test]
fn test_submit_missing_field_sets_error_and_focus() {
    let mut app = create_test_app();
    fill_form(&mut app, "Thabo", "", "Orange");

    let result = app.submit();

    assert_eq!(result, Err(ValidationError::MissingField(Field::Age)));
    assert_eq!(app.store.len(), 5);
    assert!(app.screen.is_error);
    assert_eq!(app.screen.status_message.as_deref(), Some("Age is required"));
    assert_eq!(app.focus, Focus::Age);
    assert_eq!(app.form.draft(Field::Name), "Thabo", "Drafts kept on failure");
}

#[test]
fn test_submit_invalid_age() {
    let mut app = create_test_app();
    fill_form(&mut app, "Thabo", "old", "Orange");
    app.set_focus(Focus::Colour);

    let result = app.submit();

    assert!(matches!(result, Err(ValidationError::InvalidAge(_))));
    assert_eq!(app.store.len(), 5);
    assert_eq!(app.focus, Focus::Age);
}

#[test]
fn test_row_navigation() {
    let mut app = create_test_app();

    app.next_row();
    app.next_row();
    assert_eq!(app.selected_record().map(|r| r.name.as_str()), Some("Jaco"));

    app.previous_row();
    app.previous_row();
    app.previous_row();
    assert_eq!(app.selected_record().map(|r| r.name.as_str()), Some("Koosie"));
}

#[test]
fn test_delete_with_confirmation() {
    let mut app = create_test_app();
    app.next_row();

    app.request_delete();
    assert!(app.screen.show_delete_confirmation);
    assert_eq!(app.screen.pending_delete, Some(RecordId::from("2")));
    assert_eq!(app.store.len(), 5, "Nothing removed before confirmation");

    app.confirm_delete();
    assert!(!app.screen.show_delete_confirmation);
    assert_eq!(app.store.len(), 4);
    assert!(app.store.get(&RecordId::from("2")).is_none());
    assert_eq!(app.screen.status_message.as_deref(), Some("Deleted Caryn"));
}

#[test]
fn test_cancel_delete_keeps_record() {
    let mut app = create_test_app();

    app.request_delete();
    app.cancel_delete();

    assert!(!app.screen.show_delete_confirmation);
    assert!(app.screen.pending_delete.is_none());
    assert_eq!(app.store.len(), 5);
}

#[test]
fn test_delete_without_confirmation() {
    let mut app = create_test_app_without_confirm();

    app.request_delete();

    assert!(!app.screen.show_delete_confirmation);
    assert_eq!(app.store.len(), 4);
    assert_eq!(app.store.list()[0].name, "Caryn");
}

#[test]
fn test_delete_last_row_clamps_selection() {
    let mut app = create_test_app_without_confirm();
    app.previous_row(); // wraps to Koosie

    app.request_delete();

    assert_eq!(app.store.len(), 4);
    assert_eq!(app.screen.selected_index, 3);
    assert_eq!(app.selected_record().map(|r| r.name.as_str()), Some("Mihle"));
}

#[test]
fn test_request_delete_on_empty_list_is_noop() {
    let mut app = App::with_store(RecordStore::new(), Settings::default());

    app.request_delete();

    assert!(!app.screen.show_delete_confirmation);
    assert!(app.store.is_empty());
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let mut app = create_test_app();

    app.delete_record(&RecordId::from("nonexistent"));

    assert_eq!(app.store.len(), 5);
    assert!(app.screen.status_message.is_none());
}

#[test]
fn test_pending_delete_follows_id_not_position() {
    let mut app = create_test_app();
    app.next_row();
    app.request_delete(); // Caryn, id 2

    // The record disappears before the popup is confirmed
    app.store.remove(&RecordId::from("2"));
    app.confirm_delete();

    assert_eq!(app.store.len(), 4, "No other record is removed");
    assert!(app.store.get(&RecordId::from("3")).is_some());
}

#[test]
fn test_paste_into_focused_field() {
    let mut app = create_test_app();
    app.set_focus(Focus::Colour);
    let mut clipboard = MockClipboard::with_text("  Teal\n");

    app.paste_from_clipboard(&mut clipboard);

    assert_eq!(app.form.draft(Field::Colour), "Teal");
}

#[test]
fn test_paste_failure_sets_error() {
    let mut app = create_test_app();
    let mut clipboard = MockClipboard::new_failing();

    app.paste_from_clipboard(&mut clipboard);

    assert!(app.screen.is_error);
    assert_eq!(app.form.draft(Field::Name), "");
}

#[test]
fn test_paste_outside_inputs_is_ignored() {
    let mut app = create_test_app();
    app.set_focus(Focus::List);
    let mut clipboard = MockClipboard::with_text("ignored");

    app.paste_from_clipboard(&mut clipboard);

    assert!(app.screen.status_message.is_none());
    for field in Field::all() {
        assert_eq!(app.form.draft(field), "");
    }
}

#[test]
fn test_add_then_delete_then_add_keeps_unique_ids() {
    let mut app = create_test_app_without_confirm();

    app.previous_row(); // Koosie, id 5
    app.request_delete();
    fill_form(&mut app, "Lwazi", "19", "Black");
    let record = app.submit().expect("submit should succeed");

    assert_eq!(record.id.as_str(), "6");
    let rows = app.rows();
    let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["1", "2", "3", "4", "6"]);
}

#[test]
fn test_editing_clears_stale_error() {
    let mut app = create_test_app();
    let _ = app.submit();
    assert!(app.screen.is_error);

    app.add_char('T');

    assert!(app.screen.status_message.is_none(), "Typing clears the old error");
    assert!(!app.screen.is_error);

    let _ = app.submit();
    app.backspace();
    assert!(app.screen.status_message.is_none());

    let _ = app.submit();
    app.clear_field();
    assert!(app.screen.status_message.is_none());
}

#[test]
fn test_keys_outside_inputs_keep_status() {
    let mut app = create_test_app();
    let _ = app.submit();
    app.set_focus(Focus::List);

    app.add_char('x');

    assert_eq!(app.screen.status_message.as_deref(), Some("Name is required"));
}
