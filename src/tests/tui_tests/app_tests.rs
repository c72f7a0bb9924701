// App Tests - Testing navigation and key dispatch

use crate::form::FormField;
use crate::settings::Settings;
use crate::tui::{App, Focus, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(press(KeyCode::Char(c)));
    }
}

fn open_form() -> App {
    let mut app = App::new(Settings::default());
    app.handle_key(press(KeyCode::Enter));
    app
}

#[test]
fn test_app_starts_on_main_menu() {
    let app = App::new(Settings::default());

    assert_eq!(app.current_screen, Screen::MainMenu);
    assert_eq!(app.selected_index, 0);
    assert!(app.contact_form_screen.is_none());
    assert!(!app.should_quit);
}

#[test]
fn test_menu_navigation_wraps() {
    let mut app = App::new(Settings::default());

    app.next();
    assert_eq!(app.selected_index, 1);
    app.next();
    assert_eq!(app.selected_index, 0);
    app.previous();
    assert_eq!(app.selected_index, 1);
}

#[test]
fn test_select_exit_quits() {
    let mut app = App::new(Settings::default());

    app.handle_key(press(KeyCode::Down));
    app.handle_key(press(KeyCode::Enter));

    assert!(app.should_quit);
}

#[test]
fn test_quit_keys_on_main_menu() {
    let mut app = App::new(Settings::default());
    app.handle_key(press(KeyCode::Char('q')));
    assert!(app.should_quit);

    let mut app = App::new(Settings::default());
    app.handle_key(press(KeyCode::Esc));
    assert!(app.should_quit);
}

#[test]
fn test_enter_mounts_contact_form() {
    let app = open_form();

    assert_eq!(app.current_screen, Screen::ContactForm);
    assert!(app.contact_form_screen.is_some());
}

#[test]
fn test_quick_key_mounts_contact_form() {
    let mut app = App::new(Settings::default());
    app.handle_key(press(KeyCode::Char('c')));
    assert_eq!(app.current_screen, Screen::ContactForm);
}

#[test]
fn test_form_uses_settings() {
    let settings = Settings {
        first_name_min_len: 2,
        title: "Say Hello".to_string(),
        log_path: None,
    };
    let mut app = App::new(settings);
    app.show_contact_form_screen();

    let screen = app.contact_form_screen.as_ref().unwrap();
    assert_eq!(screen.title, "Say Hello");
    assert_eq!(screen.form.rules().first_name_min_len, 2);
}

#[test]
fn test_typing_goes_to_focused_field() {
    let mut app = open_form();

    type_str(&mut app, "kimmy");
    app.handle_key(press(KeyCode::Tab));
    type_str(&mut app, "nguyen");

    let form = &app.contact_form_screen.as_ref().unwrap().form;
    assert_eq!(form.value(FormField::FirstName), "kimmy");
    assert_eq!(form.value(FormField::LastName), "nguyen");
}

#[test]
fn test_letters_are_not_shortcuts_in_form() {
    let mut app = open_form();

    type_str(&mut app, "qjkc");

    assert_eq!(app.current_screen, Screen::ContactForm);
    assert!(!app.should_quit);
    let form = &app.contact_form_screen.as_ref().unwrap().form;
    assert_eq!(form.value(FormField::FirstName), "qjkc");
}

#[test]
fn test_focus_keys() {
    let mut app = open_form();

    app.handle_key(press(KeyCode::Down));
    app.handle_key(press(KeyCode::Down));
    assert_eq!(
        app.contact_form_screen.as_ref().unwrap().focus,
        Focus::Field(FormField::Email)
    );

    app.handle_key(press(KeyCode::BackTab));
    app.handle_key(press(KeyCode::Up));
    assert_eq!(
        app.contact_form_screen.as_ref().unwrap().focus,
        Focus::Field(FormField::FirstName)
    );
}

#[test]
fn test_ctrl_s_submits_from_any_field() {
    let mut app = open_form();

    app.handle_key(ctrl('s'));

    let form = &app.contact_form_screen.as_ref().unwrap().form;
    assert_eq!(form.errors().len(), 3);
    assert_eq!(form.value(FormField::FirstName), "", "Ctrl+S must not type 's'");
}

#[test]
fn test_full_submission_through_keys() {
    let mut app = open_form();

    type_str(&mut app, "kimmy");
    app.handle_key(press(KeyCode::Enter));
    type_str(&mut app, "nguyen");
    app.handle_key(press(KeyCode::Enter));
    type_str(&mut app, "kim@kim.com");
    app.handle_key(press(KeyCode::Enter));
    type_str(&mut app, "test test test");
    app.handle_key(press(KeyCode::Enter));
    // Focus is on the submit button now
    app.handle_key(press(KeyCode::Enter));

    let form = &app.contact_form_screen.as_ref().unwrap().form;
    let record = form.submitted().expect("form should be submitted");
    assert_eq!(record.values.email, "kim@kim.com");
    assert_eq!(record.message(), Some("test test test"));
}

#[test]
fn test_space_on_button_submits() {
    let mut app = open_form();
    app.handle_key(press(KeyCode::BackTab));

    app.handle_key(press(KeyCode::Char(' ')));

    let form = &app.contact_form_screen.as_ref().unwrap().form;
    assert_eq!(form.errors().len(), 3);
}

#[test]
fn test_delete_clears_focused_field() {
    let mut app = open_form();
    type_str(&mut app, "kim");

    app.handle_key(press(KeyCode::Delete));

    let form = &app.contact_form_screen.as_ref().unwrap().form;
    assert_eq!(form.value(FormField::FirstName), "");
}

#[test]
fn test_esc_unmounts_form() {
    let mut app = open_form();
    type_str(&mut app, "kimmy");

    app.handle_key(press(KeyCode::Esc));

    assert_eq!(app.current_screen, Screen::MainMenu);
    assert!(app.contact_form_screen.is_none());
    assert!(!app.should_quit);

    // Re-opening starts from an empty form
    app.handle_key(press(KeyCode::Enter));
    let form = &app.contact_form_screen.as_ref().unwrap().form;
    assert_eq!(form.value(FormField::FirstName), "");
}
