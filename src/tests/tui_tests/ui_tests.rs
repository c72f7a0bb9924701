// UI Tests - Rendering screens into ratatui's TestBackend

use crate::form::FormField;
use crate::settings::Settings;
use crate::tui::ui::ui;
use crate::tui::App;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

fn buffer_to_string(buf: &Buffer) -> String {
    let mut s = String::new();
    for (i, cell) in buf.content.iter().enumerate() {
        s.push_str(cell.symbol());
        if (i + 1) % buf.area.width as usize == 0 {
            s.push('\n');
        }
    }
    s
}

fn render(app: &App) -> String {
    let backend = TestBackend::new(100, 40);
    let mut terminal = Terminal::new(backend).expect("Failed to create terminal");
    terminal
        .draw(|f| ui(f, app))
        .expect("Failed to draw");
    buffer_to_string(terminal.backend().buffer())
}

fn form_app() -> App {
    let mut app = App::new(Settings::default());
    app.show_contact_form_screen();
    app
}

#[test]
fn test_main_menu_renders_items() {
    let app = App::new(Settings::default());
    let output = render(&app);

    assert!(output.contains("Main Menu"));
    assert!(output.contains("Contact Form"));
    assert!(output.contains("Exit"));
}

#[test]
fn test_contact_form_renders_header_and_labels() {
    let app = form_app();
    let output = render(&app);

    assert!(output.contains("Contact Form"));
    assert!(output.contains("First Name*"));
    assert!(output.contains("Last Name*"));
    assert!(output.contains("Email*"));
    assert!(output.contains("Message"));
    assert!(output.contains("[ Submit ]"));
    assert!(output.contains("Nothing submitted yet"));
}

#[test]
fn test_contact_form_renders_errors() {
    let mut app = form_app();
    app.contact_form_screen.as_mut().unwrap().submit();
    let output = render(&app);

    assert!(output.contains("firstName is a required field"));
    assert!(output.contains("lastName is a required field"));
    assert!(output.contains("email is a required field"));
    assert!(output.contains("Please fix 3 errors"));
}

#[test]
fn test_contact_form_renders_submitted_record() {
    let mut app = form_app();
    {
        let screen = app.contact_form_screen.as_mut().unwrap();
        screen.form.type_text(FormField::FirstName, "kimmy");
        screen.form.type_text(FormField::LastName, "nguyen");
        screen.form.type_text(FormField::Email, "kim@kim.com");
        screen.submit();
    }
    let output = render(&app);

    assert!(output.contains("You Submitted:"));
    assert!(output.contains("First Name: kimmy"));
    assert!(output.contains("Last Name: nguyen"));
    assert!(output.contains("Email: kim@kim.com"));
    assert!(!output.contains("Message: "));
}

#[test]
fn test_contact_form_renders_submitted_message() {
    let mut app = form_app();
    {
        let screen = app.contact_form_screen.as_mut().unwrap();
        screen.form.type_text(FormField::FirstName, "kimmy");
        screen.form.type_text(FormField::LastName, "nguyen");
        screen.form.type_text(FormField::Email, "kim@kim.com");
        screen.form.type_text(FormField::Message, "test test test");
        screen.submit();
    }
    let output = render(&app);

    assert!(output.contains("Message: test test test"));
}
