//! Screen state structures for TUI

use crate::form::{ContactForm, FormField, SubmitOutcome, TracingObserver, ValidationRules};
use crate::surface::Surface;
use crate::tui::types::Focus;
use arboard::Clipboard;

/// Contact form screen state
///
/// Owns the mounted form; dropping the screen unmounts it.
#[derive(Debug)]
pub struct ContactFormScreen {
    /// Mounted form component
    pub form: ContactForm,
    /// Focused element
    pub focus: Focus,
    /// Header text
    pub title: String,
    /// Status message
    pub status_message: Option<String>,
    /// Whether the status is an error
    pub is_error: bool,
}

impl ContactFormScreen {
    /// Create new contact form screen
    pub fn new(rules: ValidationRules, title: impl Into<String>) -> Self {
        let mut form = ContactForm::mount(rules);
        form.subscribe(TracingObserver);

        Self {
            form,
            focus: Focus::Field(FormField::FirstName),
            title: title.into(),
            status_message: Some("Fill in the form and press Enter on Submit".to_string()),
            is_error: false,
        }
    }

    /// Move focus to the next element
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous element
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Add character to the focused field
    pub fn add_char(&mut self, c: char) {
        if let Some(field) = self.focus.field() {
            self.form.type_char(field, c);
        }
    }

    /// Remove last character from the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.focus.field() {
            self.form.backspace(field);
        }
    }

    /// Clear the focused field
    pub fn clear_field(&mut self) {
        if let Some(field) = self.focus.field() {
            self.form.clear(field);
        }
    }

    /// Enter: advance from a field, submit from the button
    pub fn activate(&mut self) {
        match self.focus {
            Focus::Field(_) => self.focus_next(),
            Focus::SubmitButton => self.submit(),
        }
    }

    /// Submit the form and report the outcome in the status line
    pub fn submit(&mut self) {
        match self.form.submit() {
            SubmitOutcome::Accepted(_) => {
                self.status_message = Some("✓ Form submitted".to_string());
                self.is_error = false;
            }
            SubmitOutcome::Rejected(errors) => {
                let noun = if errors.len() == 1 { "error" } else { "errors" };
                self.status_message = Some(format!("Please fix {} {}", errors.len(), noun));
                self.is_error = true;
                // Jump to the first invalid field
                if let Some((field, _)) = errors.iter().next() {
                    self.focus = Focus::Field(field);
                }
            }
        }
    }

    /// Paste clipboard text into the focused field
    pub fn paste_from_clipboard(&mut self) {
        let Some(field) = self.focus.field() else {
            self.status_message = Some("Select a field to paste into".to_string());
            self.is_error = true;
            return;
        };

        match Clipboard::new() {
            Ok(mut clipboard) => match clipboard.get_text() {
                Ok(text) => {
                    self.paste_text(&text);
                    self.status_message = Some(format!("Pasted into {}", field.label()));
                    self.is_error = false;
                }
                Err(e) => {
                    self.status_message = Some(format!("Failed to paste: {}", e));
                    self.is_error = true;
                }
            },
            Err(e) => {
                self.status_message = Some(format!("Clipboard error: {}", e));
                self.is_error = true;
            }
        }
    }

    /// Type pasted text into the focused field, dropping line breaks
    pub fn paste_text(&mut self, text: &str) {
        if let Some(field) = self.focus.field() {
            let cleaned: String = text.chars().filter(|c| !c.is_control()).collect();
            self.form.type_text(field, &cleaned);
        }
    }

    /// Surface for the current form state
    pub fn surface(&self) -> Surface {
        Surface::render(&self.form, &self.title)
    }
}
