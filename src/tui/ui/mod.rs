//! UI rendering module - screen-specific rendering functions
//!
//! Each screen has its own file for better maintainability.

mod main_menu;
mod contact_form;

use ratatui::Frame;
use crate::tui::types::Screen;
use crate::tui::app::App;

// Re-export render functions
pub use main_menu::render_main_menu;
pub use contact_form::render_contact_form;

/// Main UI rendering function - dispatches to screen-specific render functions
pub fn ui(f: &mut Frame, app: &App) {
    match app.current_screen {
        Screen::MainMenu => render_main_menu(f, app),
        Screen::ContactForm => render_contact_form(f, app),
    }
}
