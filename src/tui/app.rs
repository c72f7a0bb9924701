//! Main TUI application state and logic

use crate::settings::Settings;
use crate::tui::screens::ContactFormScreen;
use crate::tui::types::{Focus, MenuItem, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application state
#[derive(Debug)]
pub struct App {
    /// Current screen
    pub current_screen: Screen,
    /// Currently selected menu item
    pub selected_index: usize,
    /// Menu items
    pub menu_items: Vec<MenuItem>,
    /// Should quit
    pub should_quit: bool,
    /// Loaded settings
    pub settings: Settings,
    /// Contact form screen (when mounted)
    pub contact_form_screen: Option<ContactFormScreen>,
}

impl App {
    /// Create new application with the given settings
    pub fn new(settings: Settings) -> Self {
        Self {
            current_screen: Screen::MainMenu,
            selected_index: 0,
            menu_items: MenuItem::all(),
            should_quit: false,
            settings,
            contact_form_screen: None,
        }
    }

    /// Move to next menu item
    pub fn next(&mut self) {
        self.selected_index = (self.selected_index + 1) % self.menu_items.len();
    }

    /// Move to previous menu item
    pub fn previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.menu_items.len() - 1;
        }
    }

    /// Currently selected menu item
    pub fn selected_item(&self) -> MenuItem {
        self.menu_items[self.selected_index]
    }

    /// Activate the selected menu item
    pub fn select(&mut self) {
        match self.selected_item() {
            MenuItem::ContactForm => self.show_contact_form_screen(),
            MenuItem::Exit => self.should_quit = true,
        }
    }

    /// Mount a fresh contact form and show it
    pub fn show_contact_form_screen(&mut self) {
        self.contact_form_screen = Some(ContactFormScreen::new(
            self.settings.validation_rules(),
            self.settings.title.clone(),
        ));
        self.current_screen = Screen::ContactForm;
    }

    /// Return to the main menu, unmounting any open form
    pub fn back_to_main_menu(&mut self) {
        self.contact_form_screen = None;
        self.current_screen = Screen::MainMenu;
    }

    /// Dispatch a key press to the current screen
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.current_screen {
            Screen::MainMenu => self.handle_main_menu_key(key),
            Screen::ContactForm => self.handle_contact_form_key(key),
        }
    }

    fn handle_main_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous();
            }
            KeyCode::Enter => {
                self.select();
            }
            // Quick access hotkey
            KeyCode::Char('c') => {
                self.show_contact_form_screen();
            }
            _ => {}
        }
    }

    fn handle_contact_form_key(&mut self, key: KeyEvent) {
        // Esc leaves; everything else needs a mounted form
        if key.code == KeyCode::Esc {
            self.back_to_main_menu();
            return;
        }

        let Some(screen) = &mut self.contact_form_screen else {
            return;
        };

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('s') if ctrl => screen.submit(),
            KeyCode::Char('v') if ctrl => screen.paste_from_clipboard(),
            KeyCode::Char(c) if !ctrl && !c.is_control() => {
                if screen.focus == Focus::SubmitButton && c == ' ' {
                    screen.submit();
                } else {
                    screen.add_char(c);
                }
            }
            KeyCode::Tab | KeyCode::Down => screen.focus_next(),
            KeyCode::BackTab | KeyCode::Up => screen.focus_previous(),
            KeyCode::Backspace => screen.backspace(),
            KeyCode::Delete => screen.clear_field(),
            KeyCode::Enter => screen.activate(),
            _ => {}
        }
    }
}
