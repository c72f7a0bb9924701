//! Core types for TUI screens and navigation

use crate::form::FormField;

/// Application screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Main menu for navigation
    MainMenu,
    /// Contact form
    ContactForm,
}

/// Main menu items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// Open the contact form
    ContactForm,
    /// Exit application
    Exit,
}

impl MenuItem {
    /// Get all menu items in order
    pub fn all() -> Vec<Self> {
        vec![Self::ContactForm, Self::Exit]
    }

    /// Get display label for menu item
    pub fn label(&self) -> &str {
        match self {
            Self::ContactForm => "Contact Form",
            Self::Exit => "Exit",
        }
    }

    /// Get description for menu item
    pub fn description(&self) -> &str {
        match self {
            Self::ContactForm => "Fill in and submit the contact form",
            Self::Exit => "Exit Contact Form",
        }
    }
}

/// Focusable elements of the contact form screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// An input field
    Field(FormField),
    /// The submit button
    SubmitButton,
}

impl Focus {
    /// Next element in tab order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Field(field) => field.next().map_or(Self::SubmitButton, Self::Field),
            Self::SubmitButton => Self::Field(FormField::FirstName),
        }
    }

    /// Previous element in tab order, wrapping around
    pub fn previous(self) -> Self {
        match self {
            Self::Field(field) => field.previous().map_or(Self::SubmitButton, Self::Field),
            Self::SubmitButton => Self::Field(FormField::Message),
        }
    }

    /// Focused field, if an input is focused
    pub fn field(self) -> Option<FormField> {
        match self {
            Self::Field(field) => Some(field),
            Self::SubmitButton => None,
        }
    }
}
