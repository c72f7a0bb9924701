//! Form fields and the values they hold

use serde::{Deserialize, Serialize};

/// One of the four contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    /// Sender's first name
    FirstName,
    /// Sender's last name
    LastName,
    /// Sender's email address
    Email,
    /// Free text message (optional)
    Message,
}

impl FormField {
    /// Get all fields in display order
    pub fn all() -> [Self; 4] {
        [Self::FirstName, Self::LastName, Self::Email, Self::Message]
    }

    /// Key used in error messages
    pub fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name*",
            Self::LastName => "Last Name*",
            Self::Email => "Email*",
            Self::Message => "Message",
        }
    }

    /// Whether the field must be filled in
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Message)
    }

    /// Test id of the element displaying this field after submission
    pub fn display_test_id(&self) -> &'static str {
        match self {
            Self::FirstName => "firstnameDisplay",
            Self::LastName => "lastnameDisplay",
            Self::Email => "emailDisplay",
            Self::Message => "messageDisplay",
        }
    }

    /// Next field in display order, or `None` after the last one
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::FirstName => Some(Self::LastName),
            Self::LastName => Some(Self::Email),
            Self::Email => Some(Self::Message),
            Self::Message => None,
        }
    }

    /// Previous field in display order, or `None` before the first one
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::FirstName => None,
            Self::LastName => Some(Self::FirstName),
            Self::Email => Some(Self::LastName),
            Self::Message => Some(Self::Email),
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Current values of the contact form
///
/// An empty `message` means no message was entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address
    pub email: String,
    /// Optional message
    pub message: String,
}

impl FormState {
    /// Create an empty form state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of a field
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Get a mutable reference to the value of a field
    pub fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    /// Message, if one was entered
    pub fn message(&self) -> Option<&str> {
        if self.message.is_empty() {
            None
        } else {
            Some(&self.message)
        }
    }
}
