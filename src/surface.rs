//! Queryable presentation surface
//!
//! A flat element tree produced from a [`ContactForm`], queried by label, role,
//! text or test id. Front ends render from it and tests locate elements in it
//! the way a user would find them on screen.

use crate::form::{ContactForm, FormField};
use crate::{Error, Result};

/// Test id carried by every validation error element
pub const ERROR_TEST_ID: &str = "error";

/// Heading shown above the submitted record
pub const SUBMITTED_HEADING: &str = "You Submitted:";

/// Text of the submit control
pub const SUBMIT_LABEL: &str = "Submit";

/// Semantic role of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Title text
    Heading,
    /// Editable text input
    Textbox,
    /// Clickable control
    Button,
    /// Validation failure message
    Alert,
    /// Read-only text
    Text,
}

/// One element of the surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Semantic role
    pub role: Role,
    /// Associated label, for inputs
    pub label: Option<String>,
    /// Text content
    pub text: String,
    /// Current value, for inputs
    pub value: Option<String>,
    /// Test id
    pub test_id: Option<String>,
    /// Field this element belongs to
    pub field: Option<FormField>,
}

impl Element {
    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            label: None,
            text: text.into(),
            value: None,
            test_id: None,
            field: None,
        }
    }

    fn with_test_id(mut self, test_id: &str) -> Self {
        self.test_id = Some(test_id.to_string());
        self
    }

    fn with_field(mut self, field: FormField) -> Self {
        self.field = Some(field);
        self
    }
}

/// Rendered contact form
#[derive(Debug, Clone, Default)]
pub struct Surface {
    elements: Vec<Element>,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl Surface {
    /// Render the current state of a form
    pub fn render(form: &ContactForm, title: &str) -> Self {
        let mut elements = vec![Element::new(Role::Heading, title)];

        for field in FormField::all() {
            let mut input = Element::new(Role::Textbox, "").with_field(field);
            input.label = Some(field.label().to_string());
            input.value = Some(form.value(field).to_string());
            elements.push(input);

            if let Some(message) = form.errors().get(field) {
                elements.push(
                    Element::new(Role::Alert, message)
                        .with_test_id(ERROR_TEST_ID)
                        .with_field(field),
                );
            }
        }

        elements.push(Element::new(Role::Button, SUBMIT_LABEL));

        if let Some(record) = form.submitted() {
            elements.push(Element::new(Role::Heading, SUBMITTED_HEADING));
            for (field, value) in record.display_fields() {
                elements.push(
                    Element::new(Role::Text, value)
                        .with_test_id(field.display_test_id())
                        .with_field(field),
                );
            }
        }

        Self { elements }
    }

    /// All elements in document order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// The single input whose label contains `label` (case-insensitive)
    pub fn get_by_label_text(&self, label: &str) -> Result<&Element> {
        let matches: Vec<&Element> = self
            .elements
            .iter()
            .filter(|e| e.label.as_deref().is_some_and(|l| contains_ignore_case(l, label)))
            .collect();
        Self::exactly_one(matches, &format!("label {:?}", label))
    }

    /// The single element with the given role
    pub fn get_by_role(&self, role: Role) -> Result<&Element> {
        let matches = self.query_all_by_role(role);
        Self::exactly_one(matches, &format!("role {:?}", role))
    }

    /// All elements with the given role
    pub fn query_all_by_role(&self, role: Role) -> Vec<&Element> {
        self.elements.iter().filter(|e| e.role == role).collect()
    }

    /// First element whose text contains `text` (case-insensitive)
    pub fn query_by_text(&self, text: &str) -> Option<&Element> {
        self.query_all_by_text(text).into_iter().next()
    }

    /// All elements whose text contains `text` (case-insensitive)
    pub fn query_all_by_text(&self, text: &str) -> Vec<&Element> {
        self.elements
            .iter()
            .filter(|e| !e.text.is_empty() && contains_ignore_case(&e.text, text))
            .collect()
    }

    /// First element with the given test id
    pub fn query_by_test_id(&self, test_id: &str) -> Option<&Element> {
        self.query_all_by_test_id(test_id).into_iter().next()
    }

    /// All elements with the given test id
    pub fn query_all_by_test_id(&self, test_id: &str) -> Vec<&Element> {
        self.elements
            .iter()
            .filter(|e| e.test_id.as_deref() == Some(test_id))
            .collect()
    }

    fn exactly_one<'a>(matches: Vec<&'a Element>, what: &str) -> Result<&'a Element> {
        match matches.as_slice() {
            [one] => Ok(*one),
            [] => Err(Error::Query(format!("No element found with {}", what))),
            many => Err(Error::Query(format!(
                "Found {} elements with {}",
                many.len(),
                what
            ))),
        }
    }
}
