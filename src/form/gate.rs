//! Contact form component and its submission state machine

use crate::form::field::{FormField, FormState};
use crate::form::observer::{FormEvent, FormObserver, SubscriptionId};
use crate::form::validator::{validate, ErrorSet, ValidationRules};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Snapshot of the form taken when a submit passes validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedRecord {
    /// Values at submit time
    pub values: FormState,
    /// When the submit happened
    pub submitted_at: DateTime<Utc>,
}

impl SubmittedRecord {
    /// Message to display, `None` when none was entered
    pub fn message(&self) -> Option<&str> {
        self.values.message()
    }

    /// `(field, value)` pairs to display; the message is left out when empty
    pub fn display_fields(&self) -> Vec<(FormField, &str)> {
        FormField::all()
            .into_iter()
            .filter(|field| *field != FormField::Message || self.message().is_some())
            .map(|field| (field, self.values.get(field)))
            .collect()
    }
}

/// Where the form is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting input, no record on display
    Editing,
    /// Last submit succeeded and its record is on display
    Submitted(SubmittedRecord),
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields valid, record frozen
    Accepted(SubmittedRecord),
    /// Validation failed, form stays editable
    Rejected(ErrorSet),
}

impl SubmitOutcome {
    /// Check if the submit was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Contact form component
///
/// Dropping the component is the unmount: values, errors and the submitted
/// record go with it.
pub struct ContactForm {
    rules: ValidationRules,
    values: FormState,
    touched: HashSet<FormField>,
    /// Full validation pass over the current values
    all_errors: ErrorSet,
    /// Errors restricted to touched fields
    displayed_errors: ErrorSet,
    phase: FormPhase,
    observers: Vec<(SubscriptionId, Box<dyn FormObserver>)>,
    next_subscription: u64,
}

impl std::fmt::Debug for ContactForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactForm")
            .field("rules", &self.rules)
            .field("values", &self.values)
            .field("touched", &self.touched)
            .field("displayed_errors", &self.displayed_errors)
            .field("phase", &self.phase)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    /// Create a form with default rules
    pub fn new() -> Self {
        Self::mount(ValidationRules::default())
    }

    /// Create a form with the given rules
    pub fn mount(rules: ValidationRules) -> Self {
        let values = FormState::new();
        let all_errors = validate(&values, &rules);
        tracing::info!("Contact form mounted");

        Self {
            rules,
            values,
            touched: HashSet::new(),
            all_errors,
            displayed_errors: ErrorSet::new(),
            phase: FormPhase::Editing,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Register an observer
    pub fn subscribe<O>(&mut self, observer: O) -> SubscriptionId
    where
        O: FormObserver + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer, returning whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    /// Replace the value of a field
    ///
    /// Marks the field touched and re-validates.
    pub fn set_value(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        *self.values.get_mut(field) = value.clone();
        self.touched.insert(field);

        self.emit(FormEvent::InputChanged { field, value });
        self.revalidate();
    }

    /// Type one character at the end of a field
    pub fn type_char(&mut self, field: FormField, c: char) {
        let mut value = self.values.get(field).to_string();
        value.push(c);
        self.set_value(field, value);
    }

    /// Type a string one character at a time
    ///
    /// Every character is a separate change event, like keystrokes.
    pub fn type_text(&mut self, field: FormField, text: &str) {
        for c in text.chars() {
            self.type_char(field, c);
        }
    }

    /// Remove the last character of a field
    pub fn backspace(&mut self, field: FormField) {
        let mut value = self.values.get(field).to_string();
        if value.pop().is_some() {
            self.set_value(field, value);
        }
    }

    /// Clear a field
    pub fn clear(&mut self, field: FormField) {
        self.set_value(field, String::new());
    }

    /// Submit the form
    ///
    /// Touches every field and re-validates. With zero errors the values are
    /// frozen into a record; otherwise all errors are shown and any previous
    /// record is dropped.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.touched.extend(FormField::all());
        self.revalidate();

        if self.all_errors.is_empty() {
            let record = SubmittedRecord {
                values: self.values.clone(),
                submitted_at: Utc::now(),
            };
            self.phase = FormPhase::Submitted(record.clone());
            self.emit(FormEvent::Submitted {
                record: record.clone(),
            });
            SubmitOutcome::Accepted(record)
        } else {
            self.phase = FormPhase::Editing;
            let errors = self.all_errors.clone();
            self.emit(FormEvent::SubmitRejected {
                errors: errors.clone(),
            });
            SubmitOutcome::Rejected(errors)
        }
    }

    /// Current values
    pub fn values(&self) -> &FormState {
        &self.values
    }

    /// Value of one field
    pub fn value(&self, field: FormField) -> &str {
        self.values.get(field)
    }

    /// Errors on display (touched fields only)
    pub fn errors(&self) -> &ErrorSet {
        &self.displayed_errors
    }

    /// Errors from a full validation pass, touched or not
    pub fn all_errors(&self) -> &ErrorSet {
        &self.all_errors
    }

    /// Check if a field has been touched
    pub fn is_touched(&self, field: FormField) -> bool {
        self.touched.contains(&field)
    }

    /// Current phase
    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// Record on display, if the last submit succeeded
    pub fn submitted(&self) -> Option<&SubmittedRecord> {
        match &self.phase {
            FormPhase::Submitted(record) => Some(record),
            FormPhase::Editing => None,
        }
    }

    /// Validation rules in use
    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    fn revalidate(&mut self) {
        self.all_errors = validate(&self.values, &self.rules);
        let displayed = self.all_errors.restricted_to(&self.touched);
        tracing::debug!(
            total = self.all_errors.len(),
            displayed = displayed.len(),
            "Validation pass"
        );

        if displayed != self.displayed_errors {
            self.displayed_errors = displayed;
            self.emit(FormEvent::ErrorsChanged {
                errors: self.displayed_errors.clone(),
            });
        }
    }

    fn emit(&mut self, event: FormEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer.notify(&event);
        }
    }
}

impl Drop for ContactForm {
    fn drop(&mut self) {
        tracing::info!("Contact form unmounted");
    }
}
