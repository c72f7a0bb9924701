//! Change notifications for form subscribers
//!
//! Front ends subscribe to a [`ContactForm`](crate::form::ContactForm) and are
//! notified synchronously after every state change, once the new state is in
//! place.

use crate::form::field::FormField;
use crate::form::gate::SubmittedRecord;
use crate::form::validator::ErrorSet;

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

/// Event delivered to observers
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    /// A field value changed
    InputChanged {
        /// Field that changed
        field: FormField,
        /// New value
        value: String,
    },
    /// The displayed error set changed
    ErrorsChanged {
        /// Errors now on display
        errors: ErrorSet,
    },
    /// Submit passed validation
    Submitted {
        /// Frozen snapshot of the values
        record: SubmittedRecord,
    },
    /// Submit failed validation
    SubmitRejected {
        /// Errors that blocked the submit
        errors: ErrorSet,
    },
}

/// Receives form events
pub trait FormObserver {
    /// Called after each state change
    fn notify(&mut self, event: &FormEvent);
}

impl<F> FormObserver for F
where
    F: FnMut(&FormEvent),
{
    fn notify(&mut self, event: &FormEvent) {
        self(event)
    }
}

/// Observer that writes every event to `tracing`
#[derive(Debug, Default)]
pub struct TracingObserver;

impl FormObserver for TracingObserver {
    fn notify(&mut self, event: &FormEvent) {
        match event {
            FormEvent::InputChanged { field, value } => {
                tracing::debug!(%field, len = value.chars().count(), "Field changed");
            }
            FormEvent::ErrorsChanged { errors } => {
                tracing::debug!(count = errors.len(), "Displayed errors changed");
            }
            FormEvent::Submitted { record } => {
                tracing::info!(email = %record.values.email, "Contact form submitted");
            }
            FormEvent::SubmitRejected { errors } => {
                tracing::warn!(count = errors.len(), "Contact form submit rejected");
            }
        }
    }
}
