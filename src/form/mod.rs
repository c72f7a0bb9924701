//! Form core: field store, validator and submission gate
//!
//! The [`ContactForm`] holds the values of the four contact fields, re-validates
//! them on every change and decides on submit whether the values are frozen into
//! a [`SubmittedRecord`] or the errors stay on display.

pub mod field;
pub mod gate;
pub mod observer;
pub mod validator;

pub use field::{FormField, FormState};
pub use gate::{ContactForm, FormPhase, SubmitOutcome, SubmittedRecord};
pub use observer::{FormEvent, FormObserver, SubscriptionId, TracingObserver};
pub use validator::{validate, ErrorSet, ValidationRules};
