// Validator Tests - Testing field rules and ErrorSet behavior

use crate::form::validator::{is_valid_email, validate_field};
use crate::form::{validate, ErrorSet, FormField, FormState, ValidationRules};
use std::collections::HashSet;

fn valid_state() -> FormState {
    FormState {
        first_name: "kimmy".to_string(),
        last_name: "nguyen".to_string(),
        email: "kim@kim.com".to_string(),
        message: String::new(),
    }
}

#[test]
fn test_empty_form_has_three_errors() {
    let errors = validate(&FormState::new(), &ValidationRules::default());

    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get(FormField::FirstName), Some("firstName is a required field"));
    assert_eq!(errors.get(FormField::LastName), Some("lastName is a required field"));
    assert_eq!(errors.get(FormField::Email), Some("email is a required field"));
    assert!(!errors.contains(FormField::Message));
}

#[test]
fn test_valid_form_has_no_errors() {
    let errors = validate(&valid_state(), &ValidationRules::default());
    assert!(errors.is_empty());
}

#[test]
fn test_short_first_name() {
    let rules = ValidationRules::default();

    assert_eq!(
        validate_field(FormField::FirstName, "kim", &rules).as_deref(),
        Some("firstName must have at least 5 characters")
    );
    assert!(validate_field(FormField::FirstName, "kimm", &rules).is_some());
    assert_eq!(validate_field(FormField::FirstName, "kimmy", &rules), None);
    assert_eq!(validate_field(FormField::FirstName, "kimberly", &rules), None);
}

#[test]
fn test_first_name_counts_characters_not_bytes() {
    let rules = ValidationRules::default();
    // 5 characters, 10 bytes
    assert_eq!(validate_field(FormField::FirstName, "ÉÉÉÉÉ", &rules), None);
}

#[test]
fn test_first_name_min_len_is_configurable() {
    let rules = ValidationRules {
        first_name_min_len: 2,
    };
    assert_eq!(validate_field(FormField::FirstName, "Al", &rules), None);
    assert_eq!(
        validate_field(FormField::FirstName, "A", &rules).as_deref(),
        Some("firstName must have at least 2 characters")
    );
}

#[test]
fn test_email_format() {
    assert!(is_valid_email("kim@kim.com"));
    assert!(is_valid_email("first.last+tag@mail.example.org"));

    assert!(!is_valid_email("kim@gmail"));
    assert!(!is_valid_email("kim"));
    assert!(!is_valid_email("@kim.com"));
    assert!(!is_valid_email("kim@.com"));
    assert!(!is_valid_email("kim @kim.com"));
    assert!(!is_valid_email("kim@kim."));
}

#[test]
fn test_invalid_email_message() {
    let mut state = valid_state();
    state.email = "kim@gmail".to_string();

    let errors = validate(&state, &ValidationRules::default());
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(FormField::Email),
        Some("email must be a valid email address")
    );
}

#[test]
fn test_message_never_errors() {
    let rules = ValidationRules::default();
    assert_eq!(validate_field(FormField::Message, "", &rules), None);
    assert_eq!(validate_field(FormField::Message, "x", &rules), None);
}

#[test]
fn test_validation_is_idempotent() {
    let mut state = FormState::new();
    state.first_name = "kim".to_string();
    let rules = ValidationRules::default();

    let first = validate(&state, &rules);
    let second = validate(&state, &rules);
    assert_eq!(first, second);
}

#[test]
fn test_error_set_iterates_in_field_order() {
    let mut errors = ErrorSet::new();
    errors.insert(FormField::Email, "e");
    errors.insert(FormField::FirstName, "f");
    errors.insert(FormField::LastName, "l");

    let fields: Vec<FormField> = errors.iter().map(|(field, _)| field).collect();
    assert_eq!(
        fields,
        vec![FormField::FirstName, FormField::LastName, FormField::Email]
    );
    assert_eq!(errors.messages(), vec!["f", "l", "e"]);
}

#[test]
fn test_error_set_restricted_to_fields() {
    let errors = validate(&FormState::new(), &ValidationRules::default());
    let touched: HashSet<FormField> = [FormField::Email].into_iter().collect();

    let restricted = errors.restricted_to(&touched);
    assert_eq!(restricted.len(), 1);
    assert!(restricted.contains(FormField::Email));
    // Source set is unchanged
    assert_eq!(errors.len(), 3);
}
