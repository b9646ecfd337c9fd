//! Tests for intake validation rules.

use chrono::NaiveDate;

use crate::intake::{Field, IntakeForm, ValidationError, validate_intake, validate_intake_on};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
}

fn form(first_name: &str, last_name: &str, dob: &str, therapist: &str) -> IntakeForm {
    IntakeForm {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        dob: dob.to_string(),
        therapist: therapist.to_string(),
    }
}

fn errors_for(form: &IntakeForm) -> Vec<ValidationError> {
    validate_intake_on(form, today()).expect_err("Validation should fail")
}

// =============================================================================
// Names
// =============================================================================

#[test]
fn accepts_letters_spaces_apostrophes_and_hyphens() {
    let record = validate_intake_on(
        &form("Anne-Marie", "O'Neil", "1990-05-10", "Mary Jane Watson"),
        today(),
    )
    .expect("Validation should pass");

    assert_eq!(record.first_name, "Anne-Marie");
    assert_eq!(record.last_name, "O'Neil");
    assert_eq!(record.therapist, "Mary Jane Watson");
    assert_eq!(record.dob, NaiveDate::from_ymd_opt(1990, 5, 10).unwrap());
}

#[test]
fn trims_surrounding_whitespace() {
    let record = validate_intake_on(
        &form("  Anne ", "\tSmith\n", " 1990-05-10 ", " Dr Jones "),
        today(),
    )
    .expect("Validation should pass");

    assert_eq!(record.first_name, "Anne");
    assert_eq!(record.last_name, "Smith");
    assert_eq!(record.therapist, "Dr Jones");
}

#[test]
fn whitespace_only_name_is_required() {
    let errors = errors_for(&form("   ", "Smith", "1990-05-10", "Dr Jones"));
    assert_eq!(errors, vec![ValidationError::Required(Field::FirstName)]);
}

#[test]
fn period_in_therapist_name_is_rejected() {
    let errors = errors_for(&form("Anne-Marie", "O'Neil", "1990-05-10", "Dr. Smith"));

    assert_eq!(errors, vec![ValidationError::InvalidCharacters(Field::Therapist)]);
    assert_eq!(
        errors[0].to_string(),
        "Therapist name can only contain letters, spaces, apostrophes, and hyphens."
    );
}

#[test]
fn digits_and_symbols_are_rejected() {
    for bad in ["Anne2", "Bob!", "J@ne", "Smith_Jones", "Ann.", "50 Cent"] {
        let errors = errors_for(&form(bad, "Smith", "1990-05-10", "Dr Jones"));
        assert_eq!(
            errors,
            vec![ValidationError::InvalidCharacters(Field::FirstName)],
            "'{}' should be rejected",
            bad
        );
    }
}

#[test]
fn non_ascii_letters_are_rejected() {
    let errors = errors_for(&form("Zoë", "Smith", "1990-05-10", "Dr Jones"));
    assert_eq!(errors, vec![ValidationError::InvalidCharacters(Field::FirstName)]);
}

// =============================================================================
// Date of birth
// =============================================================================

#[test]
fn missing_dob_is_required() {
    let errors = errors_for(&form("Anne", "Smith", "  ", "Dr Jones"));

    assert_eq!(errors, vec![ValidationError::Required(Field::DateOfBirth)]);
    assert_eq!(errors[0].to_string(), "Date of birth is required.");
}

#[test]
fn malformed_dob_is_invalid_format() {
    for bad in [
        "13/02/2020",
        "not-a-date",
        "2020-13-01",
        "2020-02-30",
        "20200210",
        "90-05-10",
        "+1990-05-10",
        "-0001-01-01",
        "1990-5-1",
        "01990-05-10",
    ] {
        let errors = errors_for(&form("Anne", "Smith", bad, "Dr Jones"));
        assert_eq!(
            errors,
            vec![ValidationError::InvalidDateFormat],
            "'{}' should be an invalid format",
            bad
        );
    }
}

#[test]
fn yesterday_is_accepted() {
    let record = validate_intake_on(&form("Anne", "Smith", "2024-06-14", "Dr Jones"), today())
        .expect("Validation should pass");
    assert_eq!(record.dob, NaiveDate::from_ymd_opt(2024, 6, 14).unwrap());
}

#[test]
fn today_is_not_in_the_past() {
    let errors = errors_for(&form("Anne", "Smith", "2024-06-15", "Dr Jones"));

    assert_eq!(errors, vec![ValidationError::DateNotInPast]);
    assert_eq!(errors[0].to_string(), "Date of birth must be in the past.");
}

#[test]
fn future_date_is_not_in_the_past() {
    let errors = errors_for(&form("Anne", "Smith", "2030-01-01", "Dr Jones"));
    assert_eq!(errors, vec![ValidationError::DateNotInPast]);
}

// =============================================================================
// Collection of errors
// =============================================================================

#[test]
fn empty_form_reports_every_field_in_order() {
    let errors = errors_for(&IntakeForm::default());

    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    assert_eq!(
        messages,
        vec![
            "First name is required.",
            "Last name is required.",
            "Therapist name is required.",
            "Date of birth is required.",
        ]
    );
}

#[test]
fn violations_are_collected_across_fields() {
    let errors = errors_for(&form("Anne1", "", "tomorrow", "Dr. Who"));

    assert_eq!(
        errors,
        vec![
            ValidationError::InvalidCharacters(Field::FirstName),
            ValidationError::Required(Field::LastName),
            ValidationError::InvalidCharacters(Field::Therapist),
            ValidationError::InvalidDateFormat,
        ]
    );
}

#[test]
fn validate_intake_uses_current_date() {
    let tomorrow = chrono::Local::now().date_naive() + chrono::Days::new(1);
    let errors = validate_intake(&form(
        "Anne",
        "Smith",
        &tomorrow.format(crate::db::DOB_FORMAT).to_string(),
        "Dr Jones",
    ))
    .expect_err("Future date should fail");

    assert_eq!(errors, vec![ValidationError::DateNotInPast]);

    assert!(validate_intake(&form("Anne", "Smith", "1990-05-10", "Dr Jones")).is_ok());
}
