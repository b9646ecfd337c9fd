//! Intake validation rules.

use std::fmt;

use chrono::{Local, NaiveDate};
use thiserror::Error;

use super::IntakeForm;
use crate::db::{DOB_FORMAT, NewPatient};

/// A field of the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Therapist,
    DateOfBirth,
}

impl Field {
    /// Label used in user-facing messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Therapist => "Therapist name",
            Field::DateOfBirth => "Date of birth",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single rule violation. The display text is shown to the user as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required.")]
    Required(Field),

    #[error("{0} can only contain letters, spaces, apostrophes, and hyphens.")]
    InvalidCharacters(Field),

    #[error("Invalid date format.")]
    InvalidDateFormat,

    #[error("Date of birth must be in the past.")]
    DateNotInPast,
}

/// Validate a submission against the current local date.
pub fn validate_intake(form: &IntakeForm) -> Result<NewPatient, Vec<ValidationError>> {
    validate_intake_on(form, Local::now().date_naive())
}

/// Validate a submission, treating `today` as the current date.
///
/// Every field is checked independently and all violations are returned,
/// in the order first name, last name, therapist, date of birth.
pub fn validate_intake_on(
    form: &IntakeForm,
    today: NaiveDate,
) -> Result<NewPatient, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let first_name = check_name(&form.first_name, Field::FirstName, &mut errors);
    let last_name = check_name(&form.last_name, Field::LastName, &mut errors);
    let therapist = check_name(&form.therapist, Field::Therapist, &mut errors);
    let dob = check_dob(&form.dob, today, &mut errors);

    match (first_name, last_name, therapist, dob) {
        (Some(first_name), Some(last_name), Some(therapist), Some(dob)) => Ok(NewPatient {
            first_name,
            last_name,
            dob,
            therapist,
        }),
        _ => Err(errors),
    }
}

fn check_name(raw: &str, field: Field, errors: &mut Vec<ValidationError>) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        errors.push(ValidationError::Required(field));
        return None;
    }
    if !value.chars().all(is_name_char) {
        errors.push(ValidationError::InvalidCharacters(field));
        return None;
    }
    Some(value.to_string())
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c.is_whitespace() || c == '\'' || c == '-'
}

fn check_dob(
    raw: &str,
    today: NaiveDate,
    errors: &mut Vec<ValidationError>,
) -> Option<NaiveDate> {
    let value = raw.trim();
    if value.is_empty() {
        errors.push(ValidationError::Required(Field::DateOfBirth));
        return None;
    }
    let parsed = if is_iso_date_shape(value) {
        NaiveDate::parse_from_str(value, DOB_FORMAT).ok()
    } else {
        None
    };
    let Some(dob) = parsed else {
        errors.push(ValidationError::InvalidDateFormat);
        return None;
    };
    if dob >= today {
        errors.push(ValidationError::DateNotInPast);
        return None;
    }
    Some(dob)
}

/// Exactly `YYYY-MM-DD`: chrono alone also takes signed or short years and
/// unpadded months and days.
fn is_iso_date_shape(value: &str) -> bool {
    value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}
