//! Intake form handling.
//!
//! Raw submissions arrive as an [`IntakeForm`] and are checked by the
//! validator, which either yields a normalized [`NewPatient`](crate::db::NewPatient)
//! or every rule violation found in the submission.

mod form;
mod validator;

#[cfg(test)]
mod validator_test;

pub use form::IntakeForm;
pub use validator::{Field, ValidationError, validate_intake, validate_intake_on};
