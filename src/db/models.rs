//! Patient records.

use chrono::NaiveDate;

/// ISO calendar date form used for dates of birth, both on input and in storage.
pub const DOB_FORMAT: &str = "%Y-%m-%d";

/// A validated, trimmed intake record that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub therapist: String,
}

impl NewPatient {
    /// Date of birth in the ISO form it is stored as.
    pub fn dob_iso(&self) -> String {
        self.dob.format(DOB_FORMAT).to_string()
    }
}

/// A stored patient record.
///
/// The id is assigned by the store on insertion and never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub therapist: String,
}

impl Patient {
    pub(crate) fn from_new(id: i64, patient: &NewPatient) -> Self {
        Self {
            id,
            first_name: patient.first_name.clone(),
            last_name: patient.last_name.clone(),
            dob: patient.dob,
            therapist: patient.therapist.clone(),
        }
    }

    /// Date of birth in the ISO form it is stored as.
    pub fn dob_iso(&self) -> String {
        self.dob.format(DOB_FORMAT).to_string()
    }
}
