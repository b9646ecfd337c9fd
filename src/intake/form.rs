//! Raw intake form submission.

use serde::{Deserialize, Serialize};

/// Form fields exactly as submitted by the browser.
///
/// Absent fields deserialize to the empty string so a missing field is
/// reported as "required" rather than rejected by the extractor. The
/// same value is echoed back to the form on validation failure, so it is
/// never trimmed or otherwise rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct IntakeForm {
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub therapist: String,
}
