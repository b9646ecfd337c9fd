//! Intake form handlers.

use axum::{Form, extract::State, response::Html};
use tracing::{debug, info, instrument};

use crate::api::{AppError, AppState};
use crate::db::{Database, PatientRepository};
use crate::intake::{IntakeForm, validate_intake};

/// Render the empty intake form.
#[instrument(skip(state))]
pub async fn intake_form<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Html<String>, AppError> {
    let html = state.views().render_form(&[], &IntakeForm::default())?;
    Ok(Html(html))
}

/// Validate a submission and store it.
///
/// Invalid submissions re-render the form with every error message and the
/// values exactly as submitted. Valid ones are inserted and confirmed.
#[instrument(skip(state, form))]
pub async fn submit_intake<D: Database>(
    State(state): State<AppState<D>>,
    Form(form): Form<IntakeForm>,
) -> Result<Html<String>, AppError> {
    let record = match validate_intake(&form) {
        Ok(record) => record,
        Err(errors) => {
            debug!(count = errors.len(), "Intake rejected by validation");
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            let html = state.views().render_form(&messages, &form)?;
            return Ok(Html(html));
        }
    };

    let patients = state.db().patients();
    let patient = patients.insert(&record).await?;
    info!(patient_id = patient.id, "Patient intake stored");

    let html = state.views().render_confirmation(&patient)?;
    Ok(Html(html))
}
