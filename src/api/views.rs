//! HTML rendering for the intake pages.
//!
//! Templates are embedded from `templates/` and compiled once at startup.
//! Autoescaping stays on for `.html` templates, so echoed input is inert.

use miette::Diagnostic;
use rust_embed::RustEmbed;
use tera::{Context, Tera};
use thiserror::Error;

use crate::db::Patient;
use crate::intake::IntakeForm;

const FORM_TEMPLATE: &str = "form.html";
const CONFIRMATION_TEMPLATE: &str = "confirmation.html";

#[derive(RustEmbed)]
#[folder = "templates/"]
#[include = "*.html"]
struct TemplateAssets;

/// Template loading and rendering errors.
#[derive(Error, Diagnostic, Debug)]
pub enum ViewError {
    #[error("Template '{name}' is not valid UTF-8")]
    #[diagnostic(code(intake::api::template_encoding))]
    Encoding { name: String },

    #[error("Template error: {0}")]
    #[diagnostic(code(intake::api::template))]
    Template(#[from] tera::Error),
}

/// Compiled page templates.
pub struct Views {
    tera: Tera,
}

impl Views {
    /// Compile every embedded template.
    pub fn load() -> Result<Self, ViewError> {
        let mut sources = Vec::new();
        for name in TemplateAssets::iter() {
            let Some(file) = TemplateAssets::get(&name) else {
                continue;
            };
            let source = String::from_utf8(file.data.into_owned()).map_err(|_| {
                ViewError::Encoding {
                    name: name.to_string(),
                }
            })?;
            sources.push((name.to_string(), source));
        }

        let mut tera = Tera::default();
        // Added together so `extends` can resolve base.html
        tera.add_raw_templates(sources)?;

        Ok(Self { tera })
    }

    /// Render the intake form with any validation messages and the
    /// submitted values.
    pub fn render_form(
        &self,
        errors: &[String],
        form_data: &IntakeForm,
    ) -> Result<String, ViewError> {
        let mut context = Context::new();
        context.insert("errors", errors);
        context.insert("form_data", form_data);

        Ok(self.tera.render(FORM_TEMPLATE, &context)?)
    }

    /// Render the confirmation page for a stored patient.
    pub fn render_confirmation(&self, patient: &Patient) -> Result<String, ViewError> {
        let mut context = Context::new();
        context.insert("patient_id", &patient.id);
        context.insert("first_name", &patient.first_name);
        context.insert("last_name", &patient.last_name);
        context.insert("dob", &patient.dob_iso());
        context.insert("therapist", &patient.therapist);

        Ok(self.tera.render(CONFIRMATION_TEMPLATE, &context)?)
    }
}
