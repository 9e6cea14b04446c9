use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;
use travelease_core::repository::ContactRepository;
use travelease_core::{CoreResult, ValidationErrors};
use travelease_shared::{ContactForm, NewContactForm};
use validator::Validate;
use crate::validation::field_issues;

/// Validates and stores contact-form submissions
#[derive(Clone)]
pub struct ContactIntake {
    repo: Arc<dyn ContactRepository>,
}

impl ContactIntake {
    pub fn new(repo: Arc<dyn ContactRepository>) -> Self {
        Self { repo }
    }

    /// Nothing is stored unless `payload` passes validation.
    pub async fn submit(&self, payload: &Value) -> CoreResult<ContactForm> {
        let new = validate_contact_form(payload)?;
        let form = self.repo.create_contact_form(new).await?;

        info!(
            "Contact form {} received (consent_marketing={})",
            form.id, form.consent_marketing
        );
        Ok(form)
    }

    pub async fn submission_count(&self) -> CoreResult<usize> {
        self.repo.count_contact_forms().await
    }
}

const CONTACT_FIELDS: &[(&str, &str)] = &[
    ("first_name", "firstName"),
    ("last_name", "lastName"),
    ("email", "email"),
    ("message", "message"),
];

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct ContactPayload {
    #[validate(required(message = "Required"), length(min = 1, message = "Must not be empty"))]
    first_name: Option<String>,
    #[validate(required(message = "Required"), length(min = 1, message = "Must not be empty"))]
    last_name: Option<String>,
    #[validate(required(message = "Required"), email(message = "Invalid email"))]
    email: Option<String>,
    #[validate(required(message = "Required"), length(min = 1, message = "Must not be empty"))]
    message: Option<String>,
    destination: Option<String>,
    consent_marketing: Option<bool>,
}

impl ContactPayload {
    fn trimmed(self) -> Self {
        let trim = |value: Option<String>| value.map(|s| s.trim().to_string());
        Self {
            first_name: trim(self.first_name),
            last_name: trim(self.last_name),
            email: trim(self.email),
            message: trim(self.message),
            destination: trim(self.destination).filter(|s| !s.is_empty()),
            consent_marketing: self.consent_marketing,
        }
    }
}

/// Checks a raw JSON body against the contact form shape. Unknown keys are ignored.
pub fn validate_contact_form(payload: &Value) -> Result<NewContactForm, ValidationErrors> {
    if !payload.is_object() {
        return Err(ValidationErrors::single(
            "body",
            format!("Expected object, received {}", type_name(payload)),
        ));
    }

    let payload = ContactPayload::deserialize(payload)
        .map_err(|e| ValidationErrors::single("body", e.to_string()))?
        .trimmed();
    payload
        .validate()
        .map_err(|e| field_issues(&e, CONTACT_FIELDS))?;

    // Required fields are all present once validation passes.
    Ok(NewContactForm {
        first_name: payload.first_name.unwrap_or_default(),
        last_name: payload.last_name.unwrap_or_default(),
        email: payload.email.unwrap_or_default(),
        destination: payload.destination,
        message: payload.message.unwrap_or_default(),
        consent_marketing: payload.consent_marketing.unwrap_or(false),
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
