use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::{Entity, EntityId};

/// A stored contact-form entry. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub destination: Option<String>,
    pub message: String,
    pub consent_marketing: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub destination: Option<String>,
    pub message: String,
    #[serde(default)]
    pub consent_marketing: bool,
}

impl Entity for ContactForm {
    type New = NewContactForm;

    const KIND: &'static str = "contact form";

    fn from_new(id: EntityId, new: NewContactForm) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            destination: new.destination,
            message: new.message,
            consent_marketing: new.consent_marketing,
            created_at: Utc::now(),
        }
    }
}
