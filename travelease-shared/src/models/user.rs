use serde::{Deserialize, Serialize};
use crate::pii::Masked;
use super::{Entity, EntityId};

/// Booking owner. There is no login flow, so the password is only carried around.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub password: Masked<String>,
    pub email: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: Masked<String>,
    pub email: String,
    pub full_name: String,
}

impl Entity for User {
    type New = NewUser;

    const KIND: &'static str = "user";

    fn from_new(id: EntityId, new: NewUser) -> Self {
        Self {
            id,
            username: new.username,
            password: new.password,
            email: new.email,
            full_name: new.full_name,
        }
    }
}
