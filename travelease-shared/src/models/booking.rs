use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use super::{Entity, EntityId};

pub const DEFAULT_BOOKING_STATUS: &str = "pending";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: EntityId,
    pub user_id: EntityId,
    pub hotel_id: EntityId,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub total_price: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub user_id: EntityId,
    pub hotel_id: EntityId,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub total_price: i32,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    DEFAULT_BOOKING_STATUS.to_string()
}

impl Entity for Booking {
    type New = NewBooking;

    const KIND: &'static str = "booking";

    fn from_new(id: EntityId, new: NewBooking) -> Self {
        Self {
            id,
            user_id: new.user_id,
            hotel_id: new.hotel_id,
            check_in_date: new.check_in_date,
            check_out_date: new.check_out_date,
            total_price: new.total_price,
            status: new.status,
            created_at: Utc::now(),
        }
    }
}
