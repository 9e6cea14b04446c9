use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use travelease_core::repository::{BookingRepository, HotelRepository, UserRepository};
use travelease_core::{CoreError, CoreResult, ValidationErrors};
use travelease_shared::{
    Booking, Entity, EntityId, Hotel, NewBooking, NewUser, User, DEFAULT_BOOKING_STATUS,
};
use validator::Validate;
use crate::validation::field_issues;

/// Price of a stay, before anything is stored
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StayQuote {
    pub hotel_id: EntityId,
    pub nights: i64,
    pub price_per_night: i32,
    pub total_price: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub user_id: EntityId,
    pub hotel_id: EntityId,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    #[validate(range(min = 1, max = 10, message = "Must be between 1 and 10"))]
    pub guests: u8,
}

/// Nights between the two dates times the nightly rate. At least one night is required.
pub fn quote(hotel: &Hotel, check_in: NaiveDate, check_out: NaiveDate) -> Result<StayQuote, ValidationErrors> {
    let nights = (check_out - check_in).num_days();
    if nights < 1 {
        return Err(ValidationErrors::single(
            "checkOutDate",
            "Check-out must be after check-in",
        ));
    }

    let total_price = i64::from(hotel.price_per_night)
        .checked_mul(nights)
        .and_then(|total| i32::try_from(total).ok())
        .ok_or_else(|| ValidationErrors::single("checkOutDate", "Stay is too long to price"))?;

    Ok(StayQuote {
        hotel_id: hotel.id,
        nights,
        price_per_night: hotel.price_per_night,
        total_price,
    })
}

/// Users and their bookings
#[derive(Clone)]
pub struct BookingService {
    users: Arc<dyn UserRepository>,
    hotels: Arc<dyn HotelRepository>,
    bookings: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hotels: Arc<dyn HotelRepository>,
        bookings: Arc<dyn BookingRepository>,
    ) -> Self {
        Self { users, hotels, bookings }
    }

    /// Fails with `Conflict` when the username is taken.
    pub async fn register_user(&self, user: NewUser) -> CoreResult<User> {
        let user = self.users.create_user(user).await?;
        info!("Registered user {} ({})", user.id, user.username);
        Ok(user)
    }

    pub async fn user(&self, id: EntityId) -> CoreResult<Option<User>> {
        self.users.get_user(id).await
    }

    pub async fn user_by_username(&self, username: &str) -> CoreResult<Option<User>> {
        self.users.get_user_by_username(username).await
    }

    pub async fn quote(
        &self,
        hotel_id: EntityId,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> CoreResult<StayQuote> {
        let hotel = self
            .hotels
            .get_hotel(hotel_id)
            .await?
            .ok_or(CoreError::MissingReference { kind: Hotel::KIND, id: hotel_id })?;

        Ok(quote(&hotel, check_in, check_out)?)
    }

    /// Prices the stay and stores a `pending` booking.
    pub async fn book(&self, req: BookingRequest) -> CoreResult<Booking> {
        req.validate()
            .map_err(|e| field_issues(&e, &[("guests", "guests")]))?;

        let quote = self.quote(req.hotel_id, req.check_in_date, req.check_out_date).await?;

        let booking = self
            .bookings
            .create_booking(NewBooking {
                user_id: req.user_id,
                hotel_id: req.hotel_id,
                check_in_date: req.check_in_date,
                check_out_date: req.check_out_date,
                total_price: quote.total_price,
                status: DEFAULT_BOOKING_STATUS.to_string(),
            })
            .await?;

        info!(
            "Booking {} created for user {}: hotel {} for {} nights",
            booking.id, booking.user_id, booking.hotel_id, quote.nights
        );
        Ok(booking)
    }

    pub async fn bookings_for_user(&self, user_id: EntityId) -> CoreResult<Vec<Booking>> {
        self.bookings.list_bookings_by_user(user_id).await
    }
}
