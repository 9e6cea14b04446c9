use async_trait::async_trait;
use travelease_shared::{
    Booking, ContactForm, Destination, EntityId, Hotel, NewBooking, NewContactForm,
    NewDestination, NewHotel, NewUser, User,
};
use crate::CoreResult;

/// Repository trait for destination data access
#[async_trait]
pub trait DestinationRepository: Send + Sync {
    async fn create_destination(&self, destination: NewDestination) -> CoreResult<Destination>;

    async fn get_destination(&self, id: EntityId) -> CoreResult<Option<Destination>>;

    /// All destinations in ascending id order.
    async fn list_destinations(&self) -> CoreResult<Vec<Destination>>;

    async fn list_popular_destinations(&self) -> CoreResult<Vec<Destination>>;
}

/// Repository trait for hotel data access
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Fails with `MissingReference` when `destination_id` is unknown.
    async fn create_hotel(&self, hotel: NewHotel) -> CoreResult<Hotel>;

    async fn get_hotel(&self, id: EntityId) -> CoreResult<Option<Hotel>>;

    /// All hotels in ascending id order.
    async fn list_hotels(&self) -> CoreResult<Vec<Hotel>>;

    async fn list_featured_hotels(&self) -> CoreResult<Vec<Hotel>>;

    async fn list_hotels_by_destination(&self, destination_id: EntityId) -> CoreResult<Vec<Hotel>>;
}

/// Repository trait for contact submissions
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_contact_form(&self, form: NewContactForm) -> CoreResult<ContactForm>;

    async fn count_contact_forms(&self) -> CoreResult<usize>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> CoreResult<User>;

    async fn get_user(&self, id: EntityId) -> CoreResult<Option<User>>;

    async fn get_user_by_username(&self, username: &str) -> CoreResult<Option<User>>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Fails with `MissingReference` when the user or hotel is unknown.
    async fn create_booking(&self, booking: NewBooking) -> CoreResult<Booking>;

    async fn list_bookings_by_user(&self, user_id: EntityId) -> CoreResult<Vec<Booking>>;
}
