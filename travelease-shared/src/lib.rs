pub mod models;
pub mod pii;

pub use models::{
    Booking, ContactForm, Destination, Entity, EntityId, Hotel, NewBooking, NewContactForm,
    NewDestination, NewHotel, NewUser, User, DEFAULT_BOOKING_STATUS,
};
pub use pii::Masked;
