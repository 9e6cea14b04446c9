pub mod booking;
pub mod contact;
pub mod destination;
pub mod hotel;
pub mod user;

pub use booking::{Booking, NewBooking, DEFAULT_BOOKING_STATUS};
pub use contact::{ContactForm, NewContactForm};
pub use destination::{Destination, NewDestination};
pub use hotel::{Hotel, NewHotel};
pub use user::{NewUser, User};

/// Sequential, per-collection identifier. Starts at 1 and is never reused.
pub type EntityId = i64;

/// A record kind held by the entity store.
///
/// `New` is the insert shape (everything except server-assigned fields);
/// `from_new` builds the stored record once the store has picked an id.
pub trait Entity: Clone + Send + Sync + 'static {
    type New: Send;

    /// Human readable kind, used in log lines and error messages.
    const KIND: &'static str;

    fn from_new(id: EntityId, new: Self::New) -> Self;
}
