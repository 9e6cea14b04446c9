pub mod booking;
pub mod catalog;
pub mod contact;
pub mod filter;
pub mod search;
mod validation;

pub use booking::{BookingRequest, BookingService, StayQuote};
pub use catalog::CatalogService;
pub use contact::{validate_contact_form, ContactIntake};
pub use filter::{facility_options, HotelFilter};
pub use search::{resolve_destination, SearchEngine};
