//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod booking;
mod credential;
pub mod filter;
pub mod listing;
pub mod mortgage;
mod property;
pub mod result;
mod user;

pub use booking::{available_dates, Booking, BookingRequest, BookingStatus, TIME_SLOTS};
pub use credential::Credential;
pub use filter::PropertyFilter;
pub use listing::{AgentListing, ListingDraft, ListingStatus};
pub use mortgage::MortgageQuote;
pub use property::{
    AgentContact, Coordinates, Personality, Property, PropertyStatus, PropertyType,
};
pub use user::{Role, User, UserUpdate};
