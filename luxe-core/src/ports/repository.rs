//! Repository ports - durable storage abstraction
//!
//! One trait per kind of persisted record. The services depend only on
//! these traits; the DuckDB adapter implements all of them.

use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::{AgentListing, Booking, Credential};

/// Registered accounts, one record per email
pub trait CredentialStore: Send + Sync {
    /// Append a new record. Fails with `Error::AlreadyExists` if the email
    /// is taken.
    fn insert_credential(&self, credential: &Credential) -> Result<()>;

    /// Exact (case-sensitive) email lookup
    fn find_credential_by_email(&self, email: &str) -> Result<Option<Credential>>;

    fn find_credential_by_id(&self, user_id: &str) -> Result<Option<Credential>>;

    /// Overwrite the profile fields of an existing record
    fn update_credential(&self, credential: &Credential) -> Result<()>;

    /// All records in registration order
    fn list_credentials(&self) -> Result<Vec<Credential>>;
}

/// What the session store holds between processes.
///
/// `user_json` is kept raw so the caller decides what to do when it no
/// longer parses.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub user_json: Option<String>,
    pub authenticated: bool,
}

/// The current session: a user record plus the session-present flag
pub trait SessionStore: Send + Sync {
    fn load_session(&self) -> Result<StoredSession>;

    fn save_session(&self, user_json: &str) -> Result<()>;

    /// Remove both the user record and the flag
    fn clear_session(&self) -> Result<()>;
}

/// Inspection bookings, append-only
pub trait BookingStore: Send + Sync {
    fn add_booking(&self, booking: &Booking) -> Result<()>;

    /// All bookings in creation order
    fn get_bookings(&self) -> Result<Vec<Booking>>;

    fn get_bookings_for_user(&self, user_id: &str) -> Result<Vec<Booking>>;
}

/// Agent-added listings
pub trait ListingStore: Send + Sync {
    fn add_listing(&self, listing: &AgentListing) -> Result<()>;

    /// All listings in creation order
    fn get_listings(&self) -> Result<Vec<AgentListing>>;

    fn get_listing_by_id(&self, id: Uuid) -> Result<Option<AgentListing>>;
}
