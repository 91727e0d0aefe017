//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod booking;
mod catalog;
mod favorites;
mod listing;
pub mod logging;
pub mod migration;
mod mortgage;
pub mod password;
mod session;

pub use booking::BookingService;
pub use catalog::{CatalogService, PersonalityMatch};
pub use favorites::{DashboardSummary, FavoritesService};
pub use listing::ListingService;
pub use logging::{EntryPoint, EventCount, LogEntry, LogEvent, LoggingService};
pub use migration::{MigrationResult, MigrationService};
pub use mortgage::{MortgageService, QuoteInput};
pub use session::{SessionService, SignupRequest, MIN_PASSWORD_LEN};
