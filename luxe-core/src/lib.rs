//! Luxe Core - Business logic for the Luxe Estates brokerage
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Core business entities (Property, User, Booking, etc.)
//! - **ports**: Trait definitions for durable storage
//! - **services**: Business logic orchestration
//! - **adapters**: Concrete implementations (DuckDB, the built-in catalog)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod log_migrations;
pub mod migrations;
pub mod ports;
pub mod services;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use adapters::duckdb::DuckDbRepository;
use config::Config;
use services::*;

// Re-export commonly used types at crate root
pub use domain::result::{Error, OperationResult};
pub use domain::{Booking, Property, Role, User};

/// File name of the main database inside the data directory
pub const DB_FILENAME: &str = "luxe.duckdb";

/// Main context for Luxe operations
///
/// This is the primary entry point for all business logic. It holds
/// the database connection, configuration, and all services.
pub struct LuxeContext {
    pub config: Config,
    pub data_dir: PathBuf,
    pub repository: Arc<DuckDbRepository>,
    /// None when logs.duckdb could not be opened; logging is best effort
    pub logger: Option<Arc<LoggingService>>,
    pub session_service: Arc<SessionService>,
    pub catalog_service: Arc<CatalogService>,
    pub favorites_service: FavoritesService,
    pub booking_service: BookingService,
    pub listing_service: ListingService,
    pub mortgage_service: MortgageService,
}

impl LuxeContext {
    /// Open the data directory, creating it if needed
    pub fn new(data_dir: &Path, entry_point: EntryPoint) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        let config = Config::load(data_dir)?;

        let repository = Arc::new(DuckDbRepository::new(&data_dir.join(DB_FILENAME))?);

        // Initialize schema
        repository.ensure_schema()?;

        let logger = LoggingService::new(data_dir, entry_point, env!("CARGO_PKG_VERSION"))
            .ok()
            .map(Arc::new);

        let mut session_service = SessionService::new(
            repository.clone(),
            repository.clone(),
            config.agent.clone(),
        );
        if let Some(logger) = &logger {
            session_service = session_service.with_logger(Arc::clone(logger));
        }
        let session_service = Arc::new(session_service);

        let catalog_service = Arc::new(CatalogService::new(repository.clone()));
        let favorites_service =
            FavoritesService::new(Arc::clone(&catalog_service), repository.clone());
        let booking_service = BookingService::new(
            repository.clone(),
            Arc::clone(&catalog_service),
            Arc::clone(&session_service),
            config.booking_window_days,
        );
        let listing_service = ListingService::new(repository.clone());
        let mortgage_service = MortgageService::new(config.mortgage);

        Ok(Self {
            config,
            data_dir: data_dir.to_path_buf(),
            repository,
            logger,
            session_service,
            catalog_service,
            favorites_service,
            booking_service,
            listing_service,
            mortgage_service,
        })
    }
}
