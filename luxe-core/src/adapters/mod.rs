//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - DuckDB for the credential, session, booking and listing stores
//! - The built-in property catalog

pub mod catalog;
pub mod duckdb;
