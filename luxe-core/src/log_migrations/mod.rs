//! Log database migrations - embedded SQL files
//!
//! Same layout as `migrations`, applied to `logs.duckdb` by the
//! logging service.

pub const LOG_MIGRATIONS: &[(&str, &str)] = &[
    ("000_migrations.sql", include_str!("000_migrations.sql")),
    ("001_initial_schema.sql", include_str!("001_initial_schema.sql")),
];
