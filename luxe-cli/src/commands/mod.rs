//! CLI command implementations

pub mod account;
pub mod booking;
pub mod config;
pub mod dashboard;
pub mod favorites;
pub mod listings;
pub mod logs;
pub mod mortgage;
pub mod properties;

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dialoguer::Password;
use luxe_core::services::{EntryPoint, LogEvent, LoggingService};
use luxe_core::{LuxeContext, OperationResult};
use serde::Serialize;

use crate::output;

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let data_dir = get_data_dir().ok()?;
    std::fs::create_dir_all(&data_dir).ok()?;
    LoggingService::new(&data_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: LogEvent) {
    if let Some(l) = logger {
        let _ = l.log(event);
    }
}

/// The data directory: LUXE_DIR, or ~/.luxe
pub fn get_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var("LUXE_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".luxe"))
        .context("Could not find home directory; set LUXE_DIR")
}

/// Open the data directory and build all services
pub fn get_context() -> Result<LuxeContext> {
    let data_dir = get_data_dir()?;
    LuxeContext::new(&data_dir, EntryPoint::Cli)
        .with_context(|| format!("Failed to open data directory {}", data_dir.display()))
}

/// Password from --password, the LUXE_PASSWORD environment variable, or a
/// prompt
pub fn get_password_or_prompt(password_flag: Option<String>, prompt: &str) -> Result<String> {
    if let Some(p) = password_flag {
        return Ok(p);
    }

    if let Ok(p) = env::var("LUXE_PASSWORD") {
        return Ok(p);
    }

    let p = Password::new().with_prompt(prompt).interact()?;
    Ok(p)
}

/// Like [`get_password_or_prompt`], but a prompted password is asked for
/// twice. Used when choosing a new password.
pub fn get_new_password_or_prompt(password_flag: Option<String>, prompt: &str) -> Result<String> {
    if let Some(p) = password_flag {
        return Ok(p);
    }

    if let Ok(p) = env::var("LUXE_PASSWORD") {
        return Ok(p);
    }

    let p = Password::new()
        .with_prompt(prompt)
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;
    Ok(p)
}

/// Run an operation behind a spinner (only on an interactive terminal)
pub fn with_spinner<T>(message: &str, json: bool, f: impl FnOnce() -> T) -> T {
    let spinner = if json || atty::isnt(atty::Stream::Stdout) {
        None
    } else {
        Some(output::spinner(message))
    };
    let result = f();
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    result
}

/// Print the `--json` envelope of an operation, then hand back its outcome.
/// A failure keeps its `luxe_core::Error` so the exit path can classify it.
pub fn print_json_result<T: Serialize>(result: luxe_core::domain::result::Result<T>) -> Result<()> {
    let envelope = match &result {
        Ok(data) => OperationResult::ok(data),
        Err(e) => OperationResult::fail(e.to_string()),
    };
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    result.map(|_| ()).map_err(Into::into)
}

/// Event name for a failed command: rejected input or a real failure
pub fn failure_event(error: &anyhow::Error) -> &'static str {
    match error.downcast_ref::<luxe_core::Error>() {
        Some(core) if core.is_user_facing() => "command_rejected",
        _ => "command_failed",
    }
}
