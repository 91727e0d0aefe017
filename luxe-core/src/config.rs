//! Configuration management
//!
//! Settings live in `settings.json` in the data directory:
//! ```json
//! {
//!   "agent": { "email": "agent@luxe.com", "password": "agent123" },
//!   "booking": { "windowDays": 30 },
//!   "watch": { "intervalMs": 1000 },
//!   "mortgage": { "downPayment": 0.2, "rate": 4.5, "termYears": 30 }
//! }
//! ```
//! Keys this crate does not know about are kept when saving.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_AGENT_EMAIL: &str = "agent@luxe.com";
const DEFAULT_AGENT_PASSWORD: &str = "agent123";

/// Longest booking window offered, in days
pub const MAX_BOOKING_WINDOW_DAYS: u32 = 365;

/// Settings `luxe config set` can change
pub const SETTABLE_KEYS: [&str; 5] = [
    "booking.windowDays",
    "watch.intervalMs",
    "mortgage.downPayment",
    "mortgage.rate",
    "mortgage.termYears",
];

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    agent: AgentSettings,
    #[serde(default)]
    booking: BookingSettings,
    #[serde(default)]
    watch: WatchSettings,
    #[serde(default)]
    mortgage: MortgageSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AgentSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    window_days: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WatchSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interval_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MortgageSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    down_payment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    term_years: Option<u32>,
}

/// Built-in agent login
#[derive(Debug, Clone, PartialEq)]
pub struct AgentCredentials {
    pub id: String,
    pub email: String,
    pub password: String,
    pub name: String,
}

impl Default for AgentCredentials {
    fn default() -> Self {
        Self {
            id: "agent-1".to_string(),
            email: DEFAULT_AGENT_EMAIL.to_string(),
            password: DEFAULT_AGENT_PASSWORD.to_string(),
            name: "Luxe Agent".to_string(),
        }
    }
}

/// Calculator starting values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MortgageDefaults {
    /// Fraction of the price used as the starting loan amount
    pub down_payment: f64,
    pub rate: f64,
    pub term_years: u32,
}

impl Default for MortgageDefaults {
    fn default() -> Self {
        Self {
            down_payment: 0.2,
            rate: 4.5,
            term_years: 30,
        }
    }
}

/// Luxe configuration (resolved view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub agent: AgentCredentials,
    pub booking_window_days: u32,
    pub watch_interval_ms: u64,
    pub mortgage: MortgageDefaults,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agent: AgentCredentials::default(),
            booking_window_days: 30,
            watch_interval_ms: 1000,
            mortgage: MortgageDefaults::default(),
        }
    }
}

impl Config {
    /// Load config from the data directory.
    ///
    /// A missing or unreadable settings file yields the defaults. The agent
    /// credentials can also be set with LUXE_AGENT_EMAIL and
    /// LUXE_AGENT_PASSWORD (for CI/testing).
    pub fn load(data_dir: &Path) -> Result<Self> {
        let raw = read_settings(data_dir)?;
        let defaults = Config::default();

        let mut agent = AgentCredentials::default();
        if let Some(email) = raw.agent.email {
            agent.email = email;
        }
        if let Some(password) = raw.agent.password {
            agent.password = password;
        }
        if let Some(name) = raw.agent.name {
            agent.name = name;
        }
        if let Ok(email) = std::env::var("LUXE_AGENT_EMAIL") {
            if !email.is_empty() {
                agent.email = email;
            }
        }
        if let Ok(password) = std::env::var("LUXE_AGENT_PASSWORD") {
            if !password.is_empty() {
                agent.password = password;
            }
        }

        Ok(Self {
            agent,
            booking_window_days: raw
                .booking
                .window_days
                .filter(|days| *days > 0)
                .map(|days| days.min(MAX_BOOKING_WINDOW_DAYS))
                .unwrap_or(defaults.booking_window_days),
            watch_interval_ms: raw
                .watch
                .interval_ms
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.watch_interval_ms),
            mortgage: MortgageDefaults {
                down_payment: raw
                    .mortgage
                    .down_payment
                    .unwrap_or(defaults.mortgage.down_payment),
                rate: raw.mortgage.rate.unwrap_or(defaults.mortgage.rate),
                term_years: raw
                    .mortgage
                    .term_years
                    .unwrap_or(defaults.mortgage.term_years),
            },
        })
    }

    /// Change one of the [`SETTABLE_KEYS`] from its text form
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "booking.windowDays" => {
                let days: u32 = value.parse().context("windowDays must be a whole number")?;
                if days == 0 || days > MAX_BOOKING_WINDOW_DAYS {
                    bail!("windowDays must be between 1 and {}", MAX_BOOKING_WINDOW_DAYS);
                }
                self.booking_window_days = days;
            }
            "watch.intervalMs" => {
                let ms: u64 = value.parse().context("intervalMs must be a whole number")?;
                if ms == 0 {
                    bail!("intervalMs must be positive");
                }
                self.watch_interval_ms = ms;
            }
            "mortgage.downPayment" => {
                let fraction: f64 = value.parse().context("downPayment must be a number")?;
                if !(0.0..=1.0).contains(&fraction) {
                    bail!("downPayment must be a fraction between 0 and 1");
                }
                self.mortgage.down_payment = fraction;
            }
            "mortgage.rate" => {
                let rate: f64 = value.parse().context("rate must be a number")?;
                if !rate.is_finite() || rate < 0.0 {
                    bail!("rate must be non-negative");
                }
                self.mortgage.rate = rate;
            }
            "mortgage.termYears" => {
                let years: u32 = value.parse().context("termYears must be a whole number")?;
                if years == 0 {
                    bail!("termYears must be at least 1");
                }
                self.mortgage.term_years = years;
            }
            _ => bail!(
                "Unknown setting '{}'. Settable keys: {}",
                key,
                SETTABLE_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Current value of one of the [`SETTABLE_KEYS`]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "booking.windowDays" => Some(self.booking_window_days.to_string()),
            "watch.intervalMs" => Some(self.watch_interval_ms.to_string()),
            "mortgage.downPayment" => Some(self.mortgage.down_payment.to_string()),
            "mortgage.rate" => Some(self.mortgage.rate.to_string()),
            "mortgage.termYears" => Some(self.mortgage.term_years.to_string()),
            _ => None,
        }
    }

    /// Save config to the data directory, keeping settings this crate
    /// doesn't manage
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join("settings.json");
        let mut settings = read_settings(data_dir)?;

        settings.booking.window_days = Some(self.booking_window_days);
        settings.watch.interval_ms = Some(self.watch_interval_ms);
        settings.mortgage = MortgageSettings {
            down_payment: Some(self.mortgage.down_payment),
            rate: Some(self.mortgage.rate),
            term_years: Some(self.mortgage.term_years),
        };

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}

fn read_settings(data_dir: &Path) -> Result<SettingsFile> {
    let settings_path = data_dir.join("settings.json");
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(&settings_path)?;
    Ok(serde_json::from_str(&content).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_settings_file() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();

        assert_eq!(config.booking_window_days, 30);
        assert_eq!(config.watch_interval_ms, 1000);
        assert_eq!(config.mortgage, MortgageDefaults::default());
        assert_eq!(config.agent.id, "agent-1");
    }

    #[test]
    fn test_settings_override_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"booking": {"windowDays": 14}, "mortgage": {"rate": 6.25}}"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.booking_window_days, 14);
        assert_eq!(config.mortgage.rate, 6.25);
        assert_eq!(config.mortgage.term_years, 30);
    }

    #[test]
    fn test_unreadable_settings_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{ not json").unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.booking_window_days, 30);
    }

    #[test]
    fn test_save_preserves_unknown_keys() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"theme": "dark", "agent": {"name": "Front Desk"}}"#,
        )
        .unwrap();

        let mut config = Config::load(dir.path()).unwrap();
        config.watch_interval_ms = 250;
        config.save(dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("settings.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["agent"]["name"], "Front Desk");
        assert_eq!(value["watch"]["intervalMs"], 250);
    }

    #[test]
    fn test_window_days_is_clamped() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"booking": {"windowDays": 4000000000}}"#,
        )
        .unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.booking_window_days, MAX_BOOKING_WINDOW_DAYS);

        std::fs::write(
            dir.path().join("settings.json"),
            r#"{"booking": {"windowDays": 0}}"#,
        )
        .unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.booking_window_days, 30);
    }

    #[test]
    fn test_set_validates_then_saves() {
        let dir = tempdir().unwrap();
        let mut config = Config::load(dir.path()).unwrap();

        assert!(config.set("booking.windowDays", "0").is_err());
        assert!(config.set("booking.windowDays", "366").is_err());
        assert!(config.set("mortgage.downPayment", "1.5").is_err());
        assert!(config.set("mortgage.rate", "cheap").is_err());
        assert!(config.set("theme", "dark").is_err());
        assert_eq!(config.booking_window_days, 30);

        config.set("booking.windowDays", " 14 ").unwrap();
        config.set("mortgage.termYears", "15").unwrap();
        config.save(dir.path()).unwrap();

        let reloaded = Config::load(dir.path()).unwrap();
        assert_eq!(reloaded.get("booking.windowDays").as_deref(), Some("14"));
        assert_eq!(reloaded.mortgage.term_years, 15);
        assert_eq!(reloaded.get("theme"), None);
    }
}
