//! Config command - show and change settings.json

use std::collections::BTreeMap;

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use luxe_core::config::{Config, SETTABLE_KEYS};

use super::get_data_dir;
use crate::output;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the settings in effect
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change a setting, e.g. `luxe config set booking.windowDays 14`
    Set {
        /// One of booking.windowDays, watch.intervalMs, mortgage.downPayment,
        /// mortgage.rate, mortgage.termYears
        key: String,
        value: String,
    },
}

pub fn run(command: ConfigCommands) -> Result<()> {
    let data_dir = get_data_dir()?;
    std::fs::create_dir_all(&data_dir)?;
    let mut config = Config::load(&data_dir)?;

    match command {
        ConfigCommands::Show { json } => {
            let values: BTreeMap<&str, String> = SETTABLE_KEYS
                .iter()
                .filter_map(|key| config.get(key).map(|v| (*key, v)))
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&values)?);
                return Ok(());
            }
            for (key, value) in values {
                println!("{:<22} {}", key.bold(), value);
            }
            println!("{:<22} {}", "agent.email".bold(), config.agent.email);
        }
        ConfigCommands::Set { key, value } => {
            config.set(&key, &value)?;
            config.save(&data_dir)?;
            let stored = config.get(&key).unwrap_or(value);
            output::success(&format!("{} = {}", key, stored));
        }
    }
    Ok(())
}
