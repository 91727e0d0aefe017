//! Luxe CLI - the Luxe Estates brokerage in your terminal

use std::process::ExitCode;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

mod commands;
mod output;

use commands::{
    account, booking, config, dashboard, favorites, listings, logs, mortgage, properties,
};
use luxe_core::services::LogEvent;

/// Luxe Estates - luxury listings, favorites and inspections
#[derive(Parser)]
#[command(name = "luxe", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and sign in
    Signup {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        /// Password (or set LUXE_PASSWORD)
        #[arg(short, long)]
        password: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Sign in
    Login {
        email: String,
        /// Password (or set LUXE_PASSWORD)
        #[arg(short, long)]
        password: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Sign out
    Logout,

    /// Show who is signed in
    Whoami {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or edit your profile
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Phone number (empty to remove)
        #[arg(long)]
        phone: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Agent portal
    Agent {
        #[command(subcommand)]
        command: account::AgentCommands,
    },

    /// Browse, search and match listings
    Properties {
        #[command(subcommand)]
        command: properties::PropertiesCommands,
    },

    /// Manage saved listings
    Favorites {
        #[command(subcommand)]
        command: favorites::FavoritesCommands,
    },

    /// Book a private inspection
    Book {
        /// Listing ID
        property_id: String,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Time slot, e.g. "10:00 AM" (see `luxe slots`)
        #[arg(long)]
        time: Option<String>,
        /// Contact name (defaults to your profile)
        #[arg(long)]
        name: Option<String>,
        /// Contact email (defaults to your profile)
        #[arg(long)]
        email: Option<String>,
        /// Contact phone (defaults to your profile)
        #[arg(long)]
        phone: Option<String>,
        /// Message for the agent
        #[arg(long)]
        notes: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show your booked inspections
    Bookings {
        /// Keep running and print changes made from other terminals
        #[arg(long)]
        watch: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show bookable dates and time slots
    Slots {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Agent-added listings
    Listings {
        #[command(subcommand)]
        command: listings::ListingsCommands,
    },

    /// Monthly payment for a listing or a loan amount
    Mortgage {
        /// Listing ID (loan defaults to part of its price)
        property_id: Option<String>,
        /// Loan amount in dollars
        #[arg(long)]
        amount: Option<Decimal>,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: Option<f64>,
        /// Loan term in years
        #[arg(long)]
        years: Option<u32>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Your favorites and inspections at a glance
    Dashboard {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change settings
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },

    /// View and manage application logs
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

impl Commands {
    /// Name recorded in the event log
    fn name(&self) -> &'static str {
        match self {
            Commands::Signup { .. } => "signup",
            Commands::Login { .. } => "login",
            Commands::Logout => "logout",
            Commands::Whoami { .. } => "whoami",
            Commands::Profile { .. } => "profile",
            Commands::Agent { .. } => "agent",
            Commands::Properties { .. } => "properties",
            Commands::Favorites { .. } => "favorites",
            Commands::Book { .. } => "book",
            Commands::Bookings { .. } => "bookings",
            Commands::Slots { .. } => "slots",
            Commands::Listings { .. } => "listings",
            Commands::Mortgage { .. } => "mortgage",
            Commands::Dashboard { .. } => "dashboard",
            Commands::Config { .. } => "config",
            Commands::Logs { .. } => "logs",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command_name = cli.command.name();

    // logs.duckdb is closed again before the command opens its own context
    commands::log_event(
        &commands::get_logger(),
        LogEvent::new("command_executed").with_command(command_name),
    );

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let event = commands::failure_event(&e);
            commands::log_event(
                &commands::get_logger(),
                LogEvent::new(event)
                    .with_command(command_name)
                    .with_error(e.to_string()),
            );
            output::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Signup {
            name,
            email,
            phone,
            password,
            json,
        } => account::signup(name, email, phone, password, json),
        Commands::Login {
            email,
            password,
            json,
        } => account::login(&email, password, json),
        Commands::Logout => account::logout(),
        Commands::Whoami { json } => account::whoami(json),
        Commands::Profile {
            name,
            email,
            phone,
            json,
        } => account::profile(name, email, phone, json),
        Commands::Agent { command } => account::run_agent(command),
        Commands::Properties { command } => properties::run(command),
        Commands::Favorites { command } => favorites::run(command),
        Commands::Book {
            property_id,
            date,
            time,
            name,
            email,
            phone,
            notes,
            json,
        } => booking::book(booking::BookArgs {
            property_id,
            date,
            time,
            name,
            email,
            phone,
            notes,
            json,
        }),
        Commands::Bookings { watch, json } => booking::list(watch, json),
        Commands::Slots { json } => booking::slots(json),
        Commands::Listings { command } => listings::run(command),
        Commands::Mortgage {
            property_id,
            amount,
            rate,
            years,
            json,
        } => mortgage::run(property_id, amount, rate, years, json),
        Commands::Dashboard { json } => dashboard::run(json),
        Commands::Config { command } => config::run(command),
        Commands::Logs { command } => logs::run(command),
    }
}
