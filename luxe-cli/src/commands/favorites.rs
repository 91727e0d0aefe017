//! Favorites commands - list, add and remove saved listings

use anyhow::{Context, Result};
use clap::Subcommand;

use super::{get_context, print_json_result, with_spinner};
use crate::output;

#[derive(Subcommand)]
pub enum FavoritesCommands {
    /// Show saved listings
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Save a listing
    Add {
        /// Listing ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Remove a saved listing
    Remove {
        /// Listing ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: FavoritesCommands) -> Result<()> {
    let ctx = get_context()?;

    match command {
        FavoritesCommands::List { json } => {
            let user = ctx.session_service.require_user()?;
            let favorites = ctx.favorites_service.favorites(&user)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&favorites)?);
                return Ok(());
            }
            if favorites.is_empty() {
                output::info("No favorites yet. Save one with `luxe favorites add <id>`.");
                return Ok(());
            }
            println!("{}", output::property_table(&favorites));
        }
        FavoritesCommands::Add { id, json } => {
            let property = ctx
                .catalog_service
                .get(&id)?
                .with_context(|| format!("Property not found: {}", id))?;
            let result = with_spinner("Saving...", json, || {
                ctx.session_service.add_favorite(&property.id)
            });
            if json {
                return print_json_result(result.map(|u| u.favorites));
            }
            result?;
            output::success(&format!("Saved {} to favorites", property.name));
        }
        FavoritesCommands::Remove { id, json } => {
            let result = with_spinner("Removing...", json, || {
                ctx.session_service.remove_favorite(&id)
            });
            if json {
                return print_json_result(result.map(|u| u.favorites));
            }
            result?;
            output::success("Removed from favorites");
        }
    }

    Ok(())
}
