//! Listings commands - agent-added listings

use anyhow::Result;
use clap::Subcommand;

use luxe_core::domain::ListingDraft;
use luxe_core::Role;

use super::{get_context, print_json_result, with_spinner};
use crate::output::{self, format_price};

#[derive(Subcommand)]
pub enum ListingsCommands {
    /// Show listings added by agents
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Publish a new listing (agents only)
    Add {
        /// Listing title
        #[arg(long)]
        title: String,
        /// Asking price as written, e.g. "$4,500,000"
        #[arg(long)]
        price: String,
        /// Location, e.g. "Sausalito, CA"
        #[arg(long)]
        location: String,
        #[arg(long, default_value_t = 0)]
        beds: u32,
        #[arg(long, default_value_t = 0)]
        baths: u32,
        #[arg(long, default_value_t = 0)]
        sqft: u32,
        /// Image URL
        #[arg(long)]
        image: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: ListingsCommands) -> Result<()> {
    let ctx = get_context()?;

    match command {
        ListingsCommands::List { json } => {
            let listings = ctx.listing_service.listings()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&listings)?);
                return Ok(());
            }
            if listings.is_empty() {
                output::info("No agent listings yet.");
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["ID", "Title", "Location", "Price", "Beds", "Baths", "Sq Ft", "Status"]);
            for l in &listings {
                let property = l.to_property();
                table.add_row(vec![
                    l.id.to_string(),
                    l.title.clone(),
                    l.location.clone(),
                    format_price(property.price),
                    l.beds.to_string(),
                    l.baths.to_string(),
                    l.sqft.to_string(),
                    l.status.as_str().to_string(),
                ]);
            }
            println!("{}", table);
        }
        ListingsCommands::Add {
            title,
            price,
            location,
            beds,
            baths,
            sqft,
            image,
            json,
        } => {
            let draft = ListingDraft {
                title,
                price,
                location,
                beds,
                baths,
                sqft,
                image,
            };
            let result = with_spinner("Publishing listing...", json, || {
                let agent = ctx.session_service.require_role(Role::Agent)?;
                ctx.listing_service.add_listing(&agent, draft)
            });
            if json {
                return print_json_result(result);
            }
            let listing = result?;
            output::success(&format!("Listed {} ({})", listing.title, listing.id));
        }
    }

    Ok(())
}
