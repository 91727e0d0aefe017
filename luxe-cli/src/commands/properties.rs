//! Properties commands - browse, search and match listings

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use rust_decimal::Decimal;

use luxe_core::domain::{Personality, PropertyFilter, PropertyType};
use luxe_core::Property;

use super::get_context;
use crate::output::{self, format_price};

/// Filter flags shared by `list` and `search`
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Property type (villa, penthouse, estate, mansion, retreat, beachfront)
    #[arg(long = "type")]
    property_type: Option<PropertyType>,
    /// Minimum price in dollars
    #[arg(long)]
    min_price: Option<Decimal>,
    /// Maximum price in dollars
    #[arg(long)]
    max_price: Option<Decimal>,
    /// Minimum bedrooms
    #[arg(long)]
    beds: Option<u32>,
    /// Minimum bathrooms
    #[arg(long)]
    baths: Option<u32>,
    /// Location contains this text
    #[arg(long)]
    location: Option<String>,
}

impl FilterArgs {
    fn into_filter(self) -> PropertyFilter {
        PropertyFilter {
            property_type: self.property_type,
            min_price: self.min_price,
            max_price: self.max_price,
            min_beds: self.beds,
            min_baths: self.baths,
            location: self.location.filter(|l| !l.trim().is_empty()),
        }
    }
}

#[derive(Subcommand)]
pub enum PropertiesCommands {
    /// List all listings, optionally filtered
    List {
        #[command(flatten)]
        filter: FilterArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one listing in detail
    Show {
        /// Listing ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search by name, location, city or type
    Search {
        /// Search text
        query: String,
        #[command(flatten)]
        filter: FilterArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Find listings that suit a lifestyle (minimalist, nature, executive, luxury)
    Match {
        personality: Personality,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(command: PropertiesCommands) -> Result<()> {
    let ctx = get_context()?;

    match command {
        PropertiesCommands::List { filter, json } => {
            let properties = ctx.catalog_service.filter(&filter.into_filter())?;
            print_list(&properties, json)?;
        }
        PropertiesCommands::Search {
            query,
            filter,
            json,
        } => {
            let properties = ctx
                .catalog_service
                .search_and_filter(&query, &filter.into_filter())?;
            print_list(&properties, json)?;
        }
        PropertiesCommands::Show { id, json } => {
            let property = ctx
                .catalog_service
                .get(&id)?
                .with_context(|| format!("Property not found: {}", id))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&property)?);
            } else {
                let favorite = ctx
                    .session_service
                    .current()?
                    .map(|u| u.is_favorite(&property.id))
                    .unwrap_or(false);
                print_detail(&property, favorite);
            }
        }
        PropertiesCommands::Match { personality, json } => {
            let matches = ctx.catalog_service.match_personality(personality)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
                return Ok(());
            }

            println!("{}", format!("Your {} matches", personality.label()).bold());
            println!();
            if matches.is_empty() {
                output::warning("No listings match this personality yet.");
            }
            for m in matches {
                println!(
                    "  {} {}  {}",
                    format!("{}%", m.score).green().bold(),
                    m.property.name.bold(),
                    m.property.price_short().dimmed()
                );
                println!("      {}", m.reason);
            }
        }
    }

    Ok(())
}

fn print_list(properties: &[Property], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(properties)?);
        return Ok(());
    }

    if properties.is_empty() {
        output::warning("No properties found. Try adjusting your search or filters.");
        return Ok(());
    }

    println!("{}", output::property_table(properties));
    println!("{} properties", properties.len());
    Ok(())
}

fn print_detail(p: &Property, favorite: bool) {
    let heart = if favorite { " ♥".red().to_string() } else { String::new() };
    println!("{}{}", p.name.bold(), heart);
    println!("{}", p.location.dimmed());
    println!();
    println!("  Price:    {}", format_price(p.price));
    println!(
        "  Details:  {} beds · {} baths · {} sq ft · {} garage",
        p.beds, p.baths, p.sqft, p.garage
    );
    println!("  Type:     {} (built {})", p.property_type, p.year);
    println!("  Status:   {}", p.status.as_str());
    println!("  Listed:   {}", p.listed_date);
    println!();
    println!("{}", p.description);

    if !p.features.is_empty() {
        println!();
        println!("{}", "Features".bold());
        for f in &p.features {
            println!("  • {}", f);
        }
    }
    if !p.amenities.is_empty() {
        println!();
        println!("{}", "Amenities".bold());
        for a in &p.amenities {
            println!("  • {}", a);
        }
    }
    if !p.smart_home_features.is_empty() {
        println!();
        println!("{}", "Smart Home".bold());
        for s in &p.smart_home_features {
            println!("  • {}", s);
        }
    }

    println!();
    println!("{}", "Agent".bold());
    println!("  {} · {} · {}", p.agent.name, p.agent.email, p.agent.phone);
}
