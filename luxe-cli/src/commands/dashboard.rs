//! Dashboard command - summary for the signed-in user

use anyhow::Result;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::get_context;
use crate::output::{self, format_price};

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let user = ctx.session_service.require_user()?;
    let summary = ctx.favorites_service.dashboard(&user)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", format!("Welcome back, {}", user.name).bold());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec!["Properties Available", &summary.properties_available.to_string()]);
    table.add_row(vec!["Favorites", &summary.favorites_count.to_string()]);
    table.add_row(vec!["Saved Searches", &summary.saved_searches_count.to_string()]);
    table.add_row(vec!["Inspections", &summary.bookings_count.to_string()]);
    println!("{}", table);

    if summary.recent_favorites.is_empty() {
        println!();
        output::info("No favorites yet. Browse with `luxe properties list`.");
        return Ok(());
    }

    println!();
    println!("{}", "Your Favorites".bold());
    for p in &summary.recent_favorites {
        println!("  • {} {} {}", p.name, p.location.dimmed(), format_price(p.price));
    }
    Ok(())
}
