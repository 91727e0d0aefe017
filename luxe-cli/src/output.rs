//! Output formatting utilities

use std::time::Duration;

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use luxe_core::domain::{Booking, Property};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Whole dollars with thousands separators, e.g. "$24,500,000"
pub fn format_price(amount: Decimal) -> String {
    let rounded = amount.round_dp(0);
    let digits = rounded.abs().trunc().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Dollars and cents with thousands separators, e.g. "$124,139.19"
pub fn format_money(amount: Decimal) -> String {
    let amount = amount.round_dp(2);
    let cents = (amount.fract().abs() * Decimal::from(100))
        .round_dp(0)
        .to_u32()
        .unwrap_or(0);
    format!("{}.{:02}", format_price(amount.trunc()), cents)
}

/// One-row-per-listing table used by the list and search commands
pub fn property_table(properties: &[Property]) -> Table {
    let mut table = create_table();
    table.set_header(vec!["ID", "Name", "Location", "Type", "Price", "Beds", "Baths", "Sq Ft"]);
    for p in properties {
        table.add_row(vec![
            p.id.clone(),
            p.name.clone(),
            p.location.clone(),
            p.property_type.to_string(),
            format_price(p.price),
            p.beds.to_string(),
            p.baths.to_string(),
            p.sqft.to_string(),
        ]);
    }
    table
}

pub fn booking_table(bookings: &[Booking]) -> Table {
    let mut table = create_table();
    table.set_header(vec!["Date", "Time", "Property", "Status", "Notes"]);
    for b in bookings {
        table.add_row(vec![
            b.date.format("%a %b %-d, %Y").to_string(),
            b.time.clone(),
            b.property_name.clone(),
            b.status.as_str().to_string(),
            b.notes.clone(),
        ]);
    }
    table
}

/// Bookings with the client's contact details, for agents
pub fn inspection_table(bookings: &[Booking]) -> Table {
    let mut table = create_table();
    table.set_header(vec![
        "Date", "Time", "Property", "Client", "Email", "Phone", "Status",
    ]);
    for b in bookings {
        table.add_row(vec![
            b.date.format("%a %b %-d, %Y").to_string(),
            b.time.clone(),
            b.property_name.clone(),
            b.user_name.clone(),
            b.email.clone(),
            b.phone.clone().unwrap_or_default(),
            b.status.as_str().to_string(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Decimal::from(24_500_000)), "$24,500,000");
        assert_eq!(format_price(Decimal::from(999)), "$999");
        assert_eq!(format_price(Decimal::ZERO), "$0");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::new(12413919, 2)), "$124,139.19");
        assert_eq!(format_money(Decimal::new(100005, 2)), "$1,000.05");
    }
}
