//! Booking commands - book inspections, list and watch bookings, show slots

use std::time::Duration;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use colored::Colorize;

use luxe_core::domain::BookingRequest;
use luxe_core::Booking;

use super::{get_context, print_json_result, with_spinner};
use crate::output;

pub struct BookArgs {
    pub property_id: String,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub json: bool,
}

pub fn book(args: BookArgs) -> Result<()> {
    let ctx = get_context()?;
    let json = args.json;
    let request = BookingRequest {
        property_id: args.property_id,
        date: args.date,
        time: args.time,
        name: args.name,
        email: args.email,
        phone: args.phone,
        notes: args.notes,
    };

    let result = with_spinner("Booking inspection...", json, || {
        ctx.booking_service.book(request)
    });
    if json {
        return print_json_result(result);
    }
    let booking = result?;
    output::success(&format!(
        "Inspection requested for {} on {} at {}",
        booking.property_name,
        booking.date.format("%A, %B %-d"),
        booking.time
    ));
    println!("Status: {}. The agent will confirm shortly.", booking.status.as_str());
    Ok(())
}

pub fn list(watch: bool, json: bool) -> Result<()> {
    if watch {
        return watch_bookings(json);
    }

    let ctx = get_context()?;
    let user = ctx.session_service.require_user()?;
    let bookings = ctx.booking_service.bookings_for(&user)?;
    print_bookings(&bookings, json)
}

fn print_bookings(bookings: &[Booking], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(bookings)?);
        return Ok(());
    }
    if bookings.is_empty() {
        output::info("No inspections booked yet.");
        return Ok(());
    }
    println!("{}", output::booking_table(bookings));
    Ok(())
}

/// Re-read the store on an interval and print whenever the user's bookings
/// change, so bookings made from another terminal show up. Stops on Ctrl-C.
fn watch_bookings(json: bool) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(watch_loop(json))
}

async fn watch_loop(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let user = ctx.session_service.require_user()?;
    let period = Duration::from_millis(ctx.config.watch_interval_ms);
    // the database stays closed between polls so other invocations can open it
    drop(ctx);

    if !json {
        output::info("Watching bookings. Press Ctrl-C to stop.");
    }

    let mut interval = tokio::time::interval(period);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut last_seen: Option<usize> = None;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let bookings = {
                    let ctx = get_context()?;
                    ctx.booking_service.bookings_for(&user)?
                };
                if last_seen != Some(bookings.len()) {
                    if last_seen.is_some() && !json {
                        println!();
                        println!("{}", "Bookings updated".bold());
                    }
                    print_bookings(&bookings, json)?;
                    last_seen = Some(bookings.len());
                }
            }
            _ = &mut ctrl_c => {
                if !json {
                    println!();
                    output::info("Stopped watching.");
                }
                return Ok(());
            }
        }
    }
}

pub fn slots(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let today = Local::now().date_naive();
    let dates = ctx.booking_service.available_dates(today);
    let slots = ctx.booking_service.time_slots();

    if json {
        println!(
            "{}",
            serde_json::json!({
                "dates": dates,
                "timeSlots": slots,
            })
        );
        return Ok(());
    }

    println!("{}", "Available dates".bold());
    for chunk in dates.chunks(7) {
        let line: Vec<String> = chunk
            .iter()
            .map(|d| d.format("%a %b %-d").to_string())
            .collect();
        println!("  {}", line.join("  "));
    }
    println!();
    println!("{}", "Time slots".bold());
    println!("  {}", slots.join("  "));
    Ok(())
}
