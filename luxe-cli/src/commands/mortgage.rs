//! Mortgage command - monthly payment calculator

use anyhow::{bail, Context, Result};
use colored::Colorize;
use rust_decimal::Decimal;

use luxe_core::services::QuoteInput;

use super::get_context;
use crate::output::{format_money, format_price};

pub fn run(
    property_id: Option<String>,
    amount: Option<Decimal>,
    rate: Option<f64>,
    years: Option<u32>,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;
    let input = QuoteInput {
        principal: amount,
        rate,
        term_years: years,
    };

    let (quote, property) = match (&property_id, amount) {
        (Some(id), _) => {
            let property = ctx
                .catalog_service
                .get(id)?
                .with_context(|| format!("Property not found: {}", id))?;
            (ctx.mortgage_service.quote_for(&property, &input)?, Some(property))
        }
        (None, Some(principal)) => (ctx.mortgage_service.quote(principal, &input)?, None),
        (None, None) => bail!("Give a property ID or a loan --amount"),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
        return Ok(());
    }

    println!("{}", "Mortgage Calculator".bold());
    if let Some(p) = &property {
        println!("  {} ({})", p.name, format_price(p.price));
    }
    println!();
    println!("  Loan amount:     {}", format_price(quote.principal));
    println!("  Interest rate:   {}%", quote.annual_rate);
    println!("  Term:            {} years ({} payments)", quote.term_years, quote.payments);
    println!();
    println!(
        "  {} {}",
        "Monthly payment:".bold(),
        format_money(quote.monthly_payment).green().bold()
    );
    println!("  Total paid:      {}", format_money(quote.total_paid));
    println!("  Total interest:  {}", format_money(quote.total_interest));
    Ok(())
}
