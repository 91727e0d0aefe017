//! Mortgage calculator
//!
//! Fixed-rate amortization: `M = P·r(1+r)^n / ((1+r)^n − 1)` with `r` the
//! monthly rate and `n` the number of monthly payments.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

/// Number of monthly payments in a term
fn payment_count(term_years: u32) -> Result<u32> {
    if term_years == 0 {
        return Err(Error::validation("loan term must be at least one year"));
    }
    term_years
        .checked_mul(12)
        .ok_or_else(|| Error::validation("loan term too long"))
}

/// Monthly payment for a fixed-rate loan.
///
/// A zero rate degrades to straight-line repayment `P / n`.
pub fn monthly_payment(principal: f64, annual_rate_percent: f64, term_years: u32) -> Result<f64> {
    if !principal.is_finite() || principal < 0.0 {
        return Err(Error::validation("principal must be a non-negative amount"));
    }
    if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
        return Err(Error::validation("interest rate must be non-negative"));
    }

    let n = f64::from(payment_count(term_years)?);
    let r = annual_rate_percent / 100.0 / 12.0;
    if r == 0.0 {
        return Ok(principal / n);
    }

    let growth = (1.0 + r).powf(n);
    if !growth.is_finite() {
        return Err(Error::validation("loan term too long"));
    }
    Ok(principal * r * growth / (growth - 1.0))
}

/// Full quote shown next to a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageQuote {
    pub principal: Decimal,
    pub annual_rate: f64,
    pub term_years: u32,
    pub payments: u32,
    pub monthly_payment: Decimal,
    pub total_paid: Decimal,
    pub total_interest: Decimal,
}

impl MortgageQuote {
    pub fn new(principal: Decimal, annual_rate: f64, term_years: u32) -> Result<Self> {
        let p = principal
            .to_f64()
            .ok_or_else(|| Error::validation("principal out of range"))?;
        let monthly = monthly_payment(p, annual_rate, term_years)?;
        let payments = payment_count(term_years)?;

        let monthly_dec = Decimal::try_from(monthly)
            .map_err(|_| Error::validation("monthly payment out of range"))?;
        let total_paid = monthly_dec * Decimal::from(payments);

        Ok(Self {
            principal,
            annual_rate,
            term_years,
            payments,
            monthly_payment: monthly_dec.round_dp(2),
            total_paid: total_paid.round_dp(2),
            total_interest: (total_paid - principal).round_dp(2),
        })
    }
}

/// Loan amount the calculator starts from for a given price
pub fn default_principal(price: Decimal, fraction: f64) -> Decimal {
    let fraction = Decimal::try_from(fraction).unwrap_or_default().round_dp(6);
    (price * fraction).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(p: f64, rate: f64, years: u32) -> f64 {
        let r: f64 = rate / 1200.0;
        let n = (years * 12) as i32;
        p * r * (1.0 + r).powi(n) / ((1.0 + r).powi(n) - 1.0)
    }

    #[test]
    fn test_villa_serenity_payment() {
        let m = monthly_payment(24_500_000.0, 4.5, 30).unwrap();
        let expected = reference(24_500_000.0, 4.5, 30);
        assert!((m - expected).abs() < 0.01, "{} vs {}", m, expected);
        assert!(m > 124_000.0 && m < 124_300.0);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let m = monthly_payment(360_000.0, 0.0, 30).unwrap();
        assert!((m - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(monthly_payment(100.0, 4.5, 0).is_err());
        assert!(monthly_payment(-1.0, 4.5, 30).is_err());
        assert!(monthly_payment(100.0, -0.5, 30).is_err());
        assert!(monthly_payment(f64::NAN, 4.5, 30).is_err());
    }

    #[test]
    fn test_term_beyond_payment_count_is_rejected() {
        assert!(matches!(
            monthly_payment(1_000_000.0, 4.5, 400_000_000),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            monthly_payment(1_000_000.0, 4.5, 300_000_000),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            MortgageQuote::new(Decimal::from(1_000_000), 0.0, u32::MAX),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_quote_totals() {
        let quote = MortgageQuote::new(Decimal::from(4_900_000), 4.5, 30).unwrap();
        assert_eq!(quote.payments, 360);
        let expected = reference(4_900_000.0, 4.5, 30);
        let monthly = quote.monthly_payment.to_f64().unwrap();
        assert!((monthly - expected).abs() < 0.01);
        assert!(quote.total_interest > Decimal::ZERO);
        assert_eq!(quote.total_paid - quote.principal, quote.total_interest);
    }

    #[test]
    fn test_default_principal_is_fraction_of_price() {
        assert_eq!(
            default_principal(Decimal::from(24_500_000), 0.2),
            Decimal::from(4_900_000)
        );
    }
}
