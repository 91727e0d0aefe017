//! Mortgage service - calculator quotes with configured defaults

use rust_decimal::Decimal;

use crate::config::MortgageDefaults;
use crate::domain::mortgage::default_principal;
use crate::domain::result::Result;
use crate::domain::{MortgageQuote, Property};

/// Caller overrides; `None` falls back to the configured defaults
#[derive(Debug, Clone, Default)]
pub struct QuoteInput {
    pub principal: Option<Decimal>,
    pub rate: Option<f64>,
    pub term_years: Option<u32>,
}

pub struct MortgageService {
    defaults: MortgageDefaults,
}

impl MortgageService {
    pub fn new(defaults: MortgageDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> MortgageDefaults {
        self.defaults
    }

    /// Quote for an explicit loan amount
    pub fn quote(&self, principal: Decimal, input: &QuoteInput) -> Result<MortgageQuote> {
        MortgageQuote::new(
            principal,
            input.rate.unwrap_or(self.defaults.rate),
            input.term_years.unwrap_or(self.defaults.term_years),
        )
    }

    /// Quote for a listing. Without an explicit principal the loan starts
    /// at the configured fraction of the price.
    pub fn quote_for(&self, property: &Property, input: &QuoteInput) -> Result<MortgageQuote> {
        let principal = input
            .principal
            .unwrap_or_else(|| default_principal(property.price, self.defaults.down_payment));
        self.quote(principal, input)
    }
}
