//! Compound-growth projection for the fixed investment menu.

use rust_decimal::prelude::*;
use tracing::debug;

use crate::types::{AdvisorError, GrowthInput, InvestmentType};

/// Stateless growth calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvestmentGrowthCalculator;

impl InvestmentGrowthCalculator {
    pub fn new() -> Self {
        Self
    }

    /// final = principal × (1 + rate)^months, rounded half-to-even at 2 dp.
    pub fn compute(&self, input: &GrowthInput) -> f64 {
        let rate = input.investment_type.monthly_rate().to_f64().unwrap_or(0.0);
        let raw = input.principal * (1.0 + rate).powf(input.months);
        let final_value = round_cents(raw);

        debug!(
            principal = input.principal,
            months = input.months,
            investment_type = %input.investment_type,
            rate,
            final_value,
            "Growth computed"
        );

        final_value
    }
}

/// Parse the investment label and project growth.
pub fn compute_growth(principal: f64, months: f64, investment_type: &str) -> Result<f64, AdvisorError> {
    let investment_type: InvestmentType = investment_type.parse()?;
    Ok(InvestmentGrowthCalculator::new().compute(&GrowthInput {
        principal,
        months,
        investment_type,
    }))
}

/// Round to 2 decimal places, ties to even, on the exact binary value.
/// Values outside the Decimal range (or non-finite) come back untouched.
fn round_cents(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
