//! Auction bid evaluation.
//!
//! Derives a ceiling bid from the market value, compares it with the
//! planned bid and, for rentals, estimates the annual gross rent yield.

use tracing::debug;

use crate::types::{AdvisorError, AuctionInput, AuctionResult, Recommendation};

/// Fraction of market value a buyer should be willing to pay.
pub const MARKET_VALUE_FACTOR: f64 = 0.8;

/// Auction overhead (fees, taxes, registry) as a fraction of auction value.
pub const EXTRA_COST_RATE: f64 = 0.05;

/// Stateless bid evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuctionEvaluator;

impl AuctionEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate one auction lot.
    ///
    /// max_acceptable_bid = market_value × 0.8 − auction_value × 0.05
    ///
    /// Inputs are not validated: negative values flow through the formula.
    /// The only failure is a nonzero rent with a zero auction value, since
    /// the yield is relative to the auction value.
    pub fn evaluate(&self, input: &AuctionInput) -> Result<AuctionResult, AdvisorError> {
        let extra_costs = input.auction_value * EXTRA_COST_RATE;
        let max_acceptable_bid = input.market_value * MARKET_VALUE_FACTOR - extra_costs;

        let (recommendation, justification) = if max_acceptable_bid >= input.planned_bid {
            (
                Recommendation::Buy,
                format!(
                    "max acceptable bid ({max_acceptable_bid:.2}) >= planned bid ({:.2})",
                    input.planned_bid
                ),
            )
        } else {
            (
                Recommendation::Investigate,
                format!(
                    "max acceptable bid ({max_acceptable_bid:.2}) < planned bid ({:.2})",
                    input.planned_bid
                ),
            )
        };

        let annual_rent_yield_percent = if input.monthly_rent != 0.0 {
            if input.auction_value == 0.0 {
                return Err(AdvisorError::DivisionByZero {
                    field: "auction_value",
                });
            }
            Some(input.monthly_rent * 12.0 / input.auction_value * 100.0)
        } else {
            None
        };

        debug!(
            market_value = input.market_value,
            auction_value = input.auction_value,
            planned_bid = input.planned_bid,
            max_acceptable_bid,
            %recommendation,
            rent_yield = ?annual_rent_yield_percent,
            "Auction evaluated"
        );

        Ok(AuctionResult {
            recommendation,
            max_acceptable_bid,
            extra_costs,
            total_debits: 0.0,
            annual_rent_yield_percent,
            justifications: vec![justification],
        })
    }
}

/// Convenience wrapper over [`AuctionEvaluator::evaluate`].
pub fn evaluate(
    market_value: f64,
    auction_value: f64,
    planned_bid: f64,
    monthly_rent: f64,
) -> Result<AuctionResult, AdvisorError> {
    AuctionEvaluator::new().evaluate(&AuctionInput::new(
        market_value,
        auction_value,
        planned_bid,
        monthly_rent,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
