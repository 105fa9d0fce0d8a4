//! Shared types for the auction advisor.
//!
//! Inputs and results for both calculators, the investment-type table,
//! and the domain error enum. Everything here is plain data: constructed
//! per request and dropped once the response is written.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Auction
// ---------------------------------------------------------------------------

/// Numbers describing one property auction lot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AuctionInput {
    pub market_value: f64,
    pub auction_value: f64,
    pub planned_bid: f64,
    /// Expected monthly rent. Zero means "not a rental".
    #[serde(default)]
    pub monthly_rent: f64,
}

impl AuctionInput {
    pub fn new(market_value: f64, auction_value: f64, planned_bid: f64, monthly_rent: f64) -> Self {
        Self {
            market_value,
            auction_value,
            planned_bid,
            monthly_rent,
        }
    }
}

/// Buy/no-buy verdict. There is no third state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Buy,
    Investigate,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::Buy => write!(f, "Buy"),
            Recommendation::Investigate => write!(f, "Investigate"),
        }
    }
}

/// Outcome of evaluating an [`AuctionInput`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuctionResult {
    pub recommendation: Recommendation,
    pub max_acceptable_bid: f64,
    pub extra_costs: f64,
    /// Outstanding debits on the property. Never populated; always 0.
    pub total_debits: f64,
    /// `None` when no rent was given. Not the same thing as a 0% yield.
    pub annual_rent_yield_percent: Option<f64>,
    pub justifications: Vec<String>,
}

impl fmt::Display for AuctionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (max bid: {:.2} | extras: {:.2}",
            self.recommendation, self.max_acceptable_bid, self.extra_costs,
        )?;
        match self.annual_rent_yield_percent {
            Some(y) => write!(f, " | yield: {y:.2}%)"),
            None => write!(f, ")"),
        }
    }
}

// ---------------------------------------------------------------------------
// Investment growth
// ---------------------------------------------------------------------------

/// Fixed menu of investment products, each with a fixed monthly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvestmentType {
    TreasurySelic,
    TreasuryFixed,
    TreasuryIPCA,
    Savings,
    CDB,
    BankAccount,
}

impl InvestmentType {
    /// All known investment types, in menu order.
    pub const ALL: &'static [InvestmentType] = &[
        InvestmentType::TreasurySelic,
        InvestmentType::TreasuryFixed,
        InvestmentType::TreasuryIPCA,
        InvestmentType::Savings,
        InvestmentType::CDB,
        InvestmentType::BankAccount,
    ];

    /// Monthly compounding rate.
    pub fn monthly_rate(&self) -> Decimal {
        match self {
            InvestmentType::TreasurySelic => dec!(0.008),
            InvestmentType::TreasuryFixed => dec!(0.010),
            // base rate + inflation spread
            InvestmentType::TreasuryIPCA => dec!(0.007) + dec!(0.003),
            InvestmentType::Savings => dec!(0.005),
            InvestmentType::CDB => dec!(0.009),
            InvestmentType::BankAccount => Decimal::ZERO,
        }
    }

    /// Product label as shown on the form.
    pub fn label(&self) -> &'static str {
        match self {
            InvestmentType::TreasurySelic => "Tesouro Selic",
            InvestmentType::TreasuryFixed => "Tesouro Prefixado",
            InvestmentType::TreasuryIPCA => "Tesouro IPCA+",
            InvestmentType::Savings => "Poupança",
            InvestmentType::CDB => "CDB",
            InvestmentType::BankAccount => "Conta Bancária",
        }
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parse either the product label or the variant name. Matching is exact:
/// labels are compared as-is, the way the form submits them.
impl std::str::FromStr for InvestmentType {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Tesouro Selic" | "TreasurySelic" => Ok(InvestmentType::TreasurySelic),
            "Tesouro Prefixado" | "TreasuryFixed" => Ok(InvestmentType::TreasuryFixed),
            "Tesouro IPCA+" | "TreasuryIPCA" => Ok(InvestmentType::TreasuryIPCA),
            "Poupança" | "Savings" => Ok(InvestmentType::Savings),
            "CDB" => Ok(InvestmentType::CDB),
            "Conta Bancária" | "BankAccount" => Ok(InvestmentType::BankAccount),
            _ => Err(AdvisorError::InvalidInvestmentType(s.to_string())),
        }
    }
}

/// Principal, duration and product for a growth projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthInput {
    pub principal: f64,
    /// Duration in months. Fractional months are allowed.
    pub months: f64,
    pub investment_type: InvestmentType,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for the advisor.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("Invalid investment type: {0}")]
    InvalidInvestmentType(String),

    #[error("Division by zero: {field} must be nonzero")]
    DivisionByZero { field: &'static str },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- InvestmentType tests --

    #[test]
    fn test_rate_table() {
        assert_eq!(InvestmentType::TreasurySelic.monthly_rate(), dec!(0.008));
        assert_eq!(InvestmentType::TreasuryFixed.monthly_rate(), dec!(0.01));
        assert_eq!(InvestmentType::TreasuryIPCA.monthly_rate(), dec!(0.01));
        assert_eq!(InvestmentType::Savings.monthly_rate(), dec!(0.005));
        assert_eq!(InvestmentType::CDB.monthly_rate(), dec!(0.009));
        assert_eq!(InvestmentType::BankAccount.monthly_rate(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_labels_and_names() {
        for t in InvestmentType::ALL {
            assert_eq!(t.label().parse::<InvestmentType>().unwrap(), *t);
            assert_eq!(format!("{t:?}").parse::<InvestmentType>().unwrap(), *t);
        }
    }

    #[test]
    fn test_parse_unknown_type() {
        let err = "UnknownType".parse::<InvestmentType>().unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidInvestmentType(ref s) if s == "UnknownType"));
        assert!("poupança".parse::<InvestmentType>().is_err());
    }

    // -- AuctionResult tests --

    #[test]
    fn test_recommendation_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Recommendation::Buy).unwrap(), "\"buy\"");
        assert_eq!(
            serde_json::to_string(&Recommendation::Investigate).unwrap(),
            "\"investigate\""
        );
    }

    #[test]
    fn test_absent_yield_serializes_as_null() {
        let result = AuctionResult {
            recommendation: Recommendation::Buy,
            max_acceptable_bid: 77_500.0,
            extra_costs: 2_500.0,
            total_debits: 0.0,
            annual_rent_yield_percent: None,
            justifications: vec![],
        };
        let json: serde_json::Value = serde_json::to_value(&result).unwrap();
        assert!(json["annual_rent_yield_percent"].is_null());
        assert_eq!(json["recommendation"], "buy");
    }

    #[test]
    fn test_auction_input_rent_defaults_to_zero() {
        let input: AuctionInput = serde_json::from_str(
            r#"{"market_value": 1.0, "auction_value": 2.0, "planned_bid": 3.0}"#,
        )
        .unwrap();
        assert_eq!(input.monthly_rent, 0.0);
    }

    // -- AdvisorError tests --

    #[test]
    fn test_advisor_error_display() {
        let e = AdvisorError::InvalidInvestmentType("Bitcoin".into());
        assert_eq!(format!("{e}"), "Invalid investment type: Bitcoin");

        let e = AdvisorError::DivisionByZero { field: "auction_value" };
        assert!(format!("{e}").contains("auction_value"));
    }
}
