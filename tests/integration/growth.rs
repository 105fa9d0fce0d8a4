//! Compound-growth projection through the public API.

use auction_advisor::strategy::{compute_growth, InvestmentGrowthCalculator};
use auction_advisor::types::{AdvisorError, GrowthInput, InvestmentType};

#[test]
fn test_savings_reference_value() {
    let v = compute_growth(1000.0, 12.0, "Poupança").unwrap();
    assert!((v - 1061.68).abs() < 1e-9);
}

#[test]
fn test_growth_is_monotonic_in_months() {
    let calc = InvestmentGrowthCalculator::new();
    for &investment_type in InvestmentType::ALL {
        let mut previous = 0.0;
        for months in 0..=24 {
            let v = calc.compute(&GrowthInput {
                principal: 10_000.0,
                months: months as f64,
                investment_type,
            });
            assert!(v >= previous, "{investment_type} at {months} months");
            previous = v;
        }
    }
}

#[test]
fn test_selic_beats_savings() {
    let selic = compute_growth(1000.0, 24.0, "Tesouro Selic").unwrap();
    let savings = compute_growth(1000.0, 24.0, "Poupança").unwrap();
    assert!(selic > savings);
}

#[test]
fn test_unknown_label_is_rejected() {
    for label in ["UnknownType", "", "cdb", "Tesouro IPCA"] {
        let err = compute_growth(1000.0, 1.0, label).unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidInvestmentType(_)), "{label:?}");
    }
}
