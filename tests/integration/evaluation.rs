//! Auction evaluation through the public API.
//!
//! Sweeps a grid of lots and checks the decision rule and the yield rule
//! hold for every combination.

use auction_advisor::strategy::{evaluate, AuctionEvaluator};
use auction_advisor::types::{AdvisorError, AuctionInput, Recommendation};

const VALUES: &[f64] = &[0.0, 1.0, 999.99, 50_000.0, 100_000.0, 2_500_000.0];

#[test]
fn test_decision_rule_holds_across_grid() {
    let evaluator = AuctionEvaluator::new();
    for &market in VALUES {
        for &auction in VALUES {
            for &bid in VALUES {
                let r = evaluator
                    .evaluate(&AuctionInput::new(market, auction, bid, 0.0))
                    .unwrap();
                assert_eq!(r.extra_costs, auction * 0.05);
                assert_eq!(r.total_debits, 0.0);
                assert_eq!(r.annual_rent_yield_percent, None);
                let expected = if r.max_acceptable_bid >= bid {
                    Recommendation::Buy
                } else {
                    Recommendation::Investigate
                };
                assert_eq!(r.recommendation, expected, "market={market} auction={auction} bid={bid}");
                assert_eq!(r.justifications.len(), 1);
            }
        }
    }
}

#[test]
fn test_yield_rule_holds_across_grid() {
    for &auction in VALUES.iter().filter(|v| **v != 0.0) {
        for rent in [0.0, 1.0, 500.0, 12_345.0] {
            let r = evaluate(100_000.0, auction, 0.0, rent).unwrap();
            match r.annual_rent_yield_percent {
                None => assert_eq!(rent, 0.0),
                Some(y) => {
                    let expected = rent * 12.0 / auction * 100.0;
                    assert!((y - expected).abs() < 1e-9, "rent={rent} auction={auction}");
                }
            }
        }
    }
}

#[test]
fn test_reference_lots() {
    let buy = evaluate(100_000.0, 50_000.0, 75_000.0, 0.0).unwrap();
    assert_eq!(buy.recommendation, Recommendation::Buy);
    assert!((buy.extra_costs - 2_500.0).abs() < 1e-9);
    assert!((buy.max_acceptable_bid - 77_500.0).abs() < 1e-9);
    assert!(buy.annual_rent_yield_percent.is_none());

    let investigate = evaluate(100_000.0, 50_000.0, 80_000.0, 500.0).unwrap();
    assert_eq!(investigate.recommendation, Recommendation::Investigate);
    assert!((investigate.annual_rent_yield_percent.unwrap() - 12.0).abs() < 1e-9);
}

#[test]
fn test_rent_on_free_lot_is_division_by_zero() {
    let err = evaluate(1.0, 0.0, 0.0, 1.0).unwrap_err();
    assert!(matches!(err, AdvisorError::DivisionByZero { .. }));
}
