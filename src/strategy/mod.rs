//! Decision strategies.
//!
//! Two independent, stateless calculators: the auction bid evaluator and
//! the compound-growth projection. Both are pure functions of their inputs.

pub mod auction;
pub mod growth;

pub use auction::{evaluate, AuctionEvaluator};
pub use growth::{compute_growth, InvestmentGrowthCalculator};
