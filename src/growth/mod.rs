//! Compound growth engine and savings strategy comparison

mod engine;
mod comparison;

pub use engine::{project_balance, compute_savings_projection, BalanceSeries};
pub use comparison::{SavingsComparison, Strategy, StrategyOutcome};
