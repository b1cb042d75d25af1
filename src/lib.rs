//! Housing Budget - House vs apartment cost and savings strategy comparison
//!
//! This library provides:
//! - Mortgage payments with optional interest-only periods and manual overrides
//! - Month-by-month amortization schedules
//! - Compound growth projections (recurring contributions vs. lump sum)
//! - Currency formatting for DKK, USD and EUR
//! - Batch and rate-sweep scenario runs

pub mod error;
pub mod currency;
pub mod params;
pub mod mortgage;
pub mod growth;
pub mod scenario;
pub mod report;
pub mod export;

// Re-export commonly used types
pub use error::{BudgetError, Result};
pub use currency::{format_currency, Currency};
pub use params::{LoanParameters, SavingsSchedule, HousingInputs, SavingsInputs, Scenario};
pub use mortgage::{monthly_payment, compute_housing_costs, amortization_schedule, MortgagePayment, HousingCosts};
pub use growth::{project_balance, compute_savings_projection, BalanceSeries, SavingsComparison};
pub use scenario::{ScenarioRunner, ScenarioResult};
pub use report::ComparisonReport;
