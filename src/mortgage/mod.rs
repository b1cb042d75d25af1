//! Mortgage engine: payment breakdown, amortization schedule and housing costs

mod payment;
mod schedule;
mod housing;

pub use payment::{monthly_payment, level_payment, MortgagePayment};
pub use schedule::{amortization_schedule, AmortizationRow, AmortizationSchedule, LoanPhase, ScheduleSummary};
pub use housing::{compute_housing_costs, house_monthly_cost, apartment_monthly_cost, HousingCosts};
