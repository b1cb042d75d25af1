//! Scenario parameters and batch loading

mod data;
pub mod loader;

pub use data::{
    HousingInputs, LoanParameters, SavingsInputs, SavingsSchedule, Scenario, MAX_HORIZON_MONTHS,
    MAX_LOAN_YEARS,
};
pub use loader::{load_scenarios, load_scenarios_from_reader};
