//! Scenario runner: validate inputs, call the engines, collect results
//!
//! Holds a base scenario so many variations (batches, rate sweeps) can be run
//! against it. Batch runs fan out over rayon; every scenario is independent.

use crate::currency::Currency;
use crate::error::Result;
use crate::growth::SavingsComparison;
use crate::mortgage::{amortization_schedule, compute_housing_costs, HousingCosts, ScheduleSummary};
use crate::params::Scenario;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Everything computed for one scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub currency: Currency,
    pub housing: HousingCosts,
    pub loan_summary: ScheduleSummary,
    pub savings: SavingsComparison,
    /// One-time down payment carried through for commentary
    pub down_payment: f64,
    pub monthly_savings_goal: f64,
}

/// Runner with a pre-set base scenario
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let result = runner.run_base()?;
///
/// for result in runner.sweep_rates(&[0.03, 0.04, 0.05]) {
///     println!("{}", result?.housing.house_monthly_cost);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_scenario: Scenario,
}

impl ScenarioRunner {
    /// Create runner with the default scenario as base
    pub fn new() -> Self {
        Self {
            base_scenario: Scenario::default(),
        }
    }

    /// Create runner with a specific base scenario
    pub fn with_scenario(scenario: Scenario) -> Self {
        Self {
            base_scenario: scenario,
        }
    }

    /// Run the base scenario
    pub fn run_base(&self) -> Result<ScenarioResult> {
        self.run(&self.base_scenario)
    }

    /// Run a single scenario; nothing is computed unless every parameter is valid
    pub fn run(&self, scenario: &Scenario) -> Result<ScenarioResult> {
        scenario.validate()?;

        let housing = compute_housing_costs(
            &scenario.loan,
            scenario.housing.insurance,
            scenario.housing.tax,
            scenario.housing.rent,
        )?;
        let loan_summary = amortization_schedule(&scenario.loan).summary();
        let savings = SavingsComparison::from_inputs(&scenario.savings)?;

        log::debug!(
            "Scenario '{}': house {:.2}/month, apartment {:.2}/month",
            scenario.name,
            housing.house_monthly_cost,
            housing.apartment_monthly_cost
        );

        Ok(ScenarioResult {
            name: scenario.name.clone(),
            currency: scenario.currency,
            housing,
            loan_summary,
            savings,
            down_payment: scenario.housing.down_payment,
            monthly_savings_goal: scenario.housing.monthly_savings_goal,
        })
    }

    /// Run many scenarios in parallel; results keep input order
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<Result<ScenarioResult>> {
        log::info!("Running {} scenarios", scenarios.len());
        scenarios.par_iter().map(|s| self.run(s)).collect()
    }

    /// Re-run the base scenario at each mortgage rate
    pub fn sweep_rates(&self, annual_rates: &[f64]) -> Vec<Result<ScenarioResult>> {
        let scenarios: Vec<Scenario> = annual_rates
            .iter()
            .map(|&rate| self.base_scenario.with_mortgage_rate(rate))
            .collect();
        self.run_batch(&scenarios)
    }

    /// Get reference to the base scenario
    pub fn scenario(&self) -> &Scenario {
        &self.base_scenario
    }

    /// Get mutable reference to the base scenario for customization
    pub fn scenario_mut(&mut self) -> &mut Scenario {
        &mut self.base_scenario
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
