//! Load batches of scenarios from CSV

use super::{HousingInputs, LoanParameters, SavingsInputs, Scenario};
use crate::currency::Currency;
use crate::error::{BudgetError, Result};
use csv::Reader;
use std::path::Path;

/// Raw CSV row, one scenario per line
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    name: String,
    principal: f64,
    annual_rate: f64,
    total_years: u32,
    interest_only_years: u32,
    payment_override: Option<f64>,
    insurance: f64,
    tax: f64,
    rent: f64,
    down_payment: f64,
    monthly_savings_goal: f64,
    monthly_contribution: f64,
    lump_sum: f64,
    horizon_months: u32,
    savings_rate: f64,
    currency: String,
}

impl CsvRow {
    fn into_scenario(self) -> Result<Scenario> {
        let currency: Currency = self.currency.parse()?;

        // Ranges are checked when the scenario runs
        let scenario = Scenario {
            name: self.name,
            loan: LoanParameters {
                principal: self.principal,
                annual_rate: self.annual_rate,
                total_years: self.total_years,
                interest_only_years: self.interest_only_years,
                payment_override: self.payment_override,
            },
            housing: HousingInputs {
                insurance: self.insurance,
                tax: self.tax,
                rent: self.rent,
                down_payment: self.down_payment,
                monthly_savings_goal: self.monthly_savings_goal,
            },
            savings: SavingsInputs {
                monthly_contribution: self.monthly_contribution,
                lump_sum: self.lump_sum,
                horizon_months: self.horizon_months,
                annual_rate: self.savings_rate,
            },
            currency,
        };

        Ok(scenario)
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>> {
    let reader = Reader::from_path(path)?;
    read_rows(reader)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Scenario>> {
    read_rows(Reader::from_reader(reader))
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Scenario>> {
    let mut scenarios = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        // Header is line 1
        let line = idx as u64 + 2;
        let row: CsvRow = result?;
        let scenario = row.into_scenario().map_err(|e| BudgetError::Scenario {
            line,
            source: Box::new(e),
        })?;
        scenarios.push(scenario);
    }

    log::debug!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}
