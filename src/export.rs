//! CSV export of balance series, amortization schedules and batch results

use crate::error::Result;
use crate::growth::SavingsComparison;
use crate::mortgage::AmortizationSchedule;
use crate::scenario::ScenarioResult;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct SeriesRow {
    month: u32,
    recurring_balance: f64,
    lump_sum_balance: f64,
}

/// One output line per scenario in a batch
#[derive(Debug, Serialize)]
pub struct ResultRow {
    pub name: String,
    pub currency: String,
    pub house_monthly_cost: f64,
    pub apartment_monthly_cost: f64,
    pub monthly_difference: f64,
    pub mortgage_payment: f64,
    pub amortized_payment: f64,
    pub interest_only_payment: f64,
    pub total_interest: f64,
    pub recurring_final_balance: f64,
    pub lump_sum_final_balance: f64,
    pub better_strategy: String,
    pub strategy_difference: f64,
    pub error: Option<String>,
}

impl ResultRow {
    pub fn from_result(result: &ScenarioResult) -> Self {
        let h = &result.housing;
        let s = &result.savings;
        Self {
            name: result.name.clone(),
            currency: result.currency.code().to_string(),
            house_monthly_cost: h.house_monthly_cost,
            apartment_monthly_cost: h.apartment_monthly_cost,
            monthly_difference: h.difference(),
            mortgage_payment: h.mortgage_payment,
            amortized_payment: h.breakdown.amortized_payment,
            interest_only_payment: h.breakdown.interest_only_payment,
            total_interest: result.loan_summary.total_interest,
            recurring_final_balance: s.recurring.final_balance,
            lump_sum_final_balance: s.lump_sum.final_balance,
            better_strategy: s.winner().label().to_string(),
            strategy_difference: s.difference(),
            error: None,
        }
    }

    /// Row for a scenario that failed validation
    pub fn failed(name: &str, error: &dyn std::error::Error) -> Self {
        Self {
            name: name.to_string(),
            currency: String::new(),
            house_monthly_cost: 0.0,
            apartment_monthly_cost: 0.0,
            monthly_difference: 0.0,
            mortgage_payment: 0.0,
            amortized_payment: 0.0,
            interest_only_payment: 0.0,
            total_interest: 0.0,
            recurring_final_balance: 0.0,
            lump_sum_final_balance: 0.0,
            better_strategy: String::new(),
            strategy_difference: 0.0,
            error: Some(error.to_string()),
        }
    }
}

/// Write both savings series side by side, one row per month
pub fn write_balance_series<W: Write>(writer: W, savings: &SavingsComparison) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for ((month, recurring), (_, lump)) in savings.recurring.series.iter().zip(savings.lump_sum.series.iter()) {
        wtr.serialize(SeriesRow {
            month,
            recurring_balance: recurring,
            lump_sum_balance: lump,
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write every month of an amortization schedule
pub fn write_schedule<W: Write>(writer: W, schedule: &AmortizationSchedule) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in &schedule.rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write batch result rows
pub fn write_results<W: Write>(writer: W, rows: &[ResultRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
