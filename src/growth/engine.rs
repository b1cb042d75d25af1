//! Compound growth projection of a savings balance

use crate::error::Result;
use crate::params::SavingsSchedule;
use serde::{Deserialize, Serialize};

/// Month-end balances, index = elapsed whole months
///
/// Always holds `horizon_months + 1` values; index 0 is the starting balance.
/// Serializes as a plain array and refuses an empty one on the way back in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct BalanceSeries {
    balances: Vec<f64>,
}

impl TryFrom<Vec<f64>> for BalanceSeries {
    type Error = &'static str;

    fn try_from(balances: Vec<f64>) -> std::result::Result<Self, Self::Error> {
        if balances.is_empty() {
            return Err("balance series needs at least the starting balance");
        }
        Ok(Self { balances })
    }
}

impl From<BalanceSeries> for Vec<f64> {
    fn from(series: BalanceSeries) -> Self {
        series.balances
    }
}

impl BalanceSeries {
    /// Number of projected months (one less than the number of balances)
    pub fn horizon_months(&self) -> u32 {
        (self.balances.len() - 1) as u32
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// Never true: the starting balance is always present
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    pub fn initial_balance(&self) -> f64 {
        self.balances[0]
    }

    pub fn final_balance(&self) -> f64 {
        self.balances[self.balances.len() - 1]
    }

    /// Balance after `month` months
    pub fn at(&self, month: u32) -> Option<f64> {
        self.balances.get(month as usize).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.balances
    }

    /// (month, balance) pairs
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.balances.iter().enumerate().map(|(m, &b)| (m as u32, b))
    }
}

/// Project a balance month by month
///
/// `balance[m] = balance[m-1] × (1 + annual_rate / 12) + monthly_contribution`:
/// interest accrues on the prior balance, then the contribution lands.
pub fn project_balance(
    monthly_contribution: f64,
    initial_balance: f64,
    horizon_months: u32,
    annual_rate: f64,
) -> BalanceSeries {
    let growth = 1.0 + annual_rate / 12.0;

    let mut balances = Vec::with_capacity(horizon_months as usize + 1);
    balances.push(initial_balance);

    let mut balance = initial_balance;
    for _month in 1..=horizon_months {
        balance = balance * growth + monthly_contribution;
        balances.push(balance);
    }

    BalanceSeries { balances }
}

/// Validate a schedule, then project it
pub fn compute_savings_projection(schedule: &SavingsSchedule) -> Result<BalanceSeries> {
    schedule.validate()?;

    Ok(project_balance(
        schedule.monthly_contribution,
        schedule.initial_balance,
        schedule.horizon_months,
        schedule.annual_rate,
    ))
}
