//! Recurring contributions vs. lump sum over the same horizon and rate

use super::engine::{project_balance, BalanceSeries};
use crate::error::Result;
use crate::params::SavingsInputs;
use serde::{Deserialize, Serialize};

/// Savings strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    Recurring,
    LumpSum,
}

impl Strategy {
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Recurring => "recurring contributions",
            Strategy::LumpSum => "lump sum",
        }
    }
}

/// Outcome of one strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyOutcome {
    pub strategy: Strategy,
    pub series: BalanceSeries,
    pub final_balance: f64,
    /// Money put in (contribution × months, or the lump sum)
    pub total_contributions: f64,
    /// Final balance minus contributions
    pub interest_earned: f64,
}

impl StrategyOutcome {
    fn new(strategy: Strategy, series: BalanceSeries, total_contributions: f64) -> Self {
        let final_balance = series.final_balance();
        Self {
            strategy,
            series,
            final_balance,
            total_contributions,
            interest_earned: final_balance - total_contributions,
        }
    }
}

/// Side-by-side projection of both strategies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsComparison {
    pub monthly_contribution: f64,
    pub horizon_months: u32,
    pub annual_rate: f64,
    pub recurring: StrategyOutcome,
    pub lump_sum: StrategyOutcome,
}

impl SavingsComparison {
    /// Project both strategies without validating inputs
    pub fn compute(monthly_contribution: f64, lump_sum: f64, horizon_months: u32, annual_rate: f64) -> Self {
        let recurring = project_balance(monthly_contribution, 0.0, horizon_months, annual_rate);
        let lump = project_balance(0.0, lump_sum, horizon_months, annual_rate);

        Self {
            monthly_contribution,
            horizon_months,
            annual_rate,
            recurring: StrategyOutcome::new(
                Strategy::Recurring,
                recurring,
                monthly_contribution * horizon_months as f64,
            ),
            lump_sum: StrategyOutcome::new(Strategy::LumpSum, lump, lump_sum),
        }
    }

    /// Validate, then project both strategies
    pub fn from_inputs(inputs: &SavingsInputs) -> Result<Self> {
        inputs.validate()?;
        Ok(Self::compute(
            inputs.monthly_contribution,
            inputs.lump_sum,
            inputs.horizon_months,
            inputs.annual_rate,
        ))
    }

    /// Strategy with the higher final balance (lump sum on a tie)
    pub fn winner(&self) -> Strategy {
        if self.recurring.final_balance > self.lump_sum.final_balance {
            Strategy::Recurring
        } else {
            Strategy::LumpSum
        }
    }

    /// Absolute gap between the two final balances
    pub fn difference(&self) -> f64 {
        (self.recurring.final_balance - self.lump_sum.final_balance).abs()
    }

    pub fn outcome(&self, strategy: Strategy) -> &StrategyOutcome {
        match strategy {
            Strategy::Recurring => &self.recurring,
            Strategy::LumpSum => &self.lump_sum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lump_sum_beats_small_recurring() {
        let cmp = SavingsComparison::compute(500.0, 300_000.0, 120, 0.02);

        assert_eq!(cmp.winner(), Strategy::LumpSum);
        assert!(cmp.lump_sum.final_balance > cmp.recurring.final_balance);
        assert_relative_eq!(
            cmp.difference(),
            cmp.lump_sum.final_balance - cmp.recurring.final_balance
        );
    }

    #[test]
    fn test_recurring_can_win() {
        let cmp = SavingsComparison::compute(1_000.0, 10_000.0, 120, 0.02);
        assert_eq!(cmp.winner(), Strategy::Recurring);
        assert_eq!(cmp.outcome(Strategy::Recurring).strategy, Strategy::Recurring);
    }

    #[test]
    fn test_contributions_and_interest() {
        let cmp = SavingsComparison::compute(500.0, 300_000.0, 120, 0.02);

        assert_eq!(cmp.recurring.total_contributions, 60_000.0);
        assert_eq!(cmp.lump_sum.total_contributions, 300_000.0);
        assert_relative_eq!(
            cmp.recurring.interest_earned,
            cmp.recurring.final_balance - 60_000.0
        );
        assert!(cmp.recurring.interest_earned > 0.0);
        // 300000 × (1 + 0.02/12)^120
        assert_relative_eq!(
            cmp.lump_sum.final_balance,
            300_000.0 * (1.0_f64 + 0.02 / 12.0).powi(120),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_rate_earns_nothing() {
        let cmp = SavingsComparison::compute(500.0, 60_000.0, 120, 0.0);
        assert_eq!(cmp.recurring.interest_earned, 0.0);
        assert_eq!(cmp.lump_sum.interest_earned, 0.0);
        assert_eq!(cmp.difference(), 0.0);
        assert_eq!(cmp.winner(), Strategy::LumpSum);
    }

    #[test]
    fn test_from_inputs_validates() {
        let inputs = SavingsInputs {
            lump_sum: -1.0,
            ..Default::default()
        };
        assert!(SavingsComparison::from_inputs(&inputs).is_err());
        assert!(SavingsComparison::from_inputs(&SavingsInputs::default()).is_ok());
    }
}
