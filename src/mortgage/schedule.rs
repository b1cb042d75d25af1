//! Month-by-month amortization schedule

use super::payment::level_payment;
use crate::params::LoanParameters;
use serde::{Deserialize, Serialize};

/// Repayment phase of a loan month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanPhase {
    /// Payment covers interest only
    InterestOnly,
    /// Level payment repaying principal
    Amortizing,
}

/// A single month of the schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Loan month (1-indexed)
    pub month: u32,
    /// Loan year (1-indexed)
    pub year: u32,
    pub phase: LoanPhase,
    pub opening_balance: f64,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    pub closing_balance: f64,
}

/// Full schedule for a loan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub rows: Vec<AmortizationRow>,
    pub original_principal: f64,
}

/// Totals over a schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_months: u32,
    pub total_paid: f64,
    pub total_interest: f64,
    pub total_principal: f64,
    pub ending_balance: f64,
    /// First amortizing payment (0 if the loan never amortizes)
    pub amortizing_payment: f64,
}

impl AmortizationSchedule {
    /// Get summary statistics
    pub fn summary(&self) -> ScheduleSummary {
        let total_paid: f64 = self.rows.iter().map(|r| r.payment).sum();
        let total_interest: f64 = self.rows.iter().map(|r| r.interest).sum();
        let total_principal: f64 = self.rows.iter().map(|r| r.principal).sum();

        let ending_balance = self
            .rows
            .last()
            .map(|r| r.closing_balance)
            .unwrap_or(self.original_principal);

        let amortizing_payment = self
            .rows
            .iter()
            .find(|r| r.phase == LoanPhase::Amortizing)
            .map(|r| r.payment)
            .unwrap_or(0.0);

        ScheduleSummary {
            total_months: self.rows.len() as u32,
            total_paid,
            total_interest,
            total_principal,
            ending_balance,
            amortizing_payment,
        }
    }

    /// Rows for a single loan year
    pub fn year(&self, year: u32) -> impl Iterator<Item = &AmortizationRow> {
        self.rows.iter().filter(move |r| r.year == year)
    }
}

/// Build the schedule for a loan
///
/// Interest-only months pay `balance × rate / 12`. Amortizing months pay the
/// level payment over the remaining term; the last payment is trimmed so the
/// balance closes at exactly zero. Any payment override is ignored here: the
/// schedule shows the contractual payments.
pub fn amortization_schedule(loan: &LoanParameters) -> AmortizationSchedule {
    let monthly_rate = loan.annual_rate / 12.0;
    let io_months = loan.interest_only_years.min(loan.total_years) * 12;
    let term_months = loan.term_months();
    let payment = level_payment(loan.principal, monthly_rate, loan.amortization_months().into());

    let mut rows = Vec::with_capacity(term_months as usize);
    let mut balance = loan.principal;

    for month in 1..=term_months {
        let interest = balance * monthly_rate;

        let (phase, principal) = if month <= io_months {
            (LoanPhase::InterestOnly, 0.0)
        } else if month == term_months {
            (LoanPhase::Amortizing, balance)
        } else {
            (LoanPhase::Amortizing, (payment - interest).min(balance))
        };

        let closing_balance = balance - principal;

        rows.push(AmortizationRow {
            month,
            year: (month - 1) / 12 + 1,
            phase,
            opening_balance: balance,
            payment: interest + principal,
            interest,
            principal,
            closing_balance,
        });

        balance = closing_balance;
    }

    AmortizationSchedule {
        rows,
        original_principal: loan.principal,
    }
}
