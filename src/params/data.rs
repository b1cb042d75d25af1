//! Parameter structs fed into the mortgage and growth engines

use crate::currency::Currency;
use crate::error::{check_non_negative, BudgetError, Result};
use serde::{Deserialize, Serialize};

/// Longest loan term accepted by validation
pub const MAX_LOAN_YEARS: u32 = 100;

/// Longest savings horizon accepted by validation (100 years)
pub const MAX_HORIZON_MONTHS: u32 = 1_200;

/// Loan terms for the house purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Amount financed
    pub principal: f64,

    /// Annual interest rate as a fraction (0.04 = 4%)
    pub annual_rate: f64,

    /// Full loan term in years
    pub total_years: u32,

    /// Leading years in which only interest is paid
    pub interest_only_years: u32,

    /// Manually entered monthly mortgage payment
    /// If Some, replaces the computed effective payment
    #[serde(default)]
    pub payment_override: Option<f64>,
}

impl LoanParameters {
    /// Create loan parameters without a payment override
    pub fn new(principal: f64, annual_rate: f64, total_years: u32, interest_only_years: u32) -> Self {
        Self {
            principal,
            annual_rate,
            total_years,
            interest_only_years,
            payment_override: None,
        }
    }

    /// Set a manual monthly payment
    pub fn with_payment_override(mut self, payment: f64) -> Self {
        self.payment_override = Some(payment);
        self
    }

    /// Months over which principal is repaid (0 if the whole term is interest-only)
    pub fn amortization_months(&self) -> u32 {
        self.total_years
            .saturating_sub(self.interest_only_years)
            .saturating_mul(12)
    }

    /// Total term in months
    pub fn term_months(&self) -> u32 {
        self.total_years.saturating_mul(12)
    }

    pub fn validate(&self) -> Result<()> {
        check_non_negative("principal", self.principal)?;
        check_non_negative("annual_rate", self.annual_rate)?;

        if self.total_years == 0 {
            return Err(BudgetError::invalid(
                "total_years",
                self.total_years as f64,
                "loan term must be at least one year",
            ));
        }

        if self.total_years > MAX_LOAN_YEARS {
            return Err(BudgetError::invalid(
                "total_years",
                self.total_years as f64,
                "loan term cannot exceed 100 years",
            ));
        }

        if self.interest_only_years > self.total_years {
            return Err(BudgetError::invalid(
                "interest_only_years",
                self.interest_only_years as f64,
                "interest-only period cannot exceed the loan term",
            ));
        }

        if let Some(payment) = self.payment_override {
            check_non_negative("payment_override", payment)?;
        }

        Ok(())
    }
}

impl Default for LoanParameters {
    fn default() -> Self {
        Self::new(300_000.0, 0.04, 30, 0)
    }
}

/// Contribution pattern for one savings projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsSchedule {
    /// Amount added at the end of every month
    pub monthly_contribution: f64,

    /// Balance at month 0
    pub initial_balance: f64,

    /// Number of whole months to project
    pub horizon_months: u32,

    /// Annual interest rate as a fraction
    pub annual_rate: f64,
}

impl SavingsSchedule {
    pub fn new(monthly_contribution: f64, initial_balance: f64, horizon_months: u32, annual_rate: f64) -> Self {
        Self {
            monthly_contribution,
            initial_balance,
            horizon_months,
            annual_rate,
        }
    }

    pub fn validate(&self) -> Result<()> {
        check_non_negative("monthly_contribution", self.monthly_contribution)?;
        check_non_negative("initial_balance", self.initial_balance)?;
        check_non_negative("annual_rate", self.annual_rate)?;
        check_horizon(self.horizon_months)?;
        Ok(())
    }
}

/// Monthly running costs and the down payment commentary inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HousingInputs {
    /// House insurance per month
    pub insurance: f64,

    /// Property tax per month
    pub tax: f64,

    /// Apartment rent per month
    pub rent: f64,

    /// One-time down payment on the house
    #[serde(default)]
    pub down_payment: f64,

    /// Amount set aside each month towards the down payment
    #[serde(default)]
    pub monthly_savings_goal: f64,
}

impl HousingInputs {
    pub fn validate(&self) -> Result<()> {
        check_non_negative("insurance", self.insurance)?;
        check_non_negative("tax", self.tax)?;
        check_non_negative("rent", self.rent)?;
        check_non_negative("down_payment", self.down_payment)?;
        check_non_negative("monthly_savings_goal", self.monthly_savings_goal)?;
        Ok(())
    }
}

impl Default for HousingInputs {
    fn default() -> Self {
        Self {
            insurance: 100.0,
            tax: 250.0,
            rent: 1_500.0,
            down_payment: 60_000.0,
            monthly_savings_goal: 500.0,
        }
    }
}

/// Recurring contributions vs. a single upfront deposit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsInputs {
    pub monthly_contribution: f64,
    pub lump_sum: f64,
    pub horizon_months: u32,
    pub annual_rate: f64,
}

impl SavingsInputs {
    /// Contribution-only schedule (starts from zero)
    pub fn recurring_schedule(&self) -> SavingsSchedule {
        SavingsSchedule::new(self.monthly_contribution, 0.0, self.horizon_months, self.annual_rate)
    }

    /// Deposit-only schedule (no further contributions)
    pub fn lump_sum_schedule(&self) -> SavingsSchedule {
        SavingsSchedule::new(0.0, self.lump_sum, self.horizon_months, self.annual_rate)
    }

    pub fn validate(&self) -> Result<()> {
        check_non_negative("monthly_contribution", self.monthly_contribution)?;
        check_non_negative("lump_sum", self.lump_sum)?;
        check_non_negative("savings_rate", self.annual_rate)?;
        check_horizon(self.horizon_months)?;
        Ok(())
    }
}

impl Default for SavingsInputs {
    fn default() -> Self {
        Self {
            monthly_contribution: 500.0,
            lump_sum: 60_000.0,
            horizon_months: 120,
            annual_rate: 0.02,
        }
    }
}

fn check_horizon(horizon_months: u32) -> Result<()> {
    if horizon_months > MAX_HORIZON_MONTHS {
        return Err(BudgetError::invalid(
            "horizon_months",
            horizon_months as f64,
            "savings horizon cannot exceed 1200 months",
        ));
    }
    Ok(())
}

/// Complete parameter set for one comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub loan: LoanParameters,
    pub housing: HousingInputs,
    pub savings: SavingsInputs,
    #[serde(default)]
    pub currency: Currency,
}

impl Scenario {
    /// Check every parameter; the first invalid one is reported
    pub fn validate(&self) -> Result<()> {
        self.loan.validate()?;
        self.housing.validate()?;
        self.savings.validate()?;
        Ok(())
    }

    /// Copy of this scenario with a different mortgage rate
    pub fn with_mortgage_rate(&self, annual_rate: f64) -> Self {
        let mut scenario = self.clone();
        scenario.loan.annual_rate = annual_rate;
        scenario.name = format!("{} @ {:.2}%", self.name, annual_rate * 100.0);
        scenario
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            loan: LoanParameters::default(),
            housing: HousingInputs::default(),
            savings: SavingsInputs::default(),
            currency: Currency::default(),
        }
    }
}
