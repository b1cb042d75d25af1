//! House vs apartment monthly cost

use super::payment::{monthly_payment, MortgagePayment};
use crate::error::{check_non_negative, Result};
use crate::params::LoanParameters;
use serde::{Deserialize, Serialize};

/// Monthly cost of each housing option
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HousingCosts {
    /// Mortgage payment + insurance + tax
    pub house_monthly_cost: f64,

    /// Rent
    pub apartment_monthly_cost: f64,

    /// Mortgage payment actually counted in the house cost
    /// (the override if one was given)
    pub mortgage_payment: f64,

    pub insurance: f64,
    pub tax: f64,

    /// Computed payment breakdown (before any override)
    pub breakdown: MortgagePayment,
}

impl HousingCosts {
    /// House cost minus apartment cost (positive when the house is dearer)
    pub fn difference(&self) -> f64 {
        self.house_monthly_cost - self.apartment_monthly_cost
    }

    pub fn house_is_more_expensive(&self) -> bool {
        self.house_monthly_cost > self.apartment_monthly_cost
    }
}

/// Monthly cost of owning: mortgage payment plus insurance and property tax
pub fn house_monthly_cost(mortgage_payment: f64, insurance: f64, tax: f64) -> f64 {
    mortgage_payment + insurance + tax
}

/// Monthly cost of renting
pub fn apartment_monthly_cost(rent: f64) -> f64 {
    rent
}

/// Validate the inputs, then compute both monthly costs
pub fn compute_housing_costs(
    loan: &LoanParameters,
    insurance: f64,
    tax: f64,
    rent: f64,
) -> Result<HousingCosts> {
    loan.validate()?;
    check_non_negative("insurance", insurance)?;
    check_non_negative("tax", tax)?;
    check_non_negative("rent", rent)?;

    let breakdown = monthly_payment(
        loan.principal,
        loan.annual_rate,
        loan.total_years,
        loan.interest_only_years,
    );
    let mortgage_payment = loan.payment_override.unwrap_or(breakdown.effective_payment);

    Ok(HousingCosts {
        house_monthly_cost: house_monthly_cost(mortgage_payment, insurance, tax),
        apartment_monthly_cost: apartment_monthly_cost(rent),
        mortgage_payment,
        insurance,
        tax,
        breakdown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BudgetError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_house_cost_adds_running_costs() {
        let loan = LoanParameters::new(300_000.0, 0.04, 30, 0);
        let costs = compute_housing_costs(&loan, 100.0, 250.0, 1500.0).unwrap();

        assert_abs_diff_eq!(costs.house_monthly_cost, 1432.25 + 350.0, epsilon = 0.01);
        assert_eq!(costs.apartment_monthly_cost, 1500.0);
        assert!(costs.house_is_more_expensive());
        assert_abs_diff_eq!(costs.difference(), 282.25, epsilon = 0.01);
    }

    #[test]
    fn test_interest_only_uses_interest_payment() {
        let loan = LoanParameters::new(300_000.0, 0.04, 30, 5);
        let costs = compute_housing_costs(&loan, 0.0, 0.0, 2000.0).unwrap();

        assert_abs_diff_eq!(costs.mortgage_payment, 1000.0, epsilon = 1e-9);
        assert!(!costs.house_is_more_expensive());
    }

    #[test]
    fn test_payment_override() {
        let loan = LoanParameters::new(300_000.0, 0.04, 30, 0).with_payment_override(1800.0);
        let costs = compute_housing_costs(&loan, 100.0, 100.0, 0.0).unwrap();

        assert_eq!(costs.mortgage_payment, 1800.0);
        assert_eq!(costs.house_monthly_cost, 2000.0);
        // Breakdown still reflects the contractual payment
        assert_abs_diff_eq!(costs.breakdown.amortized_payment, 1432.25, epsilon = 0.01);
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        let loan = LoanParameters::new(300_000.0, 0.04, 30, 0);
        let err = compute_housing_costs(&loan, 100.0, -1.0, 1500.0).unwrap_err();
        assert!(matches!(err, BudgetError::InvalidParameter { field: "tax", .. }));

        let bad_loan = LoanParameters::new(300_000.0, 0.04, 0, 0);
        assert!(compute_housing_costs(&bad_loan, 0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_apartment_cost_is_rent() {
        assert_eq!(apartment_monthly_cost(1234.5), 1234.5);
    }
}
