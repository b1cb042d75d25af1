//! Monthly mortgage payment with an optional interest-only phase

use serde::{Deserialize, Serialize};

/// Monthly payment breakdown for a loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgagePayment {
    /// Pure interest on the full principal (principal × rate / 12)
    /// Computed even when there is no interest-only phase
    pub interest_only_payment: f64,

    /// Level payment over the amortization months
    /// 0 when the whole term is interest-only
    pub amortized_payment: f64,

    /// Principal share of the first amortizing payment
    pub principal_portion: f64,

    /// Interest share of the first amortizing payment
    pub interest_portion: f64,

    /// What the borrower pays per month right now
    pub effective_payment: f64,

    /// Whether the effective payment is the interest-only payment
    pub in_interest_only_phase: bool,
}

/// Compute the monthly payment breakdown
///
/// The effective payment is the interest-only payment for the whole loan
/// whenever `interest_only_years > 0`; the switch to amortizing payments is
/// not modeled here (see [`super::amortization_schedule`] for month detail).
///
/// # Arguments
/// * `principal` - Amount financed
/// * `annual_rate` - Annual rate as a fraction
/// * `total_years` - Loan term in years
/// * `interest_only_years` - Leading interest-only years
pub fn monthly_payment(
    principal: f64,
    annual_rate: f64,
    total_years: u32,
    interest_only_years: u32,
) -> MortgagePayment {
    let monthly_rate = annual_rate / 12.0;
    let interest_only_payment = principal * monthly_rate;

    let amortization_months = u64::from(total_years.saturating_sub(interest_only_years)) * 12;

    let amortized_payment = if amortization_months == 0 {
        log::debug!(
            "No amortization months ({} of {} years interest-only), amortized payment is 0",
            interest_only_years,
            total_years
        );
        0.0
    } else {
        level_payment(principal, monthly_rate, amortization_months)
    };

    let in_interest_only_phase = interest_only_years > 0;
    let effective_payment = if in_interest_only_phase {
        interest_only_payment
    } else {
        amortized_payment
    };

    let interest_portion = interest_only_payment;
    // Negative only when nothing is amortized
    let principal_portion = (amortized_payment - interest_portion).max(0.0);

    MortgagePayment {
        interest_only_payment,
        amortized_payment,
        principal_portion,
        interest_portion,
        effective_payment,
        in_interest_only_phase,
    }
}

/// Fixed payment that repays `principal` over `n_months` at `monthly_rate`
///
/// Falls back to straight-line repayment at a zero rate. When the growth
/// factor overflows the payment converges to pure interest.
pub fn level_payment(principal: f64, monthly_rate: f64, n_months: u64) -> f64 {
    if n_months == 0 {
        return 0.0;
    }

    if monthly_rate == 0.0 {
        return principal / n_months as f64;
    }

    let growth = match i32::try_from(n_months) {
        Ok(n) => (1.0 + monthly_rate).powi(n),
        Err(_) => (1.0 + monthly_rate).powf(n_months as f64),
    };
    if !growth.is_finite() {
        return principal * monthly_rate;
    }

    principal * (monthly_rate * growth) / (growth - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_standard_30_year_annuity() {
        let payment = monthly_payment(300_000.0, 0.04, 30, 0);

        assert_abs_diff_eq!(payment.amortized_payment, 1432.25, epsilon = 0.01);
        assert_abs_diff_eq!(payment.interest_portion, 1000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(payment.principal_portion, 432.25, epsilon = 0.01);
        assert_eq!(payment.effective_payment, payment.amortized_payment);
        assert!(!payment.in_interest_only_phase);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let payment = monthly_payment(300_000.0, 0.0, 30, 0);
        assert_eq!(payment.amortized_payment, 300_000.0 / 360.0);
        assert_eq!(payment.interest_only_payment, 0.0);
        assert_eq!(payment.principal_portion, payment.amortized_payment);
    }

    #[test]
    fn test_zero_rate_exact_for_various_terms() {
        for years in [1u32, 5, 10, 25, 40] {
            let payment = monthly_payment(123_456.0, 0.0, years, 0);
            assert_eq!(payment.amortized_payment, 123_456.0 / (years as f64 * 12.0));
        }
    }

    #[test]
    fn test_full_interest_only_term() {
        let payment = monthly_payment(300_000.0, 0.04, 30, 30);

        assert_eq!(payment.amortized_payment, 0.0);
        assert_abs_diff_eq!(payment.effective_payment, 300_000.0 * 0.04 / 12.0, epsilon = 1e-9);
        assert_eq!(payment.principal_portion, 0.0);
        assert!(payment.in_interest_only_phase);
    }

    #[test]
    fn test_partial_interest_only_reports_interest() {
        let payment = monthly_payment(300_000.0, 0.04, 30, 10);

        assert_abs_diff_eq!(payment.effective_payment, 1000.0, epsilon = 1e-9);
        // Amortized over the remaining 20 years
        assert_abs_diff_eq!(
            payment.amortized_payment,
            level_payment(300_000.0, 0.04 / 12.0, 240),
            epsilon = 1e-9
        );
        assert!(payment.amortized_payment > monthly_payment(300_000.0, 0.04, 30, 0).amortized_payment);
    }

    #[test]
    fn test_interest_only_longer_than_term_does_not_panic() {
        let payment = monthly_payment(100_000.0, 0.05, 5, 10);
        assert_eq!(payment.amortized_payment, 0.0);
        assert!(payment.effective_payment.is_finite());
    }

    #[test]
    fn test_outputs_non_negative_and_finite() {
        for &principal in &[0.0, 1.0, 250_000.0, 5_000_000.0] {
            for &rate in &[0.0, 0.001, 0.04, 0.15] {
                for years in [1u32, 15, 30] {
                    for io in [0u32, 1, years] {
                        let p = monthly_payment(principal, rate, years, io);
                        for v in [
                            p.interest_only_payment,
                            p.amortized_payment,
                            p.principal_portion,
                            p.interest_portion,
                            p.effective_payment,
                        ] {
                            assert!(v.is_finite() && v >= 0.0, "bad value {} for {:?}", v, p);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let a = monthly_payment(412_000.0, 0.0375, 25, 3);
        let b = monthly_payment(412_000.0, 0.0375, 25, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_very_long_term_converges_to_interest() {
        let payment = monthly_payment(300_000.0, 0.04, 200_000_000, 0);
        assert_abs_diff_eq!(payment.amortized_payment, 1000.0, epsilon = 1e-6);
        assert!(payment.principal_portion >= 0.0);

        let payment = monthly_payment(300_000.0, 0.04, u32::MAX, 0);
        assert!(payment.amortized_payment.is_finite());
        assert_abs_diff_eq!(payment.amortized_payment, 1000.0, epsilon = 1e-6);

        // Month count past i32::MAX at a zero rate stays straight-line
        assert_eq!(level_payment(1.0, 0.0, 3_000_000_000), 1.0 / 3_000_000_000.0);
    }

    #[test]
    fn test_level_payment_zero_months() {
        assert_eq!(level_payment(1000.0, 0.01, 0), 0.0);
    }
}
