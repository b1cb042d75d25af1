//! Plain-text commentary for a scenario result

use crate::currency::Currency;
use crate::growth::Strategy;
use crate::scenario::ScenarioResult;
use serde::Serialize;
use std::fmt;

/// Commentary lines shown next to the charts
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub title: String,
    pub lines: Vec<String>,
}

impl ComparisonReport {
    pub fn from_result(result: &ScenarioResult) -> Self {
        let cur = result.currency;
        let mut lines = Vec::new();

        housing_lines(result, cur, &mut lines);
        savings_lines(result, cur, &mut lines);
        down_payment_lines(result, cur, &mut lines);

        Self {
            title: format!("House vs Apartment: {}", result.name),
            lines,
        }
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

fn housing_lines(result: &ScenarioResult, cur: Currency, lines: &mut Vec<String>) {
    let h = &result.housing;

    lines.push(format!("Total monthly cost for house: {}", cur.format(h.house_monthly_cost)));
    lines.push(format!("Total monthly cost for apartment: {}", cur.format(h.apartment_monthly_cost)));
    lines.push(format!("Difference in monthly cost: {}", cur.format(h.difference().abs())));

    let diff = h.difference();
    // Under half a unit both costs print the same
    if diff.abs() < 0.5 {
        lines.push("Both options cost about the same per month.".to_string());
    } else if h.house_is_more_expensive() {
        lines.push(format!("Living in a house is {} more expensive per month.", cur.format(diff)));
    } else {
        lines.push(format!("Living in an apartment is {} more expensive per month.", cur.format(-diff)));
    }

    if h.breakdown.in_interest_only_phase {
        lines.push(format!(
            "Interest-only period: the mortgage costs {} per month in interest.",
            cur.format(h.breakdown.interest_only_payment)
        ));
        if h.breakdown.amortized_payment > 0.0 {
            lines.push(format!(
                "After the interest-only period the payment rises to {} per month.",
                cur.format(h.breakdown.amortized_payment)
            ));
        } else {
            lines.push("The principal is not repaid within the loan term.".to_string());
        }
    } else if h.breakdown.amortized_payment > 0.0 {
        lines.push(format!(
            "First payment: {} principal, {} interest.",
            cur.format(h.breakdown.principal_portion),
            cur.format(h.breakdown.interest_portion)
        ));
    }

    if h.mortgage_payment != h.breakdown.effective_payment {
        lines.push(format!(
            "Using a manual mortgage payment of {} instead of {}.",
            cur.format(h.mortgage_payment),
            cur.format(h.breakdown.effective_payment)
        ));
    }

    lines.push(format!(
        "Total interest over the loan term: {}",
        cur.format(result.loan_summary.total_interest)
    ));
}

fn savings_lines(result: &ScenarioResult, cur: Currency, lines: &mut Vec<String>) {
    let s = &result.savings;
    lines.push(format!(
        "Saving {} per month for {} months at {:.2}% grows to {} ({} interest).",
        cur.format(s.monthly_contribution),
        s.horizon_months,
        s.annual_rate * 100.0,
        cur.format(s.recurring.final_balance),
        cur.format(s.recurring.interest_earned)
    ));
    lines.push(format!(
        "A lump sum of {} grows to {} ({} interest).",
        cur.format(s.lump_sum.total_contributions),
        cur.format(s.lump_sum.final_balance),
        cur.format(s.lump_sum.interest_earned)
    ));

    let winner = s.winner();
    if s.difference() == 0.0 {
        lines.push("Both strategies end with the same balance.".to_string());
    } else {
        let loser = match winner {
            Strategy::Recurring => Strategy::LumpSum,
            Strategy::LumpSum => Strategy::Recurring,
        };
        lines.push(format!(
            "The {} ends {} higher than the {}.",
            winner.label(),
            cur.format(s.difference()),
            loser.label()
        ));
    }
}

fn down_payment_lines(result: &ScenarioResult, cur: Currency, lines: &mut Vec<String>) {
    if result.down_payment <= 0.0 {
        return;
    }

    match years_to_save(result.down_payment, result.monthly_savings_goal) {
        Some(years) => lines.push(format!(
            "It would take approximately {:.1} years to save the down payment of {} at {} per month.",
            years,
            cur.format(result.down_payment),
            cur.format(result.monthly_savings_goal)
        )),
        None => lines.push(format!(
            "The down payment of {} cannot be reached without a monthly savings goal.",
            cur.format(result.down_payment)
        )),
    }
    lines.push(
        "Consider balancing between increasing your down payment to reduce debt and maintaining a healthy savings buffer."
            .to_string(),
    );
}

/// Years of saving `monthly_goal` needed to reach `target` (no interest)
pub fn years_to_save(target: f64, monthly_goal: f64) -> Option<f64> {
    if monthly_goal <= 0.0 {
        return None;
    }
    Some(target / (monthly_goal * 12.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Scenario;
    use crate::scenario::ScenarioRunner;

    fn report_for(scenario: Scenario) -> ComparisonReport {
        let result = ScenarioRunner::new().run(&scenario).unwrap();
        ComparisonReport::from_result(&result)
    }

    #[test]
    fn test_years_to_save() {
        assert_eq!(years_to_save(60_000.0, 500.0), Some(10.0));
        assert_eq!(years_to_save(60_000.0, 0.0), None);
    }

    #[test]
    fn test_default_report_in_usd() {
        let mut scenario = Scenario::default();
        scenario.currency = Currency::USD;
        let report = report_for(scenario);

        assert_eq!(report.lines[0], "Total monthly cost for house: $1,782");
        assert_eq!(report.lines[1], "Total monthly cost for apartment: $1,500");
        assert_eq!(report.lines[3], "Living in a house is $282 more expensive per month.");
        assert!(report
            .lines
            .iter()
            .any(|l| l.starts_with("It would take approximately 10.0 years")));
    }

    #[test]
    fn test_apartment_more_expensive() {
        let mut scenario = Scenario::default();
        scenario.housing.rent = 3_000.0;
        let report = report_for(scenario);
        assert!(report.lines[3].starts_with("Living in an apartment is 1,218 kr"));
    }

    #[test]
    fn test_interest_only_commentary() {
        let mut scenario = Scenario::default();
        scenario.loan.interest_only_years = 30;
        let report = report_for(scenario);

        assert!(report.lines.iter().any(|l| l.contains("1,000 kr per month in interest")));
        assert!(report
            .lines
            .iter()
            .any(|l| l == "The principal is not repaid within the loan term."));
    }

    #[test]
    fn test_near_equal_costs_are_about_the_same() {
        let mut scenario = Scenario::default();
        let house = ScenarioRunner::new().run(&scenario).unwrap().housing.house_monthly_cost;

        scenario.housing.rent = house + 0.4;
        let report = report_for(scenario.clone());
        assert_eq!(report.lines[3], "Both options cost about the same per month.");

        scenario.housing.rent = house - 0.4;
        let report = report_for(scenario.clone());
        assert_eq!(report.lines[3], "Both options cost about the same per month.");

        scenario.housing.rent = house + 2.0;
        let report = report_for(scenario);
        assert!(report.lines[3].starts_with("Living in an apartment is 2 kr"));
    }

    #[test]
    fn test_down_payment_advice_follows_estimate() {
        let report = report_for(Scenario::default());
        let at = report
            .lines
            .iter()
            .position(|l| l.starts_with("It would take approximately"))
            .unwrap();
        assert_eq!(
            report.lines[at + 1],
            "Consider balancing between increasing your down payment to reduce debt and maintaining a healthy savings buffer."
        );
    }

    #[test]
    fn test_no_savings_goal() {
        let mut scenario = Scenario::default();
        scenario.housing.monthly_savings_goal = 0.0;
        let report = report_for(scenario);
        assert!(report.lines.iter().any(|l| l.contains("cannot be reached")));
    }

    #[test]
    fn test_display_has_title() {
        let text = report_for(Scenario::default()).to_string();
        assert!(text.starts_with("House vs Apartment: default\n"));
    }
}
