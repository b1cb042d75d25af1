//! Housing Budget CLI
//!
//! Compares the monthly cost of a house against an apartment and two savings
//! strategies for a single scenario. Every flag falls back to an `HB_*`
//! environment variable, then to the built-in default scenario.

use anyhow::Context;
use clap::Parser;
use housing_budget::{
    amortization_schedule, export, ComparisonReport, Currency, Scenario, ScenarioRunner,
};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Scenario name shown in the report
    #[arg(long, env = "HB_NAME")]
    name: Option<String>,

    /// Amount financed
    #[arg(long, env = "HB_PRINCIPAL")]
    principal: Option<f64>,

    /// Annual mortgage rate as a fraction (0.04 = 4%)
    #[arg(long, env = "HB_RATE")]
    rate: Option<f64>,

    /// Loan term in years
    #[arg(long, env = "HB_YEARS")]
    years: Option<u32>,

    /// Leading interest-only years
    #[arg(long, env = "HB_INTEREST_ONLY_YEARS")]
    interest_only_years: Option<u32>,

    /// Manual monthly mortgage payment (replaces the computed one)
    #[arg(long, env = "HB_PAYMENT")]
    payment: Option<f64>,

    /// House insurance per month
    #[arg(long, env = "HB_INSURANCE")]
    insurance: Option<f64>,

    /// Property tax per month
    #[arg(long, env = "HB_TAX")]
    tax: Option<f64>,

    /// Apartment rent per month
    #[arg(long, env = "HB_RENT")]
    rent: Option<f64>,

    /// One-time down payment on the house
    #[arg(long, env = "HB_DOWN_PAYMENT")]
    down_payment: Option<f64>,

    /// Monthly savings goal towards the down payment
    #[arg(long, env = "HB_SAVINGS_GOAL")]
    savings_goal: Option<f64>,

    /// Recurring monthly savings contribution
    #[arg(long, env = "HB_CONTRIBUTION")]
    contribution: Option<f64>,

    /// Lump sum deposited up front
    #[arg(long, env = "HB_LUMP_SUM")]
    lump_sum: Option<f64>,

    /// Savings horizon in months
    #[arg(long, env = "HB_HORIZON_MONTHS")]
    horizon_months: Option<u32>,

    /// Annual savings rate as a fraction
    #[arg(long, env = "HB_SAVINGS_RATE")]
    savings_rate: Option<f64>,

    /// Display currency: DKK, USD or EUR
    #[arg(long, env = "HB_CURRENCY")]
    currency: Option<Currency>,

    /// Also run the scenario at these mortgage rates (comma separated)
    #[arg(long, value_delimiter = ',')]
    sweep: Vec<f64>,

    /// Print the full result as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Write the month-by-month savings balances to this CSV file
    #[arg(long)]
    series_csv: Option<PathBuf>,

    /// Write the amortization schedule to this CSV file
    #[arg(long)]
    schedule_csv: Option<PathBuf>,
}

impl Cli {
    /// Default scenario with any given flags applied on top
    fn scenario(&self) -> Scenario {
        let mut s = Scenario::default();

        if let Some(name) = &self.name {
            s.name = name.clone();
        }
        s.loan.principal = self.principal.unwrap_or(s.loan.principal);
        s.loan.annual_rate = self.rate.unwrap_or(s.loan.annual_rate);
        s.loan.total_years = self.years.unwrap_or(s.loan.total_years);
        s.loan.interest_only_years = self.interest_only_years.unwrap_or(s.loan.interest_only_years);
        s.loan.payment_override = self.payment.or(s.loan.payment_override);

        s.housing.insurance = self.insurance.unwrap_or(s.housing.insurance);
        s.housing.tax = self.tax.unwrap_or(s.housing.tax);
        s.housing.rent = self.rent.unwrap_or(s.housing.rent);
        s.housing.down_payment = self.down_payment.unwrap_or(s.housing.down_payment);
        s.housing.monthly_savings_goal = self.savings_goal.unwrap_or(s.housing.monthly_savings_goal);

        s.savings.monthly_contribution = self.contribution.unwrap_or(s.savings.monthly_contribution);
        s.savings.lump_sum = self.lump_sum.unwrap_or(s.savings.lump_sum);
        s.savings.horizon_months = self.horizon_months.unwrap_or(s.savings.horizon_months);
        s.savings.annual_rate = self.savings_rate.unwrap_or(s.savings.annual_rate);

        s.currency = self.currency.unwrap_or(s.currency);
        s
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let runner = ScenarioRunner::with_scenario(cli.scenario());
    let scenario = runner.scenario();

    let result = runner
        .run_base()
        .with_context(|| format!("scenario '{}' is invalid", scenario.name))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", ComparisonReport::from_result(&result));
    }

    if !cli.sweep.is_empty() {
        println!("\nMortgage rate sweep:");
        println!("{:>8} {:>16} {:>16} {:>16}", "Rate", "Mortgage", "House", "Total interest");
        println!("{}", "-".repeat(59));

        for (rate, swept) in cli.sweep.iter().zip(runner.sweep_rates(&cli.sweep)) {
            let swept = swept?;
            println!(
                "{:>7.2}% {:>16} {:>16} {:>16}",
                rate * 100.0,
                result.currency.format(swept.housing.mortgage_payment),
                result.currency.format(swept.housing.house_monthly_cost),
                result.currency.format(swept.loan_summary.total_interest),
            );
        }
    }

    if let Some(path) = &cli.series_csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        export::write_balance_series(file, &result.savings)?;
        log::info!("Balance series written to {}", path.display());
    }

    if let Some(path) = &cli.schedule_csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        export::write_schedule(file, &amortization_schedule(&scenario.loan))?;
        log::info!("Amortization schedule written to {}", path.display());
    }

    Ok(())
}
