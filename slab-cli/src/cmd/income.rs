//! Income command - target tax to required income

use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::utils::{format_pkr, parse_amount};

#[derive(Args, Debug)]
pub struct IncomeCommand {
    /// Target tax amount, annual unless --monthly is given (commas allowed)
    #[arg(short, long)]
    tax: String,

    /// Treat the target as a monthly tax amount
    #[arg(short, long)]
    monthly: bool,

    /// Fiscal year, e.g. 2025-2026 (defaults to the current year's table)
    #[arg(short, long)]
    year: Option<String>,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Required-income figures for JSON output.
#[derive(Debug, Serialize)]
struct IncomeData {
    fiscal_year: String,
    target_annual_tax: f64,
    required_annual_income: f64,
    required_monthly_income: f64,
}

impl IncomeCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let year = crate::cmd::resolve_year(self.year.as_deref());
        let amount = parse_amount(&self.tax)?;
        let target_annual_tax = if self.monthly { amount * 12.0 } else { amount };

        let required_annual_income =
            slab_core::calculate_required_income(target_annual_tax, &year)?;
        debug!(%year, target_annual_tax, required_annual_income, "calculated required income");

        let data = IncomeData {
            fiscal_year: year,
            target_annual_tax,
            required_annual_income,
            required_monthly_income: required_annual_income / 12.0,
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else {
            print_summary(&data);
        }
        Ok(())
    }
}

fn print_summary(data: &IncomeData) {
    println!();
    println!("REQUIRED INCOME ({})", data.fiscal_year);
    println!();
    println!("  Target annual tax: {}", format_pkr(data.target_annual_tax));
    println!(
        "  Annual income:     {}",
        format_pkr(data.required_annual_income)
    );
    println!(
        "  Monthly income:    {}",
        format_pkr(data.required_monthly_income)
    );
    println!();
}
