//! Tax command - income to tax owed

use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::utils::{format_pkr, parse_amount};

#[derive(Args, Debug)]
pub struct TaxCommand {
    /// Income amount, annual unless --monthly is given (commas allowed)
    #[arg(short, long)]
    amount: String,

    /// Treat the amount as a monthly salary
    #[arg(short, long)]
    monthly: bool,

    /// Fiscal year, e.g. 2025-2026 (defaults to the current year's table)
    #[arg(short, long)]
    year: Option<String>,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// Tax figures for JSON output.
#[derive(Debug, Serialize)]
struct TaxData {
    fiscal_year: String,
    annual_income: f64,
    annual_tax: f64,
    monthly_income: f64,
    monthly_tax: f64,
    annual_take_home: f64,
    effective_rate_pct: f64,
}

impl TaxCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let year = crate::cmd::resolve_year(self.year.as_deref());
        let amount = parse_amount(&self.amount)?;
        // The engine works on annual figures; a monthly salary is
        // annualized before the call and the result split back out.
        let annual_income = if self.monthly { amount * 12.0 } else { amount };

        let annual_tax = slab_core::calculate_tax(annual_income, &year)?;
        debug!(%year, annual_income, annual_tax, "calculated tax");

        let effective_rate_pct = if annual_income > 0.0 {
            annual_tax / annual_income * 100.0
        } else {
            0.0
        };
        let data = TaxData {
            fiscal_year: year,
            annual_income,
            annual_tax,
            monthly_income: annual_income / 12.0,
            monthly_tax: annual_tax / 12.0,
            annual_take_home: annual_income - annual_tax,
            effective_rate_pct,
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&data)?);
        } else {
            print_summary(&data);
        }
        Ok(())
    }
}

fn print_summary(data: &TaxData) {
    println!();
    println!("TAX ESTIMATE ({})", data.fiscal_year);
    println!();
    println!("  Annual income:    {}", format_pkr(data.annual_income));
    println!("  Annual tax:       {}", format_pkr(data.annual_tax));
    println!("  Monthly income:   {}", format_pkr(data.monthly_income));
    println!("  Monthly tax:      {}", format_pkr(data.monthly_tax));
    println!("  Annual take-home: {}", format_pkr(data.annual_take_home));
    println!("  Effective rate:   {:.2}%", data.effective_rate_pct);
    println!();
}
