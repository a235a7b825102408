//! Brackets command - show a fiscal year's slab table

use clap::Args;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::utils::format_pkr;

#[derive(Args, Debug)]
pub struct BracketsCommand {
    /// Fiscal year, e.g. 2025-2026 (defaults to the current year's table)
    #[arg(short, long)]
    year: Option<String>,

    /// Output as JSON instead of a formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Tabled)]
struct BracketRow {
    #[tabled(rename = "From")]
    from: String,
    #[tabled(rename = "To")]
    to: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Fixed Amount")]
    fixed_amount: String,
}

impl BracketsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let year = crate::cmd::resolve_year(self.year.as_deref());
        let brackets = slab_core::brackets_for_year(&year)?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(brackets)?);
            return Ok(());
        }

        let rows: Vec<BracketRow> = brackets
            .iter()
            .map(|b| BracketRow {
                from: format_pkr(b.lower_bound),
                to: b.upper_bound.map_or("—".to_string(), format_pkr),
                rate: format!("{:.2}%", b.rate * 100.0),
                fixed_amount: format_pkr(b.fixed_amount),
            })
            .collect();

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();

        println!();
        println!("SLAB TABLE ({year})");
        println!("{table}");
        println!();
        Ok(())
    }
}
