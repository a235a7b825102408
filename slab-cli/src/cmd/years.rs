//! Years command - list supported fiscal years

use clap::Args;

#[derive(Args, Debug)]
pub struct YearsCommand {
    /// Output as JSON instead of one year per line
    #[arg(long)]
    json: bool,
}

impl YearsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let years = slab_core::supported_years();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&years)?);
        } else {
            for year in years {
                println!("{year}");
            }
        }
        Ok(())
    }
}
