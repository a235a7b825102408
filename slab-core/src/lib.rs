//! Progressive income tax slab engine for salaried individuals.
//!
//! Holds the published slab tables for each supported fiscal year and two
//! pure calculators over them: income to annual tax owed, and target
//! annual tax back to the minimum income producing it. No I/O, no shared
//! mutable state; every entry point is safe to call concurrently.

pub mod calculations;
pub mod models;
pub mod registry;

pub use calculations::{ScheduleError, SlabSchedule, TaxError};
pub use models::{FiscalYear, TaxBracket};
pub use registry::{
    brackets_for_year, calculate_required_income, calculate_tax, latest_year, supported_years,
};
