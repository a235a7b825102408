//! Published salaried-individual slab tables, one per supported fiscal
//! year, and the year-keyed calculator entry points.
//!
//! The tables are deploy-time constants from the First Schedule of the
//! Income Tax Ordinance 2001 as amended by each year's Finance Act.
//! Adding a fiscal year is a code change here; there is no runtime
//! mutation API.

use crate::calculations::{SlabSchedule, TaxError};
use crate::models::TaxBracket;

/// Salaried slabs for 2022-2023 (Finance Act 2022).
const FY_2022_2023: &[TaxBracket] = &[
    TaxBracket { lower_bound: 0.0, upper_bound: Some(600_000.0), rate: 0.0, fixed_amount: 0.0 },
    TaxBracket { lower_bound: 600_000.0, upper_bound: Some(1_200_000.0), rate: 0.025, fixed_amount: 0.0 },
    TaxBracket { lower_bound: 1_200_000.0, upper_bound: Some(2_400_000.0), rate: 0.125, fixed_amount: 15_000.0 },
    TaxBracket { lower_bound: 2_400_000.0, upper_bound: Some(3_600_000.0), rate: 0.20, fixed_amount: 165_000.0 },
    TaxBracket { lower_bound: 3_600_000.0, upper_bound: Some(6_000_000.0), rate: 0.25, fixed_amount: 405_000.0 },
    TaxBracket { lower_bound: 6_000_000.0, upper_bound: Some(12_000_000.0), rate: 0.325, fixed_amount: 1_005_000.0 },
    TaxBracket { lower_bound: 12_000_000.0, upper_bound: None, rate: 0.35, fixed_amount: 2_955_000.0 },
];

/// Salaried slabs for 2023-2024 (Finance Act 2023).
const FY_2023_2024: &[TaxBracket] = &[
    TaxBracket { lower_bound: 0.0, upper_bound: Some(600_000.0), rate: 0.0, fixed_amount: 0.0 },
    TaxBracket { lower_bound: 600_000.0, upper_bound: Some(1_200_000.0), rate: 0.025, fixed_amount: 0.0 },
    TaxBracket { lower_bound: 1_200_000.0, upper_bound: Some(2_400_000.0), rate: 0.125, fixed_amount: 15_000.0 },
    TaxBracket { lower_bound: 2_400_000.0, upper_bound: Some(3_600_000.0), rate: 0.225, fixed_amount: 165_000.0 },
    TaxBracket { lower_bound: 3_600_000.0, upper_bound: Some(6_000_000.0), rate: 0.275, fixed_amount: 435_000.0 },
    TaxBracket { lower_bound: 6_000_000.0, upper_bound: None, rate: 0.35, fixed_amount: 1_095_000.0 },
];

/// Salaried slabs for 2024-2025 (Finance Act 2024).
const FY_2024_2025: &[TaxBracket] = &[
    TaxBracket { lower_bound: 0.0, upper_bound: Some(600_000.0), rate: 0.0, fixed_amount: 0.0 },
    TaxBracket { lower_bound: 600_000.0, upper_bound: Some(1_200_000.0), rate: 0.05, fixed_amount: 0.0 },
    TaxBracket { lower_bound: 1_200_000.0, upper_bound: Some(2_200_000.0), rate: 0.15, fixed_amount: 30_000.0 },
    TaxBracket { lower_bound: 2_200_000.0, upper_bound: Some(3_200_000.0), rate: 0.25, fixed_amount: 180_000.0 },
    TaxBracket { lower_bound: 3_200_000.0, upper_bound: Some(4_100_000.0), rate: 0.30, fixed_amount: 430_000.0 },
    TaxBracket { lower_bound: 4_100_000.0, upper_bound: None, rate: 0.35, fixed_amount: 700_000.0 },
];

/// Salaried slabs for 2025-2026 (Finance Act 2025).
const FY_2025_2026: &[TaxBracket] = &[
    TaxBracket { lower_bound: 0.0, upper_bound: Some(600_000.0), rate: 0.0, fixed_amount: 0.0 },
    TaxBracket { lower_bound: 600_000.0, upper_bound: Some(1_200_000.0), rate: 0.01, fixed_amount: 0.0 },
    TaxBracket { lower_bound: 1_200_000.0, upper_bound: Some(2_200_000.0), rate: 0.11, fixed_amount: 6_000.0 },
    TaxBracket { lower_bound: 2_200_000.0, upper_bound: Some(3_200_000.0), rate: 0.23, fixed_amount: 116_000.0 },
    TaxBracket { lower_bound: 3_200_000.0, upper_bound: Some(4_100_000.0), rate: 0.30, fixed_amount: 346_000.0 },
    TaxBracket { lower_bound: 4_100_000.0, upper_bound: None, rate: 0.35, fixed_amount: 616_000.0 },
];

/// Year keys paired with their tables, ordered so the most recent year is
/// last (the one a frontend preselects).
const SCHEDULES: &[(&str, &[TaxBracket])] = &[
    ("2022-2023", FY_2022_2023),
    ("2023-2024", FY_2023_2024),
    ("2024-2025", FY_2024_2025),
    ("2025-2026", FY_2025_2026),
];

/// Supported fiscal year keys, most-recent-last.
pub fn supported_years() -> Vec<&'static str> {
    SCHEDULES.iter().map(|(year, _)| *year).collect()
}

/// Most recent fiscal year in the registry.
pub fn latest_year() -> &'static str {
    // The registry is a non-empty constant.
    SCHEDULES[SCHEDULES.len() - 1].0
}

/// Ordered slab table for `year`.
///
/// # Errors
///
/// [`TaxError::UnknownYear`] when `year` has no published table.
pub fn brackets_for_year(year: &str) -> Result<&'static [TaxBracket], TaxError> {
    SCHEDULES
        .iter()
        .find(|(key, _)| *key == year)
        .map(|(_, brackets)| *brackets)
        .ok_or_else(|| TaxError::UnknownYear(year.to_string()))
}

/// Total annual tax owed on `annual_income` under `year`'s slab table.
///
/// Annual figures only; annualize a monthly salary before calling. See
/// [`SlabSchedule::tax_for_income`] for the numeric and input-policy
/// contract.
pub fn calculate_tax(annual_income: f64, year: &str) -> Result<f64, TaxError> {
    let brackets = brackets_for_year(year)?;
    SlabSchedule::new(brackets).tax_for_income(annual_income)
}

/// Minimum annual income that owes `target_annual_tax` under `year`'s
/// slab table.
///
/// See [`SlabSchedule::income_for_tax`] for the inversion and
/// input-policy contract.
pub fn calculate_required_income(target_annual_tax: f64, year: &str) -> Result<f64, TaxError> {
    let brackets = brackets_for_year(year)?;
    SlabSchedule::new(brackets).income_for_tax(target_annual_tax)
}
