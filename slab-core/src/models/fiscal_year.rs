use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Fiscal year, running 1 July to 30 June.
///
/// The wrapped value is the starting calendar year, so `FiscalYear(2024)`
/// covers 1 July 2024 through 30 June 2025 and labels itself "2024-2025".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct FiscalYear(pub i32);

impl FiscalYear {
    /// Fiscal year containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        let year = date.year();
        // Fiscal year starts 1 July: June dates belong to the year that
        // started the previous July.
        if date >= NaiveDate::from_ymd_opt(year, 7, 1).unwrap() {
            FiscalYear(year)
        } else {
            FiscalYear(year - 1)
        }
    }

    /// Parse a registry-style label such as "2024-2025".
    pub fn parse(label: &str) -> Option<Self> {
        let (start, end) = label.split_once('-')?;
        let start: i32 = start.parse().ok()?;
        let end: i32 = end.parse().ok()?;
        (end == start + 1).then_some(FiscalYear(start))
    }

    /// First day of the fiscal year (1 July).
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.0, 7, 1).unwrap()
    }

    /// Last day of the fiscal year (30 June).
    pub fn end_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.0 + 1, 6, 30).unwrap()
    }

    /// Registry-style label, e.g. "2024-2025".
    pub fn label(&self) -> String {
        format!("{}-{}", self.0, self.0 + 1)
    }
}

impl std::fmt::Display for FiscalYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
