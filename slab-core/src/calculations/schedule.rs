//! Forward and inverse calculation over a progressive slab schedule.
//!
//! The forward direction maps an annual income to the tax owed under an
//! ordered slab table; the inverse maps a target annual tax back to the
//! minimum income producing it. The tax function is piecewise linear and
//! monotonically non-decreasing, so inversion means locating the slab
//! whose tax range contains the target and solving that slab's linear
//! segment; a flat `target / rate` is wrong everywhere except inside a
//! single slab.
//!
//! # Example
//!
//! ```
//! use slab_core::{SlabSchedule, TaxBracket};
//!
//! let brackets = [
//!     TaxBracket { lower_bound: 0.0, upper_bound: Some(600_000.0), rate: 0.0, fixed_amount: 0.0 },
//!     TaxBracket { lower_bound: 600_000.0, upper_bound: Some(1_200_000.0), rate: 0.05, fixed_amount: 0.0 },
//!     TaxBracket { lower_bound: 1_200_000.0, upper_bound: None, rate: 0.10, fixed_amount: 30_000.0 },
//! ];
//!
//! let schedule = SlabSchedule::new(&brackets);
//!
//! let tax = schedule.tax_for_income(900_000.0)?;
//! assert!((tax - 15_000.0).abs() < 1e-6);
//!
//! let income = schedule.income_for_tax(15_000.0)?;
//! assert!((income - 900_000.0).abs() < 1e-6);
//! # Ok::<(), slab_core::TaxError>(())
//! ```

use thiserror::Error;

use crate::models::TaxBracket;

/// Errors surfaced by the slab calculators.
#[derive(Debug, Error, PartialEq)]
pub enum TaxError {
    /// Requested fiscal year is absent from the registry. A configuration
    /// problem on the caller's side, never a transient fault.
    #[error("fiscal year '{0}' is not supported")]
    UnknownYear(String),

    /// Amount was negative or not finite. Both calculators reject rather
    /// than clamp: a negative or NaN amount at this level is a caller bug,
    /// not a value with a meaningful tax.
    #[error("amount must be a non-negative finite number, got {0}")]
    InvalidInput(f64),

    /// No slab covers the amount. The forward direction can only hit this
    /// on a table missing its unbounded top slab; the inverse also returns
    /// it when every slab is zero-rate, since no income then produces a
    /// positive tax.
    #[error("no slab covers amount {0}")]
    NoMatchingBracket(f64),
}

/// Structural defects detectable in a slab table.
#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    /// The table has no slabs at all.
    #[error("schedule has no brackets")]
    Empty,

    /// The first slab must start at zero income.
    #[error("first bracket must start at 0, got {0}")]
    NonZeroFirstBound(f64),

    /// A slab does not start where the previous one ended.
    #[error("bracket starts at {actual}, expected {expected} (gap or overlap)")]
    DiscontinuousBounds { expected: f64, actual: f64 },

    /// A slab's upper bound does not exceed its lower bound.
    #[error("bracket starting at {lower_bound} is empty or inverted")]
    EmptyBracket { lower_bound: f64 },

    /// An unbounded slab appeared before the final position.
    #[error("only the final bracket may be unbounded")]
    UnboundedBeforeLast,

    /// The final slab must be unbounded so every income is covered.
    #[error("final bracket must be unbounded, got upper bound {0}")]
    BoundedFinalBracket(f64),

    /// A marginal rate fell outside the `[0, 1]` fraction range.
    #[error("bracket starting at {lower_bound}: rate {rate} outside [0, 1]")]
    RateOutOfRange { lower_bound: f64, rate: f64 },

    /// A slab's precomputed fixed amount disagrees with the tax actually
    /// accumulated by the slabs below it.
    #[error(
        "bracket starting at {lower_bound}: fixed amount {actual} disagrees with cumulative tax {expected}"
    )]
    FixedAmountMismatch {
        lower_bound: f64,
        expected: f64,
        actual: f64,
    },
}

/// Tolerance for comparing a slab's quoted fixed amount against the
/// recomputed cumulative tax, relative to the amount's magnitude.
const FIXED_AMOUNT_TOLERANCE: f64 = 1e-6;

/// One fiscal year's ordered slab table, with the forward and inverse
/// calculators over it.
///
/// Slabs must be sorted ascending by `lower_bound`, contiguous, and end in
/// an unbounded top slab; [`validate`](Self::validate) checks exactly that.
/// The registry's built-in tables are covered by tests, so constructing a
/// schedule over them never requires a runtime validation pass.
#[derive(Debug, Clone, Copy)]
pub struct SlabSchedule<'a> {
    brackets: &'a [TaxBracket],
}

impl<'a> SlabSchedule<'a> {
    /// Wraps an ordered slab table without validating it.
    pub fn new(brackets: &'a [TaxBracket]) -> Self {
        Self { brackets }
    }

    /// The underlying slab table.
    pub fn brackets(&self) -> &'a [TaxBracket] {
        self.brackets
    }

    /// Checks the structural invariants of the slab table.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let Some(first) = self.brackets.first() else {
            return Err(ScheduleError::Empty);
        };
        if first.lower_bound != 0.0 {
            return Err(ScheduleError::NonZeroFirstBound(first.lower_bound));
        }

        let mut expected_lower = 0.0;
        let mut cumulative = 0.0;
        for (index, bracket) in self.brackets.iter().enumerate() {
            let last = index == self.brackets.len() - 1;

            if bracket.lower_bound != expected_lower {
                return Err(ScheduleError::DiscontinuousBounds {
                    expected: expected_lower,
                    actual: bracket.lower_bound,
                });
            }
            if !(0.0..=1.0).contains(&bracket.rate) {
                return Err(ScheduleError::RateOutOfRange {
                    lower_bound: bracket.lower_bound,
                    rate: bracket.rate,
                });
            }
            // Published tables quote whole-rupee fixed amounts while the
            // recomputed running total carries float rounding, so the two
            // are compared within a tolerance rather than exactly.
            let drift = (bracket.fixed_amount - cumulative).abs();
            if drift > FIXED_AMOUNT_TOLERANCE * cumulative.abs().max(1.0) {
                return Err(ScheduleError::FixedAmountMismatch {
                    lower_bound: bracket.lower_bound,
                    expected: cumulative,
                    actual: bracket.fixed_amount,
                });
            }

            match bracket.upper_bound {
                Some(upper) if upper <= bracket.lower_bound => {
                    return Err(ScheduleError::EmptyBracket {
                        lower_bound: bracket.lower_bound,
                    });
                }
                Some(upper) if last => {
                    return Err(ScheduleError::BoundedFinalBracket(upper));
                }
                Some(upper) => {
                    cumulative += (upper - bracket.lower_bound) * bracket.rate;
                    expected_lower = upper;
                }
                None if !last => {
                    return Err(ScheduleError::UnboundedBeforeLast);
                }
                None => {}
            }
        }
        Ok(())
    }

    /// Total annual tax owed on `annual_income`.
    ///
    /// Operates on annual figures only; annualizing a monthly salary is
    /// the caller's job. All arithmetic is plain `f64` with no rounding;
    /// callers round for display.
    ///
    /// # Errors
    ///
    /// Rejects negative and non-finite income with
    /// [`TaxError::InvalidInput`]; this mirrors
    /// [`income_for_tax`](Self::income_for_tax) so both directions share
    /// one input policy.
    pub fn tax_for_income(&self, annual_income: f64) -> Result<f64, TaxError> {
        if !annual_income.is_finite() || annual_income < 0.0 {
            return Err(TaxError::InvalidInput(annual_income));
        }

        let bracket = self
            .brackets
            .iter()
            .find(|b| b.contains_income(annual_income))
            .ok_or(TaxError::NoMatchingBracket(annual_income))?;

        Ok(bracket.fixed_amount + (annual_income - bracket.lower_bound) * bracket.rate)
    }

    /// Minimum annual income whose tax liability reaches
    /// `target_annual_tax`.
    ///
    /// Inverts [`tax_for_income`](Self::tax_for_income): locates the slab
    /// whose tax range `[fixed_amount, ceiling_tax)` contains the target
    /// and solves that slab's linear segment. Zero-rate slabs span no tax
    /// range and are skipped, which also keeps the division well-defined.
    /// A zero target returns zero income, the infimum. Same input policy
    /// as the forward direction.
    pub fn income_for_tax(&self, target_annual_tax: f64) -> Result<f64, TaxError> {
        if !target_annual_tax.is_finite() || target_annual_tax < 0.0 {
            return Err(TaxError::InvalidInput(target_annual_tax));
        }
        if target_annual_tax == 0.0 {
            return Ok(0.0);
        }

        // Positive-rate slabs carry contiguous ascending tax ranges, so
        // the first one whose ceiling exceeds the target contains it.
        let bracket = self
            .brackets
            .iter()
            .filter(|b| b.rate > 0.0)
            .find(|b| b.ceiling_tax().is_none_or(|ceiling| target_annual_tax < ceiling))
            .ok_or(TaxError::NoMatchingBracket(target_annual_tax))?;

        Ok(bracket.lower_bound + (target_annual_tax - bracket.fixed_amount) / bracket.rate)
    }
}
