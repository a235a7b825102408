use serde::{Deserialize, Serialize};

/// A single marginal-rate slab of a progressive income tax schedule.
///
/// `fixed_amount` is the cumulative tax owed on all income below
/// `lower_bound`, precomputed so the forward calculation never has to sum
/// the slabs beneath the one the income lands in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive lower bound of annual income for this slab.
    pub lower_bound: f64,

    /// Exclusive upper bound of annual income; `None` for the open-ended
    /// top slab.
    pub upper_bound: Option<f64>,

    /// Marginal rate applied to income within the slab, as a fraction
    /// (e.g. 0.05 for 5%).
    pub rate: f64,

    /// Cumulative tax owed on all income below `lower_bound`.
    pub fixed_amount: f64,
}

impl TaxBracket {
    /// Tax owed on an income approaching this slab's upper bound, or
    /// `None` for the unbounded top slab.
    pub fn ceiling_tax(&self) -> Option<f64> {
        self.upper_bound
            .map(|upper| self.fixed_amount + (upper - self.lower_bound) * self.rate)
    }

    /// Whether `annual_income` falls inside this slab's `[lower, upper)`
    /// range. The lower bound is inclusive, the upper exclusive, so an
    /// income sitting exactly on a slab boundary belongs to the higher
    /// slab.
    pub fn contains_income(&self, annual_income: f64) -> bool {
        annual_income >= self.lower_bound
            && self.upper_bound.is_none_or(|upper| annual_income < upper)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn middle_slab() -> TaxBracket {
        TaxBracket {
            lower_bound: 600_000.0,
            upper_bound: Some(1_200_000.0),
            rate: 0.05,
            fixed_amount: 0.0,
        }
    }

    fn top_slab() -> TaxBracket {
        TaxBracket {
            lower_bound: 4_100_000.0,
            upper_bound: None,
            rate: 0.35,
            fixed_amount: 700_000.0,
        }
    }

    #[test]
    fn contains_income_lower_bound_is_inclusive() {
        assert!(middle_slab().contains_income(600_000.0));
    }

    #[test]
    fn contains_income_upper_bound_is_exclusive() {
        assert!(!middle_slab().contains_income(1_200_000.0));
        assert!(middle_slab().contains_income(1_199_999.99));
    }

    #[test]
    fn contains_income_below_lower_bound() {
        assert!(!middle_slab().contains_income(599_999.99));
    }

    #[test]
    fn top_slab_contains_any_income_above_its_bound() {
        assert!(top_slab().contains_income(4_100_000.0));
        assert!(top_slab().contains_income(1.0e12));
    }

    #[test]
    fn ceiling_tax_of_bounded_slab() {
        // (1,200,000 - 600,000) * 0.05 = 30,000
        let ceiling = middle_slab().ceiling_tax().unwrap();
        assert!((ceiling - 30_000.0).abs() < 1e-6);
    }

    #[test]
    fn ceiling_tax_of_top_slab_is_none() {
        assert_eq!(top_slab().ceiling_tax(), None);
    }
}
