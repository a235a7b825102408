//! Properties that must hold across every published slab table.

use pretty_assertions::assert_eq;
use slab_core::{
    SlabSchedule, TaxError, brackets_for_year, calculate_required_income, calculate_tax,
    supported_years,
};

fn assert_close(actual: f64, expected: f64, context: &str) {
    let tolerance = 1e-6 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "{context}: expected {expected}, got {actual}"
    );
}

#[test]
fn every_published_table_passes_validation() {
    for year in supported_years() {
        let brackets = brackets_for_year(year).unwrap();
        SlabSchedule::new(brackets)
            .validate()
            .unwrap_or_else(|defect| panic!("{year}: {defect}"));
    }
}

#[test]
fn tax_is_zero_at_zero_income_for_every_year() {
    for year in supported_years() {
        assert_eq!(calculate_tax(0.0, year), Ok(0.0), "{year}");
    }
}

#[test]
fn tax_is_monotonic_in_income() {
    for year in supported_years() {
        let mut previous = 0.0;
        // 50,000-rupee grid out past every table's top slab boundary.
        for step in 0..=280 {
            let income = f64::from(step) * 50_000.0;
            let tax = calculate_tax(income, year).unwrap();
            assert!(
                tax >= previous,
                "{year}: tax dropped from {previous} to {tax} at income {income}"
            );
            previous = tax;
        }
    }
}

#[test]
fn tax_is_continuous_at_slab_boundaries() {
    for year in supported_years() {
        for bracket in brackets_for_year(year).unwrap().iter().skip(1) {
            let boundary = bracket.lower_bound;
            let at = calculate_tax(boundary, year).unwrap();
            let below = calculate_tax(boundary - 1e-3, year).unwrap();
            // The function only changes slope at a boundary; the step down
            // an epsilon is bounded by epsilon times the marginal rate.
            assert!(
                at - below <= 1e-3 && at >= below,
                "{year}: discontinuity at {boundary}: {below} -> {at}"
            );
        }
    }
}

#[test]
fn round_trip_holds_for_reachable_targets() {
    for year in supported_years() {
        let brackets = brackets_for_year(year).unwrap();

        // Every slab edge tax plus points inside each slab's tax range,
        // and a target deep in the unbounded top slab.
        let mut targets = vec![1.0, 500.0];
        for bracket in brackets {
            targets.push(bracket.fixed_amount);
            if let Some(ceiling) = bracket.ceiling_tax() {
                targets.push((bracket.fixed_amount + ceiling) / 2.0);
                targets.push(ceiling);
            }
        }
        targets.push(5_000_000.0);

        for target in targets {
            let income = calculate_required_income(target, year).unwrap();
            let tax = calculate_tax(income, year).unwrap();
            assert_close(tax, target, &format!("{year}: target {target}"));
        }
    }
}

#[test]
fn no_non_negative_target_is_unreachable() {
    // The top slab is unbounded, so arbitrarily large liabilities resolve.
    for year in supported_years() {
        let income = calculate_required_income(1.0e12, year).unwrap();
        assert!(income.is_finite() && income > 0.0, "{year}");
    }
}

#[test]
fn unknown_year_is_rejected_by_every_entry_point() {
    assert_eq!(
        calculate_tax(100_000.0, "1999-2000"),
        Err(TaxError::UnknownYear("1999-2000".to_string()))
    );
    assert_eq!(
        calculate_required_income(100_000.0, "1999-2000"),
        Err(TaxError::UnknownYear("1999-2000".to_string()))
    );
    assert!(brackets_for_year("1999-2000").is_err());
}

#[test]
fn published_totals_at_the_top_slab() {
    // Spot checks against worked figures from the published schedules.
    // 2024-2025: 700,000 + (12,000,000 - 4,100,000) * 0.35 = 3,465,000
    assert_close(
        calculate_tax(12_000_000.0, "2024-2025").unwrap(),
        3_465_000.0,
        "2024-2025",
    );
    // 2022-2023: 2,955,000 + (15,000,000 - 12,000,000) * 0.35 = 4,005,000
    assert_close(
        calculate_tax(15_000_000.0, "2022-2023").unwrap(),
        4_005_000.0,
        "2022-2023",
    );
}
