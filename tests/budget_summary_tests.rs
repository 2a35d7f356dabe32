// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::models::{Budget, BudgetCategory};
use fintrack::summary::{BudgetStatus, budget_status, budget_summary};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn budget(id: i64, planned: &str, spent: &str) -> Budget {
    Budget {
        id,
        category: BudgetCategory::Food,
        amount_planned: dec(planned),
        period_start: "2025-08-01".parse().unwrap(),
        period_end: "2025-08-31".parse().unwrap(),
        spent: dec(spent),
    }
}

#[test]
fn summary_totals_match_scenario() {
    // 2500/270 + 3800/3300 => 6300 planned, 3570 spent, ~56.7% used
    let budgets = vec![budget(1, "2500", "270"), budget(2, "3800", "3300")];
    let s = budget_summary(&budgets);
    assert_eq!(s.total_budget, dec("6300"));
    assert_eq!(s.total_spent, dec("3570"));
    assert_eq!(s.total_remaining, dec("2730"));
    assert_eq!(s.percentage_used.round_dp(1), dec("56.7"));
}

#[test]
fn empty_input_is_all_zero() {
    let s = budget_summary(&[]);
    assert_eq!(s.total_budget, Decimal::ZERO);
    assert_eq!(s.total_spent, Decimal::ZERO);
    assert_eq!(s.total_remaining, Decimal::ZERO);
    assert_eq!(s.percentage_used, Decimal::ZERO);
}

#[test]
fn zero_planned_total_guards_division() {
    let budgets = vec![budget(1, "0", "125"), budget(2, "0", "0")];
    let s = budget_summary(&budgets);
    assert_eq!(s.percentage_used, Decimal::ZERO);
    assert_eq!(s.total_spent, dec("125"));
    // overspend shows up as negative remaining, never clamped here
    assert_eq!(s.total_remaining, dec("-125"));
}

#[test]
fn totals_are_insertion_order_independent() {
    let a = vec![budget(1, "100.50", "10"), budget(2, "200", "20.25"), budget(3, "7", "0")];
    let b = vec![a[2].clone(), a[0].clone(), a[1].clone()];
    assert_eq!(budget_summary(&a), budget_summary(&b));
}

#[test]
fn status_thresholds_are_exact() {
    let planned = dec("1000");
    assert_eq!(budget_status(dec("699.99"), planned), BudgetStatus::Good);
    assert_eq!(budget_status(dec("700"), planned), BudgetStatus::Warning);
    assert_eq!(budget_status(dec("899.99"), planned), BudgetStatus::Warning);
    assert_eq!(budget_status(dec("900"), planned), BudgetStatus::Danger);
    assert_eq!(budget_status(dec("1500"), planned), BudgetStatus::Danger);
}

#[test]
fn status_is_monotonic_in_spent() {
    let planned = dec("800");
    let severity = |s: BudgetStatus| match s {
        BudgetStatus::Good => 0,
        BudgetStatus::Warning => 1,
        BudgetStatus::Danger => 2,
    };
    let mut last = 0;
    for spent in ["0", "100", "400", "559.99", "560", "600", "719.99", "720", "900"] {
        let cur = severity(budget_status(dec(spent), planned));
        assert!(cur >= last, "severity dropped at spent={}", spent);
        last = cur;
    }
}

#[test]
fn zero_planned_budget_is_good() {
    assert_eq!(budget_status(dec("50"), Decimal::ZERO), BudgetStatus::Good);
    assert_eq!(budget_status(Decimal::ZERO, Decimal::ZERO), BudgetStatus::Good);
}
