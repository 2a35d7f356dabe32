// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::models::{Goal, GoalStatus};
use fintrack::summary::{goal_overview, goal_progress, remaining_days};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn goal(id: i64, target: &str, current: &str) -> Goal {
    Goal {
        id,
        title: format!("goal-{}", id),
        description: None,
        target_amount: dec(target),
        current_amount: dec(current),
        start_date: "2025-01-01".parse().unwrap(),
        due_date: "2025-12-31".parse().unwrap(),
        status: GoalStatus::Active,
    }
}

#[test]
fn overview_totals_and_progress() {
    let goals = vec![goal(1, "10000", "2500"), goal(2, "5000", "5000")];
    let s = goal_overview(&goals);
    assert_eq!(s.total_target, dec("15000"));
    assert_eq!(s.total_current, dec("7500"));
    assert_eq!(s.progress_pct, dec("50"));
    assert_eq!(s.count, 2);
}

#[test]
fn overview_zero_target_returns_zero_percent() {
    let goals = vec![goal(1, "0", "50")];
    let s = goal_overview(&goals);
    assert_eq!(s.progress_pct, Decimal::ZERO);
    assert_eq!(s.total_current, dec("50"));
}

#[test]
fn empty_overview_is_all_zero() {
    let s = goal_overview(&[]);
    assert_eq!(s.total_target, Decimal::ZERO);
    assert_eq!(s.total_current, Decimal::ZERO);
    assert_eq!(s.progress_pct, Decimal::ZERO);
    assert_eq!(s.count, 0);
}

#[test]
fn per_goal_progress_is_clamped_to_0_100() {
    // over-achieved
    assert_eq!(goal_progress(&goal(1, "100", "250")), dec("100"));
    // untouched
    assert_eq!(goal_progress(&goal(2, "100", "0")), Decimal::ZERO);
    // halfway
    assert_eq!(goal_progress(&goal(3, "200", "100")), dec("50"));
}

#[test]
fn zero_target_goal_uses_max_one_divisor() {
    // current 50 / max(1, 0) = 5000%, clamped to 100 for display.
    // This deliberately differs from the aggregate guard, which returns 0.
    let g = goal(1, "0", "50");
    assert_eq!(goal_progress(&g), dec("100"));

    // fractional targets are also lifted to 1 before dividing
    let tiny = goal(2, "0.5", "0.25");
    assert_eq!(goal_progress(&tiny), dec("25"));
}

#[test]
fn remaining_days_can_go_negative() {
    let g = goal(1, "100", "10");
    assert_eq!(remaining_days(&g, "2025-12-30".parse().unwrap()), 1);
    assert_eq!(remaining_days(&g, "2025-12-31".parse().unwrap()), 0);
    assert_eq!(remaining_days(&g, "2026-01-02".parse().unwrap()), -2);
}
