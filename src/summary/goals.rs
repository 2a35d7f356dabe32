// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Goal;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalOverview {
    pub total_target: Decimal,
    pub total_current: Decimal,
    pub progress_pct: Decimal,
    pub count: usize,
}

/// Aggregate progress across all goals. A zero total target yields 0%.
pub fn goal_overview(goals: &[Goal]) -> GoalOverview {
    let total_target: Decimal = goals.iter().map(|g| g.target_amount).sum();
    let total_current: Decimal = goals.iter().map(|g| g.current_amount).sum();
    let progress_pct = if total_target > Decimal::ZERO {
        total_current / total_target * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    GoalOverview {
        total_target,
        total_current,
        progress_pct,
        count: goals.len(),
    }
}

/// Per-goal display progress, clamped to [0, 100].
///
/// The divisor is `max(1, target_amount)`, so a zero-target goal with any
/// accumulated amount reads as fully funded instead of dividing by zero.
/// This intentionally differs from the aggregate-level guard in
/// [`goal_overview`], which returns 0; both behaviors are kept as the
/// product defined them.
pub fn goal_progress(goal: &Goal) -> Decimal {
    let divisor = goal.target_amount.max(Decimal::ONE);
    let pct = goal.current_amount / divisor * Decimal::ONE_HUNDRED;
    pct.min(Decimal::ONE_HUNDRED).max(Decimal::ZERO)
}

/// Days until the goal's due date; negative once overdue.
pub fn remaining_days(goal: &Goal, today: NaiveDate) -> i64 {
    (goal.due_date - today).num_days()
}
