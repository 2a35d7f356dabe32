// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Budget;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSummary {
    pub total_budget: Decimal,
    pub total_spent: Decimal,
    /// May be negative: overspend is signalled, not clamped. Any clamp
    /// happens at presentation only.
    pub total_remaining: Decimal,
    /// Full precision; rounded to one decimal place at presentation.
    pub percentage_used: Decimal,
}

/// Sums planned and spent amounts across all budgets. An empty input is
/// valid and yields the all-zero summary; `percentage_used` is 0 when the
/// total planned amount is 0 (never NaN or infinity).
pub fn budget_summary(budgets: &[Budget]) -> BudgetSummary {
    let total_budget: Decimal = budgets.iter().map(|b| b.amount_planned).sum();
    let total_spent: Decimal = budgets.iter().map(|b| b.spent).sum();
    let percentage_used = if total_budget > Decimal::ZERO {
        total_spent / total_budget * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    BudgetSummary {
        total_budget,
        total_spent,
        total_remaining: total_budget - total_spent,
        percentage_used,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    Good,
    Warning,
    Danger,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::Good => "good",
            BudgetStatus::Warning => "warning",
            BudgetStatus::Danger => "danger",
        }
    }
}

/// Classifies a single budget: danger at >= 90% used, warning at >= 70%.
/// A zero planned amount is treated as 0% used, not as a division error.
pub fn budget_status(spent: Decimal, planned: Decimal) -> BudgetStatus {
    let percentage = if planned > Decimal::ZERO {
        spent / planned * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    if percentage >= Decimal::from(90) {
        BudgetStatus::Danger
    } else if percentage >= Decimal::from(70) {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Good
    }
}
