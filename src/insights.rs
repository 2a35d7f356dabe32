// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Rule-based insight cards derived from summary numbers. The cutoffs are
//! exact (no hysteresis) and the cards are non-exclusive; callers recompute
//! on every read.

use crate::summary::{BudgetSummary, DebtAdvice};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Success,
    Warning,
    Info,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Success => "success",
            InsightKind::Warning => "warning",
            InsightKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
}

/// Budget cards: success under 50% used, warning above 90%, and a running
/// summary that is always present.
pub fn budget_insights(summary: &BudgetSummary) -> Vec<Insight> {
    let pct = summary.percentage_used.round_dp(1);
    let mut out = Vec::new();
    if summary.percentage_used < Decimal::from(50) {
        out.push(Insight {
            kind: InsightKind::Success,
            title: "Great progress!".to_string(),
            description: format!("You have spent {}% of your budget this month.", pct),
        });
    }
    if summary.percentage_used > Decimal::from(90) {
        out.push(Insight {
            kind: InsightKind::Warning,
            title: "Budget alert".to_string(),
            description: format!(
                "You are very close to exceeding your monthly budget. {}% spent.",
                pct
            ),
        });
    }
    out.push(Insight {
        kind: InsightKind::Info,
        title: "Spending trend".to_string(),
        description: format!("You have spent {}% of your budget this month.", pct),
    });
    out
}

/// Debt cards: success when debt-free, otherwise a warning carrying the
/// payoff-priority advice, plus an ever-present overall summary.
pub fn debt_insights(advice: &DebtAdvice) -> Vec<Insight> {
    let has_debt = advice.total_debt > Decimal::ZERO;
    let mut out = Vec::new();
    if !has_debt {
        out.push(Insight {
            kind: InsightKind::Success,
            title: "No active debts".to_string(),
            description: "Excellent! You have no outstanding debts right now.".to_string(),
        });
    } else {
        out.push(Insight {
            kind: InsightKind::Warning,
            title: "Prioritization advice".to_string(),
            description: advice.advice.clone(),
        });
    }
    out.push(Insight {
        kind: InsightKind::Info,
        title: "Overall summary".to_string(),
        description: if has_debt {
            format!(
                "Your total debt stands at {}.",
                crate::utils::fmt_money(&advice.total_debt)
            )
        } else {
            "Keep your finances on track.".to_string()
        },
    });
    out
}
