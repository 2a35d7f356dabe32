// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Debt;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const NO_DEBT_ADVICE: &str = "You have no outstanding debts. Keep it up!";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtSummary {
    pub total_debt: Decimal,
    pub average_interest_rate: Decimal,
    pub numbers_of_debts: usize,
}

/// Totals across all debts. Missing interest rates count as 0 in the
/// average; an empty set yields the all-zero summary.
pub fn debt_summary(debts: &[Debt]) -> DebtSummary {
    let total_debt: Decimal = debts.iter().map(|d| d.amount).sum();
    let average_interest_rate = if debts.is_empty() {
        Decimal::ZERO
    } else {
        let rate_sum: Decimal = debts
            .iter()
            .map(|d| d.interest_rate.unwrap_or(Decimal::ZERO))
            .sum();
        rate_sum / Decimal::from(debts.len())
    };
    DebtSummary {
        total_debt,
        average_interest_rate,
        numbers_of_debts: debts.len(),
    }
}

/// Ranking key: interest-to-principal ratio, or the bare interest rate
/// when the principal is zero.
fn priority_key(d: &Debt) -> Decimal {
    let rate = d.interest_rate.unwrap_or(Decimal::ZERO);
    if d.amount > Decimal::ZERO {
        rate / d.amount
    } else {
        rate
    }
}

/// Debts ordered by payoff priority, most expensive first.
pub fn debt_priority(debts: &[Debt]) -> Vec<&Debt> {
    let mut ranked: Vec<&Debt> = debts.iter().collect();
    ranked.sort_by(|a, b| priority_key(b).cmp(&priority_key(a)));
    ranked
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtAdvice {
    pub total_debt: Decimal,
    pub advice: String,
}

/// Recommends which debt to pay off first. The wording is informational;
/// the contract is the ranking rule in [`debt_priority`].
pub fn debt_advice(debts: &[Debt]) -> DebtAdvice {
    let total_debt: Decimal = debts.iter().map(|d| d.amount).sum();
    let ranked = debt_priority(debts);
    let advice = match ranked.first() {
        Some(top) => {
            let rate = top.interest_rate.unwrap_or(Decimal::ZERO);
            format!(
                "Pay off '{}' first: {}% interest on {} owed makes it your most expensive debt.",
                top.description,
                rate.round_dp(1),
                top.amount.round_dp(2)
            )
        }
        None => NO_DEBT_ADVICE.to_string(),
    };
    DebtAdvice { total_debt, advice }
}
