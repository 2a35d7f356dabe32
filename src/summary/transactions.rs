// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, TransactionType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub total_savings: Decimal,
    pub total_debt: Decimal,
    pub total_debt_payments: Decimal,
    pub total_investments: Decimal,
    /// Income minus expenses only: a cash-flow view, not net worth.
    /// Savings, debt, payment and investment totals are informational.
    pub net_balance: Decimal,
}

/// Partitions transactions by type and sums each bucket at full precision.
/// Rounding happens at presentation, never here.
pub fn transaction_summary(transactions: &[Transaction]) -> TransactionSummary {
    let sum_of = |t: TransactionType| -> Decimal {
        transactions
            .iter()
            .filter(|tx| tx.r#type == t)
            .map(|tx| tx.amount)
            .sum()
    };
    let total_income = sum_of(TransactionType::Income);
    let total_expenses = sum_of(TransactionType::Expense);
    TransactionSummary {
        total_income,
        total_expenses,
        total_savings: sum_of(TransactionType::Saving),
        total_debt: sum_of(TransactionType::Debt),
        total_debt_payments: sum_of(TransactionType::Payment),
        total_investments: sum_of(TransactionType::Investment),
        net_balance: total_income - total_expenses,
    }
}
