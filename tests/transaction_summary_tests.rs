// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{TimeZone, Utc};
use fintrack::models::{Transaction, TransactionType};
use fintrack::summary::{in_month, transaction_summary};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn tx(id: i64, amount: &str, typ: TransactionType) -> Transaction {
    Transaction {
        id,
        amount: dec(amount),
        category: "general".to_string(),
        description: None,
        r#type: typ,
        created_at: Utc.with_ymd_and_hms(2025, 8, 15, 12, 0, 0).unwrap(),
        account: None,
    }
}

#[test]
fn net_balance_is_income_minus_expenses() {
    let txs = vec![
        tx(1, "5549.52", TransactionType::Income),
        tx(2, "157.21", TransactionType::Expense),
        tx(3, "418.58", TransactionType::Expense),
    ];
    let s = transaction_summary(&txs);
    assert_eq!(s.total_income, dec("5549.52"));
    assert_eq!(s.total_expenses, dec("575.79"));
    assert_eq!(s.net_balance, dec("4973.73"));
}

#[test]
fn net_balance_ignores_non_cashflow_types() {
    let base = vec![
        tx(1, "3000", TransactionType::Income),
        tx(2, "1200", TransactionType::Expense),
    ];
    let net_before = transaction_summary(&base).net_balance;

    let mut with_extras = base.clone();
    with_extras.push(tx(3, "999999.99", TransactionType::Saving));
    with_extras.push(tx(4, "500", TransactionType::Debt));
    with_extras.push(tx(5, "250", TransactionType::Payment));
    with_extras.push(tx(6, "80", TransactionType::Investment));

    let s = transaction_summary(&with_extras);
    assert_eq!(s.net_balance, net_before);
    assert_eq!(s.total_savings, dec("999999.99"));
    assert_eq!(s.total_debt, dec("500"));
    assert_eq!(s.total_debt_payments, dec("250"));
    assert_eq!(s.total_investments, dec("80"));
}

#[test]
fn empty_input_sums_to_zero() {
    let s = transaction_summary(&[]);
    assert_eq!(s.total_income, Decimal::ZERO);
    assert_eq!(s.total_expenses, Decimal::ZERO);
    assert_eq!(s.net_balance, Decimal::ZERO);
}

#[test]
fn sums_keep_full_precision() {
    let txs = vec![
        tx(1, "0.10", TransactionType::Expense),
        tx(2, "0.20", TransactionType::Expense),
        tx(3, "0.30", TransactionType::Expense),
    ];
    let s = transaction_summary(&txs);
    assert_eq!(s.total_expenses, dec("0.60"));
}

#[test]
fn month_membership_compares_year_and_month_only() {
    let mid_aug = Utc.with_ymd_and_hms(2025, 8, 15, 23, 59, 59).unwrap();
    assert!(in_month(&mid_aug, 2025, 8));
    assert!(!in_month(&mid_aug, 2025, 7));
    assert!(!in_month(&mid_aug, 2024, 8));

    // calendar boundaries, no timezone shifting
    let last_of_july = Utc.with_ymd_and_hms(2025, 7, 31, 23, 59, 59).unwrap();
    let first_of_aug = Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap();
    assert!(in_month(&last_of_july, 2025, 7));
    assert!(!in_month(&last_of_july, 2025, 8));
    assert!(in_month(&first_of_aug, 2025, 8));
}
