// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::db::init_schema;
use fintrack::models::{
    BudgetCategory, BudgetPatch, CreditorType, GoalPatch, GoalStatus, NewBudget, NewDebt, NewGoal,
    NewTransaction, TransactionPatch, TransactionType,
};
use fintrack::store::goals::GoalsFilter;
use fintrack::store::{budgets, debts, goals, transactions};
use fintrack::summary::{budget_summary, transaction_summary};
use fintrack::utils::decimal_or_zero;
use rusqlite::Connection;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    init_schema(&mut conn).unwrap();
    conn
}

fn new_tx(amount: &str, typ: TransactionType) -> NewTransaction {
    NewTransaction {
        amount: dec(amount),
        category: "food".to_string(),
        description: None,
        r#type: typ,
        created_at: None,
        account: None,
    }
}

#[test]
fn transaction_roundtrip_and_patch() {
    let conn = setup();
    let tx = transactions::create(&conn, &new_tx("120.45", TransactionType::Expense)).unwrap();
    assert_eq!(tx.amount, dec("120.45"));
    assert_eq!(tx.r#type, TransactionType::Expense);

    let patched = transactions::update(
        &conn,
        tx.id,
        &TransactionPatch {
            amount: Some(dec("99.99")),
            ..Default::default()
        },
    )
    .unwrap();
    // unspecified fields keep their previous value
    assert_eq!(patched.amount, dec("99.99"));
    assert_eq!(patched.category, "food");
    assert_eq!(patched.r#type, TransactionType::Expense);
    assert_eq!(patched.created_at, tx.created_at);
}

#[test]
fn deleted_transaction_disappears_from_aggregates() {
    let conn = setup();
    transactions::create(&conn, &new_tx("1000", TransactionType::Income)).unwrap();
    let doomed = transactions::create(&conn, &new_tx("400", TransactionType::Expense)).unwrap();

    let before = transaction_summary(&transactions::list(&conn).unwrap());
    assert_eq!(before.net_balance, dec("600"));

    transactions::delete(&conn, doomed.id).unwrap();
    let after = transaction_summary(&transactions::list(&conn).unwrap());
    assert_eq!(after.net_balance, dec("1000"));
    assert_eq!(after.total_expenses, Decimal::ZERO);
}

#[test]
fn deleting_a_missing_record_is_an_error() {
    let conn = setup();
    assert!(transactions::delete(&conn, 42).is_err());
    assert!(budgets::delete(&conn, 42).is_err());
    assert!(debts::delete(&conn, 42).is_err());
    assert!(goals::delete(&conn, 42).is_err());
}

#[test]
fn malformed_amount_falls_back_to_zero() {
    let conn = setup();
    transactions::create(&conn, &new_tx("250", TransactionType::Income)).unwrap();
    // a corrupted row must not poison the whole aggregate
    conn.execute(
        "INSERT INTO transactions(amount, category, type) VALUES ('not-a-number','misc','income')",
        [],
    )
    .unwrap();

    let txs = transactions::list(&conn).unwrap();
    assert_eq!(txs.len(), 2);
    let s = transaction_summary(&txs);
    assert_eq!(s.total_income, dec("250"));
}

#[test]
fn decimal_or_zero_parses_or_defaults() {
    assert_eq!(decimal_or_zero("12.50"), dec("12.50"));
    assert_eq!(decimal_or_zero(" 7 "), dec("7"));
    assert_eq!(decimal_or_zero(""), Decimal::ZERO);
    assert_eq!(decimal_or_zero("NaN"), Decimal::ZERO);
    assert_eq!(decimal_or_zero("1.2.3"), Decimal::ZERO);
}

#[test]
fn budget_crud_and_summary_consistency() {
    let conn = setup();
    let b = budgets::create(
        &conn,
        &NewBudget {
            category: BudgetCategory::Housing,
            amount_planned: dec("2500"),
            period_start: "2025-08-01".parse().unwrap(),
            period_end: "2025-08-31".parse().unwrap(),
        },
    )
    .unwrap();
    assert_eq!(b.spent, Decimal::ZERO);

    let patched = budgets::update(
        &conn,
        b.id,
        &BudgetPatch {
            spent: Some(dec("270")),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(patched.spent, dec("270"));
    assert_eq!(patched.amount_planned, dec("2500"));

    let s = budget_summary(&budgets::list(&conn).unwrap());
    assert_eq!(s.total_budget, dec("2500"));
    assert_eq!(s.total_spent, dec("270"));
}

#[test]
fn budget_period_end_before_start_is_rejected() {
    let conn = setup();
    let res = budgets::create(
        &conn,
        &NewBudget {
            category: BudgetCategory::Food,
            amount_planned: dec("100"),
            period_start: "2025-08-31".parse().unwrap(),
            period_end: "2025-08-01".parse().unwrap(),
        },
    );
    assert!(res.is_err());
}

#[test]
fn debt_patch_keeps_unspecified_fields() {
    let conn = setup();
    let d = debts::create(
        &conn,
        &NewDebt {
            r#type: CreditorType::parse("BANCO POPULAR"),
            amount: dec("5000"),
            description: "card".to_string(),
            due_date: Some("2025-12-01".parse().unwrap()),
            interest_rate: Some(dec("18.5")),
        },
    )
    .unwrap();
    assert_eq!(d.r#type, CreditorType::Bank("BANCO POPULAR".to_string()));

    let patched = debts::update(
        &conn,
        d.id,
        &fintrack::models::DebtPatch {
            amount: Some(dec("4500")),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(patched.amount, dec("4500"));
    assert_eq!(patched.description, "card");
    assert_eq!(patched.interest_rate, Some(dec("18.5")));
    assert_eq!(patched.due_date, Some("2025-12-01".parse().unwrap()));
}

#[test]
fn goal_defaults_and_filtered_listing() {
    let conn = setup();
    let g1 = goals::create(
        &conn,
        &NewGoal {
            title: "emergency fund".to_string(),
            description: None,
            target_amount: dec("10000"),
            current_amount: None,
            start_date: "2025-01-01".parse().unwrap(),
            due_date: "2025-06-30".parse().unwrap(),
            status: None,
        },
    )
    .unwrap();
    assert_eq!(g1.current_amount, Decimal::ZERO);
    assert_eq!(g1.status, GoalStatus::Active);

    goals::update(
        &conn,
        g1.id,
        &GoalPatch {
            status: Some(GoalStatus::Completed),
            ..Default::default()
        },
    )
    .unwrap();
    goals::create(
        &conn,
        &NewGoal {
            title: "vacation".to_string(),
            description: None,
            target_amount: dec("3000"),
            current_amount: Some(dec("500")),
            start_date: "2025-02-01".parse().unwrap(),
            due_date: "2025-12-31".parse().unwrap(),
            status: None,
        },
    )
    .unwrap();

    let active = goals::list_filtered(
        &conn,
        GoalsFilter {
            status: Some(GoalStatus::Active),
            due_before: None,
        },
    )
    .unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title, "vacation");

    let due_early = goals::list_filtered(
        &conn,
        GoalsFilter {
            status: None,
            due_before: Some("2025-07-01".parse().unwrap()),
        },
    )
    .unwrap();
    assert_eq!(due_early.len(), 1);
    assert_eq!(due_early[0].title, "emergency fund");
}

#[test]
fn data_survives_reopen_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fintrack.sqlite");
    {
        let mut conn = Connection::open(&path).unwrap();
        init_schema(&mut conn).unwrap();
        transactions::create(&conn, &new_tx("42", TransactionType::Income)).unwrap();
    }
    let mut conn = Connection::open(&path).unwrap();
    init_schema(&mut conn).unwrap();
    let txs = transactions::list(&conn).unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].amount, dec("42"));
}
