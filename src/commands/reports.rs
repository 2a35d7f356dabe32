// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store;
use crate::summary::{
    budget_status, budget_summary, debt_advice, debt_summary, goal_overview, goal_progress,
    in_month, transaction_summary,
};
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use chrono::{Datelike, Utc};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(conn, sub)?,
        Some(("budgets", sub)) => budgets(conn, sub)?,
        Some(("debts", sub)) => debts(conn, sub)?,
        Some(("goals", sub)) => goals(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut txs = store::transactions::list(conn)?;
    if !sub.get_flag("all") {
        let (y, mth) = match sub.get_one::<String>("month") {
            Some(s) => parse_month(s)?,
            None => {
                let now = Utc::now();
                (now.year(), now.month())
            }
        };
        txs.retain(|t| in_month(&t.created_at, y, mth));
    }
    let s = transaction_summary(&txs);
    if maybe_print_json(json_flag, jsonl_flag, &s)? {
        return Ok(());
    }
    let data = vec![
        vec!["Income".to_string(), fmt_money(&s.total_income)],
        vec!["Expenses".to_string(), fmt_money(&s.total_expenses)],
        vec!["Savings".to_string(), fmt_money(&s.total_savings)],
        vec!["New debt".to_string(), fmt_money(&s.total_debt)],
        vec!["Debt payments".to_string(), fmt_money(&s.total_debt_payments)],
        vec!["Investments".to_string(), fmt_money(&s.total_investments)],
        vec!["Net balance".to_string(), fmt_money(&s.net_balance)],
    ];
    println!("{}", pretty_table(&["Bucket", "Total"], data));
    Ok(())
}

fn budgets(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let budgets = store::budgets::list(conn)?;
    let s = budget_summary(&budgets);
    if maybe_print_json(json_flag, jsonl_flag, &s)? {
        return Ok(());
    }
    let mut data = vec![
        vec!["Total budget".to_string(), fmt_money(&s.total_budget)],
        vec!["Total spent".to_string(), fmt_money(&s.total_spent)],
        vec!["Remaining".to_string(), fmt_money(&s.total_remaining)],
        vec!["Used".to_string(), fmt_percent(&s.percentage_used)],
    ];
    for b in &budgets {
        data.push(vec![
            format!("  {} (#{})", b.category.as_str(), b.id),
            budget_status(b.spent, b.amount_planned).as_str().to_string(),
        ]);
    }
    println!("{}", pretty_table(&["Metric", "Value"], data));
    Ok(())
}

fn debts(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let debts = store::debts::list(conn)?;
    let s = debt_summary(&debts);
    let advice = debt_advice(&debts);
    if json_flag || jsonl_flag {
        let combined = serde_json::json!({ "summary": s, "advice": advice });
        maybe_print_json(json_flag, jsonl_flag, &combined)?;
        return Ok(());
    }
    let data = vec![
        vec!["Total debt".to_string(), fmt_money(&s.total_debt)],
        vec![
            "Average interest".to_string(),
            fmt_percent(&s.average_interest_rate),
        ],
        vec!["Debts".to_string(), s.numbers_of_debts.to_string()],
        vec!["Advice".to_string(), advice.advice],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], data));
    Ok(())
}

fn goals(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let goals = store::goals::list(conn)?;
    let s = goal_overview(&goals);
    if maybe_print_json(json_flag, jsonl_flag, &s)? {
        return Ok(());
    }
    let mut data = vec![
        vec!["Total target".to_string(), fmt_money(&s.total_target)],
        vec!["Accumulated".to_string(), fmt_money(&s.total_current)],
        vec!["Progress".to_string(), fmt_percent(&s.progress_pct)],
        vec!["Goals".to_string(), s.count.to_string()],
    ];
    for g in &goals {
        data.push(vec![
            format!("  {} (#{})", g.title, g.id),
            fmt_percent(&goal_progress(g)),
        ]);
    }
    println!("{}", pretty_table(&["Metric", "Value"], data));
    Ok(())
}
