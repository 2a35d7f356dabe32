// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{BudgetCategory, BudgetPatch, NewBudget};
use crate::store::budgets as store;
use crate::summary::budget_status;
use crate::utils::{maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("update", sub)) => update(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let category = sub
        .get_one::<String>("category")
        .unwrap()
        .parse::<BudgetCategory>()?;
    let amount_planned = parse_decimal(sub.get_one::<String>("planned").unwrap())?;
    let period_start = parse_date(sub.get_one::<String>("start").unwrap())?;
    let period_end = parse_date(sub.get_one::<String>("end").unwrap())?;
    let b = store::create(
        conn,
        &NewBudget {
            category,
            amount_planned,
            period_start,
            period_end,
        },
    )?;
    println!(
        "Budget #{} set: {} planned for '{}' from {} to {}",
        b.id,
        b.amount_planned,
        b.category.as_str(),
        b.period_start,
        b.period_end
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let budgets = store::list(conn)?;
    if maybe_print_json(json_flag, jsonl_flag, &budgets)? {
        return Ok(());
    }
    let mut data = Vec::new();
    for b in &budgets {
        let status = budget_status(b.spent, b.amount_planned);
        data.push(vec![
            b.id.to_string(),
            b.category.as_str().to_string(),
            b.amount_planned.round_dp(2).to_string(),
            b.spent.round_dp(2).to_string(),
            format!("{} .. {}", b.period_start, b.period_end),
            status.as_str().to_string(),
        ]);
    }
    println!(
        "{}",
        pretty_table(
            &["Id", "Category", "Planned", "Spent", "Period", "Status"],
            data
        )
    );
    Ok(())
}

fn update(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let patch = BudgetPatch {
        category: sub
            .get_one::<String>("category")
            .map(|s| s.parse::<BudgetCategory>())
            .transpose()?,
        amount_planned: sub
            .get_one::<String>("planned")
            .map(|s| parse_decimal(s))
            .transpose()?,
        period_start: sub
            .get_one::<String>("start")
            .map(|s| parse_date(s))
            .transpose()?,
        period_end: sub
            .get_one::<String>("end")
            .map(|s| parse_date(s))
            .transpose()?,
        spent: sub
            .get_one::<String>("spent")
            .map(|s| parse_decimal(s))
            .transpose()?,
    };
    let b = store::update(conn, id, &patch)?;
    println!("Updated budget #{}", b.id);
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    store::delete(conn, id)?;
    println!("Removed budget #{}", id);
    Ok(())
}
