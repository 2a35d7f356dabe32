// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{NewTransaction, TransactionPatch, TransactionType};
use crate::store::transactions as store;
use crate::summary::in_month;
use crate::utils::{fmt_timestamp, maybe_print_json, parse_date, parse_decimal, parse_month, pretty_table};
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
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().to_string();
    let typ = sub.get_one::<String>("type").unwrap().parse::<TransactionType>()?;
    let description = sub.get_one::<String>("description").map(|s| s.to_string());
    let account = sub.get_one::<String>("account").map(|s| s.to_string());
    let created_at = match sub.get_one::<String>("date") {
        Some(d) => Some(parse_date(d)?.and_time(chrono::NaiveTime::MIN).and_utc()),
        None => None,
    };
    let tx = store::create(
        conn,
        &NewTransaction {
            amount,
            category,
            description,
            r#type: typ,
            created_at,
            account,
        },
    )?;
    println!(
        "Recorded {} transaction #{} of {} in '{}'",
        tx.r#type.as_str(),
        tx.id,
        tx.amount,
        tx.category
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut txs = store::list(conn)?;
    if let Some(month) = sub.get_one::<String>("month") {
        let (y, mth) = parse_month(month)?;
        txs.retain(|t| in_month(&t.created_at, y, mth));
    }
    if maybe_print_json(json_flag, jsonl_flag, &txs)? {
        return Ok(());
    }
    let mut data = Vec::new();
    for t in &txs {
        data.push(vec![
            t.id.to_string(),
            fmt_timestamp(&t.created_at),
            t.r#type.as_str().to_string(),
            t.category.clone(),
            t.amount.round_dp(2).to_string(),
            t.account.clone().unwrap_or_default(),
            t.description.clone().unwrap_or_default(),
        ]);
    }
    println!(
        "{}",
        pretty_table(
            &["Id", "Date", "Type", "Category", "Amount", "Account", "Description"],
            data
        )
    );
    Ok(())
}

fn update(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let patch = TransactionPatch {
        amount: sub
            .get_one::<String>("amount")
            .map(|s| parse_decimal(s))
            .transpose()?,
        category: sub.get_one::<String>("category").map(|s| s.to_string()),
        description: sub.get_one::<String>("description").map(|s| s.to_string()),
        r#type: sub
            .get_one::<String>("type")
            .map(|s| s.parse::<TransactionType>())
            .transpose()?,
        account: sub.get_one::<String>("account").map(|s| s.to_string()),
    };
    let tx = store::update(conn, id, &patch)?;
    println!("Updated transaction #{}", tx.id);
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    store::delete(conn, id)?;
    println!("Removed transaction #{}", id);
    Ok(())
}
