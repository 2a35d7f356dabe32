// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CreditorType, DebtPatch, NewDebt};
use crate::store::debts as store;
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
    let typ = CreditorType::parse(sub.get_one::<String>("type").unwrap());
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let description = sub.get_one::<String>("description").unwrap().to_string();
    let due_date = sub
        .get_one::<String>("due")
        .map(|s| parse_date(s))
        .transpose()?;
    let interest_rate = sub
        .get_one::<String>("rate")
        .map(|s| parse_decimal(s))
        .transpose()?;
    let d = store::create(
        conn,
        &NewDebt {
            r#type: typ,
            amount,
            description,
            due_date,
            interest_rate,
        },
    )?;
    println!("Recorded debt #{} of {} to {}", d.id, d.amount, d.r#type.as_str());
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let debts = store::list(conn)?;
    if maybe_print_json(json_flag, jsonl_flag, &debts)? {
        return Ok(());
    }
    let mut data = Vec::new();
    for d in &debts {
        data.push(vec![
            d.id.to_string(),
            d.r#type.as_str().to_string(),
            d.amount.round_dp(2).to_string(),
            d.interest_rate
                .map(|r| format!("{}%", r.round_dp(1)))
                .unwrap_or_default(),
            d.due_date.map(|dt| dt.to_string()).unwrap_or_default(),
            d.description.clone(),
        ]);
    }
    println!(
        "{}",
        pretty_table(
            &["Id", "Creditor", "Amount", "Rate", "Due", "Description"],
            data
        )
    );
    Ok(())
}

fn update(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let patch = DebtPatch {
        r#type: sub
            .get_one::<String>("type")
            .map(|s| CreditorType::parse(s)),
        amount: sub
            .get_one::<String>("amount")
            .map(|s| parse_decimal(s))
            .transpose()?,
        description: sub.get_one::<String>("description").map(|s| s.to_string()),
        due_date: sub
            .get_one::<String>("due")
            .map(|s| parse_date(s))
            .transpose()?,
        interest_rate: sub
            .get_one::<String>("rate")
            .map(|s| parse_decimal(s))
            .transpose()?,
    };
    let d = store::update(conn, id, &patch)?;
    println!("Updated debt #{}", d.id);
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    store::delete(conn, id)?;
    println!("Removed debt #{}", id);
    Ok(())
}
