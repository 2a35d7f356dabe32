// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{GoalPatch, GoalStatus, NewGoal};
use crate::store::goals as store;
use crate::store::goals::GoalsFilter;
use crate::summary::{goal_progress, remaining_days};
use crate::utils::{maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::Result;
use chrono::Utc;
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
    let title = sub.get_one::<String>("title").unwrap().to_string();
    let target_amount = parse_decimal(sub.get_one::<String>("target").unwrap())?;
    let current_amount = sub
        .get_one::<String>("current")
        .map(|s| parse_decimal(s))
        .transpose()?;
    let start_date = parse_date(sub.get_one::<String>("start").unwrap())?;
    let due_date = parse_date(sub.get_one::<String>("due").unwrap())?;
    let description = sub.get_one::<String>("description").map(|s| s.to_string());
    let status = sub
        .get_one::<String>("status")
        .map(|s| s.parse::<GoalStatus>())
        .transpose()?;
    let g = store::create(
        conn,
        &NewGoal {
            title,
            description,
            target_amount,
            current_amount,
            start_date,
            due_date,
            status,
        },
    )?;
    println!("Created goal #{} '{}' targeting {}", g.id, g.title, g.target_amount);
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let filter = GoalsFilter {
        status: sub
            .get_one::<String>("status")
            .map(|s| s.parse::<GoalStatus>())
            .transpose()?,
        due_before: sub
            .get_one::<String>("due-before")
            .map(|s| parse_date(s))
            .transpose()?,
    };
    let goals = store::list_filtered(conn, filter)?;
    if maybe_print_json(json_flag, jsonl_flag, &goals)? {
        return Ok(());
    }
    let today = Utc::now().date_naive();
    let mut data = Vec::new();
    for g in &goals {
        data.push(vec![
            g.id.to_string(),
            g.title.clone(),
            g.status.as_str().to_string(),
            g.current_amount.round_dp(2).to_string(),
            g.target_amount.round_dp(2).to_string(),
            format!("{}%", goal_progress(g).round_dp(1)),
            remaining_days(g, today).to_string(),
        ]);
    }
    println!(
        "{}",
        pretty_table(
            &["Id", "Title", "Status", "Current", "Target", "Progress", "Days left"],
            data
        )
    );
    Ok(())
}

fn update(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let patch = GoalPatch {
        title: sub.get_one::<String>("title").map(|s| s.to_string()),
        description: sub.get_one::<String>("description").map(|s| s.to_string()),
        target_amount: sub
            .get_one::<String>("target")
            .map(|s| parse_decimal(s))
            .transpose()?,
        current_amount: sub
            .get_one::<String>("current")
            .map(|s| parse_decimal(s))
            .transpose()?,
        start_date: sub
            .get_one::<String>("start")
            .map(|s| parse_date(s))
            .transpose()?,
        due_date: sub
            .get_one::<String>("due")
            .map(|s| parse_date(s))
            .transpose()?,
        status: sub
            .get_one::<String>("status")
            .map(|s| s.parse::<GoalStatus>())
            .transpose()?,
    };
    let g = store::update(conn, id, &patch)?;
    println!("Updated goal #{}", g.id);
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    store::delete(conn, id)?;
    println!("Removed goal #{}", id);
    Ok(())
}
