// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::insights::{Insight, budget_insights, debt_insights};
use crate::store;
use crate::summary::{budget_summary, debt_advice};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("budgets", sub)) => {
            let budgets = store::budgets::list(conn)?;
            let cards = budget_insights(&budget_summary(&budgets));
            print_cards(sub, &cards)?;
        }
        Some(("debts", sub)) => {
            let debts = store::debts::list(conn)?;
            let cards = debt_insights(&debt_advice(&debts));
            print_cards(sub, &cards)?;
        }
        _ => {}
    }
    Ok(())
}

fn print_cards(sub: &clap::ArgMatches, cards: &[Insight]) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if maybe_print_json(json_flag, jsonl_flag, &cards)? {
        return Ok(());
    }
    let data = cards
        .iter()
        .map(|c| {
            vec![
                c.kind.as_str().to_string(),
                c.title.clone(),
                c.description.clone(),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Kind", "Title", "Description"], data));
    Ok(())
}
