// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::ai::financial_analysis;
use crate::store;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("report", sub)) = m.subcommand() {
        let url = sub.get_one::<String>("url").unwrap();
        let user = sub.get_one::<String>("user").unwrap();
        // All three record sets are fetched up front; if any fetch fails the
        // report is not attempted on partial input.
        let transactions = store::transactions::list(conn)?;
        let budgets = store::budgets::list(conn)?;
        let debts = store::debts::list(conn)?;
        let report = financial_analysis(url, user, &transactions, &budgets, &debts)?;
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
