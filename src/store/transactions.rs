// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{NewTransaction, Transaction, TransactionPatch, TransactionType};
use crate::utils::{decimal_or_zero, fmt_timestamp, parse_timestamp};
use anyhow::{Context, Result, bail};
use chrono::Utc;
use rusqlite::{Connection, params};

const COLS: &str = "id, amount, category, description, type, created_at, account";

type Row = (
    i64,
    String,
    String,
    Option<String>,
    String,
    String,
    Option<String>,
);

fn from_row(row: Row) -> Result<Transaction> {
    let (id, amount, category, description, typ, created_at, account) = row;
    Ok(Transaction {
        id,
        amount: decimal_or_zero(&amount),
        category,
        description,
        r#type: typ.parse::<TransactionType>()?,
        created_at: parse_timestamp(&created_at)?,
        account,
    })
}

pub fn list(conn: &Connection) -> Result<Vec<Transaction>> {
    let sql = format!(
        "SELECT {} FROM transactions ORDER BY created_at DESC, id DESC",
        COLS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, Option<String>>(3)?,
            r.get::<_, String>(4)?,
            r.get::<_, String>(5)?,
            r.get::<_, Option<String>>(6)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(from_row(row?)?);
    }
    Ok(out)
}

pub fn get(conn: &Connection, id: i64) -> Result<Transaction> {
    let sql = format!("SELECT {} FROM transactions WHERE id=?1", COLS);
    let row = conn
        .query_row(&sql, params![id], |r| {
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, Option<String>>(3)?,
                r.get::<_, String>(4)?,
                r.get::<_, String>(5)?,
                r.get::<_, Option<String>>(6)?,
            ))
        })
        .with_context(|| format!("Transaction {} not found", id))?;
    from_row(row)
}

pub fn create(conn: &Connection, new: &NewTransaction) -> Result<Transaction> {
    let created_at = new.created_at.unwrap_or_else(Utc::now);
    conn.execute(
        "INSERT INTO transactions(amount, category, description, type, created_at, account)
         VALUES (?1,?2,?3,?4,?5,?6)",
        params![
            new.amount.to_string(),
            new.category,
            new.description,
            new.r#type.as_str(),
            fmt_timestamp(&created_at),
            new.account,
        ],
    )?;
    get(conn, conn.last_insert_rowid())
}

pub fn update(conn: &Connection, id: i64, patch: &TransactionPatch) -> Result<Transaction> {
    let cur = get(conn, id)?;
    let amount = patch.amount.unwrap_or(cur.amount);
    let category = patch.category.clone().unwrap_or(cur.category);
    let description = patch.description.clone().or(cur.description);
    let typ = patch.r#type.unwrap_or(cur.r#type);
    let account = patch.account.clone().or(cur.account);
    conn.execute(
        "UPDATE transactions SET amount=?1, category=?2, description=?3, type=?4, account=?5
         WHERE id=?6",
        params![
            amount.to_string(),
            category,
            description,
            typ.as_str(),
            account,
            id
        ],
    )?;
    get(conn, id)
}

pub fn delete(conn: &Connection, id: i64) -> Result<()> {
    let n = conn.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
    if n == 0 {
        bail!("Transaction {} not found", id);
    }
    Ok(())
}
