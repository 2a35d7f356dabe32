// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CreditorType, Debt, DebtPatch, NewDebt};
use crate::utils::{decimal_or_zero, parse_date, parse_timestamp};
use anyhow::{Context, Result, bail};
use rusqlite::{Connection, params};

const COLS: &str = "id, type, amount, description, due_date, interest_rate, created_at";

type Row = (
    i64,
    String,
    String,
    String,
    Option<String>,
    Option<String>,
    String,
);

fn from_row(row: Row) -> Result<Debt> {
    let (id, typ, amount, description, due_date, interest_rate, created_at) = row;
    Ok(Debt {
        id,
        r#type: CreditorType::parse(&typ),
        amount: decimal_or_zero(&amount),
        description,
        due_date: due_date.as_deref().map(parse_date).transpose()?,
        interest_rate: interest_rate.as_deref().map(decimal_or_zero),
        created_at: parse_timestamp(&created_at)?,
    })
}

pub fn list(conn: &Connection) -> Result<Vec<Debt>> {
    let sql = format!("SELECT {} FROM debts ORDER BY created_at, id", COLS);
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, Option<String>>(4)?,
            r.get::<_, Option<String>>(5)?,
            r.get::<_, String>(6)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(from_row(row?)?);
    }
    Ok(out)
}

pub fn get(conn: &Connection, id: i64) -> Result<Debt> {
    let sql = format!("SELECT {} FROM debts WHERE id=?1", COLS);
    let row = conn
        .query_row(&sql, params![id], |r| {
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, String>(3)?,
                r.get::<_, Option<String>>(4)?,
                r.get::<_, Option<String>>(5)?,
                r.get::<_, String>(6)?,
            ))
        })
        .with_context(|| format!("Debt {} not found", id))?;
    from_row(row)
}

pub fn create(conn: &Connection, new: &NewDebt) -> Result<Debt> {
    conn.execute(
        "INSERT INTO debts(type, amount, description, due_date, interest_rate)
         VALUES (?1,?2,?3,?4,?5)",
        params![
            new.r#type.as_str(),
            new.amount.to_string(),
            new.description,
            new.due_date.map(|d| d.to_string()),
            new.interest_rate.map(|r| r.to_string()),
        ],
    )?;
    get(conn, conn.last_insert_rowid())
}

pub fn update(conn: &Connection, id: i64, patch: &DebtPatch) -> Result<Debt> {
    let cur = get(conn, id)?;
    let typ = patch.r#type.clone().unwrap_or(cur.r#type);
    let amount = patch.amount.unwrap_or(cur.amount);
    let description = patch.description.clone().unwrap_or(cur.description);
    let due_date = patch.due_date.or(cur.due_date);
    let interest_rate = patch.interest_rate.or(cur.interest_rate);
    conn.execute(
        "UPDATE debts SET type=?1, amount=?2, description=?3, due_date=?4, interest_rate=?5
         WHERE id=?6",
        params![
            typ.as_str(),
            amount.to_string(),
            description,
            due_date.map(|d| d.to_string()),
            interest_rate.map(|r| r.to_string()),
            id
        ],
    )?;
    get(conn, id)
}

pub fn delete(conn: &Connection, id: i64) -> Result<()> {
    let n = conn.execute("DELETE FROM debts WHERE id=?1", params![id])?;
    if n == 0 {
        bail!("Debt {} not found", id);
    }
    Ok(())
}
