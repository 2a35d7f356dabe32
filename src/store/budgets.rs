// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Budget, BudgetCategory, BudgetPatch, NewBudget};
use crate::utils::{decimal_or_zero, parse_date};
use anyhow::{Context, Result, bail};
use rusqlite::{Connection, params};
use rust_decimal::Decimal;

const COLS: &str = "id, category, amount_planned, period_start, period_end, spent";

type Row = (i64, String, String, String, String, String);

fn from_row(row: Row) -> Result<Budget> {
    let (id, category, amount_planned, period_start, period_end, spent) = row;
    Ok(Budget {
        id,
        category: category.parse::<BudgetCategory>()?,
        amount_planned: decimal_or_zero(&amount_planned),
        period_start: parse_date(&period_start)?,
        period_end: parse_date(&period_end)?,
        spent: decimal_or_zero(&spent),
    })
}

pub fn list(conn: &Connection) -> Result<Vec<Budget>> {
    let sql = format!(
        "SELECT {} FROM budgets ORDER BY period_start, category, id",
        COLS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
            r.get::<_, String>(5)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(from_row(row?)?);
    }
    Ok(out)
}

pub fn get(conn: &Connection, id: i64) -> Result<Budget> {
    let sql = format!("SELECT {} FROM budgets WHERE id=?1", COLS);
    let row = conn
        .query_row(&sql, params![id], |r| {
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, String>(2)?,
                r.get::<_, String>(3)?,
                r.get::<_, String>(4)?,
                r.get::<_, String>(5)?,
            ))
        })
        .with_context(|| format!("Budget {} not found", id))?;
    from_row(row)
}

pub fn create(conn: &Connection, new: &NewBudget) -> Result<Budget> {
    if new.period_end < new.period_start {
        bail!(
            "Budget period end {} is before start {}",
            new.period_end,
            new.period_start
        );
    }
    conn.execute(
        "INSERT INTO budgets(category, amount_planned, period_start, period_end, spent)
         VALUES (?1,?2,?3,?4,'0')",
        params![
            new.category.as_str(),
            new.amount_planned.to_string(),
            new.period_start.to_string(),
            new.period_end.to_string(),
        ],
    )?;
    get(conn, conn.last_insert_rowid())
}

pub fn update(conn: &Connection, id: i64, patch: &BudgetPatch) -> Result<Budget> {
    let cur = get(conn, id)?;
    let category = patch.category.unwrap_or(cur.category);
    let amount_planned = patch.amount_planned.unwrap_or(cur.amount_planned);
    let period_start = patch.period_start.unwrap_or(cur.period_start);
    let period_end = patch.period_end.unwrap_or(cur.period_end);
    let spent = patch.spent.unwrap_or(cur.spent);
    if period_end < period_start {
        bail!(
            "Budget period end {} is before start {}",
            period_end,
            period_start
        );
    }
    if spent < Decimal::ZERO {
        bail!("Budget spent amount cannot be negative");
    }
    conn.execute(
        "UPDATE budgets SET category=?1, amount_planned=?2, period_start=?3, period_end=?4, spent=?5
         WHERE id=?6",
        params![
            category.as_str(),
            amount_planned.to_string(),
            period_start.to_string(),
            period_end.to_string(),
            spent.to_string(),
            id
        ],
    )?;
    get(conn, id)
}

pub fn delete(conn: &Connection, id: i64) -> Result<()> {
    let n = conn.execute("DELETE FROM budgets WHERE id=?1", params![id])?;
    if n == 0 {
        bail!("Budget {} not found", id);
    }
    Ok(())
}
