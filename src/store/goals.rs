// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Goal, GoalPatch, GoalStatus, NewGoal};
use crate::utils::{decimal_or_zero, parse_date};
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;

const COLS: &str = "id, title, description, target_amount, current_amount, start_date, due_date, status";

type Row = (
    i64,
    String,
    Option<String>,
    String,
    String,
    String,
    String,
    String,
);

fn from_row(row: Row) -> Result<Goal> {
    let (id, title, description, target_amount, current_amount, start_date, due_date, status) = row;
    Ok(Goal {
        id,
        title,
        description,
        target_amount: decimal_or_zero(&target_amount),
        current_amount: decimal_or_zero(&current_amount),
        start_date: parse_date(&start_date)?,
        due_date: parse_date(&due_date)?,
        status: status.parse::<GoalStatus>()?,
    })
}

/// Optional narrowing of `list`; `None` filters match everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalsFilter {
    pub status: Option<GoalStatus>,
    pub due_before: Option<NaiveDate>,
}

pub fn list(conn: &Connection) -> Result<Vec<Goal>> {
    list_filtered(conn, GoalsFilter::default())
}

pub fn list_filtered(conn: &Connection, filter: GoalsFilter) -> Result<Vec<Goal>> {
    let sql = format!("SELECT {} FROM goals ORDER BY due_date, id", COLS);
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, Option<String>>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
            r.get::<_, String>(5)?,
            r.get::<_, String>(6)?,
            r.get::<_, String>(7)?,
        ))
    })?;
    let mut out = Vec::new();
    for row in rows {
        let goal = from_row(row?)?;
        if let Some(status) = filter.status {
            if goal.status != status {
                continue;
            }
        }
        if let Some(due_before) = filter.due_before {
            if goal.due_date >= due_before {
                continue;
            }
        }
        out.push(goal);
    }
    Ok(out)
}

pub fn get(conn: &Connection, id: i64) -> Result<Goal> {
    let sql = format!("SELECT {} FROM goals WHERE id=?1", COLS);
    let row = conn
        .query_row(&sql, params![id], |r| {
            Ok((
                r.get::<_, i64>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, Option<String>>(2)?,
                r.get::<_, String>(3)?,
                r.get::<_, String>(4)?,
                r.get::<_, String>(5)?,
                r.get::<_, String>(6)?,
                r.get::<_, String>(7)?,
            ))
        })
        .with_context(|| format!("Goal {} not found", id))?;
    from_row(row)
}

pub fn create(conn: &Connection, new: &NewGoal) -> Result<Goal> {
    let current = new.current_amount.unwrap_or(Decimal::ZERO);
    let status = new.status.unwrap_or(GoalStatus::Active);
    conn.execute(
        "INSERT INTO goals(title, description, target_amount, current_amount, start_date, due_date, status)
         VALUES (?1,?2,?3,?4,?5,?6,?7)",
        params![
            new.title,
            new.description,
            new.target_amount.to_string(),
            current.to_string(),
            new.start_date.to_string(),
            new.due_date.to_string(),
            status.as_str(),
        ],
    )?;
    get(conn, conn.last_insert_rowid())
}

pub fn update(conn: &Connection, id: i64, patch: &GoalPatch) -> Result<Goal> {
    let cur = get(conn, id)?;
    let title = patch.title.clone().unwrap_or(cur.title);
    let description = patch.description.clone().or(cur.description);
    let target_amount = patch.target_amount.unwrap_or(cur.target_amount);
    let current_amount = patch.current_amount.unwrap_or(cur.current_amount);
    let start_date = patch.start_date.unwrap_or(cur.start_date);
    let due_date = patch.due_date.unwrap_or(cur.due_date);
    let status = patch.status.unwrap_or(cur.status);
    conn.execute(
        "UPDATE goals SET title=?1, description=?2, target_amount=?3, current_amount=?4,
         start_date=?5, due_date=?6, status=?7 WHERE id=?8",
        params![
            title,
            description,
            target_amount.to_string(),
            current_amount.to_string(),
            start_date.to_string(),
            due_date.to_string(),
            status.as_str(),
            id
        ],
    )?;
    get(conn, id)
}

pub fn delete(conn: &Connection, id: i64) -> Result<()> {
    let n = conn.execute("DELETE FROM goals WHERE id=?1", params![id])?;
    if n == 0 {
        bail!("Goal {} not found", id);
    }
    Ok(())
}
