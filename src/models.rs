// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
    Saving,
    Debt,
    Payment,
    Investment,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
            TransactionType::Saving => "saving",
            TransactionType::Debt => "debt",
            TransactionType::Payment => "payment",
            TransactionType::Investment => "investment",
        }
    }
}

impl FromStr for TransactionType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            "saving" => Ok(TransactionType::Saving),
            "debt" => Ok(TransactionType::Debt),
            "payment" => Ok(TransactionType::Payment),
            "investment" => Ok(TransactionType::Investment),
            other => Err(anyhow!("Unknown transaction type '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub amount: Decimal, // positive magnitude; semantics come from `type`
    pub category: String,
    pub description: Option<String>,
    pub r#type: TransactionType,
    pub created_at: DateTime<Utc>,
    pub account: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: Decimal,
    pub category: String,
    pub description: Option<String>,
    pub r#type: TransactionType,
    pub created_at: Option<DateTime<Utc>>,
    pub account: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionPatch {
    pub amount: Option<Decimal>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub r#type: Option<TransactionType>,
    pub account: Option<String>,
}

/// The twelve fixed budget categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetCategory {
    Housing,
    Utilities,
    Food,
    Transportation,
    Healthcare,
    Insurance,
    Entertainment,
    Clothing,
    PersonalCare,
    Education,
    Savings,
    DebtRepayment,
}

impl BudgetCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetCategory::Housing => "housing",
            BudgetCategory::Utilities => "utilities",
            BudgetCategory::Food => "food",
            BudgetCategory::Transportation => "transportation",
            BudgetCategory::Healthcare => "healthcare",
            BudgetCategory::Insurance => "insurance",
            BudgetCategory::Entertainment => "entertainment",
            BudgetCategory::Clothing => "clothing",
            BudgetCategory::PersonalCare => "personal_care",
            BudgetCategory::Education => "education",
            BudgetCategory::Savings => "savings",
            BudgetCategory::DebtRepayment => "debt_repayment",
        }
    }
}

impl FromStr for BudgetCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "housing" => Ok(BudgetCategory::Housing),
            "utilities" => Ok(BudgetCategory::Utilities),
            "food" => Ok(BudgetCategory::Food),
            "transportation" => Ok(BudgetCategory::Transportation),
            "healthcare" => Ok(BudgetCategory::Healthcare),
            "insurance" => Ok(BudgetCategory::Insurance),
            "entertainment" => Ok(BudgetCategory::Entertainment),
            "clothing" => Ok(BudgetCategory::Clothing),
            "personal_care" => Ok(BudgetCategory::PersonalCare),
            "education" => Ok(BudgetCategory::Education),
            "savings" => Ok(BudgetCategory::Savings),
            "debt_repayment" => Ok(BudgetCategory::DebtRepayment),
            other => Err(anyhow!("Unknown budget category '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub category: BudgetCategory,
    pub amount_planned: Decimal,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub spent: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBudget {
    pub category: BudgetCategory,
    pub amount_planned: Decimal,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetPatch {
    pub category: Option<BudgetCategory>,
    pub amount_planned: Option<Decimal>,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub spent: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CreditorType {
    #[serde(rename = "personal")]
    Personal,
    #[serde(rename = "business")]
    Business,
    /// A named bank creditor, kept verbatim.
    #[serde(untagged)]
    Bank(String),
}

impl CreditorType {
    pub fn as_str(&self) -> &str {
        match self {
            CreditorType::Personal => "personal",
            CreditorType::Business => "business",
            CreditorType::Bank(name) => name.as_str(),
        }
    }

    pub fn parse(s: &str) -> CreditorType {
        match s {
            "personal" => CreditorType::Personal,
            "business" => CreditorType::Business,
            other => CreditorType::Bank(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    pub id: i64,
    pub r#type: CreditorType,
    pub amount: Decimal,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub interest_rate: Option<Decimal>, // percent; 0-100 expected, not enforced
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDebt {
    pub r#type: CreditorType,
    pub amount: Decimal,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub interest_rate: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DebtPatch {
    pub r#type: Option<CreditorType>,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub interest_rate: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Active,
    Inactive,
    Completed,
    Failed,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Active => "active",
            GoalStatus::Inactive => "inactive",
            GoalStatus::Completed => "completed",
            GoalStatus::Failed => "failed",
        }
    }
}

impl FromStr for GoalStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "active" => Ok(GoalStatus::Active),
            "inactive" => Ok(GoalStatus::Inactive),
            "completed" => Ok(GoalStatus::Completed),
            "failed" => Ok(GoalStatus::Failed),
            other => Err(anyhow!("Unknown goal status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: GoalStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGoal {
    pub title: String,
    pub description: Option<String>,
    pub target_amount: Decimal,
    pub current_amount: Option<Decimal>,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: Option<GoalStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub target_amount: Option<Decimal>,
    pub current_amount: Option<Decimal>,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<GoalStatus>,
}
