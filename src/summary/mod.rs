// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over in-memory record sets. Nothing here touches the
//! database or caches results; callers recompute from the full current set
//! on every read so summaries always reflect the latest mutation.

pub mod budgets;
pub mod debts;
pub mod goals;
pub mod period;
pub mod transactions;

pub use budgets::{BudgetStatus, BudgetSummary, budget_status, budget_summary};
pub use debts::{DebtAdvice, DebtSummary, NO_DEBT_ADVICE, debt_advice, debt_priority, debt_summary};
pub use goals::{GoalOverview, goal_overview, goal_progress, remaining_days};
pub use period::in_month;
pub use transactions::{TransactionSummary, transaction_summary};
