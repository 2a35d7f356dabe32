// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod ai;
pub mod budgets;
pub mod debts;
pub mod goals;
pub mod insights;
pub mod reports;
pub mod transactions;
