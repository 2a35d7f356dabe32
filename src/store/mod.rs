// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Persisted record stores, one module per entity. Each exposes list,
//! create, update (partial patch: unspecified fields keep their previous
//! value) and delete. `list` always returns the complete current set;
//! summaries are recomputed from it on every read, never cached.

pub mod budgets;
pub mod debts;
pub mod goals;
pub mod transactions;
