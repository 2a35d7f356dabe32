// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod ai;
pub mod cli;
pub mod commands;
pub mod db;
pub mod insights;
pub mod models;
pub mod store;
pub mod summary;
pub mod utils;
