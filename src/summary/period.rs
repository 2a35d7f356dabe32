// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Datelike, Utc};

/// A timestamp is "in the month" iff its calendar year and month match.
/// Comparison is on stored calendar components; no timezone normalization.
pub fn in_month(ts: &DateTime<Utc>, year: i32, month: u32) -> bool {
    ts.year() == year && ts.month() == month
}
