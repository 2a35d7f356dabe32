// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use fintrack::utils::{fmt_money, fmt_percent};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn money_rounds_to_two_places() {
    assert_eq!(fmt_money(&dec("1234.5")), "$1234.5");
    assert_eq!(fmt_money(&dec("1234.567")), "$1234.57");
    assert_eq!(fmt_money(&dec("-125.001")), "$-125.00");
}

#[test]
fn percent_rounds_to_one_place() {
    // 3570/6300 * 100 rounds to 56.7 only at presentation
    let pct = dec("3570") / dec("6300") * Decimal::ONE_HUNDRED;
    assert_eq!(fmt_percent(&pct), "56.7%");
    assert_eq!(fmt_percent(&dec("0")), "0%");
    assert_eq!(fmt_percent(&dec("100.04")), "100.0%");
}
