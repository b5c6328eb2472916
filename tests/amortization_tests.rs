// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use debtpath::engine::{MAX_MONTHS, generate_amortization};
use debtpath::models::Debt;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn loan(balance: Decimal, apr: Decimal) -> Debt {
    Debt {
        id: "loan".into(),
        name: "Car loan".into(),
        category: "auto".into(),
        balance,
        original_balance: balance,
        apr,
        minimum_payment: dec!(50),
        credit_limit: None,
    }
}

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

#[test]
fn schedule_runs_to_zero_with_short_final_payment() {
    let rows = generate_amortization(&loan(dec!(1000), dec!(24)), dec!(50), start());
    assert_eq!(rows.len(), 26);

    let first = &rows[0];
    assert_eq!(first.date, start());
    assert_eq!(first.interest, dec!(20.00));
    assert_eq!(first.principal, dec!(30.00));
    assert_eq!(first.balance, dec!(970.00));

    let last = rows.last().unwrap();
    assert_eq!(last.date, NaiveDate::from_ymd_opt(2027, 4, 15).unwrap());
    assert_eq!(last.payment, dec!(39.88));
    assert_eq!(last.interest, dec!(0.78));
    assert_eq!(last.balance, dec!(0));

    let interest: Decimal = rows.iter().map(|r| r.interest).sum();
    assert_eq!(interest, dec!(289.88));
}

#[test]
fn every_row_balances_payment_against_its_parts() {
    let rows = generate_amortization(&loan(dec!(3000), dec!(18)), dec!(200), start());
    assert_eq!(rows.len(), 18);
    for r in &rows {
        assert_eq!(r.payment, r.principal + r.interest);
    }
    assert!(rows.windows(2).all(|w| w[1].balance <= w[0].balance));
}

#[test]
fn zero_rate_is_straight_line() {
    let rows = generate_amortization(&loan(dec!(1200), dec!(0)), dec!(100), start());
    assert_eq!(rows.len(), 12);
    assert!(rows.iter().all(|r| r.interest.is_zero() && r.principal == dec!(100)));
}

#[test]
fn payment_below_interest_stops_at_cap() {
    let rows = generate_amortization(&loan(dec!(5000), dec!(24)), dec!(50), start());
    assert_eq!(rows.len(), MAX_MONTHS as usize);
    assert!(rows.iter().all(|r| r.balance == dec!(5000)));
}

#[test]
fn paid_off_debt_has_empty_schedule() {
    let rows = generate_amortization(&loan(dec!(0), dec!(15)), dec!(50), start());
    assert!(rows.is_empty());
}
