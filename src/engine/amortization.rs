// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::interest::monthly_interest;
use super::payoff::{MAX_MONTHS, PAID_OFF_EPSILON};
use crate::models::{AmortizationRow, Debt};
use crate::utils::{add_months, round_money};

/// Single-debt schedule at a fixed monthly payment.
///
/// Runs until the balance is within a cent of zero or `MAX_MONTHS` rows have been
/// produced. Row `n` (0-based) is dated `start + n months`.
pub fn generate_amortization(
    debt: &Debt,
    monthly_payment: Decimal,
    start: NaiveDate,
) -> Vec<AmortizationRow> {
    let mut rows = Vec::new();
    let mut balance = debt.balance;
    let mut month = 0u32;

    while balance > PAID_OFF_EPSILON && month < MAX_MONTHS {
        let interest = round_money(monthly_interest(balance, debt.apr));
        let payment = monthly_payment.min(balance + interest);
        let principal = payment - interest.min(payment);
        balance = (balance - principal).max(Decimal::ZERO);

        rows.push(AmortizationRow {
            date: add_months(start, month),
            payment: round_money(payment),
            principal: round_money(principal),
            interest: round_money(interest.min(payment)),
            balance: round_money(balance),
        });
        month += 1;
    }

    rows
}
