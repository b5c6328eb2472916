// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::round_money;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSplit {
    pub interest: Decimal,
    pub principal: Decimal,
}

/// One month of simple interest at `apr` percent per year. Unrounded.
pub fn monthly_interest(balance: Decimal, apr: Decimal) -> Decimal {
    balance * (apr / MONTHS_PER_YEAR / HUNDRED)
}

/// Splits `payment` into the interest it covers and the principal it retires.
///
/// Interest is capped at the payment; principal is capped at the balance.
pub fn split_payment(balance: Decimal, apr: Decimal, payment: Decimal) -> PaymentSplit {
    let interest = monthly_interest(balance, apr).min(payment);
    let principal = (payment - interest).max(Decimal::ZERO).min(balance);
    PaymentSplit {
        interest: round_money(interest),
        principal: round_money(principal),
    }
}
