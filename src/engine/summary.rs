// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Debt;
use crate::utils::round_money;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtSummary {
    pub debt_count: usize,
    pub total_balance: Decimal,
    pub total_minimum_payments: Decimal,
    pub total_original_balance: Decimal,
    /// Percent of combined credit limit in use, over debts that have a limit.
    pub credit_utilization: Decimal,
    pub debts_by_category: BTreeMap<String, Decimal>,
    pub percent_paid: Decimal,
}

/// Portfolio rollups over a static debt list.
pub fn calculate_debt_summary(debts: &[Debt]) -> DebtSummary {
    let total_balance: Decimal = debts.iter().map(|d| d.balance).sum();
    let total_minimum_payments: Decimal = debts.iter().map(|d| d.minimum_payment).sum();
    let total_original_balance: Decimal = debts.iter().map(|d| d.original_balance).sum();

    let (limited_balance, total_limit) = debts
        .iter()
        .filter_map(|d| match d.credit_limit {
            Some(limit) if limit > Decimal::ZERO => Some((d.balance, limit)),
            _ => None,
        })
        .fold((Decimal::ZERO, Decimal::ZERO), |(b, l), (db, dl)| {
            (b + db, l + dl)
        });
    let credit_utilization = if total_limit.is_zero() {
        Decimal::ZERO
    } else {
        round_money(limited_balance / total_limit * Decimal::ONE_HUNDRED)
    };

    let mut debts_by_category: BTreeMap<String, Decimal> = BTreeMap::new();
    for d in debts {
        *debts_by_category
            .entry(d.category.clone())
            .or_insert(Decimal::ZERO) += d.balance;
    }
    for v in debts_by_category.values_mut() {
        *v = round_money(*v);
    }

    let percent_paid = if total_original_balance.is_zero() {
        Decimal::ZERO
    } else {
        round_money(
            (total_original_balance - total_balance) / total_original_balance
                * Decimal::ONE_HUNDRED,
        )
    };

    DebtSummary {
        debt_count: debts.len(),
        total_balance: round_money(total_balance),
        total_minimum_payments: round_money(total_minimum_payments),
        total_original_balance: round_money(total_original_balance),
        credit_utilization,
        debts_by_category,
        percent_paid,
    }
}
