// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;

use crate::engine::monthly_interest;
use crate::profile::{Profile, ProfileStore};
use crate::utils::{format_currency, pretty_table, round_money};
use anyhow::Result;
use rust_decimal::Decimal;

/// `(issue, detail)` pairs for everything that would make a plan misleading.
pub fn diagnose(profile: &Profile) -> Vec<(String, String)> {
    let mut issues = Vec::new();

    // 1) Budget below the sum of minimums on debts that still carry a balance
    let funding = profile.settings.recurring_funding.amount;
    let open: Vec<_> = profile
        .debts
        .iter()
        .filter(|d| d.balance > Decimal::ZERO)
        .collect();
    let minimums: Decimal = open.iter().map(|d| d.minimum_payment).sum();
    if !open.is_empty() && funding < minimums {
        issues.push((
            "underfunded".into(),
            format!(
                "funding {} < minimums {}",
                format_currency(funding),
                format_currency(minimums)
            ),
        ));
    }

    let mut seen = HashSet::new();
    for d in &profile.debts {
        // 2) Minimum that never touches principal
        let interest = round_money(monthly_interest(d.balance, d.apr));
        if d.balance > Decimal::ZERO && d.minimum_payment <= interest {
            issues.push((
                "minimum_below_interest".into(),
                format!(
                    "{}: minimum {} <= monthly interest {}",
                    d.id,
                    format_currency(d.minimum_payment),
                    format_currency(interest)
                ),
            ));
        }
        // 3) Balance above the recorded original
        if d.balance > d.original_balance {
            issues.push((
                "balance_above_original".into(),
                format!(
                    "{}: balance {} > original {}",
                    d.id,
                    format_currency(d.balance),
                    format_currency(d.original_balance)
                ),
            ));
        }
        // 4) Non-positive limit
        if let Some(limit) = d.credit_limit.filter(|l| *l <= Decimal::ZERO) {
            issues.push(("invalid_credit_limit".into(), format!("{}: {}", d.id, limit)));
        }
        if !seen.insert(d.id.as_str()) {
            issues.push(("duplicate_id".into(), d.id.clone()));
        }
    }
    issues
}

pub fn handle(store: &ProfileStore) -> Result<()> {
    let rows: Vec<Vec<String>> = diagnose(&store.profile)
        .into_iter()
        .map(|(issue, detail)| vec![issue, detail])
        .collect();
    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
