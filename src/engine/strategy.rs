// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Debt, Strategy};

/// Positions into `debts` in payoff priority order: avalanche by APR descending,
/// snowball by balance ascending. Stable, so ties keep input order.
pub fn priority_indices(debts: &[Debt], strategy: Strategy) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..debts.len()).collect();
    match strategy {
        Strategy::Avalanche => idx.sort_by(|&a, &b| debts[b].apr.cmp(&debts[a].apr)),
        Strategy::Snowball => idx.sort_by(|&a, &b| debts[a].balance.cmp(&debts[b].balance)),
    }
    idx
}

/// New vector of the debts in priority order. The input is left untouched.
pub fn sort_debts_by_strategy(debts: &[Debt], strategy: Strategy) -> Vec<Debt> {
    priority_indices(debts, strategy)
        .into_iter()
        .map(|i| debts[i].clone())
        .collect()
}

/// Priority order as debt ids.
pub fn priority_order(debts: &[Debt], strategy: Strategy) -> Vec<String> {
    priority_indices(debts, strategy)
        .into_iter()
        .map(|i| debts[i].id.clone())
        .collect()
}
