// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure calculation layer: no I/O, deterministic for identical inputs.

pub mod amortization;
pub mod income;
pub mod interest;
pub mod payoff;
pub mod strategy;
pub mod summary;

pub use amortization::generate_amortization;
pub use income::{
    calculate_gross_monthly_income, calculate_net_monthly_income, calculate_total_monthly_income,
};
pub use interest::{monthly_interest, split_payment, PaymentSplit};
pub use payoff::{generate_payoff_plan, MAX_MONTHS, PAID_OFF_EPSILON};
pub use strategy::{priority_order, sort_debts_by_strategy};
pub use summary::{calculate_debt_summary, DebtSummary};
