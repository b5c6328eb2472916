// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::models::{IncomeSource, IncomeType, PayFrequency};
use crate::utils::round_money;

const WEEKS_PER_YEAR: Decimal = Decimal::from_parts(52, 0, 0, false, 0);
const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Paychecks per month as a (per-year, per-month) fraction.
fn paychecks_per_month(freq: PayFrequency) -> (Decimal, Decimal) {
    match freq {
        PayFrequency::Weekly => (WEEKS_PER_YEAR, MONTHS_PER_YEAR),
        PayFrequency::BiWeekly => (Decimal::from(26), MONTHS_PER_YEAR),
        PayFrequency::SemiMonthly => (Decimal::TWO, Decimal::ONE),
        PayFrequency::Monthly => (Decimal::ONE, Decimal::ONE),
    }
}

fn gross_unrounded(source: &IncomeSource) -> Decimal {
    match source.income_type {
        IncomeType::Salary => match source.amount {
            Some(amount) => {
                let (per_year, per_month) = paychecks_per_month(source.pay_frequency);
                amount * per_year / per_month
            }
            None => Decimal::ZERO,
        },
        IncomeType::Hourly => match (source.hourly_rate, source.hours_per_week) {
            (Some(rate), Some(hours)) => rate * hours * WEEKS_PER_YEAR / MONTHS_PER_YEAR,
            _ => Decimal::ZERO,
        },
    }
}

/// Gross pay normalised to a month. Missing fields for the source's type give 0.
pub fn calculate_gross_monthly_income(source: &IncomeSource) -> Decimal {
    round_money(gross_unrounded(source))
}

/// Gross monthly pay less the additive deduction percentages, floored at 0.
pub fn calculate_net_monthly_income(source: &IncomeSource) -> Decimal {
    let kept = Decimal::ONE - source.deductions.total_percent() / Decimal::ONE_HUNDRED;
    round_money((gross_unrounded(source) * kept).max(Decimal::ZERO))
}

pub fn calculate_total_monthly_income(sources: &[IncomeSource]) -> Decimal {
    round_money(sources.iter().map(calculate_net_monthly_income).sum())
}
