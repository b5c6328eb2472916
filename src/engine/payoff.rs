// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Multi-debt payoff simulation.
//!
//! Each simulated month every open debt is paid its minimum and whatever budget is
//! left over goes to the highest-priority open debt. Priority is fixed once, from the
//! caller's debts, before the first month and is never re-derived as balances shrink.
//! A debt at or below [`PAID_OFF_EPSILON`] is a milestone; milestones split the run
//! into steps, one per "focus" debt.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::interest::monthly_interest;
use super::strategy::priority_indices;
use crate::models::{
    Debt, Milestone, MonthlyPayment, PaymentRow, PaymentType, PayoffPlan, PayoffStep,
    PlanWarning, StrategySettings,
};
use crate::utils::{add_months, format_month, round_money};

/// Hard stop for every projection: 30 years of months.
pub const MAX_MONTHS: u32 = 360;

/// Balances at or below one cent count as paid off.
pub const PAID_OFF_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

struct WorkingDebt {
    debt: Debt,
    paid: Decimal,
    open: bool,
}

struct StepDraft {
    number: u32,
    first_month: u32,
    debt_receiving_extra: String,
    debts_paying_minimum: Vec<String>,
    milestones: Vec<Milestone>,
}

impl StepDraft {
    fn open(number: u32, first_month: u32, working: &[WorkingDebt], order: &[usize]) -> Self {
        let mut survivors = order.iter().filter(|&&i| working[i].open);
        let debt_receiving_extra = survivors
            .next()
            .map(|&i| working[i].debt.id.clone())
            .unwrap_or_default();
        let debts_paying_minimum = survivors.map(|&i| working[i].debt.id.clone()).collect();
        Self {
            number,
            first_month,
            debt_receiving_extra,
            debts_paying_minimum,
            milestones: Vec::new(),
        }
    }

    fn close(self, completion_date: NaiveDate, months_elapsed: u32) -> PayoffStep {
        PayoffStep {
            step_number: self.number,
            completion_date,
            debt_receiving_extra: self.debt_receiving_extra,
            debts_paying_minimum: self.debts_paying_minimum,
            milestones_in_step: self.milestones,
            months: months_elapsed - self.first_month,
        }
    }
}

/// Projects `debts` month by month to payoff (or `MAX_MONTHS`) starting at `start`.
///
/// The caller's debts are cloned into a private working set and never mutated.
/// Underfunding and hitting the month cap are reported through `PayoffPlan::warnings`;
/// neither aborts the run.
pub fn generate_payoff_plan(
    debts: &[Debt],
    settings: &StrategySettings,
    start: NaiveDate,
) -> PayoffPlan {
    let strategy = settings.strategy;
    let funding = settings.recurring_funding.amount;

    let mut working: Vec<WorkingDebt> = debts
        .iter()
        .map(|d| WorkingDebt {
            debt: d.clone(),
            paid: Decimal::ZERO,
            open: d.balance > Decimal::ZERO,
        })
        .collect();

    let mut plan = PayoffPlan {
        strategy,
        debt_free_date: start,
        months_simulated: 0,
        total_payments: Decimal::ZERO,
        total_interest: Decimal::ZERO,
        steps: Vec::new(),
        monthly_payments: Vec::new(),
        warnings: Vec::new(),
    };
    if !working.iter().any(|w| w.open) {
        return plan;
    }

    let order = priority_indices(debts, strategy);
    let total_minimums: Decimal = working
        .iter()
        .filter(|w| w.open)
        .map(|w| w.debt.minimum_payment)
        .sum();
    if funding < total_minimums {
        warn!(
            %funding,
            %total_minimums,
            "monthly funding does not cover minimum payments of open debts"
        );
        plan.warnings.push(PlanWarning::Underfunded {
            funding: round_money(funding),
            total_minimums: round_money(total_minimums),
        });
    }

    let mut total_payments = Decimal::ZERO;
    let mut total_interest = Decimal::ZERO;
    let mut month = 0u32;
    let mut step = StepDraft::open(1, 0, &working, &order);

    while working.iter().any(|w| w.open) && month < MAX_MONTHS {
        let date = add_months(start, month);

        let open_minimums: Decimal = working
            .iter()
            .filter(|w| w.open)
            .map(|w| w.debt.minimum_payment)
            .sum();
        let extra = (funding - open_minimums).max(Decimal::ZERO);
        let priority = order.iter().copied().find(|&i| working[i].open);

        let mut rows = Vec::new();
        for (i, w) in working.iter_mut().enumerate().filter(|(_, w)| w.open) {
            let is_priority = priority == Some(i);
            let payment_amount = if is_priority {
                w.debt.minimum_payment + extra
            } else {
                w.debt.minimum_payment
            };

            let interest = round_money(monthly_interest(w.debt.balance, w.debt.apr));
            let actual = round_money(payment_amount.min(w.debt.balance + interest));
            let interest_paid = interest.min(actual);
            let principal = actual - interest_paid;
            w.debt.balance = (w.debt.balance - principal).max(Decimal::ZERO);
            w.paid += actual;

            total_payments += actual;
            total_interest += interest_paid;
            rows.push(PaymentRow {
                debt_id: w.debt.id.clone(),
                amount: actual,
                principal,
                interest: interest_paid,
                remaining_balance: round_money(w.debt.balance),
                payment_type: if is_priority && extra > Decimal::ZERO {
                    PaymentType::Extra
                } else {
                    PaymentType::Minimum
                },
            });
        }

        let month_payment: Decimal = rows.iter().map(|r| r.amount).sum();
        let month_principal: Decimal = rows.iter().map(|r| r.principal).sum();
        let month_interest: Decimal = rows.iter().map(|r| r.interest).sum();

        let mut paid_off_this_month = false;
        for w in working.iter_mut().filter(|w| w.open) {
            if w.debt.balance <= PAID_OFF_EPSILON {
                w.open = false;
                paid_off_this_month = true;
                debug!(debt_id = %w.debt.id, month = %format_month(date), "debt paid off");
                step.milestones.push(Milestone {
                    debt_id: w.debt.id.clone(),
                    debt_name: w.debt.name.clone(),
                    payoff_date: date,
                    total_paid: round_money(w.paid),
                });
            }
        }

        let remaining: Decimal = working
            .iter()
            .filter(|w| w.open)
            .map(|w| w.debt.balance)
            .sum();
        plan.monthly_payments.push(MonthlyPayment {
            month: format_month(date),
            payments: rows,
            total_payment: round_money(month_payment),
            total_principal: round_money(month_principal),
            total_interest: round_money(month_interest),
            remaining_balance: round_money(remaining),
        });

        month += 1;

        // A payoff in the capped month stays in the current step.
        if paid_off_this_month && month < MAX_MONTHS && working.iter().any(|w| w.open) {
            let next = StepDraft::open(step.number + 1, month, &working, &order);
            let closed = std::mem::replace(&mut step, next);
            debug!(
                step = closed.number,
                next_focus = %step.debt_receiving_extra,
                "step complete"
            );
            plan.steps.push(closed.close(date, month));
        }
    }

    let last_month = add_months(start, month.saturating_sub(1));
    plan.steps.push(step.close(last_month, month));

    let open_debts: Vec<String> = working
        .iter()
        .filter(|w| w.open)
        .map(|w| w.debt.id.clone())
        .collect();
    if !open_debts.is_empty() {
        warn!(
            months = month,
            open = open_debts.len(),
            "month cap reached before payoff; plan is a partial projection"
        );
        plan.warnings.push(PlanWarning::MonthCapReached {
            months: month,
            open_debts,
        });
    }

    plan.debt_free_date = last_month;
    plan.months_simulated = month;
    plan.total_payments = round_money(total_payments);
    plan.total_interest = round_money(total_interest);

    info!(
        strategy = %strategy,
        months = month,
        total_interest = %plan.total_interest,
        steps = plan.steps.len(),
        "payoff plan generated"
    );
    plan
}
