// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use debtpath::engine::{MAX_MONTHS, generate_payoff_plan};
use debtpath::models::{Debt, PaymentType, PlanWarning, Strategy, StrategySettings};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn debt(id: &str, balance: Decimal, apr: Decimal, min: Decimal) -> Debt {
    Debt {
        id: id.into(),
        name: format!("Debt {}", id),
        category: "credit_card".into(),
        balance,
        original_balance: balance,
        apr,
        minimum_payment: min,
        credit_limit: None,
    }
}

fn settings(strategy: Strategy, funding: Decimal) -> StrategySettings {
    StrategySettings::new(strategy, funding)
}

#[test]
fn empty_debt_list_is_zero_plan() {
    let plan = generate_payoff_plan(&[], &settings(Strategy::Avalanche, dec!(500)), start());
    assert_eq!(plan.total_payments, Decimal::ZERO);
    assert_eq!(plan.total_interest, Decimal::ZERO);
    assert!(plan.steps.is_empty());
    assert!(plan.monthly_payments.is_empty());
    assert_eq!(plan.debt_free_date, start());
    assert!(plan.warnings.is_empty());
}

#[test]
fn zero_interest_debt_pays_off_in_twelve_months() {
    let debts = vec![debt("X", dec!(1200), dec!(0), dec!(100))];
    let plan = generate_payoff_plan(&debts, &settings(Strategy::Avalanche, dec!(100)), start());

    assert_eq!(plan.months_simulated, 12);
    assert_eq!(plan.monthly_payments.len(), 12);
    assert_eq!(plan.total_interest, dec!(0));
    assert_eq!(plan.total_payments, dec!(1200));
    assert_eq!(plan.debt_free_date, ymd(2025, 12, 1));
    assert_eq!(plan.monthly_payments[11].month, "2025-12");
    assert_eq!(plan.steps.len(), 1);
    assert_eq!(plan.steps[0].milestones_in_step[0].total_paid, dec!(1200));
    assert!(plan.is_debt_free());
}

#[test]
fn first_month_splits_interest_and_principal() {
    let debts = vec![debt("X", dec!(1000), dec!(24), dec!(50))];
    let plan = generate_payoff_plan(&debts, &settings(Strategy::Avalanche, dec!(50)), start());

    let row = &plan.monthly_payments[0].payments[0];
    assert_eq!(row.interest, dec!(20.00));
    assert_eq!(row.principal, dec!(30.00));
    assert_eq!(row.remaining_balance, dec!(970.00));
    assert_eq!(row.payment_type, PaymentType::Minimum);

    assert_eq!(plan.months_simulated, 26);
    assert_eq!(plan.total_interest, dec!(289.88));
    assert_eq!(plan.total_payments, dec!(1289.88));
}

#[test]
fn avalanche_routes_extra_then_rolls_to_next_debt() {
    let debts = vec![
        debt("A", dec!(500), dec!(20), dec!(25)),
        debt("B", dec!(2000), dec!(10), dec!(50)),
    ];
    let plan = generate_payoff_plan(&debts, &settings(Strategy::Avalanche, dec!(200)), start());

    let first = &plan.monthly_payments[0];
    let a = first.payments.iter().find(|p| p.debt_id == "A").unwrap();
    let b = first.payments.iter().find(|p| p.debt_id == "B").unwrap();
    assert_eq!(a.amount, dec!(150));
    assert_eq!(a.payment_type, PaymentType::Extra);
    assert_eq!(b.amount, dec!(50));
    assert_eq!(b.payment_type, PaymentType::Minimum);

    assert_eq!(plan.steps.len(), 2);
    let step1 = &plan.steps[0];
    assert_eq!(step1.step_number, 1);
    assert_eq!(step1.debt_receiving_extra, "A");
    assert_eq!(step1.debts_paying_minimum, vec!["B".to_string()]);
    assert_eq!(step1.milestones_in_step.len(), 1);
    assert_eq!(step1.milestones_in_step[0].debt_id, "A");
    assert_eq!(step1.milestones_in_step[0].payoff_date, ymd(2025, 4, 1));
    assert_eq!(step1.milestones_in_step[0].total_paid, dec!(519.00));
    assert_eq!(step1.completion_date, ymd(2025, 4, 1));
    assert_eq!(step1.months, 4);

    let step2 = &plan.steps[1];
    assert_eq!(step2.step_number, 2);
    assert_eq!(step2.debt_receiving_extra, "B");
    assert!(step2.debts_paying_minimum.is_empty());
    assert_eq!(step2.completion_date, ymd(2026, 2, 1));
    assert_eq!(step2.months, 10);

    // After A is gone the whole budget goes to B
    let fifth = &plan.monthly_payments[4];
    assert_eq!(fifth.payments.len(), 1);
    assert_eq!(fifth.payments[0].amount, dec!(200));
    assert_eq!(fifth.payments[0].payment_type, PaymentType::Extra);

    assert_eq!(plan.months_simulated, 14);
    assert_eq!(plan.debt_free_date, ymd(2026, 2, 1));
    assert_eq!(plan.total_interest, dec!(168.68));
    assert_eq!(plan.total_payments, dec!(2668.68));
}

#[test]
fn snowball_matches_avalanche_when_orders_agree() {
    let debts = vec![
        debt("A", dec!(500), dec!(20), dec!(25)),
        debt("B", dec!(2000), dec!(10), dec!(50)),
    ];
    let avalanche = generate_payoff_plan(&debts, &settings(Strategy::Avalanche, dec!(200)), start());
    let snowball = generate_payoff_plan(&debts, &settings(Strategy::Snowball, dec!(200)), start());
    assert_eq!(avalanche.steps, snowball.steps);
    assert_eq!(avalanche.monthly_payments, snowball.monthly_payments);
    assert_eq!(snowball.strategy, Strategy::Snowball);
}

#[test]
fn strategies_diverge_when_balances_swap() {
    let debts = vec![
        debt("A", dec!(2000), dec!(20), dec!(25)),
        debt("B", dec!(500), dec!(10), dec!(50)),
    ];
    let avalanche = generate_payoff_plan(&debts, &settings(Strategy::Avalanche, dec!(200)), start());
    let snowball = generate_payoff_plan(&debts, &settings(Strategy::Snowball, dec!(200)), start());

    assert_eq!(avalanche.steps[0].debt_receiving_extra, "A");
    assert_eq!(snowball.steps[0].debt_receiving_extra, "B");
    assert_ne!(avalanche.total_interest, snowball.total_interest);
    assert_eq!(avalanche.total_interest, dec!(299.54));
    assert_eq!(snowball.total_interest, dec!(289.31));
    // B finishes in month 3 under snowball but only in month 11 under avalanche
    assert_eq!(snowball.steps[0].milestones_in_step[0].payoff_date, ymd(2025, 3, 1));
    assert_eq!(avalanche.steps[0].milestones_in_step[0].payoff_date, ymd(2025, 11, 1));
}

#[test]
fn priority_is_not_recomputed_as_balances_shrink() {
    // Snowball order is fixed from starting balances: B (900) before A (1000).
    // A shrinks below B within a month, but B keeps the extra.
    let debts = vec![
        debt("A", dec!(1000), dec!(0), dec!(500)),
        debt("B", dec!(900), dec!(0), dec!(10)),
    ];
    let plan = generate_payoff_plan(&debts, &settings(Strategy::Snowball, dec!(600)), start());
    for m in plan.monthly_payments.iter().take(2) {
        let extra: Vec<_> = m
            .payments
            .iter()
            .filter(|p| p.payment_type == PaymentType::Extra)
            .map(|p| p.debt_id.as_str())
            .collect();
        assert_eq!(extra, vec!["B"]);
    }
}

#[test]
fn simultaneous_payoff_closes_a_single_step() {
    let debts = vec![
        debt("X", dec!(100), dec!(0), dec!(50)),
        debt("Y", dec!(100), dec!(0), dec!(50)),
    ];
    let plan = generate_payoff_plan(&debts, &settings(Strategy::Avalanche, dec!(100)), start());
    assert_eq!(plan.steps.len(), 1);
    assert_eq!(plan.steps[0].milestones_in_step.len(), 2);
    assert_eq!(plan.steps[0].completion_date, ymd(2025, 2, 1));
    assert_eq!(plan.debt_free_date, ymd(2025, 2, 1));
}

#[test]
fn overpayment_is_capped_at_balance_plus_interest() {
    let debts = vec![debt("X", dec!(100), dec!(12), dec!(25))];
    let plan = generate_payoff_plan(&debts, &settings(Strategy::Avalanche, dec!(1000)), start());
    assert_eq!(plan.months_simulated, 1);
    let row = &plan.monthly_payments[0].payments[0];
    assert_eq!(row.interest, dec!(1.00));
    assert_eq!(row.amount, dec!(101.00));
    assert_eq!(row.remaining_balance, dec!(0));
    assert_eq!(plan.total_payments, dec!(101.00));
}

#[test]
fn underfunded_budget_warns_but_still_plans() {
    let debts = vec![
        debt("A", dec!(300), dec!(0), dec!(100)),
        debt("B", dec!(300), dec!(0), dec!(100)),
    ];
    let plan = generate_payoff_plan(&debts, &settings(Strategy::Avalanche, dec!(150)), start());
    assert_eq!(
        plan.warnings,
        vec![PlanWarning::Underfunded {
            funding: dec!(150),
            total_minimums: dec!(200)
        }]
    );
    assert!(
        plan.monthly_payments
            .iter()
            .flat_map(|m| &m.payments)
            .all(|p| p.payment_type == PaymentType::Minimum)
    );
    assert_eq!(plan.months_simulated, 3);
    assert!(plan.is_debt_free());
}

// The month cap leaves `debt_free_date` on the last simulated month even though the
// debt is still open; only the warning tells the two cases apart.
#[test]
fn month_cap_truncates_and_flags_the_plan() {
    let debts = vec![debt("X", dec!(5000), dec!(24), dec!(50))];
    let plan = generate_payoff_plan(&debts, &settings(Strategy::Avalanche, dec!(50)), start());

    assert_eq!(plan.months_simulated, MAX_MONTHS);
    assert_eq!(plan.monthly_payments.len(), MAX_MONTHS as usize);
    assert_eq!(plan.debt_free_date, ymd(2054, 12, 1));
    assert_eq!(plan.total_payments, dec!(18000));
    assert_eq!(plan.total_interest, dec!(18000));
    assert_eq!(plan.steps.len(), 1);
    assert!(plan.steps[0].milestones_in_step.is_empty());
    assert!(!plan.is_debt_free());
    assert!(plan.warnings.contains(&PlanWarning::MonthCapReached {
        months: MAX_MONTHS,
        open_debts: vec!["X".into()],
    }));
}

#[test]
fn caller_debts_are_not_mutated() {
    let debts = vec![
        debt("A", dec!(500), dec!(20), dec!(25)),
        debt("B", dec!(2000), dec!(10), dec!(50)),
    ];
    let before = debts.clone();
    let first = generate_payoff_plan(&debts, &settings(Strategy::Avalanche, dec!(200)), start());
    assert_eq!(debts, before);
    let second = generate_payoff_plan(&debts, &settings(Strategy::Avalanche, dec!(200)), start());
    assert_eq!(first, second);
}

#[test]
fn paid_off_debts_are_skipped() {
    let debts = vec![
        debt("done", dec!(0), dec!(18), dec!(30)),
        debt("open", dec!(200), dec!(0), dec!(100)),
    ];
    let plan = generate_payoff_plan(&debts, &settings(Strategy::Avalanche, dec!(130)), start());
    assert!(
        plan.monthly_payments
            .iter()
            .flat_map(|m| &m.payments)
            .all(|p| p.debt_id == "open")
    );
    assert_eq!(plan.steps[0].debt_receiving_extra, "open");
}

#[test]
fn paid_off_minimums_do_not_count_toward_underfunding() {
    let debts = vec![
        debt("done", dec!(0), dec!(18), dec!(30)),
        debt("open", dec!(200), dec!(0), dec!(100)),
    ];
    let plan = generate_payoff_plan(&debts, &settings(Strategy::Avalanche, dec!(120)), start());
    assert!(plan.warnings.is_empty());
    assert_eq!(plan.months_simulated, 2);
    let amounts: Vec<Decimal> = plan.monthly_payments.iter().map(|m| m.total_payment).collect();
    assert_eq!(amounts, vec![dec!(120), dec!(80)]);
    assert!(
        plan.monthly_payments
            .iter()
            .flat_map(|m| &m.payments)
            .all(|p| p.payment_type == PaymentType::Extra)
    );
}

#[test]
fn minimum_only_payoff_keeps_the_focus_debt() {
    // Avalanche order: A (12%), C (6%), B (0%). B clears on minimums in month 2.
    let debts = vec![
        debt("A", dec!(1000), dec!(12), dec!(50)),
        debt("B", dec!(60), dec!(0), dec!(30)),
        debt("C", dec!(2000), dec!(6), dec!(40)),
    ];
    let plan = generate_payoff_plan(&debts, &settings(Strategy::Avalanche, dec!(200)), start());

    let first = &plan.steps[0];
    assert_eq!(first.step_number, 1);
    assert_eq!(first.debt_receiving_extra, "A");
    assert_eq!(first.debts_paying_minimum, vec!["C", "B"]);
    assert_eq!(first.completion_date, ymd(2025, 2, 1));
    assert_eq!(first.months, 2);
    assert_eq!(first.milestones_in_step.len(), 1);
    assert_eq!(first.milestones_in_step[0].debt_id, "B");
    assert_eq!(first.milestones_in_step[0].total_paid, dec!(60));

    let second = &plan.steps[1];
    assert_eq!(second.step_number, 2);
    assert_eq!(second.debt_receiving_extra, "A");
    assert_eq!(second.debts_paying_minimum, vec!["C"]);
    assert_eq!(second.milestones_in_step[0].debt_id, "A");

    assert_eq!(plan.steps.len(), 3);
    assert_eq!(plan.steps[2].step_number, 3);
    assert_eq!(plan.steps[2].debt_receiving_extra, "C");
    assert!(plan.steps[2].debts_paying_minimum.is_empty());
}

#[test]
fn payoff_in_the_capped_month_stays_in_its_step() {
    // X clears exactly in month 360; Y has no minimum and never moves.
    let debts = vec![
        debt("X", dec!(3600), dec!(0), dec!(10)),
        debt("Y", dec!(500), dec!(0), dec!(0)),
    ];
    let plan = generate_payoff_plan(&debts, &settings(Strategy::Avalanche, dec!(10)), start());

    assert_eq!(plan.months_simulated, MAX_MONTHS);
    assert_eq!(plan.steps.len(), 1);
    let step = &plan.steps[0];
    assert_eq!(step.months, MAX_MONTHS);
    assert_eq!(step.completion_date, ymd(2054, 12, 1));
    assert_eq!(step.milestones_in_step[0].debt_id, "X");
    assert_eq!(step.milestones_in_step[0].payoff_date, ymd(2054, 12, 1));
    assert_eq!(
        plan.warnings,
        vec![PlanWarning::MonthCapReached {
            months: MAX_MONTHS,
            open_debts: vec!["Y".into()],
        }]
    );
}
