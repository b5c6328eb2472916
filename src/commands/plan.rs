// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::generate_payoff_plan;
use crate::models::{PaymentType, PayoffPlan, Strategy, StrategySettings};
use crate::profile::ProfileStore;
use crate::utils::{
    format_currency, format_duration, format_month, maybe_print_json, parse_date, parse_decimal,
    parse_strategy, pretty_table,
};
use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Saved settings with any `--strategy`/`--funding`/`--start` overrides applied.
pub fn settings_from_args(
    store: &ProfileStore,
    sub: &clap::ArgMatches,
) -> Result<(StrategySettings, NaiveDate)> {
    let mut settings = store.profile.settings.clone();
    if let Ok(Some(raw)) = sub.try_get_one::<String>("strategy") {
        settings.strategy = parse_strategy(raw)?;
    }
    if let Ok(Some(raw)) = sub.try_get_one::<String>("funding") {
        settings.recurring_funding.amount = parse_decimal(raw)?;
    }
    let start = match sub.try_get_one::<String>("start") {
        Ok(Some(raw)) => parse_date(raw)?,
        _ => chrono::Local::now().date_naive(),
    };
    Ok((settings, start))
}

pub fn plan_from_args(store: &ProfileStore, sub: &clap::ArgMatches) -> Result<PayoffPlan> {
    let (settings, start) = settings_from_args(store, sub)?;
    Ok(generate_payoff_plan(&store.profile.debts, &settings, start))
}

pub fn handle(store: &ProfileStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let months: usize = *sub.get_one::<usize>("months").unwrap_or(&12);
    let plan = plan_from_args(store, sub)?;
    if maybe_print_json(json_flag, jsonl_flag, &plan)? {
        return Ok(());
    }
    print_plan(store, &plan, months);
    Ok(())
}

fn debt_name(store: &ProfileStore, id: &str) -> String {
    store
        .profile
        .debt(id)
        .map(|d| d.name.clone())
        .unwrap_or_else(|_| id.to_string())
}

fn print_plan(store: &ProfileStore, plan: &PayoffPlan, months: usize) {
    if plan.monthly_payments.is_empty() {
        println!("No open debts. Nothing to plan.");
        return;
    }

    let steps = plan
        .steps
        .iter()
        .map(|s| {
            vec![
                s.step_number.to_string(),
                debt_name(store, &s.debt_receiving_extra),
                s.debts_paying_minimum
                    .iter()
                    .map(|id| debt_name(store, id))
                    .collect::<Vec<_>>()
                    .join(", "),
                s.milestones_in_step
                    .iter()
                    .map(|m| m.debt_name.clone())
                    .collect::<Vec<_>>()
                    .join(", "),
                format_month(s.completion_date),
                format_duration(s.months as i32),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Step", "Focus", "Paying minimum", "Paid off", "Completes", "Length"],
            steps
        )
    );

    let rows = plan
        .monthly_payments
        .iter()
        .take(months)
        .map(|m| {
            let focus = m
                .payments
                .iter()
                .find(|p| p.payment_type == PaymentType::Extra)
                .map(|p| debt_name(store, &p.debt_id))
                .unwrap_or_default();
            vec![
                m.month.clone(),
                format_currency(m.total_payment),
                format_currency(m.total_principal),
                format_currency(m.total_interest),
                format_currency(m.remaining_balance),
                focus,
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Month", "Paid", "Principal", "Interest", "Remaining", "Extra to"],
            rows
        )
    );

    println!(
        "Debt-free: {} ({}) using {}",
        format_month(plan.debt_free_date),
        format_duration(plan.months_simulated as i32),
        plan.strategy
    );
    println!(
        "Total paid {} of which interest {}",
        format_currency(plan.total_payments),
        format_currency(plan.total_interest)
    );
    for w in &plan.warnings {
        println!("warning: {}", w);
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyComparison {
    pub avalanche: ComparisonRow,
    pub snowball: ComparisonRow,
    /// Snowball interest minus avalanche interest.
    pub interest_saved_by_avalanche: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub debt_free_date: NaiveDate,
    pub months: u32,
    pub total_payments: Decimal,
    pub total_interest: Decimal,
    pub first_focus: Option<String>,
    pub debt_free: bool,
}

impl From<&PayoffPlan> for ComparisonRow {
    fn from(plan: &PayoffPlan) -> Self {
        Self {
            debt_free_date: plan.debt_free_date,
            months: plan.months_simulated,
            total_payments: plan.total_payments,
            total_interest: plan.total_interest,
            first_focus: plan.steps.first().map(|s| s.debt_receiving_extra.clone()),
            debt_free: plan.is_debt_free(),
        }
    }
}

pub fn compare_strategies(store: &ProfileStore, sub: &clap::ArgMatches) -> Result<StrategyComparison> {
    let (mut settings, start) = settings_from_args(store, sub)?;
    let debts = &store.profile.debts;

    settings.strategy = Strategy::Avalanche;
    let avalanche = generate_payoff_plan(debts, &settings, start);
    settings.strategy = Strategy::Snowball;
    let snowball = generate_payoff_plan(debts, &settings, start);

    Ok(StrategyComparison {
        interest_saved_by_avalanche: snowball.total_interest - avalanche.total_interest,
        avalanche: ComparisonRow::from(&avalanche),
        snowball: ComparisonRow::from(&snowball),
    })
}

pub fn compare(store: &ProfileStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let cmp = compare_strategies(store, sub)?;
    if maybe_print_json(json_flag, jsonl_flag, &cmp)? {
        return Ok(());
    }
    let row = |label: &str, r: &ComparisonRow| {
        vec![
            label.to_string(),
            r.first_focus
                .as_deref()
                .map(|id| debt_name(store, id))
                .unwrap_or_default(),
            format_month(r.debt_free_date),
            format_duration(r.months as i32),
            format_currency(r.total_payments),
            format_currency(r.total_interest),
            if r.debt_free { "yes".into() } else { "no".into() },
        ]
    };
    println!(
        "{}",
        pretty_table(
            &["Strategy", "First focus", "Debt-free", "Length", "Total paid", "Interest", "Completes"],
            vec![row("avalanche", &cmp.avalanche), row("snowball", &cmp.snowball)]
        )
    );
    println!(
        "Avalanche saves {} in interest",
        format_currency(cmp.interest_saved_by_avalanche)
    );
    Ok(())
}
