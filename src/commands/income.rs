// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::{
    calculate_gross_monthly_income, calculate_net_monthly_income, calculate_total_monthly_income,
};
use crate::error::DebtpathError;
use crate::models::{Deductions, IncomeSource, IncomeType, PayFrequency};
use crate::profile::{ProfileStore, non_negative};
use crate::utils::{format_currency, format_percent, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(store: &mut ProfileStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        Some(("total", _)) => total(store)?,
        _ => {}
    }
    Ok(())
}

pub fn parse_income_type(s: &str) -> Result<IncomeType, DebtpathError> {
    match s.trim().to_lowercase().as_str() {
        "salary" => Ok(IncomeType::Salary),
        "hourly" => Ok(IncomeType::Hourly),
        other => Err(DebtpathError::InvalidIncomeType(other.to_string())),
    }
}

pub fn parse_frequency(s: &str) -> Result<PayFrequency, DebtpathError> {
    match s.trim().to_lowercase().as_str() {
        "weekly" => Ok(PayFrequency::Weekly),
        "bi-weekly" | "biweekly" => Ok(PayFrequency::BiWeekly),
        "semi-monthly" | "semimonthly" => Ok(PayFrequency::SemiMonthly),
        "monthly" => Ok(PayFrequency::Monthly),
        other => Err(DebtpathError::InvalidFrequency(other.to_string())),
    }
}

fn optional_decimal(sub: &clap::ArgMatches, name: &str) -> Result<Option<Decimal>> {
    match sub.get_one::<String>(name) {
        Some(raw) => Ok(Some(parse_decimal(raw)?)),
        None => Ok(None),
    }
}

fn percent(sub: &clap::ArgMatches, name: &'static str) -> Result<Decimal> {
    let v = optional_decimal(sub, name)?.unwrap_or(Decimal::ZERO);
    non_negative(name, v)?;
    Ok(v)
}

fn add(store: &mut ProfileStore, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let income_type = parse_income_type(sub.get_one::<String>("type").unwrap())?;
    let pay_frequency = parse_frequency(sub.get_one::<String>("frequency").unwrap())?;
    let deductions = Deductions {
        federal_tax: percent(sub, "federal")?,
        state_tax: percent(sub, "state")?,
        medicare: percent(sub, "medicare")?,
        social_security: percent(sub, "social-security")?,
        retirement: percent(sub, "retirement")?,
        other: percent(sub, "other")?,
    };
    let id = match sub.get_one::<String>("id") {
        Some(raw) => raw.trim().to_string(),
        None => store.profile.next_id("income"),
    };

    let source = IncomeSource {
        id: id.clone(),
        name: name.clone(),
        income_type,
        pay_frequency,
        amount: optional_decimal(sub, "amount")?,
        hourly_rate: optional_decimal(sub, "rate")?,
        hours_per_week: optional_decimal(sub, "hours")?,
        deductions,
    };
    let net = calculate_net_monthly_income(&source);
    store.profile.add_income(source)?;
    store.save()?;
    println!("Added income {} ({}) net {} / month", id, name, format_currency(net));
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct IncomeRow {
    pub id: String,
    pub name: String,
    pub gross_monthly: Decimal,
    pub deductions_percent: Decimal,
    pub net_monthly: Decimal,
}

pub fn income_rows(sources: &[IncomeSource]) -> Vec<IncomeRow> {
    sources
        .iter()
        .map(|s| IncomeRow {
            id: s.id.clone(),
            name: s.name.clone(),
            gross_monthly: calculate_gross_monthly_income(s),
            deductions_percent: s.deductions.total_percent(),
            net_monthly: calculate_net_monthly_income(s),
        })
        .collect()
}

fn list(store: &ProfileStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = income_rows(&store.profile.incomes);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.name.clone(),
                    format_currency(r.gross_monthly),
                    format_percent(r.deductions_percent, 2),
                    format_currency(r.net_monthly),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Name", "Gross / mo", "Deductions", "Net / mo"], rows)
        );
    }
    Ok(())
}

fn remove(store: &mut ProfileStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    let removed = store.profile.remove_income(id)?;
    store.save()?;
    println!("Removed income {} ({})", removed.id, removed.name);
    Ok(())
}

fn total(store: &ProfileStore) -> Result<()> {
    let total = calculate_total_monthly_income(&store.profile.incomes);
    println!("Total net monthly income: {}", format_currency(total));
    Ok(())
}
