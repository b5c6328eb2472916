// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::calculate_total_monthly_income;
use crate::models::OneTimeFunding;
use crate::profile::{ProfileStore, non_negative};
use crate::utils::{format_currency, parse_date, parse_decimal, parse_strategy, pretty_table};
use anyhow::Result;

pub fn handle(store: &mut ProfileStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => show(store)?,
        Some(("set", sub)) => set(store, sub)?,
        Some(("add-once", sub)) => add_once(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn show(store: &ProfileStore) -> Result<()> {
    let s = &store.profile.settings;
    println!("Strategy:        {}", s.strategy);
    println!("Monthly funding: {}", format_currency(s.recurring_funding.amount));
    if !s.one_time_fundings.is_empty() {
        let rows = s
            .one_time_fundings
            .iter()
            .map(|f| {
                vec![
                    f.date.to_string(),
                    format_currency(f.amount),
                    f.note.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Date", "One-time amount", "Note"], rows));
    }
    Ok(())
}

fn set(store: &mut ProfileStore, sub: &clap::ArgMatches) -> Result<()> {
    if let Some(raw) = sub.get_one::<String>("strategy") {
        store.profile.settings.strategy = parse_strategy(raw)?;
    }
    if let Some(raw) = sub.get_one::<String>("funding") {
        let amount = parse_decimal(raw)?;
        non_negative("funding", amount)?;
        store.profile.settings.recurring_funding.amount = amount;
    } else if sub.get_flag("from-income") {
        store.profile.settings.recurring_funding.amount =
            calculate_total_monthly_income(&store.profile.incomes);
    }
    store.save()?;
    let s = &store.profile.settings;
    println!(
        "Strategy {} with {} per month",
        s.strategy,
        format_currency(s.recurring_funding.amount)
    );
    Ok(())
}

fn add_once(store: &mut ProfileStore, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    non_negative("amount", amount)?;
    let note = sub.get_one::<String>("note").map(|s| s.trim().to_string());
    store.profile.settings.one_time_fundings.push(OneTimeFunding { date, amount, note });
    store
        .profile
        .settings
        .one_time_fundings
        .sort_by_key(|f| f.date);
    store.save()?;
    println!("Recorded one-time funding of {} on {}", format_currency(amount), date);
    Ok(())
}
