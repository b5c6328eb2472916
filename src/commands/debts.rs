// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Debt;
use crate::profile::ProfileStore;
use crate::utils::{format_currency, format_percent, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;

pub fn handle(store: &mut ProfileStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("rm", sub)) => remove(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &mut ProfileStore, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let category = sub
        .get_one::<String>("category")
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_else(|| "other".into());
    let balance = parse_decimal(sub.get_one::<String>("balance").unwrap())?;
    let original_balance = match sub.get_one::<String>("original") {
        Some(raw) => parse_decimal(raw)?,
        None => balance,
    };
    let apr = parse_decimal(sub.get_one::<String>("apr").unwrap())?;
    let minimum_payment = parse_decimal(sub.get_one::<String>("minimum").unwrap())?;
    let credit_limit = match sub.get_one::<String>("limit") {
        Some(raw) => Some(parse_decimal(raw)?),
        None => None,
    };
    let id = match sub.get_one::<String>("id") {
        Some(raw) => raw.trim().to_string(),
        None => store.profile.next_id("debt"),
    };

    store.profile.add_debt(Debt {
        id: id.clone(),
        name: name.clone(),
        category,
        balance,
        original_balance,
        apr,
        minimum_payment,
        credit_limit,
    })?;
    store.save()?;
    println!("Added debt {} ({}) balance {} @ {}% APR", id, name, balance, apr);
    Ok(())
}

fn list(store: &ProfileStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let debts = &store.profile.debts;
    if !maybe_print_json(json_flag, jsonl_flag, debts)? {
        let rows = debts
            .iter()
            .map(|d| {
                vec![
                    d.id.clone(),
                    d.name.clone(),
                    d.category.clone(),
                    format_currency(d.balance),
                    format_percent(d.apr, 2),
                    format_currency(d.minimum_payment),
                    d.credit_limit.map(format_currency).unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Name", "Category", "Balance", "APR", "Minimum", "Limit"],
                rows
            )
        );
    }
    Ok(())
}

fn remove(store: &mut ProfileStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap().trim();
    let removed = store.profile.remove_debt(id)?;
    store.save()?;
    println!("Removed debt {} ({})", removed.id, removed.name);
    Ok(())
}
