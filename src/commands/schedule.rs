// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::{MAX_MONTHS, generate_amortization};
use crate::models::AmortizationRow;
use crate::profile::ProfileStore;
use crate::utils::{
    format_currency, format_duration, maybe_print_json, months_between, parse_date, parse_decimal,
    pretty_table,
};
use anyhow::Result;
use rust_decimal::Decimal;

pub fn schedule_rows(store: &ProfileStore, sub: &clap::ArgMatches) -> Result<Vec<AmortizationRow>> {
    let debt = store
        .profile
        .debt(sub.get_one::<String>("debt").unwrap().trim())?;
    let payment = match sub.get_one::<String>("payment") {
        Some(raw) => parse_decimal(raw)?,
        None => debt.minimum_payment,
    };
    let start = match sub.get_one::<String>("start") {
        Some(raw) => parse_date(raw)?,
        None => chrono::Local::now().date_naive(),
    };
    Ok(generate_amortization(debt, payment, start))
}

pub fn handle(store: &ProfileStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let rows = schedule_rows(store, sub)?;
    if maybe_print_json(json_flag, jsonl_flag, &rows)? {
        return Ok(());
    }

    let total_interest: Decimal = rows.iter().map(|r| r.interest).sum();
    let paid_off = rows.last().is_some_and(|r| r.balance.is_zero());
    let data = rows
        .iter()
        .map(|r| {
            vec![
                r.date.to_string(),
                format_currency(r.payment),
                format_currency(r.principal),
                format_currency(r.interest),
                format_currency(r.balance),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Date", "Payment", "Principal", "Interest", "Balance"], data)
    );
    println!(
        "{} payments, {} interest",
        rows.len(),
        format_currency(total_interest)
    );
    match (rows.first(), rows.last()) {
        (Some(first), Some(last)) if paid_off => println!(
            "Paid off {} after {}",
            last.date,
            format_duration(months_between(first.date, last.date) + 1)
        ),
        _ if rows.len() as u32 >= MAX_MONTHS => {
            println!("warning: balance not cleared within {} months", MAX_MONTHS)
        }
        _ => {}
    }
    Ok(())
}
