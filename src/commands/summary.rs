// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::{calculate_debt_summary, calculate_total_monthly_income};
use crate::profile::ProfileStore;
use crate::utils::{format_currency, format_percent, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &ProfileStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let summary = calculate_debt_summary(&store.profile.debts);
    if maybe_print_json(json_flag, jsonl_flag, &summary)? {
        return Ok(());
    }

    let income = calculate_total_monthly_income(&store.profile.incomes);
    let rows = vec![
        vec!["Debts".into(), summary.debt_count.to_string()],
        vec!["Total balance".into(), format_currency(summary.total_balance)],
        vec![
            "Total minimum payments".into(),
            format_currency(summary.total_minimum_payments),
        ],
        vec![
            "Credit utilization".into(),
            format_percent(summary.credit_utilization, 1),
        ],
        vec!["Paid off so far".into(), format_percent(summary.percent_paid, 1)],
        vec!["Net monthly income".into(), format_currency(income)],
    ];
    println!("{}", pretty_table(&["Metric", "Value"], rows));

    let by_cat = summary
        .debts_by_category
        .iter()
        .map(|(cat, bal)| vec![cat.clone(), format_currency(*bal)])
        .collect();
    println!("{}", pretty_table(&["Category", "Balance"], by_cat));
    Ok(())
}
