// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use crate::commands::plan::plan_from_args;
use crate::models::{PayoffPlan, PaymentType};
use crate::profile::ProfileStore;
use anyhow::{Context, Result};

pub fn handle(store: &ProfileStore, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap().trim();
    let plan = plan_from_args(store, sub)?;

    match fmt.as_str() {
        "csv" => write_csv(&plan, Path::new(out))?,
        "json" => write_json(&plan, Path::new(out))?,
        _ => anyhow::bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!(
        "Exported {} months of payments to {}",
        plan.monthly_payments.len(),
        out
    );
    Ok(())
}

/// One CSV record per debt per month.
pub fn write_csv(plan: &PayoffPlan, out: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out)
        .with_context(|| format!("Create {}", out.display()))?;
    wtr.write_record([
        "month",
        "debt_id",
        "type",
        "amount",
        "principal",
        "interest",
        "remaining_balance",
    ])?;
    for m in &plan.monthly_payments {
        for p in &m.payments {
            let kind = match p.payment_type {
                PaymentType::Minimum => "minimum",
                PaymentType::Extra => "extra",
            };
            wtr.write_record([
                m.month.clone(),
                p.debt_id.clone(),
                kind.to_string(),
                format!("{:.2}", p.amount),
                format!("{:.2}", p.principal),
                format!("{:.2}", p.interest),
                format!("{:.2}", p.remaining_balance),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json(plan: &PayoffPlan, out: &Path) -> Result<()> {
    std::fs::write(out, serde_json::to_string_pretty(plan)?)
        .with_context(|| format!("Write {}", out.display()))?;
    Ok(())
}
