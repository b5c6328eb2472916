// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Datelike, Months, NaiveDate};
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::Strategy;

/// Rounds a monetary value to cents, halves away from zero.
pub fn round_money(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn parse_strategy(s: &str) -> Result<Strategy> {
    Ok(s.parse::<Strategy>()?)
}

/// `date` moved forward by `n` calendar months, day clamped to the month's end.
/// Saturates at `NaiveDate::MAX`.
pub fn add_months(date: NaiveDate, n: u32) -> NaiveDate {
    date.checked_add_months(Months::new(n))
        .unwrap_or(NaiveDate::MAX)
}

pub fn format_month(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Whole calendar months from `start` to `end`; negative when `end` is earlier.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32
}

pub fn format_duration(months: i32) -> String {
    let months = months.max(0);
    let (years, rest) = (months / 12, months % 12);
    let unit = |n: i32, one: &str, many: &str| {
        format!("{} {}", n, if n == 1 { one } else { many })
    };
    match (years, rest) {
        (0, r) => unit(r, "month", "months"),
        (y, 0) => unit(y, "year", "years"),
        (y, r) => format!("{} {}", unit(y, "year", "years"), unit(r, "month", "months")),
    }
}

pub fn format_percent(d: Decimal, places: u32) -> String {
    let v = d.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}%", places as usize, v)
}

/// en-US currency string: `$1,234.56`, negatives as `-$1,234.56`.
pub fn format_currency(d: Decimal) -> String {
    let v = round_money(d);
    let sign = if v.is_sign_negative() && !v.is_zero() { "-" } else { "" };
    let text = format!("{:.2}", v.abs());
    let (whole, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}${}.{}", sign, grouped, frac)
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays stream one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
