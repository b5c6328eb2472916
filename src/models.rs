// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DebtpathError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: String,
    pub name: String,
    pub category: String,
    pub balance: Decimal,
    pub original_balance: Decimal,
    pub apr: Decimal, // percent, e.g. 24.99
    pub minimum_payment: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeType {
    Salary,
    Hourly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayFrequency {
    Weekly,
    BiWeekly,
    SemiMonthly,
    Monthly,
}

/// Payroll deductions, each a percentage of gross pay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Deductions {
    pub federal_tax: Decimal,
    pub state_tax: Decimal,
    pub medicare: Decimal,
    pub social_security: Decimal,
    pub retirement: Decimal,
    pub other: Decimal,
}

impl Deductions {
    pub fn total_percent(&self) -> Decimal {
        self.federal_tax
            + self.state_tax
            + self.medicare
            + self.social_security
            + self.retirement
            + self.other
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub income_type: IncomeType,
    pub pay_frequency: PayFrequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>, // per paycheck
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_per_week: Option<Decimal>,
    #[serde(default)]
    pub deductions: Deductions,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[default]
    Avalanche,
    Snowball,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Avalanche => "avalanche",
            Strategy::Snowball => "snowball",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = DebtpathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "avalanche" => Ok(Strategy::Avalanche),
            "snowball" => Ok(Strategy::Snowball),
            other => Err(DebtpathError::InvalidStrategy(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecurringFunding {
    pub amount: Decimal, // monthly budget across all debts
}

/// Dated lump sum. Stored with the settings; the simulator does not apply it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneTimeFunding {
    pub date: NaiveDate,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategySettings {
    pub strategy: Strategy,
    pub recurring_funding: RecurringFunding,
    #[serde(default)]
    pub one_time_fundings: Vec<OneTimeFunding>,
}

impl StrategySettings {
    pub fn new(strategy: Strategy, monthly_funding: Decimal) -> Self {
        Self {
            strategy,
            recurring_funding: RecurringFunding {
                amount: monthly_funding,
            },
            one_time_fundings: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Minimum,
    Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRow {
    pub debt_id: String,
    pub amount: Decimal,
    pub principal: Decimal,
    pub interest: Decimal,
    pub remaining_balance: Decimal,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPayment {
    pub month: String, // YYYY-MM
    pub payments: Vec<PaymentRow>,
    pub total_payment: Decimal,
    pub total_principal: Decimal,
    pub total_interest: Decimal,
    pub remaining_balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub debt_id: String,
    pub debt_name: String,
    pub payoff_date: NaiveDate,
    pub total_paid: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffStep {
    pub step_number: u32,
    pub completion_date: NaiveDate,
    pub debt_receiving_extra: String,
    pub debts_paying_minimum: Vec<String>,
    pub milestones_in_step: Vec<Milestone>,
    pub months: u32,
}

/// Non-fatal conditions detected while simulating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PlanWarning {
    /// Monthly funding does not cover the sum of minimum payments.
    #[serde(rename_all = "camelCase")]
    Underfunded {
        funding: Decimal,
        total_minimums: Decimal,
    },
    /// The month cap stopped the run while debts were still open.
    #[serde(rename_all = "camelCase")]
    MonthCapReached { months: u32, open_debts: Vec<String> },
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanWarning::Underfunded {
                funding,
                total_minimums,
            } => write!(
                f,
                "monthly funding {:.2} is below total minimum payments {:.2}",
                funding, total_minimums
            ),
            PlanWarning::MonthCapReached { months, open_debts } => write!(
                f,
                "stopped after {} months with {} debt(s) still open: {}",
                months,
                open_debts.len(),
                open_debts.join(", ")
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffPlan {
    pub strategy: Strategy,
    pub debt_free_date: NaiveDate,
    pub months_simulated: u32,
    pub total_payments: Decimal,
    pub total_interest: Decimal,
    pub steps: Vec<PayoffStep>,
    pub monthly_payments: Vec<MonthlyPayment>,
    #[serde(default)]
    pub warnings: Vec<PlanWarning>,
}

impl PayoffPlan {
    /// False when the month cap cut the run short; `debt_free_date` is then only
    /// the last simulated month.
    pub fn is_debt_free(&self) -> bool {
        !self
            .warnings
            .iter()
            .any(|w| matches!(w, PlanWarning::MonthCapReached { .. }))
    }

    pub fn total_principal(&self) -> Decimal {
        self.monthly_payments
            .iter()
            .map(|m| m.total_principal)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub date: NaiveDate,
    pub payment: Decimal,
    pub principal: Decimal,
    pub interest: Decimal,
    pub balance: Decimal,
}
