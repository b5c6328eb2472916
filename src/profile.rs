// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DebtpathError;
use crate::models::{Debt, IncomeSource, StrategySettings};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.debtpath", "Debtpath", "debtpath"));

pub const PROFILE_ENV: &str = "DEBTPATH_PROFILE";

/// Everything the planner knows about one household.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub debts: Vec<Debt>,
    pub incomes: Vec<IncomeSource>,
    pub settings: StrategySettings,
}

impl Profile {
    pub fn debt(&self, id: &str) -> Result<&Debt, DebtpathError> {
        self.debts
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| DebtpathError::DebtNotFound(id.to_string()))
    }

    pub fn add_debt(&mut self, debt: Debt) -> Result<(), DebtpathError> {
        if self.debts.iter().any(|d| d.id == debt.id) {
            return Err(DebtpathError::DuplicateId(debt.id));
        }
        for (field, value) in [
            ("balance", debt.balance),
            ("original balance", debt.original_balance),
            ("apr", debt.apr),
            ("minimum payment", debt.minimum_payment),
        ] {
            non_negative(field, value)?;
        }
        if debt.balance > debt.original_balance {
            return Err(DebtpathError::BalanceAboveOriginal {
                balance: debt.balance.to_string(),
                original: debt.original_balance.to_string(),
            });
        }
        self.debts.push(debt);
        Ok(())
    }

    pub fn remove_debt(&mut self, id: &str) -> Result<Debt, DebtpathError> {
        let pos = self
            .debts
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| DebtpathError::DebtNotFound(id.to_string()))?;
        Ok(self.debts.remove(pos))
    }

    pub fn add_income(&mut self, income: IncomeSource) -> Result<(), DebtpathError> {
        if self.incomes.iter().any(|s| s.id == income.id) {
            return Err(DebtpathError::DuplicateId(income.id));
        }
        self.incomes.push(income);
        Ok(())
    }

    pub fn remove_income(&mut self, id: &str) -> Result<IncomeSource, DebtpathError> {
        let pos = self
            .incomes
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| DebtpathError::IncomeNotFound(id.to_string()))?;
        Ok(self.incomes.remove(pos))
    }

    /// First `<prefix>-N` not already used by a debt or income source.
    pub fn next_id(&self, prefix: &str) -> String {
        (1..)
            .map(|n| format!("{}-{}", prefix, n))
            .find(|id| {
                !self.debts.iter().any(|d| &d.id == id)
                    && !self.incomes.iter().any(|s| &s.id == id)
            })
            .unwrap_or_else(|| prefix.to_string())
    }
}

pub(crate) fn non_negative(field: &'static str, value: Decimal) -> Result<(), DebtpathError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(DebtpathError::Negative {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

/// A profile bound to the file it was read from.
#[derive(Debug)]
pub struct ProfileStore {
    pub path: PathBuf,
    pub profile: Profile,
}

impl ProfileStore {
    /// Reads `path`; a missing file yields an empty profile.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DebtpathError> {
        let path = path.into();
        let profile = match fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).map_err(|source| {
                DebtpathError::ProfileFormat {
                    path: path.clone(),
                    source,
                }
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => Profile::default(),
            Err(source) => return Err(DebtpathError::ProfileRead { path, source }),
        };
        Ok(Self { path, profile })
    }

    pub fn save(&self) -> Result<(), DebtpathError> {
        let write_err = |source: std::io::Error| DebtpathError::ProfileWrite {
            path: self.path.clone(),
            source,
        };
        if let Some(dir) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(write_err)?;
        }
        let text = serde_json::to_string_pretty(&self.profile).map_err(|source| {
            DebtpathError::ProfileFormat {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, text).map_err(write_err)
    }
}

pub fn default_profile_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().join("profile.json"))
}

/// `--profile` wins, then `DEBTPATH_PROFILE`, then the platform data dir.
pub fn resolve_profile_path(explicit: Option<&str>) -> Result<PathBuf> {
    if let Some(p) = explicit.map(str::trim).filter(|p| !p.is_empty()) {
        return Ok(Path::new(p).to_path_buf());
    }
    match std::env::var(PROFILE_ENV) {
        Ok(p) if !p.trim().is_empty() => Ok(PathBuf::from(p.trim())),
        _ => default_profile_path(),
    }
}
