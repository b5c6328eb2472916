// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DebtpathError {
    #[error("Unknown strategy '{0}', expected avalanche or snowball")]
    InvalidStrategy(String),

    #[error("Unknown pay frequency '{0}', expected weekly, bi-weekly, semi-monthly or monthly")]
    InvalidFrequency(String),

    #[error("Unknown income type '{0}', expected salary or hourly")]
    InvalidIncomeType(String),

    #[error("Debt '{0}' not found")]
    DebtNotFound(String),

    #[error("Income source '{0}' not found")]
    IncomeNotFound(String),

    #[error("Duplicate id '{0}'")]
    DuplicateId(String),

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: String },

    #[error("Balance {balance} exceeds original balance {original}")]
    BalanceAboveOriginal { balance: String, original: String },

    #[error("Failed to read profile at {path}")]
    ProfileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write profile at {path}")]
    ProfileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed profile at {path}")]
    ProfileFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
