// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Installs the stderr subscriber. Filter comes from `DEBTPATH_LOG`
/// (e.g. `DEBTPATH_LOG=debtpath=debug`), defaulting to `warn`.
///
/// Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("DEBTPATH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
