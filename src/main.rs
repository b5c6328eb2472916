// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use debtpath::{cli, commands, logging, profile};

fn main() -> Result<()> {
    logging::init_tracing();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let path = profile::resolve_profile_path(
        matches.get_one::<String>("profile").map(|s| s.as_str()),
    )?;
    let mut store = profile::ProfileStore::open(&path)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            store.save()?;
            println!("Profile initialized at {}", store.path.display());
        }
        Some(("debt", sub)) => commands::debts::handle(&mut store, sub)?,
        Some(("income", sub)) => commands::income::handle(&mut store, sub)?,
        Some(("strategy", sub)) => commands::strategy::handle(&mut store, sub)?,
        Some(("summary", sub)) => commands::summary::handle(&store, sub)?,
        Some(("plan", sub)) => commands::plan::handle(&store, sub)?,
        Some(("compare", sub)) => commands::plan::compare(&store, sub)?,
        Some(("schedule", sub)) => commands::schedule::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
