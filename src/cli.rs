// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON document per line"),
    )
}

fn plan_overrides(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("strategy")
            .long("strategy")
            .value_parser(["avalanche", "snowball"])
            .help("Override the saved strategy"),
    )
    .arg(
        Arg::new("funding")
            .long("funding")
            .help("Override the saved monthly funding amount"),
    )
    .arg(
        Arg::new("start")
            .long("start")
            .help("First simulated month as YYYY-MM-DD (default: today)"),
    )
}

pub fn build_cli() -> Command {
    Command::new("debtpath")
        .version(crate_version!())
        .about("Debt payoff planner: avalanche/snowball projections, amortization and budgets")
        .arg(
            Arg::new("profile")
                .long("profile")
                .global(true)
                .help("Profile JSON file (default: $DEBTPATH_PROFILE or the platform data dir)"),
        )
        .subcommand(Command::new("init").about("Create an empty profile"))
        .subcommand(
            Command::new("debt")
                .about("Manage debts")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("id").long("id").help("Defaults to debt-N"))
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("category").long("category").default_value("other"))
                        .arg(Arg::new("balance").long("balance").required(true))
                        .arg(
                            Arg::new("original")
                                .long("original")
                                .help("Original principal (default: balance)"),
                        )
                        .arg(Arg::new("apr").long("apr").required(true))
                        .arg(Arg::new("minimum").long("minimum").required(true))
                        .arg(Arg::new("limit").long("limit").help("Credit limit")),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(Command::new("rm").arg(Arg::new("id").long("id").required(true))),
        )
        .subcommand(
            Command::new("income")
                .about("Manage income sources")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("id").long("id").help("Defaults to income-N"))
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["salary", "hourly"])
                                .default_value("salary"),
                        )
                        .arg(
                            Arg::new("frequency")
                                .long("frequency")
                                .value_parser(["weekly", "bi-weekly", "semi-monthly", "monthly"])
                                .default_value("monthly"),
                        )
                        .arg(Arg::new("amount").long("amount").help("Gross pay per paycheck"))
                        .arg(Arg::new("rate").long("rate").help("Hourly rate"))
                        .arg(Arg::new("hours").long("hours").help("Hours per week"))
                        .arg(Arg::new("federal").long("federal").help("Federal tax %"))
                        .arg(Arg::new("state").long("state").help("State tax %"))
                        .arg(Arg::new("medicare").long("medicare").help("Medicare %"))
                        .arg(
                            Arg::new("social-security")
                                .long("social-security")
                                .help("Social security %"),
                        )
                        .arg(Arg::new("retirement").long("retirement").help("Retirement %"))
                        .arg(Arg::new("other").long("other").help("Other deductions %")),
                )
                .subcommand(json_flags(Command::new("list")))
                .subcommand(Command::new("rm").arg(Arg::new("id").long("id").required(true)))
                .subcommand(Command::new("total")),
        )
        .subcommand(
            Command::new("strategy")
                .about("Payoff strategy and monthly funding")
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set")
                        .arg(
                            Arg::new("strategy")
                                .long("strategy")
                                .value_parser(["avalanche", "snowball"]),
                        )
                        .arg(Arg::new("funding").long("funding").help("Monthly budget for debts"))
                        .arg(
                            Arg::new("from-income")
                                .long("from-income")
                                .action(ArgAction::SetTrue)
                                .conflicts_with("funding")
                                .help("Use total net monthly income as the funding amount"),
                        ),
                )
                .subcommand(
                    Command::new("add-once")
                        .arg(Arg::new("date").long("date").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("note").long("note")),
                ),
        )
        .subcommand(json_flags(
            Command::new("summary").about("Balances, utilization and progress"),
        ))
        .subcommand(json_flags(plan_overrides(
            Command::new("plan")
                .about("Project the month-by-month payoff plan")
                .arg(
                    Arg::new("months")
                        .long("months")
                        .value_parser(value_parser!(usize))
                        .default_value("12")
                        .help("Monthly rows to show"),
                ),
        )))
        .subcommand(json_flags(
            Command::new("compare")
                .about("Avalanche vs snowball")
                .arg(Arg::new("funding").long("funding"))
                .arg(Arg::new("start").long("start")),
        ))
        .subcommand(json_flags(
            Command::new("schedule")
                .about("Amortization schedule for one debt")
                .arg(Arg::new("debt").long("debt").required(true))
                .arg(
                    Arg::new("payment")
                        .long("payment")
                        .help("Monthly payment (default: the debt's minimum)"),
                )
                .arg(Arg::new("start").long("start")),
        ))
        .subcommand(plan_overrides(
            Command::new("export")
                .about("Write the payoff plan to a file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["csv", "json"])
                        .default_value("csv"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        ))
        .subcommand(Command::new("doctor").about("Check the profile for problems"))
}
