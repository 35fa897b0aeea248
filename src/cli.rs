// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn status_arg() -> Arg {
    Arg::new("status")
        .long("status")
        .default_value("all")
        .value_parser(["all", "paid", "inquiry", "cancelled"])
        .help("Booking status filter")
}

fn search_arg() -> Arg {
    Arg::new("search")
        .long("search")
        .help("Case-insensitive match on guest name or property")
}

fn category_arg() -> Arg {
    Arg::new("category")
        .long("category")
        .default_value("all")
        .help("Expense category filter, or 'all'")
}

fn platform_id_arg() -> Arg {
    Arg::new("id").long("id").required(true).help("Platform id")
}

pub fn build_cli() -> Command {
    Command::new("hostboard")
        .about("Short-term rental dashboard: bookings, finances, and booking platforms")
        .version(clap::crate_version!())
        .arg(
            Arg::new("fixtures")
                .long("fixtures")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Seed JSON file to load instead of the configured or built-in data"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Config file (defaults to the per-user config.json)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log output (-v info, -vv debug)"),
        )
        .subcommand(json_flags(
            Command::new("summary").about("Overview cards and platform distribution"),
        ))
        .subcommand(
            Command::new("bookings")
                .about("Bookings across all platforms")
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List bookings")
                        .arg(status_arg())
                        .arg(search_arg()),
                )),
        )
        .subcommand(
            Command::new("finance")
                .about("Earnings and expenses")
                .subcommand(json_flags(
                    Command::new("summary").about("Total earnings, expenses and net profit"),
                ))
                .subcommand(json_flags(Command::new("earnings").about("List earnings")))
                .subcommand(json_flags(
                    Command::new("expenses")
                        .about("List expenses")
                        .arg(category_arg()),
                ))
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .value_parser(["earning", "expense"]),
                        )
                        .arg(Arg::new("date").long("date").required(true).help("YYYY-MM-DD"))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .help("Required for expenses"),
                        ),
                ),
        )
        .subcommand(
            Command::new("platforms")
                .about("Booking platform connections")
                .subcommand(json_flags(Command::new("list").about("List platforms")))
                .subcommand(
                    Command::new("toggle")
                        .about("Connect or disconnect a platform")
                        .arg(platform_id_arg()),
                )
                .subcommand(
                    Command::new("auto-sync")
                        .about("Flip auto sync on a connected platform")
                        .arg(platform_id_arg()),
                )
                .subcommand(
                    Command::new("add")
                        .about("Register a platform")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("auto-sync")
                                .long("auto-sync")
                                .action(ArgAction::SetTrue),
                        ),
                )
                .subcommand(
                    Command::new("sync")
                        .about("Sync all connected platforms")
                        .arg(
                            Arg::new("wait")
                                .long("wait")
                                .action(ArgAction::SetTrue)
                                .help("Block until the sync completes"),
                        ),
                ),
        )
        .subcommand(
            Command::new("listings")
                .about("Listings per platform")
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List listings")
                        .arg(Arg::new("platform").long("platform").help("Platform id")),
                )),
        )
        .subcommand(
            Command::new("cloud")
                .about("Cloud storage settings")
                .subcommand(json_flags(Command::new("status").about("Show settings")))
                .subcommand(Command::new("toggle").about("Enable or disable cloud storage"))
                .subcommand(
                    Command::new("provider").about("Choose a provider").arg(
                        Arg::new("name")
                            .long("name")
                            .required(true)
                            .value_parser(["google-drive", "dropbox", "onedrive", "icloud"]),
                    ),
                )
                .subcommand(Command::new("auto-backup").about("Flip automatic backups"))
                .subcommand(
                    Command::new("frequency").about("Set backup frequency").arg(
                        Arg::new("value")
                            .long("value")
                            .required(true)
                            .value_parser(["hourly", "daily", "weekly"]),
                    ),
                )
                .subcommand(Command::new("reset").about("Restore default settings")),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(export_cmd("bookings").arg(status_arg()).arg(search_arg()))
                .subcommand(export_cmd("earnings"))
                .subcommand(export_cmd("expenses").arg(category_arg())),
        )
        .subcommand(Command::new("doctor").about("Check data integrity"))
        .subcommand(Command::new("shell").about("Interactive session that keeps state between commands"))
}

fn export_cmd(name: &'static str) -> Command {
    Command::new(name)
        .arg(
            Arg::new("format")
                .long("format")
                .default_value("csv")
                .value_parser(["csv", "json"]),
        )
        .arg(Arg::new("out").long("out").required(true))
}
