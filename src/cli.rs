// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    ]
}

/// Search filters shared by `tx list`, `analytics` and `export`.
fn filter_args() -> Vec<Arg> {
    vec![
        Arg::new("type")
            .long("type")
            .help("Income or Expense"),
        Arg::new("category").long("category"),
        Arg::new("min")
            .long("min")
            .help("Minimum amount"),
        Arg::new("max")
            .long("max")
            .help("Maximum amount"),
        Arg::new("from")
            .long("from")
            .help("Start date YYYY-MM-DD"),
        Arg::new("to")
            .long("to")
            .help("End date YYYY-MM-DD"),
        Arg::new("search")
            .long("search")
            .help("Free-text search term"),
        Arg::new("page")
            .long("page")
            .value_parser(value_parser!(u32))
            .help("Zero-based page number"),
        Arg::new("size")
            .long("size")
            .value_parser(value_parser!(u32).range(1..))
            .help("Page size"),
        Arg::new("sort")
            .long("sort")
            .action(ArgAction::Append)
            .help("FIELD,asc|desc (repeatable)"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("finpulse")
        .version(clap::crate_version!())
        .about("Personal finance tracker client")
        .arg(
            Arg::new("base_url")
                .long("base-url")
                .global(true)
                .help("Backend URL, overrides the config file"),
        )
        .arg(
            Arg::new("token")
                .long("token")
                .env("FINPULSE_TOKEN")
                .hide_env_values(true)
                .global(true)
                .help("Access token from `finpulse login`"),
        )
        .subcommand(
            Command::new("login")
                .about("Sign in and print an access token")
                .arg(Arg::new("username").long("username").required(true))
                .arg(Arg::new("password").long("password").required(true))
                .arg(
                    Arg::new("code")
                        .long("code")
                        .help("Two-factor code")
                        .default_value(""),
                )
                .args(json_args()),
        )
        .subcommand(
            Command::new("register")
                .about("Create an account")
                .arg(Arg::new("username").long("username").required(true))
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("password").long("password").required(true))
                .arg(
                    Arg::new("role")
                        .long("role")
                        .action(ArgAction::Append)
                        .help("Role to request (repeatable, default: user)"),
                )
                .arg(
                    Arg::new("profile_image")
                        .long("profile-image")
                        .help("JPEG file to use as the profile picture"),
                ),
        )
        .subcommand(Command::new("logout").about("End the session on the server"))
        .subcommand(
            Command::new("password")
                .about("Password management")
                .subcommand(
                    Command::new("update")
                        .arg(Arg::new("user_id").long("user-id").required(true))
                        .arg(Arg::new("current").long("current").required(true))
                        .arg(Arg::new("new").long("new").required(true)),
                )
                .subcommand(
                    Command::new("check")
                        .about("Check that a user exists before a reset")
                        .arg(Arg::new("username").long("username").required(true)),
                )
                .subcommand(
                    Command::new("reset")
                        .arg(Arg::new("username").long("username").required(true))
                        .arg(
                            Arg::new("code")
                                .long("code")
                                .required(true)
                                .value_parser(value_parser!(u32)),
                        )
                        .arg(Arg::new("new").long("new").required(true)),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("list")
                        .args(filter_args())
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("type").long("type").required(true))
                        .arg(Arg::new("label").long("label").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("date").long("date").required(true)),
                ),
        )
        .subcommand(
            Command::new("analytics")
                .about("Totals, category breakdown and monthly trend")
                .arg(
                    Arg::new("range")
                        .long("range")
                        .value_parser(["week", "month", "year"])
                        .help("Preset window ending today; overrides --from/--to"),
                )
                .args(filter_args())
                .args(json_args()),
        )
        .subcommand(
            Command::new("import")
                .about("CSV import")
                .subcommand(
                    Command::new("preview").arg(Arg::new("path").long("path").required(true)),
                )
                .subcommand(
                    Command::new("upload").arg(Arg::new("path").long("path").required(true)),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export fetched transactions")
                .subcommand(
                    Command::new("transactions")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .value_parser(["csv", "json"])
                                .default_value("csv"),
                        )
                        .arg(Arg::new("out").long("out").required(true))
                        .arg(
                            Arg::new("all")
                                .long("all")
                                .action(ArgAction::SetTrue)
                                .help("Walk every page instead of only the requested one"),
                        )
                        .args(filter_args()),
                ),
        )
        .subcommand(Command::new("categories").about("List suggested categories"))
        .subcommand(
            Command::new("config")
                .about("Client settings")
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("set-url").arg(Arg::new("url").required(true)),
                )
                .subcommand(
                    Command::new("set-page-size").arg(
                        Arg::new("size")
                            .required(true)
                            .value_parser(value_parser!(u32).range(1..)),
                    ),
                ),
        )
}
