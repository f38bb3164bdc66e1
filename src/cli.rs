// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{arg, command, Arg, ArgAction, Command};

/// Top-level invocation: options only, then the interactive session opens.
pub fn build_cli() -> Command {
    command!()
        .about("Outlay: personal expense tracking, category breakdowns, and summary reports")
        .arg(
            arg!(--api <URL> "Base URL of the auth service (falls back to OUTLAY_API_URL)")
                .required(false),
        )
        .arg(arg!(--demo "Seed the session with demo expenses").action(ArgAction::SetTrue))
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(arg!(--json "Print as pretty JSON").action(ArgAction::SetTrue))
        .arg(arg!(--jsonl "Print as JSON lines").action(ArgAction::SetTrue))
}

/// Commands accepted inside the interactive session.
pub fn build_shell() -> Command {
    Command::new("outlay")
        .no_binary_name(true)
        .disable_version_flag(true)
        .subcommand(
            Command::new("expense")
                .about("Create, edit, delete, and list expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record a new expense")
                        .arg(arg!(--title <TITLE> "Expense title").required(true))
                        .arg(
                            arg!(--amount <AMOUNT> "Amount, e.g. 12.50")
                                .required(true)
                                .allow_hyphen_values(true),
                        )
                        .arg(arg!(--category <CATEGORY> "Spending category").required(true))
                        .arg(arg!(--date <DATE> "Date, YYYY-MM-DD").required(true)),
                )
                .subcommand(
                    Command::new("edit")
                        .about("Replace the fields of an existing expense")
                        .arg(arg!(--id <ID> "Expense id").required(true))
                        .arg(arg!(--title <TITLE> "Expense title").required(true))
                        .arg(
                            arg!(--amount <AMOUNT> "Amount, e.g. 12.50")
                                .required(true)
                                .allow_hyphen_values(true),
                        )
                        .arg(arg!(--category <CATEGORY> "Spending category").required(true))
                        .arg(arg!(--date <DATE> "Date, YYYY-MM-DD").required(true)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete an expense")
                        .arg(arg!(--id <ID> "Expense id").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List expenses")
                        .arg(arg!(--category <CATEGORY> "Only this category").required(false))
                        .arg(
                            Arg::new("sort")
                                .long("sort")
                                .value_parser(["amount", "date"])
                                .help("Sort key (insertion order when omitted)"),
                        )
                        .arg(arg!(--desc "Sort descending").action(ArgAction::SetTrue)),
                )),
        )
        .subcommand(json_flags(
            Command::new("summary")
                .about("Total, average, and top category")
                .arg(arg!(--category <CATEGORY> "Only this category").required(false)),
        ))
        .subcommand(json_flags(
            Command::new("chart")
                .about("Per-category breakdown with percentages")
                .arg(arg!(--category <CATEGORY> "Only this category").required(false)),
        ))
        .subcommand(
            Command::new("auth")
                .about("Account operations against the auth service")
                .subcommand(
                    Command::new("login")
                        .arg(arg!(--email <EMAIL>).required(true))
                        .arg(arg!(--password <PASSWORD>).required(true)),
                )
                .subcommand(
                    Command::new("register")
                        .arg(arg!(--name <NAME> "Full name").required(true))
                        .arg(arg!(--email <EMAIL>).required(true))
                        .arg(arg!(--password <PASSWORD>).required(true))
                        .arg(arg!(--confirm <PASSWORD> "Repeat the password").required(true)),
                )
                .subcommand(Command::new("logout"))
                .subcommand(
                    Command::new("change-password")
                        .arg(arg!(--old <PASSWORD> "Current password").required(true))
                        .arg(arg!(--new <PASSWORD> "New password").required(true))
                        .arg(arg!(--confirm <PASSWORD> "Repeat the new password").required(true)),
                )
                .subcommand(
                    Command::new("forgot-password")
                        .arg(arg!(--email <EMAIL>).required(true)),
                )
                .subcommand(
                    Command::new("reset-password")
                        .arg(arg!(--token <TOKEN> "Reset token from the email").required(true))
                        .arg(arg!(--new <PASSWORD> "New password").required(true)),
                )
                .subcommand(Command::new("whoami").about("Show the signed-in profile")),
        )
        .subcommand(Command::new("demo").about("Seed the session with demo expenses"))
        .subcommand(Command::new("quit").alias("exit").about("End the session"))
}
