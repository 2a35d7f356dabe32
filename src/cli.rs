// Copyright (c) 2025 Fintrack contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn id_arg() -> Arg {
    Arg::new("id")
        .required(true)
        .value_parser(value_parser!(i64))
        .help("Record id")
}

pub fn build_cli() -> Command {
    Command::new("fintrack")
        .about("Personal finance tracker: transactions, budgets, debts, goals, and insights")
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("tx")
                .about("Manage transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("income|expense|saving|debt|payment|investment"),
                        )
                        .arg(Arg::new("description").long("description"))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("YYYY-MM-DD, defaults to today"),
                        )
                        .arg(Arg::new("account").long("account")),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List transactions").arg(
                        Arg::new("month")
                            .long("month")
                            .help("Only this calendar month (YYYY-MM)"),
                    ),
                ))
                .subcommand(
                    Command::new("update")
                        .about("Patch a transaction; omitted fields are kept")
                        .arg(id_arg())
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("type").long("type"))
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("account").long("account")),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction")
                        .arg(id_arg()),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Manage budgets")
                .subcommand(
                    Command::new("add")
                        .about("Create a budget for a category and period")
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .required(true)
                                .help("One of the twelve fixed categories, e.g. food"),
                        )
                        .arg(Arg::new("planned").long("planned").required(true))
                        .arg(
                            Arg::new("start")
                                .long("start")
                                .required(true)
                                .help("Period start, YYYY-MM-DD"),
                        )
                        .arg(
                            Arg::new("end")
                                .long("end")
                                .required(true)
                                .help("Period end, YYYY-MM-DD"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List budgets")))
                .subcommand(
                    Command::new("update")
                        .about("Patch a budget; omitted fields are kept")
                        .arg(id_arg())
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("planned").long("planned"))
                        .arg(Arg::new("start").long("start"))
                        .arg(Arg::new("end").long("end"))
                        .arg(Arg::new("spent").long("spent")),
                )
                .subcommand(Command::new("rm").about("Delete a budget").arg(id_arg())),
        )
        .subcommand(
            Command::new("debt")
                .about("Manage debts")
                .subcommand(
                    Command::new("add")
                        .about("Record a debt")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("personal, business, or a bank name"),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("description").long("description").required(true))
                        .arg(Arg::new("due").long("due").help("Due date, YYYY-MM-DD"))
                        .arg(
                            Arg::new("rate")
                                .long("rate")
                                .help("Annual interest rate in percent"),
                        ),
                )
                .subcommand(json_flags(Command::new("list").about("List debts")))
                .subcommand(
                    Command::new("update")
                        .about("Patch a debt; omitted fields are kept")
                        .arg(id_arg())
                        .arg(Arg::new("type").long("type"))
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("due").long("due"))
                        .arg(Arg::new("rate").long("rate")),
                )
                .subcommand(Command::new("rm").about("Delete a debt").arg(id_arg())),
        )
        .subcommand(
            Command::new("goal")
                .about("Manage savings goals")
                .subcommand(
                    Command::new("add")
                        .about("Create a goal")
                        .arg(Arg::new("title").long("title").required(true))
                        .arg(Arg::new("target").long("target").required(true))
                        .arg(Arg::new("current").long("current"))
                        .arg(Arg::new("start").long("start").required(true))
                        .arg(Arg::new("due").long("due").required(true))
                        .arg(Arg::new("description").long("description"))
                        .arg(
                            Arg::new("status")
                                .long("status")
                                .help("active|inactive|completed|failed"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List goals")
                        .arg(Arg::new("status").long("status"))
                        .arg(
                            Arg::new("due-before")
                                .long("due-before")
                                .help("Only goals due strictly before this date"),
                        ),
                ))
                .subcommand(
                    Command::new("update")
                        .about("Patch a goal; omitted fields are kept")
                        .arg(id_arg())
                        .arg(Arg::new("title").long("title"))
                        .arg(Arg::new("target").long("target"))
                        .arg(Arg::new("current").long("current"))
                        .arg(Arg::new("start").long("start"))
                        .arg(Arg::new("due").long("due"))
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("status").long("status")),
                )
                .subcommand(Command::new("rm").about("Delete a goal").arg(id_arg())),
        )
        .subcommand(
            Command::new("report")
                .about("Summaries recomputed from the full current record set")
                .subcommand(json_flags(
                    Command::new("summary")
                        .about("Transaction summary (current month by default)")
                        .arg(Arg::new("month").long("month").help("YYYY-MM"))
                        .arg(
                            Arg::new("all")
                                .long("all")
                                .action(ArgAction::SetTrue)
                                .help("Summarize every transaction, ignoring the month"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("budgets").about("Budget totals and per-budget status"),
                ))
                .subcommand(json_flags(
                    Command::new("debts").about("Debt totals and payoff advice"),
                ))
                .subcommand(json_flags(
                    Command::new("goals").about("Goal overview and per-goal progress"),
                )),
        )
        .subcommand(
            Command::new("insights")
                .about("Rule-based insight cards")
                .subcommand(json_flags(Command::new("budgets")))
                .subcommand(json_flags(Command::new("debts"))),
        )
        .subcommand(
            Command::new("ai").about("External AI analysis").subcommand(
                Command::new("report")
                    .about("Request a full financial analysis from the AI service")
                    .arg(
                        Arg::new("url")
                            .long("url")
                            .default_value(crate::ai::DEFAULT_URL),
                    )
                    .arg(Arg::new("user").long("user").default_value("local")),
            ),
        )
}
