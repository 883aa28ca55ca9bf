// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::builder::PossibleValuesParser;
use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

use crate::models::{
    AccountType, BudgetPeriod, CategoryType, GoalStatus, Priority, Recurrence, TaxFlag,
    TransactionType,
};

fn flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).action(ArgAction::SetTrue).help(help)
}

fn opt(name: &'static str) -> Arg {
    Arg::new(name).long(name)
}

fn req(name: &'static str) -> Arg {
    Arg::new(name).long(name).required(true)
}

/// Money arguments may be negative (refunds, credit balances).
fn amount(arg: Arg) -> Arg {
    arg.allow_negative_numbers(true)
}

fn id_arg() -> Arg {
    Arg::new("id").required(true).help("Entity id")
}

/// Restricts an argument to the text forms of an enum.
fn choice<T>(arg: Arg, all: &'static [T], as_str: fn(&T) -> &'static str) -> Arg {
    arg.value_parser(PossibleValuesParser::new(all.iter().map(as_str)))
}

fn output_args(cmd: Command) -> Command {
    cmd.arg(flag("json", "Print JSON").conflicts_with("jsonl"))
        .arg(flag("jsonl", "Print one JSON object per line"))
}

/// `list` commands: output format plus paging.
fn list_cmd(name: &'static str) -> Command {
    output_args(Command::new(name).about("List records"))
        .arg(
            opt("limit")
                .value_parser(value_parser!(u32))
                .help("Page size (default 50)"),
        )
        .arg(opt("offset").value_parser(value_parser!(u32)))
        .arg(opt("order-by").help("Column to sort by"))
        .arg(flag("asc", "Sort ascending (default descending)"))
}

fn rm_cmd() -> Command {
    Command::new("rm").about("Delete by id").arg(id_arg())
}

pub fn build_cli() -> Command {
    Command::new("finboard")
        .about("Personal finance records in a local SQLite database")
        .version(clap::crate_version!())
        .arg(
            opt("db")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Database file (overrides FINBOARD_DB)"),
        )
        .arg(flag("demo", "Use an in-memory store seeded with demo data").global(true))
        .subcommand(Command::new("init").about("Create the database and schema"))
        .subcommand(account_cmd())
        .subcommand(category_cmd())
        .subcommand(tx_cmd())
        .subcommand(budget_cmd())
        .subcommand(goal_cmd())
        .subcommand(bill_cmd())
        .subcommand(networth_cmd())
        .subcommand(alert_cmd())
        .subcommand(todo_cmd())
        .subcommand(settings_cmd())
        .subcommand(export_cmd())
}

fn account_cmd() -> Command {
    Command::new("account")
        .about("Manage accounts")
        .subcommand(
            Command::new("add")
                .arg(req("name"))
                .arg(choice(req("type"), AccountType::ALL, AccountType::as_str))
                .arg(opt("institution"))
                .arg(amount(opt("balance").default_value("0")))
                .arg(opt("currency").default_value("USD")),
        )
        .subcommand(list_cmd("list").arg(flag("active", "Only active accounts")))
        .subcommand(Command::new("balances").about("Active balances per currency"))
        .subcommand(rm_cmd())
}

fn category_cmd() -> Command {
    Command::new("category")
        .about("Manage categories")
        .subcommand(
            Command::new("add")
                .arg(req("name"))
                .arg(choice(req("type"), CategoryType::ALL, CategoryType::as_str))
                .arg(opt("color"))
                .arg(opt("icon"))
                .arg(opt("parent").help("Parent category id")),
        )
        .subcommand(list_cmd("list").arg(choice(
            opt("type"),
            CategoryType::ALL,
            CategoryType::as_str,
        )))
        .subcommand(rm_cmd())
}

fn tx_cmd() -> Command {
    let types = |arg: Arg| choice(arg, TransactionType::ALL, TransactionType::as_str);
    Command::new("tx")
        .about("Record and query transactions")
        .subcommand(
            Command::new("add")
                .arg(req("date"))
                .arg(types(req("type")))
                .arg(amount(req("amount")))
                .arg(req("account").help("Account id"))
                .arg(req("category").help("Category id"))
                .arg(opt("merchant"))
                .arg(opt("description"))
                .arg(opt("tag").action(ArgAction::Append))
                .arg(choice(opt("tax-flag").default_value("none"), TaxFlag::ALL, TaxFlag::as_str))
                .arg(opt("recurring").help("Recurrence pattern, marks the transaction recurring")),
        )
        .subcommand(
            list_cmd("list")
                .arg(opt("from"))
                .arg(opt("to"))
                .arg(opt("account").action(ArgAction::Append))
                .arg(opt("category").action(ArgAction::Append))
                .arg(types(opt("type"))),
        )
        .subcommand(output_args(Command::new("show").arg(id_arg())))
        .subcommand(
            Command::new("update")
                .arg(id_arg())
                .arg(opt("date"))
                .arg(types(opt("type")))
                .arg(amount(opt("amount")))
                .arg(opt("account"))
                .arg(opt("category"))
                .arg(opt("merchant").help("New merchant; an empty value clears it"))
                .arg(opt("description").help("New description; an empty value clears it")),
        )
        .subcommand(rm_cmd())
        .subcommand(output_args(
            Command::new("summary")
                .about("Expense totals per category")
                .arg(opt("from"))
                .arg(opt("to"))
                .arg(flag("by-type", "Totals per transaction type instead")),
        ))
}

fn budget_cmd() -> Command {
    Command::new("budget")
        .about("Manage budgets")
        .subcommand(
            Command::new("add")
                .arg(req("category"))
                .arg(amount(req("amount")))
                .arg(choice(
                    opt("period").default_value("monthly"),
                    BudgetPeriod::ALL,
                    BudgetPeriod::as_str,
                ))
                .arg(req("start"))
                .arg(opt("end"))
                .arg(opt("account"))
                .arg(opt("threshold").default_value("80")),
        )
        .subcommand(list_cmd("list").arg(opt("category")))
        .subcommand(output_args(
            Command::new("current")
                .about("Budgets in effect on a date")
                .arg(opt("on").help("Date (default today)")),
        ))
        .subcommand(rm_cmd())
}

fn goal_cmd() -> Command {
    Command::new("goal")
        .about("Savings goals")
        .subcommand(
            Command::new("add")
                .arg(req("name"))
                .arg(req("target"))
                .arg(opt("current").default_value("0"))
                .arg(req("due"))
                .arg(choice(
                    opt("priority").default_value("medium"),
                    Priority::ALL,
                    Priority::as_str,
                ))
                .arg(opt("description")),
        )
        .subcommand(list_cmd("list").arg(choice(
            opt("status"),
            GoalStatus::ALL,
            GoalStatus::as_str,
        )))
        .subcommand(
            Command::new("progress")
                .about("Add to a goal's current amount")
                .arg(id_arg())
                .arg(amount(Arg::new("amount").required(true))),
        )
        .subcommand(rm_cmd())
}

fn bill_cmd() -> Command {
    Command::new("bill")
        .about("Bills and recurring expenses")
        .subcommand(
            Command::new("add")
                .arg(req("name"))
                .arg(amount(req("amount")))
                .arg(req("due"))
                .arg(choice(
                    opt("recurrence").default_value("monthly"),
                    Recurrence::ALL,
                    Recurrence::as_str,
                ))
                .arg(flag("auto-pay", "Paid automatically"))
                .arg(opt("category"))
                .arg(opt("account")),
        )
        .subcommand(list_cmd("list").arg(flag("unpaid", "Only unpaid bills")))
        .subcommand(output_args(
            Command::new("due")
                .about("Bills due in a date window")
                .arg(req("from"))
                .arg(req("to")),
        ))
        .subcommand(Command::new("pay").about("Mark a bill paid").arg(id_arg()))
        .subcommand(rm_cmd())
}

fn networth_cmd() -> Command {
    Command::new("networth")
        .about("Net worth snapshots")
        .subcommand(
            Command::new("add")
                .arg(req("date"))
                .arg(amount(req("assets")))
                .arg(amount(req("liabilities")))
                .arg(opt("notes")),
        )
        .subcommand(list_cmd("list"))
        .subcommand(output_args(Command::new("latest")))
}

fn alert_cmd() -> Command {
    Command::new("alert")
        .about("Alerts")
        .subcommand(list_cmd("list").arg(flag("unread", "Only unread alerts")))
        .subcommand(Command::new("read").about("Mark an alert read").arg(id_arg()))
}

fn todo_cmd() -> Command {
    Command::new("todo")
        .about("Finance to-dos")
        .subcommand(
            Command::new("add")
                .arg(req("title"))
                .arg(opt("due"))
                .arg(choice(
                    opt("priority").default_value("medium"),
                    Priority::ALL,
                    Priority::as_str,
                ))
                .arg(opt("notes")),
        )
        .subcommand(list_cmd("list").arg(flag("open", "Only incomplete items")))
        .subcommand(
            Command::new("done")
                .arg(id_arg())
                .arg(flag("undo", "Mark incomplete again")),
        )
}

fn settings_cmd() -> Command {
    Command::new("settings")
        .about("Key/value settings")
        .subcommand(Command::new("get").arg(Arg::new("key").required(true)))
        .subcommand(
            Command::new("set")
                .arg(Arg::new("key").required(true))
                .arg(Arg::new("value").required(true)),
        )
        .subcommand(list_cmd("list"))
}

fn export_cmd() -> Command {
    Command::new("export").about("Export data").subcommand(
        Command::new("transactions")
            .arg(opt("format").default_value("csv"))
            .arg(req("out"))
            .arg(opt("from"))
            .arg(opt("to")),
    )
}
