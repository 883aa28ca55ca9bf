// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use finboard::repository::Store;
use finboard::{cli, commands, db};

const LOG_ENV: &str = "FINBOARD_LOG";

fn init_logger() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logger();
    let matches = cli::build_cli().get_matches();

    if matches.get_flag("demo") {
        let store = Store::demo()?;
        return dispatch(&store, &matches, None);
    }

    let path = db::resolve_path(matches.get_one::<PathBuf>("db").cloned())?;
    let conn = db::open_or_init(&path)?;
    let store = Store::sqlite(&conn);
    dispatch(&store, &matches, Some(&path))
}

fn dispatch(store: &Store, matches: &ArgMatches, path: Option<&PathBuf>) -> Result<()> {
    match matches.subcommand() {
        Some(("init", _)) => match path {
            Some(p) => println!("Database initialized at {}", p.display()),
            None => println!("Demo store is in memory; nothing to initialize"),
        },
        Some(("account", sub)) => commands::accounts::handle(store, sub)?,
        Some(("category", sub)) => commands::categories::handle(store, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(store, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(store, sub)?,
        Some(("goal", sub)) => commands::goals::handle(store, sub)?,
        Some(("bill", sub)) => commands::bills::handle(store, sub)?,
        Some(("networth", sub)) => commands::net_worth::handle(store, sub)?,
        Some(("alert", sub)) => commands::alerts::handle(store, sub)?,
        Some(("todo", sub)) => commands::todos::handle(store, sub)?,
        Some(("settings", sub)) => commands::settings::handle(store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
