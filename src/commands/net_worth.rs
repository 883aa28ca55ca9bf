// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use super::{print_items, print_page};
use crate::models::{NetWorthEntry, NewNetWorthEntry};
use crate::repository::{NetWorthQueries, Store};
use crate::utils::{optional, query_options, required_date, required_decimal};

const HEADERS: &[&str] = &["Id", "Date", "Assets", "Liabilities", "Net worth"];

fn row(n: &NetWorthEntry) -> Vec<String> {
    vec![
        n.id.clone(),
        n.date.to_string(),
        n.total_assets.to_string(),
        n.total_liabilities.to_string(),
        n.net_worth.to_string(),
    ]
}

pub fn handle(store: &Store, m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let total_assets = required_decimal(sub, "assets")?;
            let total_liabilities = required_decimal(sub, "liabilities")?;
            let entry = store.net_worth.create(NewNetWorthEntry {
                date: required_date(sub, "date")?,
                total_assets,
                total_liabilities,
                net_worth: total_assets - total_liabilities,
                notes: optional(sub, "notes").map(str::to_string),
            })?;
            println!("Net worth on {}: {}", entry.date, entry.net_worth);
        }
        Some(("list", sub)) => {
            let page = store.net_worth.read_all(&query_options(sub))?;
            print_page(sub, &page, HEADERS, row)?;
        }
        Some(("latest", sub)) => match store.net_worth.latest()? {
            Some(entry) => print_items(sub, std::slice::from_ref(&entry), HEADERS, row)?,
            None => println!("No net worth entries yet"),
        },
        _ => {}
    }
    Ok(())
}
