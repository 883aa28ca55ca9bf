// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod alerts;
pub mod bills;
pub mod budgets;
pub mod categories;
pub mod exporter;
pub mod goals;
pub mod net_worth;
pub mod settings;
pub mod todos;
pub mod transactions;

use anyhow::Result;
use clap::ArgMatches;
use serde::Serialize;

use crate::query::Page;
use crate::utils::{maybe_print_json, output_flags, pretty_table};

/// Prints one page as a table, or as JSON when asked. `--json` keeps the
/// paging envelope; `--jsonl` streams the rows only.
pub(crate) fn print_page<T: Serialize>(
    m: &ArgMatches,
    page: &Page<T>,
    headers: &[&str],
    row: impl Fn(&T) -> Vec<String>,
) -> Result<()> {
    let (json, jsonl) = output_flags(m);
    if maybe_print_json(json, false, page)? || maybe_print_json(false, jsonl, &page.data)? {
        return Ok(());
    }
    println!(
        "{}",
        pretty_table(headers, page.data.iter().map(row).collect())
    );
    println!(
        "{} of {} (offset {})",
        page.data.len(),
        page.total,
        page.offset
    );
    Ok(())
}

pub(crate) fn print_items<T: Serialize>(
    m: &ArgMatches,
    items: &[T],
    headers: &[&str],
    row: impl Fn(&T) -> Vec<String>,
) -> Result<()> {
    let (json, jsonl) = output_flags(m);
    if !maybe_print_json(json, jsonl, &items)? {
        println!("{}", pretty_table(headers, items.iter().map(row).collect()));
    }
    Ok(())
}

pub(crate) fn report_removed(entity: &str, id: &str, removed: bool) {
    if removed {
        println!("Removed {} '{}'", entity, id);
    } else {
        println!("No {} '{}'", entity, id);
    }
}
