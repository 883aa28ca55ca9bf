// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use clap::ArgMatches;
use std::path::Path;

use crate::models::Transaction;
use crate::query::{Filters, Query, SortDirection};
use crate::repository::Store;
use crate::utils::{optional_date, required};

pub fn handle(store: &Store, m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &Store, sub: &ArgMatches) -> Result<()> {
    let fmt = required(sub, "format")?.to_lowercase();
    let out = required(sub, "out")?;
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let filters = Filters::new().between(
        "date",
        optional_date(sub, "from")?,
        optional_date(sub, "to")?,
    );
    let txs = store
        .transactions
        .find(&Query::new(filters, "date", SortDirection::Asc))?;

    if fmt == "csv" {
        write_csv(Path::new(out), &txs)?;
    } else {
        std::fs::write(out, serde_json::to_string_pretty(&txs)?)?;
    }
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}

fn write_csv(out: &Path, txs: &[Transaction]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out)?;
    wtr.write_record([
        "id",
        "date",
        "type",
        "amount",
        "account_id",
        "category_id",
        "merchant",
        "description",
        "tags",
        "tax_flag",
        "is_recurring",
        "recurring_pattern",
    ])?;
    for t in txs {
        wtr.write_record([
            t.id.clone(),
            t.date.to_string(),
            t.r#type.to_string(),
            t.amount.to_string(),
            t.account_id.clone(),
            t.category_id.clone(),
            t.merchant.clone().unwrap_or_default(),
            t.description.clone().unwrap_or_default(),
            t.tags.as_deref().unwrap_or_default().join(";"),
            t.tax_flag.to_string(),
            t.is_recurring.to_string(),
            t.recurring_pattern.clone().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
