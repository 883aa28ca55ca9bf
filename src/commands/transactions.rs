// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use super::{print_items, print_page, report_removed};
use crate::error::RepoError;
use crate::models::{NewTransaction, Transaction, TransactionType, TransactionUpdate};
use crate::query::{Filters, QueryOptions};
use crate::repository::{Store, TransactionQueries};
use crate::utils::{
    fmt_opt, maybe_print_json, optional, optional_date, optional_decimal, output_flags,
    parse_variant, pretty_table, query_options, required, required_date, required_decimal,
};

pub fn handle(store: &Store, m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        Some(("show", sub)) => {
            let id = required(sub, "id")?;
            let tx = store
                .transactions
                .read(id)?
                .ok_or_else(|| RepoError::not_found("transaction", id))?;
            print_items(sub, std::slice::from_ref(&tx), HEADERS, row)?;
        }
        Some(("update", sub)) => update(store, sub)?,
        Some(("rm", sub)) => {
            let id = required(sub, "id")?;
            report_removed("transaction", id, store.transactions.delete(id)?);
        }
        Some(("summary", sub)) => summary(store, sub)?,
        _ => {}
    }
    Ok(())
}

const HEADERS: &[&str] = &[
    "Id", "Date", "Type", "Amount", "Account", "Category", "Merchant", "Tags",
];

fn row(t: &Transaction) -> Vec<String> {
    vec![
        t.id.clone(),
        t.date.to_string(),
        t.r#type.to_string(),
        t.amount.to_string(),
        t.account_id.clone(),
        t.category_id.clone(),
        fmt_opt(&t.merchant),
        t.tags.as_deref().unwrap_or_default().join(","),
    ]
}

fn add(store: &Store, sub: &ArgMatches) -> Result<()> {
    let recurring_pattern = optional(sub, "recurring").map(str::to_string);
    let tx = store.transactions.create(NewTransaction {
        date: required_date(sub, "date")?,
        r#type: parse_variant(sub, "type")?,
        amount: required_decimal(sub, "amount")?,
        account_id: required(sub, "account")?.to_string(),
        category_id: required(sub, "category")?.to_string(),
        merchant: optional(sub, "merchant").map(str::to_string),
        description: optional(sub, "description").map(str::to_string),
        tags: sub
            .get_many::<String>("tag")
            .map(|tags| tags.cloned().collect()),
        tax_flag: parse_variant(sub, "tax-flag")?,
        is_recurring: recurring_pattern.is_some(),
        recurring_pattern,
    })?;
    println!(
        "Recorded {} {} on {} id={}",
        tx.r#type, tx.amount, tx.date, tx.id
    );
    Ok(())
}

/// Translates `tx list` flags into repository options.
pub fn list_options(sub: &ArgMatches) -> Result<QueryOptions> {
    let mut filters = Filters::new().between(
        "date",
        optional_date(sub, "from")?,
        optional_date(sub, "to")?,
    );
    if let Some(accounts) = sub.get_many::<String>("account") {
        filters = filters.any_of("account_id", accounts.cloned());
    }
    if let Some(categories) = sub.get_many::<String>("category") {
        filters = filters.any_of("category_id", categories.cloned());
    }
    if let Some(kind) = optional(sub, "type") {
        filters = filters.eq("type", kind.parse::<TransactionType>()?);
    }
    Ok(query_options(sub).filters(filters))
}

fn list(store: &Store, sub: &ArgMatches) -> Result<()> {
    let page = store.transactions.read_all(&list_options(sub)?)?;
    print_page(sub, &page, HEADERS, row)
}

/// Only flags that were given end up in the change set.
pub fn changes(sub: &ArgMatches) -> Result<TransactionUpdate> {
    let clearable = |name: &str| {
        optional(sub, name).map(|v| (!v.is_empty()).then(|| v.to_string()))
    };
    Ok(TransactionUpdate {
        date: optional_date(sub, "date")?,
        r#type: optional(sub, "type")
            .map(str::parse::<TransactionType>)
            .transpose()?,
        amount: optional_decimal(sub, "amount")?,
        account_id: optional(sub, "account").map(str::to_string),
        category_id: optional(sub, "category").map(str::to_string),
        merchant: clearable("merchant"),
        description: clearable("description"),
        ..Default::default()
    })
}

fn update(store: &Store, sub: &ArgMatches) -> Result<()> {
    let id = required(sub, "id")?;
    let tx = store.transactions.update(id, changes(sub)?)?;
    println!("Updated transaction {} ({} {})", tx.id, tx.r#type, tx.amount);
    Ok(())
}

fn summary(store: &Store, sub: &ArgMatches) -> Result<()> {
    let from = optional_date(sub, "from")?;
    let to = optional_date(sub, "to")?;
    let (header, totals): (&str, BTreeMap<String, Decimal>) = if sub.get_flag("by-type") {
        ("Type", store.transactions.totals_by_type(from, to)?)
    } else {
        ("Category", store.transactions.summary_by_category(from, to)?)
    };
    let (json, jsonl) = output_flags(sub);
    if !maybe_print_json(json, jsonl, &totals)? {
        let rows = totals
            .iter()
            .map(|(k, v)| vec![k.clone(), v.to_string()])
            .collect();
        println!("{}", pretty_table(&[header, "Total"], rows));
    }
    Ok(())
}
