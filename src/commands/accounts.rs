// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use super::{print_page, report_removed};
use crate::models::NewAccount;
use crate::query::Filters;
use crate::repository::{AccountQueries, Store};
use crate::utils::{fmt_money, optional, parse_decimal, parse_variant, query_options, required};

pub fn handle(store: &Store, m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let account = store.accounts.create(NewAccount {
                name: required(sub, "name")?.to_string(),
                r#type: parse_variant(sub, "type")?,
                institution: optional(sub, "institution").map(str::to_string),
                balance: parse_decimal(required(sub, "balance")?)?,
                currency: required(sub, "currency")?.to_uppercase(),
                is_active: true,
            })?;
            println!(
                "Added account '{}' ({}, {}) id={}",
                account.name, account.r#type, account.currency, account.id
            );
        }
        Some(("list", sub)) => {
            let mut options = query_options(sub);
            if sub.get_flag("active") {
                options = options.filters(Filters::new().eq("is_active", true));
            }
            let page = store.accounts.read_all(&options)?;
            print_page(
                sub,
                &page,
                &["Id", "Name", "Type", "Institution", "Balance", "CCY", "Active"],
                |a| {
                    vec![
                        a.id.clone(),
                        a.name.clone(),
                        a.r#type.to_string(),
                        a.institution.clone().unwrap_or_default(),
                        a.balance.to_string(),
                        a.currency.clone(),
                        a.is_active.to_string(),
                    ]
                },
            )?;
        }
        Some(("balances", _)) => {
            for (currency, total) in store.accounts.balances_by_currency()? {
                println!("{}", fmt_money(&total, &currency));
            }
        }
        Some(("rm", sub)) => {
            let id = required(sub, "id")?;
            report_removed("account", id, store.accounts.delete(id)?);
        }
        _ => {}
    }
    Ok(())
}
