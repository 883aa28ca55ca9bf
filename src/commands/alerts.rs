// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use super::print_page;
use crate::query::Filters;
use crate::repository::{AlertQueries, Store};
use crate::utils::{query_options, required};

pub fn handle(store: &Store, m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let mut options = query_options(sub);
            if sub.get_flag("unread") {
                options = options.filters(Filters::new().eq("is_read", false));
            }
            let page = store.alerts.read_all(&options)?;
            print_page(
                sub,
                &page,
                &["Id", "Type", "Severity", "Message", "Read", "Created"],
                |a| {
                    vec![
                        a.id.clone(),
                        a.alert_type.to_string(),
                        a.severity.to_string(),
                        a.message.clone(),
                        a.is_read.to_string(),
                        a.created_at.format("%Y-%m-%d %H:%M").to_string(),
                    ]
                },
            )?;
        }
        Some(("read", sub)) => {
            let alert = store.alerts.mark_read(required(sub, "id")?)?;
            println!("Alert {} marked read", alert.id);
        }
        _ => {}
    }
    Ok(())
}
