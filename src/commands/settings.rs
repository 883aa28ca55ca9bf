// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use super::print_page;
use crate::repository::{SettingsQueries, Store};
use crate::utils::{query_options, required};

pub fn handle(store: &Store, m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("get", sub)) => {
            let key = required(sub, "key")?;
            match store.settings.get(key)? {
                Some(s) => println!("{}", s.value),
                None => println!("'{}' is not set", key),
            }
        }
        Some(("set", sub)) => {
            let s = store
                .settings
                .set(required(sub, "key")?, required(sub, "value")?)?;
            println!("{} = {}", s.key, s.value);
        }
        Some(("list", sub)) => {
            let page = store.settings.read_all(&query_options(sub))?;
            print_page(sub, &page, &["Key", "Value", "Updated"], |s| {
                vec![s.key.clone(), s.value.clone(), s.updated_at.to_rfc3339()]
            })?;
        }
        _ => {}
    }
    Ok(())
}
