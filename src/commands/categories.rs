// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use super::{print_page, report_removed};
use crate::models::{CategoryType, NewCategory};
use crate::query::Filters;
use crate::repository::Store;
use crate::utils::{optional, parse_variant, query_options, required};

pub fn handle(store: &Store, m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let category = store.categories.create(NewCategory {
                name: required(sub, "name")?.to_string(),
                r#type: parse_variant(sub, "type")?,
                color: optional(sub, "color").map(str::to_string),
                icon: optional(sub, "icon").map(str::to_string),
                parent_id: optional(sub, "parent").map(str::to_string),
            })?;
            println!("Added category '{}' id={}", category.name, category.id);
        }
        Some(("list", sub)) => {
            let mut options = query_options(sub);
            if let Some(kind) = optional(sub, "type") {
                options = options.filters(Filters::new().eq("type", kind.parse::<CategoryType>()?));
            }
            let page = store.categories.read_all(&options)?;
            print_page(
                sub,
                &page,
                &["Id", "Name", "Type", "Parent", "Color"],
                |c| {
                    vec![
                        c.id.clone(),
                        c.name.clone(),
                        c.r#type.to_string(),
                        c.parent_id.clone().unwrap_or_default(),
                        c.color.clone().unwrap_or_default(),
                    ]
                },
            )?;
        }
        Some(("rm", sub)) => {
            let id = required(sub, "id")?;
            report_removed("category", id, store.categories.delete(id)?);
        }
        _ => {}
    }
    Ok(())
}
