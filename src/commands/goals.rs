// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use super::{print_page, report_removed};
use crate::models::{GoalStatus, NewGoal};
use crate::query::Filters;
use crate::repository::{GoalQueries, Store};
use crate::utils::{
    optional, parse_variant, query_options, required, required_date, required_decimal,
};

pub fn handle(store: &Store, m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let goal = store.goals.create(NewGoal {
                name: required(sub, "name")?.to_string(),
                target_amount: required_decimal(sub, "target")?,
                current_amount: required_decimal(sub, "current")?,
                due_date: required_date(sub, "due")?,
                priority: parse_variant(sub, "priority")?,
                status: GoalStatus::Active,
                description: optional(sub, "description").map(str::to_string),
            })?;
            println!("Added goal '{}' id={}", goal.name, goal.id);
        }
        Some(("list", sub)) => {
            let status = optional(sub, "status")
                .map(str::parse::<GoalStatus>)
                .transpose()?;
            let filters = Filters::new().eq("status", status);
            let page = store.goals.read_all(&query_options(sub).filters(filters))?;
            print_page(
                sub,
                &page,
                &["Id", "Name", "Progress", "Due", "Priority", "Status"],
                |g| {
                    vec![
                        g.id.clone(),
                        g.name.clone(),
                        format!("{} / {}", g.current_amount, g.target_amount),
                        g.due_date.to_string(),
                        g.priority.to_string(),
                        g.status.to_string(),
                    ]
                },
            )?;
        }
        Some(("progress", sub)) => {
            let goal = store
                .goals
                .add_progress(required(sub, "id")?, required_decimal(sub, "amount")?)?;
            println!(
                "Goal '{}' now at {} of {}",
                goal.name, goal.current_amount, goal.target_amount
            );
        }
        Some(("rm", sub)) => {
            let id = required(sub, "id")?;
            report_removed("goal", id, store.goals.delete(id)?);
        }
        _ => {}
    }
    Ok(())
}
