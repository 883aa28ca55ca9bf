// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use super::print_page;
use crate::models::NewTodoItem;
use crate::query::Filters;
use crate::repository::{Store, TodoItemQueries};
use crate::utils::{fmt_opt, optional, optional_date, parse_variant, query_options, required};

pub fn handle(store: &Store, m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let item = store.todo_items.create(NewTodoItem {
                title: required(sub, "title")?.to_string(),
                due_date: optional_date(sub, "due")?,
                completed: false,
                priority: parse_variant(sub, "priority")?,
                notes: optional(sub, "notes").map(str::to_string),
            })?;
            println!("Added to-do '{}' id={}", item.title, item.id);
        }
        Some(("list", sub)) => {
            let mut options = query_options(sub);
            if sub.get_flag("open") {
                options = options.filters(Filters::new().eq("completed", false));
            }
            let page = store.todo_items.read_all(&options)?;
            print_page(
                sub,
                &page,
                &["Id", "Title", "Due", "Priority", "Done"],
                |t| {
                    vec![
                        t.id.clone(),
                        t.title.clone(),
                        fmt_opt(&t.due_date),
                        t.priority.to_string(),
                        t.completed.to_string(),
                    ]
                },
            )?;
        }
        Some(("done", sub)) => {
            let completed = !sub.get_flag("undo");
            let item = store
                .todo_items
                .set_completed(required(sub, "id")?, completed)?;
            println!("'{}' completed: {}", item.title, item.completed);
        }
        _ => {}
    }
    Ok(())
}
