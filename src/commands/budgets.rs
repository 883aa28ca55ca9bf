// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use super::{print_items, print_page, report_removed};
use crate::models::{Budget, NewBudget};
use crate::query::Filters;
use crate::repository::{BudgetQueries, Store};
use crate::utils::{
    fmt_opt, optional, optional_date, parse_variant, query_options, required, required_date,
    required_decimal,
};

const HEADERS: &[&str] = &["Id", "Category", "Amount", "Period", "Start", "End", "Alert %"];

fn row(b: &Budget) -> Vec<String> {
    vec![
        b.id.clone(),
        b.category_id.clone(),
        b.amount.to_string(),
        b.period.to_string(),
        b.start_date.to_string(),
        fmt_opt(&b.end_date),
        b.alert_threshold.to_string(),
    ]
}

pub fn handle(store: &Store, m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let budget = store.budgets.create(NewBudget {
                category_id: required(sub, "category")?.to_string(),
                account_id: optional(sub, "account").map(str::to_string),
                amount: required_decimal(sub, "amount")?,
                period: parse_variant(sub, "period")?,
                start_date: required_date(sub, "start")?,
                end_date: optional_date(sub, "end")?,
                alert_threshold: required_decimal(sub, "threshold")?,
            })?;
            println!(
                "Budget {} {} for category {} from {} id={}",
                budget.period, budget.amount, budget.category_id, budget.start_date, budget.id
            );
        }
        Some(("list", sub)) => {
            let filters = Filters::new().eq("category_id", optional(sub, "category"));
            let page = store.budgets.read_all(&query_options(sub).filters(filters))?;
            print_page(sub, &page, HEADERS, row)?;
        }
        Some(("current", sub)) => {
            let budgets = match optional_date(sub, "on")? {
                Some(date) => store.budgets.find_current_on(date)?,
                None => store.budgets.find_current()?,
            };
            print_items(sub, &budgets, HEADERS, row)?;
        }
        Some(("rm", sub)) => {
            let id = required(sub, "id")?;
            report_removed("budget", id, store.budgets.delete(id)?);
        }
        _ => {}
    }
    Ok(())
}
