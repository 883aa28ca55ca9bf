// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use super::{print_items, print_page, report_removed};
use crate::models::{Expense, NewExpense};
use crate::query::Filters;
use crate::repository::{ExpenseQueries, Store};
use crate::utils::{
    fmt_opt, optional, parse_variant, query_options, required, required_date, required_decimal,
};

const HEADERS: &[&str] = &[
    "Id", "Name", "Amount", "Due", "Recurrence", "Paid", "Auto-pay", "Account",
];

fn row(b: &Expense) -> Vec<String> {
    vec![
        b.id.clone(),
        b.name.clone(),
        b.amount.to_string(),
        b.next_due_date.to_string(),
        b.recurrence.to_string(),
        b.is_paid.to_string(),
        b.auto_pay.to_string(),
        fmt_opt(&b.account_id),
    ]
}

pub fn handle(store: &Store, m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let bill = store.expenses.create(NewExpense {
                name: required(sub, "name")?.to_string(),
                amount: required_decimal(sub, "amount")?,
                next_due_date: required_date(sub, "due")?,
                recurrence: parse_variant(sub, "recurrence")?,
                is_paid: false,
                auto_pay: sub.get_flag("auto-pay"),
                category_id: optional(sub, "category").map(str::to_string),
                account_id: optional(sub, "account").map(str::to_string),
            })?;
            println!(
                "Added bill '{}' due {} id={}",
                bill.name, bill.next_due_date, bill.id
            );
        }
        Some(("list", sub)) => {
            let mut options = query_options(sub);
            if sub.get_flag("unpaid") {
                options = options.filters(Filters::new().eq("is_paid", false));
            }
            let page = store.expenses.read_all(&options)?;
            print_page(sub, &page, HEADERS, row)?;
        }
        Some(("due", sub)) => {
            let bills = store
                .expenses
                .find_due_between(required_date(sub, "from")?, required_date(sub, "to")?)?;
            print_items(sub, &bills, HEADERS, row)?;
        }
        Some(("pay", sub)) => {
            let bill = store.expenses.mark_paid(required(sub, "id")?)?;
            println!("Marked '{}' paid", bill.name);
        }
        Some(("rm", sub)) => {
            let id = required(sub, "id")?;
            report_removed("bill", id, store.expenses.delete(id)?);
        }
        _ => {}
    }
    Ok(())
}
