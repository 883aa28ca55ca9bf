// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::types::Value;

use super::{ChangeSet, Entity, Repository};
use crate::error::RepoResult;
use crate::models::{Expense, ExpenseUpdate, NewExpense};
use crate::query::{Filters, ToSqlValue};
use crate::row::{RawRow, RowError};

impl Entity for Expense {
    const NAME: &'static str = "bill";
    const TABLE: &'static str = "expenses";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "amount",
        "next_due_date",
        "recurrence",
        "is_paid",
        "auto_pay",
        "category_id",
        "account_id",
    ];
    const DEFAULT_ORDER: &'static str = "next_due_date";

    type New = NewExpense;
    type Update = ExpenseUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &RawRow) -> Result<Self, RowError> {
        Ok(Expense {
            id: row.text("id")?,
            name: row.text("name")?,
            amount: row.decimal("amount")?,
            next_due_date: row.date("next_due_date")?,
            recurrence: row.variant("recurrence")?,
            is_paid: row.flag("is_paid")?,
            auto_pay: row.flag("auto_pay")?,
            category_id: row.opt_text("category_id")?,
            account_id: row.opt_text("account_id")?,
            created_at: row.timestamp("created_at")?,
            updated_at: row.timestamp("updated_at")?,
        })
    }

    fn insert_values(e: &NewExpense) -> Vec<Value> {
        vec![
            e.name.to_sql_value(),
            e.amount.to_sql_value(),
            e.next_due_date.to_sql_value(),
            e.recurrence.to_sql_value(),
            e.is_paid.to_sql_value(),
            e.auto_pay.to_sql_value(),
            e.category_id.to_sql_value(),
            e.account_id.to_sql_value(),
        ]
    }

    fn update_values(c: &ExpenseUpdate) -> Vec<(&'static str, Value)> {
        ChangeSet::new()
            .field("name", &c.name)
            .field("amount", &c.amount)
            .field("next_due_date", &c.next_due_date)
            .field("recurrence", &c.recurrence)
            .field("is_paid", &c.is_paid)
            .field("auto_pay", &c.auto_pay)
            .field("category_id", &c.category_id)
            .field("account_id", &c.account_id)
            .into_values()
    }
}

pub trait ExpenseQueries: Repository<Expense> {
    fn find_unpaid(&self) -> RepoResult<Vec<Expense>> {
        self.find_where(Filters::new().eq("is_paid", false))
    }

    /// Bills whose next due date falls in `[start, end]`, paid or not.
    fn find_due_between(&self, start: NaiveDate, end: NaiveDate) -> RepoResult<Vec<Expense>> {
        self.find_where(Filters::new().between("next_due_date", start, end))
    }

    fn mark_paid(&self, id: &str) -> RepoResult<Expense> {
        self.update(
            id,
            ExpenseUpdate {
                is_paid: Some(true),
                ..Default::default()
            },
        )
    }
}

impl<R: Repository<Expense> + ?Sized> ExpenseQueries for R {}
