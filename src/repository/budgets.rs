// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, Utc};
use rusqlite::types::Value;

use super::{ChangeSet, Entity, Repository};
use crate::error::RepoResult;
use crate::models::{Budget, BudgetUpdate, NewBudget};
use crate::query::{Filters, ToSqlValue};
use crate::row::{RawRow, RowError};

impl Entity for Budget {
    const NAME: &'static str = "budget";
    const TABLE: &'static str = "budgets";
    const COLUMNS: &'static [&'static str] = &[
        "category_id",
        "account_id",
        "amount",
        "period",
        "start_date",
        "end_date",
        "alert_threshold",
    ];
    const DEFAULT_ORDER: &'static str = "start_date";

    type New = NewBudget;
    type Update = BudgetUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &RawRow) -> Result<Self, RowError> {
        Ok(Budget {
            id: row.text("id")?,
            category_id: row.text("category_id")?,
            account_id: row.opt_text("account_id")?,
            amount: row.decimal("amount")?,
            period: row.variant("period")?,
            start_date: row.date("start_date")?,
            end_date: row.opt_date("end_date")?,
            alert_threshold: row.decimal("alert_threshold")?,
            created_at: row.timestamp("created_at")?,
            updated_at: row.timestamp("updated_at")?,
        })
    }

    fn insert_values(b: &NewBudget) -> Vec<Value> {
        vec![
            b.category_id.to_sql_value(),
            b.account_id.to_sql_value(),
            b.amount.to_sql_value(),
            b.period.to_sql_value(),
            b.start_date.to_sql_value(),
            b.end_date.to_sql_value(),
            b.alert_threshold.to_sql_value(),
        ]
    }

    fn update_values(c: &BudgetUpdate) -> Vec<(&'static str, Value)> {
        ChangeSet::new()
            .field("category_id", &c.category_id)
            .field("account_id", &c.account_id)
            .field("amount", &c.amount)
            .field("period", &c.period)
            .field("start_date", &c.start_date)
            .field("end_date", &c.end_date)
            .field("alert_threshold", &c.alert_threshold)
            .into_values()
    }
}

pub trait BudgetQueries: Repository<Budget> {
    /// Budgets in effect today (UTC).
    fn find_current(&self) -> RepoResult<Vec<Budget>> {
        self.find_current_on(Utc::now().date_naive())
    }

    /// Budgets whose window contains `date`: started on or before it and
    /// either open-ended or ending on or after it.
    fn find_current_on(&self, date: NaiveDate) -> RepoResult<Vec<Budget>> {
        let started = self.find_where(Filters::new().at_most("start_date", date))?;
        Ok(started
            .into_iter()
            .filter(|b| b.end_date.is_none_or(|end| end >= date))
            .collect())
    }

    fn find_by_category(&self, category_id: &str) -> RepoResult<Vec<Budget>> {
        self.find_where(Filters::new().eq("category_id", category_id))
    }
}

impl<R: Repository<Budget> + ?Sized> BudgetQueries for R {}
