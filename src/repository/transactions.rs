// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rusqlite::types::Value;
use rust_decimal::Decimal;

use super::{ChangeSet, Entity, Repository};
use crate::error::RepoResult;
use crate::models::{NewTransaction, Transaction, TransactionType, TransactionUpdate};
use crate::query::{Filters, ToSqlValue};
use crate::row::{RawRow, RowError};

impl Entity for Transaction {
    const NAME: &'static str = "transaction";
    const TABLE: &'static str = "transactions";
    const COLUMNS: &'static [&'static str] = &[
        "date",
        "type",
        "amount",
        "account_id",
        "category_id",
        "merchant",
        "description",
        "tags",
        "tax_flag",
        "is_recurring",
        "recurring_pattern",
    ];
    const DEFAULT_ORDER: &'static str = "date";

    type New = NewTransaction;
    type Update = TransactionUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &RawRow) -> Result<Self, RowError> {
        Ok(Transaction {
            id: row.text("id")?,
            date: row.date("date")?,
            r#type: row.variant("type")?,
            amount: row.decimal("amount")?,
            account_id: row.text("account_id")?,
            category_id: row.text("category_id")?,
            merchant: row.opt_text("merchant")?,
            description: row.opt_text("description")?,
            tags: row.list("tags")?,
            tax_flag: row.variant("tax_flag")?,
            is_recurring: row.flag("is_recurring")?,
            recurring_pattern: row.opt_text("recurring_pattern")?,
            created_at: row.timestamp("created_at")?,
            updated_at: row.timestamp("updated_at")?,
        })
    }

    fn insert_values(t: &NewTransaction) -> Vec<Value> {
        vec![
            t.date.to_sql_value(),
            t.r#type.to_sql_value(),
            t.amount.to_sql_value(),
            t.account_id.to_sql_value(),
            t.category_id.to_sql_value(),
            t.merchant.to_sql_value(),
            t.description.to_sql_value(),
            t.tags.to_sql_value(),
            t.tax_flag.to_sql_value(),
            t.is_recurring.to_sql_value(),
            t.recurring_pattern.to_sql_value(),
        ]
    }

    fn update_values(c: &TransactionUpdate) -> Vec<(&'static str, Value)> {
        ChangeSet::new()
            .field("date", &c.date)
            .field("type", &c.r#type)
            .field("amount", &c.amount)
            .field("account_id", &c.account_id)
            .field("category_id", &c.category_id)
            .field("merchant", &c.merchant)
            .field("description", &c.description)
            .field("tags", &c.tags)
            .field("tax_flag", &c.tax_flag)
            .field("is_recurring", &c.is_recurring)
            .field("recurring_pattern", &c.recurring_pattern)
            .into_values()
    }
}

pub trait TransactionQueries: Repository<Transaction> {
    /// Inclusive on both ends.
    fn find_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> RepoResult<Vec<Transaction>> {
        self.find_where(Filters::new().between("date", start, end))
    }

    fn find_by_account(&self, account_id: &str) -> RepoResult<Vec<Transaction>> {
        self.find_where(Filters::new().eq("account_id", account_id))
    }

    fn find_by_category(&self, category_id: &str) -> RepoResult<Vec<Transaction>> {
        self.find_where(Filters::new().eq("category_id", category_id))
    }

    fn find_recurring(&self) -> RepoResult<Vec<Transaction>> {
        self.find_where(Filters::new().eq("is_recurring", true))
    }

    /// Expense totals per category id within an optional date window.
    fn summary_by_category(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> RepoResult<BTreeMap<String, Decimal>> {
        let filters = Filters::new()
            .eq("type", TransactionType::Expense)
            .between("date", start, end);
        self.sum_grouped("category_id", "amount", filters)
    }

    /// Totals per transaction type (`income`, `expense`, `transfer`).
    fn totals_by_type(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> RepoResult<BTreeMap<String, Decimal>> {
        self.sum_grouped("type", "amount", Filters::new().between("date", start, end))
    }
}

impl<R: Repository<Transaction> + ?Sized> TransactionQueries for R {}
