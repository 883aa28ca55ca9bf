// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use rusqlite::types::Value;
use rust_decimal::Decimal;

use super::{ChangeSet, Entity, Repository};
use crate::error::RepoResult;
use crate::models::{IncomeSource, IncomeSourceUpdate, NewIncomeSource};
use crate::query::{Filters, ToSqlValue};
use crate::row::{RawRow, RowError};

impl Entity for IncomeSource {
    const NAME: &'static str = "income source";
    const TABLE: &'static str = "income_sources";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "amount",
        "frequency",
        "next_pay_date",
        "account_id",
        "is_active",
    ];
    const DEFAULT_ORDER: &'static str = "created_at";

    type New = NewIncomeSource;
    type Update = IncomeSourceUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &RawRow) -> Result<Self, RowError> {
        Ok(IncomeSource {
            id: row.text("id")?,
            name: row.text("name")?,
            amount: row.decimal("amount")?,
            frequency: row.variant("frequency")?,
            next_pay_date: row.opt_date("next_pay_date")?,
            account_id: row.opt_text("account_id")?,
            is_active: row.flag("is_active")?,
            created_at: row.timestamp("created_at")?,
            updated_at: row.timestamp("updated_at")?,
        })
    }

    fn insert_values(s: &NewIncomeSource) -> Vec<Value> {
        vec![
            s.name.to_sql_value(),
            s.amount.to_sql_value(),
            s.frequency.to_sql_value(),
            s.next_pay_date.to_sql_value(),
            s.account_id.to_sql_value(),
            s.is_active.to_sql_value(),
        ]
    }

    fn update_values(c: &IncomeSourceUpdate) -> Vec<(&'static str, Value)> {
        ChangeSet::new()
            .field("name", &c.name)
            .field("amount", &c.amount)
            .field("frequency", &c.frequency)
            .field("next_pay_date", &c.next_pay_date)
            .field("account_id", &c.account_id)
            .field("is_active", &c.is_active)
            .into_values()
    }
}

pub trait IncomeSourceQueries: Repository<IncomeSource> {
    fn find_active(&self) -> RepoResult<Vec<IncomeSource>> {
        self.find_where(Filters::new().eq("is_active", true))
    }

    fn total_by_frequency(&self) -> RepoResult<BTreeMap<String, Decimal>> {
        self.sum_grouped("frequency", "amount", Filters::new().eq("is_active", true))
    }
}

impl<R: Repository<IncomeSource> + ?Sized> IncomeSourceQueries for R {}
