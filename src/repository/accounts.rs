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
use crate::models::{Account, AccountUpdate, NewAccount};
use crate::query::{Filters, ToSqlValue};
use crate::row::{RawRow, RowError};

impl Entity for Account {
    const NAME: &'static str = "account";
    const TABLE: &'static str = "accounts";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "type",
        "institution",
        "balance",
        "currency",
        "is_active",
    ];
    const DEFAULT_ORDER: &'static str = "created_at";

    type New = NewAccount;
    type Update = AccountUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &RawRow) -> Result<Self, RowError> {
        Ok(Account {
            id: row.text("id")?,
            name: row.text("name")?,
            r#type: row.variant("type")?,
            institution: row.opt_text("institution")?,
            balance: row.decimal("balance")?,
            currency: row.text("currency")?,
            is_active: row.flag("is_active")?,
            created_at: row.timestamp("created_at")?,
            updated_at: row.timestamp("updated_at")?,
        })
    }

    fn insert_values(a: &NewAccount) -> Vec<Value> {
        vec![
            a.name.to_sql_value(),
            a.r#type.to_sql_value(),
            a.institution.to_sql_value(),
            a.balance.to_sql_value(),
            a.currency.to_sql_value(),
            a.is_active.to_sql_value(),
        ]
    }

    fn update_values(c: &AccountUpdate) -> Vec<(&'static str, Value)> {
        ChangeSet::new()
            .field("name", &c.name)
            .field("type", &c.r#type)
            .field("institution", &c.institution)
            .field("balance", &c.balance)
            .field("currency", &c.currency)
            .field("is_active", &c.is_active)
            .into_values()
    }
}

pub trait AccountQueries: Repository<Account> {
    fn find_active(&self) -> RepoResult<Vec<Account>> {
        self.find_where(Filters::new().eq("is_active", true))
    }

    /// Balance of active accounts per currency.
    fn balances_by_currency(&self) -> RepoResult<BTreeMap<String, Decimal>> {
        self.sum_grouped("currency", "balance", Filters::new().eq("is_active", true))
    }
}

impl<R: Repository<Account> + ?Sized> AccountQueries for R {}
