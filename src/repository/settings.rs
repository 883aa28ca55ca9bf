// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::types::Value;

use super::{ChangeSet, Entity, Repository};
use crate::error::RepoResult;
use crate::models::{NewSettings, Settings, SettingsUpdate};
use crate::query::{Filters, ToSqlValue};
use crate::row::{RawRow, RowError};

pub const BASE_CURRENCY: &str = "base_currency";

impl Entity for Settings {
    const NAME: &'static str = "setting";
    const TABLE: &'static str = "settings";
    const COLUMNS: &'static [&'static str] = &["key", "value"];
    const DEFAULT_ORDER: &'static str = "created_at";
    const UNIQUE_COLUMNS: &'static [&'static str] = &["key"];

    type New = NewSettings;
    type Update = SettingsUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &RawRow) -> Result<Self, RowError> {
        Ok(Settings {
            id: row.text("id")?,
            key: row.text("key")?,
            value: row.text("value")?,
            created_at: row.timestamp("created_at")?,
            updated_at: row.timestamp("updated_at")?,
        })
    }

    fn insert_values(s: &NewSettings) -> Vec<Value> {
        vec![s.key.to_sql_value(), s.value.to_sql_value()]
    }

    fn update_values(c: &SettingsUpdate) -> Vec<(&'static str, Value)> {
        ChangeSet::new()
            .field("key", &c.key)
            .field("value", &c.value)
            .into_values()
    }
}

pub trait SettingsQueries: Repository<Settings> {
    fn get(&self, key: &str) -> RepoResult<Option<Settings>> {
        Ok(self
            .find_where(Filters::new().eq("key", key))?
            .into_iter()
            .next())
    }

    fn value_or(&self, key: &str, default: &str) -> RepoResult<String> {
        Ok(self
            .get(key)?
            .map(|s| s.value)
            .unwrap_or_else(|| default.to_string()))
    }

    /// Updates the entry for `key` in place, or creates it.
    fn set(&self, key: &str, value: &str) -> RepoResult<Settings> {
        match self.get(key)? {
            Some(existing) => self.update(
                &existing.id,
                SettingsUpdate {
                    value: Some(value.to_string()),
                    ..Default::default()
                },
            ),
            None => self.create(NewSettings {
                key: key.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

impl<R: Repository<Settings> + ?Sized> SettingsQueries for R {}
