// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Raw persisted rows and the typed decoders entity mappers are built from.

use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rusqlite::types::Value;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::error::UnknownVariant;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error)]
pub enum RowError {
    #[error("missing column '{0}'")]
    MissingColumn(String),

    #[error("column '{column}' holds {found}, expected {expected}")]
    InvalidType {
        column: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("column '{column}' holds invalid {expected} '{value}'")]
    InvalidValue {
        column: String,
        expected: &'static str,
        value: String,
    },

    #[error("column '{column}' holds a malformed list: {source}")]
    InvalidList {
        column: String,
        source: serde_json::Error,
    },

    #[error("column '{column}': {source}")]
    InvalidVariant {
        column: String,
        source: UnknownVariant,
    },
}

/// One persisted row, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    values: BTreeMap<String, Value>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sql_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        let names: Vec<String> = row
            .as_ref()
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let mut values = BTreeMap::new();
        for (idx, name) in names.into_iter().enumerate() {
            values.insert(name, row.get::<_, Value>(idx)?);
        }
        Ok(RawRow { values })
    }

    pub fn set(&mut self, column: impl Into<String>, value: Value) {
        self.values.insert(column.into(), value);
    }

    pub fn with(mut self, column: impl Into<String>, value: Value) -> Self {
        self.set(column, value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    fn cell(&self, column: &str) -> Result<&Value, RowError> {
        self.values
            .get(column)
            .ok_or_else(|| RowError::MissingColumn(column.to_string()))
    }

    pub fn text(&self, column: &str) -> Result<String, RowError> {
        match self.cell(column)? {
            Value::Text(s) => Ok(s.clone()),
            other => Err(invalid_type(column, "TEXT", other)),
        }
    }

    /// NULL and empty text both decode to `None`.
    pub fn opt_text(&self, column: &str) -> Result<Option<String>, RowError> {
        match self.cell(column)? {
            Value::Null => Ok(None),
            Value::Text(s) if s.is_empty() => Ok(None),
            Value::Text(s) => Ok(Some(s.clone())),
            other => Err(invalid_type(column, "TEXT", other)),
        }
    }

    pub fn decimal(&self, column: &str) -> Result<Decimal, RowError> {
        self.opt_decimal(column)?
            .ok_or_else(|| invalid_type(column, "a number", &Value::Null))
    }

    /// REAL cells go through the shortest decimal rendering of the float, so a
    /// stored `12.34` reads back as exactly `12.34`.
    pub fn opt_decimal(&self, column: &str) -> Result<Option<Decimal>, RowError> {
        let parse = |s: &str| decimal_text(column, s);
        match self.cell(column)? {
            Value::Null => Ok(None),
            Value::Integer(i) => Ok(Some(Decimal::from(*i))),
            Value::Real(f) => parse(&f.to_string()).map(Some),
            Value::Text(s) if s.is_empty() => Ok(None),
            Value::Text(s) => parse(s).map(Some),
            other => Err(invalid_type(column, "a number", other)),
        }
    }

    /// INTEGER 0/1 flags; NULL reads as `false`.
    pub fn flag(&self, column: &str) -> Result<bool, RowError> {
        match self.cell(column)? {
            Value::Null => Ok(false),
            Value::Integer(i) => Ok(*i != 0),
            Value::Real(f) => Ok(*f != 0.0),
            other => Err(invalid_type(column, "INTEGER", other)),
        }
    }

    pub fn date(&self, column: &str) -> Result<NaiveDate, RowError> {
        let s = self.text(column)?;
        parse_date_cell(column, &s)
    }

    pub fn opt_date(&self, column: &str) -> Result<Option<NaiveDate>, RowError> {
        match self.opt_text(column)? {
            Some(s) => parse_date_cell(column, &s).map(Some),
            None => Ok(None),
        }
    }

    pub fn timestamp(&self, column: &str) -> Result<DateTime<Utc>, RowError> {
        let s = self.text(column)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| RowError::InvalidValue {
                column: column.to_string(),
                expected: "timestamp",
                value: s,
            })
    }

    /// JSON-encoded string lists. NULL/empty text is `None`; `"[]"` is `Some(vec![])`.
    pub fn list(&self, column: &str) -> Result<Option<Vec<String>>, RowError> {
        match self.opt_text(column)? {
            Some(s) => serde_json::from_str(&s)
                .map(Some)
                .map_err(|source| RowError::InvalidList {
                    column: column.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }

    pub fn variant<T>(&self, column: &str) -> Result<T, RowError>
    where
        T: FromStr<Err = UnknownVariant>,
    {
        let s = self.text(column)?;
        s.parse().map_err(|source| RowError::InvalidVariant {
            column: column.to_string(),
            source,
        })
    }
}

fn parse_date_cell(column: &str, s: &str) -> Result<NaiveDate, RowError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| RowError::InvalidValue {
        column: column.to_string(),
        expected: "date",
        value: s.to_string(),
    })
}

fn decimal_text(column: &str, s: &str) -> Result<Decimal, RowError> {
    Decimal::from_str(s.trim()).map_err(|_| RowError::InvalidValue {
        column: column.to_string(),
        expected: "decimal",
        value: s.to_string(),
    })
}

/// Fails for a REAL that would not decode back into a [`Decimal`], e.g. a
/// value near `Decimal::MAX` whose float rendering overflows.
pub fn check_storable(column: &str, value: &Value) -> Result<(), RowError> {
    match value {
        Value::Real(f) => decimal_text(column, &f.to_string()).map(|_| ()),
        _ => Ok(()),
    }
}

fn invalid_type(column: &str, expected: &'static str, found: &Value) -> RowError {
    RowError::InvalidType {
        column: column.to_string(),
        expected,
        found: value_kind(found),
    }
}

fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "NULL",
        Value::Integer(_) => "INTEGER",
        Value::Real(_) => "REAL",
        Value::Text(_) => "TEXT",
        Value::Blob(_) => "BLOB",
    }
}

pub fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn encode_list(items: &[String]) -> String {
    serde_json::Value::from(items.to_vec()).to_string()
}
