// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Generic filter maps, their translation into parameterized `WHERE` clauses,
//! and the list options/result shapes shared by every repository.
//!
//! Field names handed to [`Filters`] are column names chosen by the crate's own
//! call sites; repositories reject names that are not columns of the target
//! table before any SQL is built. Values never reach the SQL text.

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::Value;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::row::{encode_list, encode_timestamp, RawRow, DATE_FORMAT};

pub const DEFAULT_LIMIT: u32 = 50;

/// Conversion into the value SQLite stores for a column.
pub trait ToSqlValue {
    fn to_sql_value(&self) -> Value;
}

impl ToSqlValue for Value {
    fn to_sql_value(&self) -> Value {
        self.clone()
    }
}

impl ToSqlValue for str {
    fn to_sql_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl ToSqlValue for String {
    fn to_sql_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl ToSqlValue for i64 {
    fn to_sql_value(&self) -> Value {
        Value::Integer(*self)
    }
}

impl ToSqlValue for u32 {
    fn to_sql_value(&self) -> Value {
        Value::Integer(i64::from(*self))
    }
}

impl ToSqlValue for f64 {
    fn to_sql_value(&self) -> Value {
        Value::Real(*self)
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(&self) -> Value {
        Value::Integer(i64::from(*self))
    }
}

impl ToSqlValue for Decimal {
    fn to_sql_value(&self) -> Value {
        self.to_f64().map(Value::Real).unwrap_or(Value::Null)
    }
}

impl ToSqlValue for NaiveDate {
    fn to_sql_value(&self) -> Value {
        Value::Text(self.format(DATE_FORMAT).to_string())
    }
}

impl ToSqlValue for DateTime<Utc> {
    fn to_sql_value(&self) -> Value {
        Value::Text(encode_timestamp(self))
    }
}

impl ToSqlValue for [String] {
    fn to_sql_value(&self) -> Value {
        Value::Text(encode_list(self))
    }
}

impl ToSqlValue for Vec<String> {
    fn to_sql_value(&self) -> Value {
        self.as_slice().to_sql_value()
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(&self) -> Value {
        match self {
            Some(v) => v.to_sql_value(),
            None => Value::Null,
        }
    }
}

impl<T: ToSqlValue + ?Sized> ToSqlValue for &T {
    fn to_sql_value(&self) -> Value {
        (**self).to_sql_value()
    }
}

/// One field's filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// No condition; the field is skipped.
    Absent,
    /// `field = ?`. A NULL value behaves like [`FilterValue::Absent`].
    Equals(Value),
    /// `field IN (?, ?, ...)`, one placeholder per element in order.
    AnyOf(Vec<Value>),
    /// `field >= lower` and/or `field <= upper`; missing or NULL bounds emit nothing.
    Range {
        lower: Option<Value>,
        upper: Option<Value>,
    },
}

impl FilterValue {
    pub fn range(lower: Option<Value>, upper: Option<Value>) -> Self {
        FilterValue::Range { lower, upper }
    }
}

/// Ordered field → filter map. Setting a field twice replaces the first entry
/// in place, so condition order follows first insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    entries: Vec<(String, FilterValue)>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, value: FilterValue) {
        let field = field.into();
        match self.entries.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
        }
    }

    pub fn with(mut self, field: impl Into<String>, value: FilterValue) -> Self {
        self.insert(field, value);
        self
    }

    pub fn eq(self, field: impl Into<String>, value: impl ToSqlValue) -> Self {
        let value = match value.to_sql_value() {
            Value::Null => FilterValue::Absent,
            v => FilterValue::Equals(v),
        };
        self.with(field, value)
    }

    pub fn any_of<I, T>(self, field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToSqlValue,
    {
        let values = values.into_iter().map(|v| v.to_sql_value()).collect();
        self.with(field, FilterValue::AnyOf(values))
    }

    pub fn between(
        self,
        field: impl Into<String>,
        lower: impl ToSqlValue,
        upper: impl ToSqlValue,
    ) -> Self {
        self.with(
            field,
            FilterValue::range(bound(lower.to_sql_value()), bound(upper.to_sql_value())),
        )
    }

    pub fn at_least(self, field: impl Into<String>, lower: impl ToSqlValue) -> Self {
        self.with(field, FilterValue::range(bound(lower.to_sql_value()), None))
    }

    pub fn at_most(self, field: impl Into<String>, upper: impl ToSqlValue) -> Self {
        self.with(field, FilterValue::range(None, bound(upper.to_sql_value())))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().map(|(f, v)| (f.as_str(), v))
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(f, _)| f.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evaluates the same conditions [`build_where`] emits against a stored row,
    /// following SQLite's comparison rules (NULL never matches).
    pub fn matches(&self, row: &RawRow) -> bool {
        self.iter().all(|(field, filter)| {
            let cell = row.get(field).unwrap_or(&Value::Null);
            match filter {
                FilterValue::Absent | FilterValue::Equals(Value::Null) => true,
                FilterValue::Equals(v) => sql_equals(cell, &with_affinity(cell, v)),
                FilterValue::AnyOf(values) => values
                    .iter()
                    .any(|v| sql_equals(cell, &with_affinity(cell, v))),
                FilterValue::Range { lower, upper } => {
                    let above = match lower {
                        Some(l) if !is_null(l) => {
                            !is_null(cell)
                                && compare_values(cell, &with_affinity(cell, l)) != Ordering::Less
                        }
                        _ => true,
                    };
                    let below = match upper {
                        Some(u) if !is_null(u) => {
                            !is_null(cell)
                                && compare_values(cell, &with_affinity(cell, u))
                                    != Ordering::Greater
                        }
                        _ => true,
                    };
                    above && below
                }
            }
        })
    }
}

fn bound(v: Value) -> Option<Value> {
    match v {
        Value::Null => None,
        v => Some(v),
    }
}

fn is_null(v: &Value) -> bool {
    matches!(v, Value::Null)
}

/// Converts a filter operand the way SQLite applies the column's affinity
/// before comparing: numeric-looking text against a numeric cell becomes a
/// number, a number against a text cell becomes its text rendering. Cells
/// carry their column's storage type, so the cell stands in for the column.
fn with_affinity(cell: &Value, operand: &Value) -> Value {
    match (cell, operand) {
        (Value::Integer(_) | Value::Real(_), Value::Text(s)) => numeric_text(s)
            .unwrap_or_else(|| operand.clone()),
        (Value::Text(_), Value::Integer(i)) => Value::Text(i.to_string()),
        (Value::Text(_), Value::Real(f)) if f.is_finite() && f.fract() == 0.0 => {
            Value::Text(format!("{f:.1}"))
        }
        (Value::Text(_), Value::Real(f)) => Value::Text(f.to_string()),
        _ => operand.clone(),
    }
}

fn numeric_text(s: &str) -> Option<Value> {
    let well_formed = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        && s.chars().any(|c| c.is_ascii_digit());
    if !well_formed {
        return None;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Some(Value::Integer(i));
    }
    s.parse::<f64>().ok().filter(|f| f.is_finite()).map(Value::Real)
}

/// A conjunctive `WHERE` body (without the keyword) and its positional parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereClause {
    pub clause: String,
    pub params: Vec<Value>,
}

impl WhereClause {
    pub fn is_empty(&self) -> bool {
        self.clause.is_empty()
    }

    /// `" WHERE <clause>"`, or nothing when no condition was produced.
    pub fn sql(&self) -> String {
        if self.clause.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.clause)
        }
    }
}

pub fn build_where(filters: &Filters) -> WhereClause {
    let mut conditions = Vec::new();
    let mut params = Vec::new();

    for (field, filter) in filters.iter() {
        match filter {
            FilterValue::Absent | FilterValue::Equals(Value::Null) => {}
            FilterValue::Equals(v) => {
                conditions.push(format!("{field} = ?"));
                params.push(v.clone());
            }
            FilterValue::AnyOf(values) => {
                let placeholders = vec!["?"; values.len()].join(", ");
                conditions.push(format!("{field} IN ({placeholders})"));
                params.extend(values.iter().cloned());
            }
            FilterValue::Range { lower, upper } => {
                if let Some(l) = lower.as_ref().filter(|v| !is_null(v)) {
                    conditions.push(format!("{field} >= ?"));
                    params.push(l.clone());
                }
                if let Some(u) = upper.as_ref().filter(|v| !is_null(v)) {
                    conditions.push(format!("{field} <= ?"));
                    params.push(u.clone());
                }
            }
        }
    }

    WhereClause {
        clause: conditions.join(" AND "),
        params,
    }
}

/// SQLite's cross-type ordering: NULL < numbers < text < blobs.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    fn rank(v: &Value) -> u8 {
        match v {
            Value::Null => 0,
            Value::Integer(_) | Value::Real(_) => 1,
            Value::Text(_) => 2,
            Value::Blob(_) => 3,
        }
    }
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => x.cmp(y),
        (Value::Integer(x), Value::Real(y)) => (*x as f64).partial_cmp(y).unwrap_or(Ordering::Equal),
        (Value::Real(x), Value::Integer(y)) => x.partial_cmp(&(*y as f64)).unwrap_or(Ordering::Equal),
        (Value::Real(x), Value::Real(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (Value::Text(x), Value::Text(y)) => x.cmp(y),
        (Value::Blob(x), Value::Blob(y)) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

fn sql_equals(a: &Value, b: &Value) -> bool {
    !is_null(a) && !is_null(b) && compare_values(a, b) == Ordering::Equal
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortDirection::Asc),
            "DESC" => Ok(SortDirection::Desc),
            other => Err(format!("Invalid sort direction '{}', expected ASC or DESC", other)),
        }
    }
}

/// Caller-facing list options; every field falls back to a default.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub order_by: Option<String>,
    pub order_direction: Option<SortDirection>,
    pub filters: Filters,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, direction: SortDirection) -> Self {
        self.order_by = Some(column.into());
        self.order_direction = Some(direction);
        self
    }

    pub fn filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }
}

/// A fully resolved row query. `limit == None` means unpaginated.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub filters: Filters,
    pub order_by: String,
    pub direction: SortDirection,
    pub limit: Option<u32>,
    pub offset: u32,
}

impl Query {
    pub fn new(filters: Filters, order_by: impl Into<String>, direction: SortDirection) -> Self {
        Query {
            filters,
            order_by: order_by.into(),
            direction,
            limit: None,
            offset: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    /// Rows matching the filters before pagination.
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
}
