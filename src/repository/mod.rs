// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! One generic repository contract, instantiated per entity.
//!
//! An [`Entity`] describes its table (name, columns, default ordering), maps a
//! [`RawRow`] into itself and encodes creation payloads / change sets into SQL
//! values. [`Repository`] is the CRUD + query surface over one entity; it has a
//! SQLite implementation and an in-memory one, and per-entity finders are
//! extension traits blanket-implemented for every repository of that entity.

use std::collections::BTreeMap;

use rusqlite::types::Value;
use rust_decimal::Decimal;

use crate::error::{RepoError, RepoResult};
use crate::query::{Filters, Page, Query, QueryOptions, SortDirection, ToSqlValue, DEFAULT_LIMIT};
use crate::row::{check_storable, RawRow, RowError};

pub mod accounts;
pub mod alerts;
pub mod budgets;
pub mod calendar;
pub mod categories;
pub mod expenses;
pub mod fixtures;
pub mod forecasts;
pub mod goals;
pub mod income;
pub mod memory;
pub mod net_worth;
pub mod settings;
pub mod sqlite;
pub mod store;
pub mod todos;
pub mod transactions;

pub use accounts::AccountQueries;
pub use alerts::AlertQueries;
pub use budgets::BudgetQueries;
pub use calendar::CalendarEventQueries;
pub use categories::CategoryQueries;
pub use expenses::ExpenseQueries;
pub use forecasts::ForecastQueries;
pub use goals::GoalQueries;
pub use income::IncomeSourceQueries;
pub use memory::MemoryRepository;
pub use net_worth::NetWorthQueries;
pub use settings::SettingsQueries;
pub use sqlite::SqliteRepository;
pub use store::Store;
pub use todos::TodoItemQueries;
pub use transactions::TransactionQueries;

/// Columns every table carries besides the entity's own.
pub const SYSTEM_COLUMNS: &[&str] = &["id", "created_at", "updated_at"];

pub trait Entity: Sized {
    /// Singular name used in error messages, e.g. `"transaction"`.
    const NAME: &'static str;
    const TABLE: &'static str;
    /// Domain columns in insert order, excluding [`SYSTEM_COLUMNS`].
    const COLUMNS: &'static [&'static str];
    /// Column `read_all` orders by when the caller names none.
    const DEFAULT_ORDER: &'static str;
    /// Columns the schema declares `UNIQUE`.
    const UNIQUE_COLUMNS: &'static [&'static str] = &[];

    /// Creation payload: the entity minus id and timestamps.
    type New;
    /// Partial change set; only fields that are set get written.
    type Update;

    fn id(&self) -> &str;

    /// Row mapper. Pure; fails only on rows that do not decode.
    fn from_row(row: &RawRow) -> Result<Self, RowError>;

    /// Values aligned with [`Entity::COLUMNS`]; absent optionals become NULL.
    fn insert_values(data: &Self::New) -> Vec<Value>;

    fn update_values(changes: &Self::Update) -> Vec<(&'static str, Value)>;

    fn has_column(name: &str) -> bool {
        SYSTEM_COLUMNS.contains(&name) || Self::COLUMNS.contains(&name)
    }
}

/// Collects the fields of a change set that are actually present.
#[derive(Debug, Default)]
pub struct ChangeSet(Vec<(&'static str, Value)>);

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field<T: ToSqlValue>(mut self, column: &'static str, value: &Option<T>) -> Self {
        if let Some(v) = value {
            self.0.push((column, v.to_sql_value()));
        }
        self
    }

    pub fn into_values(self) -> Vec<(&'static str, Value)> {
        self.0
    }
}

pub(crate) fn decode<E: Entity>(operation: &'static str, row: &RawRow) -> RepoResult<E> {
    E::from_row(row).map_err(|e| RepoError::persistence(operation, E::NAME, e))
}

/// Rejects values that would be written but could not be read back.
pub(crate) fn check_values<'a, E: Entity>(
    operation: &'static str,
    values: impl IntoIterator<Item = (&'a str, &'a Value)>,
) -> RepoResult<()> {
    for (column, value) in values {
        check_storable(column, value).map_err(|e| RepoError::persistence(operation, E::NAME, e))?;
    }
    Ok(())
}

pub(crate) fn check_columns<'a, E: Entity>(
    operation: &'static str,
    names: impl IntoIterator<Item = &'a str>,
) -> RepoResult<()> {
    for name in names {
        if !E::has_column(name) {
            return Err(RepoError::persistence(
                operation,
                E::NAME,
                format!("unknown column '{}'", name),
            ));
        }
    }
    Ok(())
}

/// CRUD and query contract for one entity's persisted collection.
pub trait Repository<E: Entity> {
    /// Assigns id and timestamps, persists, and returns the row as stored.
    fn create(&self, data: E::New) -> RepoResult<E>;

    /// `Ok(None)` when no row has this id.
    fn read(&self, id: &str) -> RepoResult<Option<E>>;

    /// Writes only the fields present in `changes` and refreshes `updated_at`.
    /// Fails with [`RepoError::NotFound`] when no row has this id.
    fn update(&self, id: &str, changes: E::Update) -> RepoResult<E>;

    /// Hard delete; `false` when nothing matched.
    fn delete(&self, id: &str) -> RepoResult<bool>;

    /// Raw rows for a resolved query. Column names are not re-checked here.
    fn find_rows(&self, query: &Query) -> RepoResult<Vec<RawRow>>;

    /// Rows matching `filters`, ignoring any pagination.
    fn count(&self, filters: &Filters) -> RepoResult<u64>;

    fn find(&self, query: &Query) -> RepoResult<Vec<E>> {
        check_columns::<E>(
            "list",
            query
                .filters
                .fields()
                .chain(std::iter::once(query.order_by.as_str())),
        )?;
        self.find_rows(query)?
            .iter()
            .map(|row| decode::<E>("list", row))
            .collect()
    }

    /// Unpaginated, default-ordered finder used by the entity extensions.
    fn find_where(&self, filters: Filters) -> RepoResult<Vec<E>> {
        self.find(&Query::new(filters, E::DEFAULT_ORDER, SortDirection::Desc))
    }

    /// One page plus the unpaginated count of matching rows.
    fn read_all(&self, options: &QueryOptions) -> RepoResult<Page<E>> {
        let limit = options.limit.unwrap_or(DEFAULT_LIMIT);
        let offset = options.offset.unwrap_or(0);
        let query = Query {
            filters: options.filters.clone(),
            order_by: options
                .order_by
                .clone()
                .unwrap_or_else(|| E::DEFAULT_ORDER.to_string()),
            direction: options.order_direction.unwrap_or_default(),
            limit: Some(limit),
            offset,
        };
        let data = self.find(&query)?;
        let total = self.count(&query.filters)?;
        Ok(Page {
            data,
            total,
            limit,
            offset,
        })
    }

    /// Sum of `sum_of` per distinct `group_by` value among rows matching
    /// `filters`. Groups without rows are absent; NULL keys are skipped.
    fn sum_grouped(
        &self,
        group_by: &str,
        sum_of: &str,
        filters: Filters,
    ) -> RepoResult<BTreeMap<String, Decimal>> {
        check_columns::<E>(
            "summarize",
            filters.fields().chain([group_by, sum_of]),
        )?;
        let rows = self.find_rows(&Query::new(filters, "id", SortDirection::Asc))?;
        let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
        for row in rows {
            let key = match row.get(group_by) {
                Some(Value::Text(s)) => s.clone(),
                Some(Value::Integer(i)) => i.to_string(),
                Some(Value::Real(f)) => f.to_string(),
                _ => continue,
            };
            let amount = row
                .opt_decimal(sum_of)
                .map_err(|e| RepoError::persistence("summarize", E::NAME, e))?;
            if let Some(amount) = amount {
                *totals.entry(key).or_default() += amount;
            }
        }
        Ok(totals)
    }
}
