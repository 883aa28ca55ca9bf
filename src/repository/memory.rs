// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use chrono::Utc;
use rusqlite::types::Value;
use tracing::{debug, warn};

use super::{check_values, decode, Entity, Repository};
use crate::error::{RepoError, RepoResult};
use crate::ids::{IdGenerator, TimestampIds};
use crate::query::{compare_values, Filters, Query, SortDirection, ToSqlValue};
use crate::row::RawRow;

/// Fixture repository: the same contract as [`super::SqliteRepository`], kept
/// in process memory. Rows are stored in their persisted shape so the entity's
/// row mapper and the filter semantics are shared with SQLite.
pub struct MemoryRepository<E> {
    rows: RefCell<Vec<RawRow>>,
    ids: Rc<dyn IdGenerator>,
    entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> MemoryRepository<E> {
    pub fn new() -> Self {
        Self::with_ids(Rc::new(TimestampIds))
    }

    pub fn with_ids(ids: Rc<dyn IdGenerator>) -> Self {
        MemoryRepository {
            rows: RefCell::new(Vec::new()),
            ids,
            entity: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn position(rows: &[RawRow], id: &str) -> Option<usize> {
        rows.iter()
            .position(|r| matches!(r.get("id"), Some(Value::Text(s)) if s == id))
    }

    /// Mirrors SQLite's `UNIQUE` constraints: no other row may already hold a
    /// non-NULL value that `row` claims for a unique column.
    fn check_unique(operation: &'static str, rows: &[RawRow], row: &RawRow) -> RepoResult<()> {
        let id = row.get("id");
        for column in E::UNIQUE_COLUMNS {
            let Some(value) = row.get(column).filter(|v| !matches!(v, Value::Null)) else {
                continue;
            };
            let taken = rows
                .iter()
                .filter(|other| other.get("id") != id)
                .any(|other| other.get(column) == Some(value));
            if taken {
                return Err(RepoError::persistence(
                    operation,
                    E::NAME,
                    format!("UNIQUE constraint failed: {}.{}", E::TABLE, column),
                ));
            }
        }
        Ok(())
    }

    fn fetch(&self, operation: &'static str, id: &str) -> RepoResult<Option<E>> {
        let rows = self.rows.borrow();
        Self::position(&rows, id)
            .map(|i| decode::<E>(operation, &rows[i]))
            .transpose()
    }
}

impl<E: Entity> Repository<E> for MemoryRepository<E> {
    fn create(&self, data: E::New) -> RepoResult<E> {
        let values = E::insert_values(&data);
        check_values::<E>("create", E::COLUMNS.iter().copied().zip(values.iter()))?;
        let id = self.ids.next_id();
        let now = Utc::now().to_sql_value();
        {
            let mut rows = self.rows.borrow_mut();
            if Self::position(&rows, &id).is_some() {
                return Err(RepoError::persistence(
                    "create",
                    E::NAME,
                    format!("UNIQUE constraint failed: {}.id", E::TABLE),
                ));
            }
            let mut row = RawRow::new().with("id", Value::Text(id.clone()));
            for (column, value) in E::COLUMNS.iter().zip(values) {
                row.set(*column, value);
            }
            row.set("created_at", now.clone());
            row.set("updated_at", now);
            Self::check_unique("create", &rows, &row)?;
            rows.push(row);
        }
        debug!(entity = E::NAME, id = %id, "created in memory");

        self.fetch("create", &id)?
            .ok_or_else(|| RepoError::persistence("create", E::NAME, "row missing after insert"))
    }

    fn read(&self, id: &str) -> RepoResult<Option<E>> {
        self.fetch("read", id)
    }

    fn update(&self, id: &str, changes: E::Update) -> RepoResult<E> {
        let changed = E::update_values(&changes);
        check_values::<E>("update", changed.iter().map(|(c, v)| (*c, v)))?;
        {
            let mut rows = self.rows.borrow_mut();
            let Some(i) = Self::position(&rows, id) else {
                warn!(entity = E::NAME, id, "update matched no row");
                return Err(RepoError::not_found(E::NAME, id));
            };
            let mut row = rows[i].clone();
            for (column, value) in changed {
                row.set(column, value);
            }
            row.set("updated_at", Utc::now().to_sql_value());
            Self::check_unique("update", &rows, &row)?;
            rows[i] = row;
        }
        self.fetch("update", id)?
            .ok_or_else(|| RepoError::not_found(E::NAME, id))
    }

    fn delete(&self, id: &str) -> RepoResult<bool> {
        let mut rows = self.rows.borrow_mut();
        let before = rows.len();
        rows.retain(|r| !matches!(r.get("id"), Some(Value::Text(s)) if s == id));
        let removed = rows.len() < before;
        debug!(entity = E::NAME, id, removed, "deleted");
        Ok(removed)
    }

    fn find_rows(&self, query: &Query) -> RepoResult<Vec<RawRow>> {
        let mut matched: Vec<RawRow> = self
            .rows
            .borrow()
            .iter()
            .filter(|r| query.filters.matches(r))
            .cloned()
            .collect();

        let null = Value::Null;
        matched.sort_by(|a, b| {
            let by_column = compare_values(
                a.get(&query.order_by).unwrap_or(&null),
                b.get(&query.order_by).unwrap_or(&null),
            );
            let ord = by_column.then_with(|| {
                compare_values(a.get("id").unwrap_or(&null), b.get("id").unwrap_or(&null))
            });
            match query.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });

        let page = matched.into_iter().skip(query.offset as usize);
        Ok(match query.limit {
            Some(limit) => page.take(limit as usize).collect(),
            None => page.collect(),
        })
    }

    fn count(&self, filters: &Filters) -> RepoResult<u64> {
        Ok(self
            .rows
            .borrow()
            .iter()
            .filter(|r| filters.matches(r))
            .count() as u64)
    }
}
