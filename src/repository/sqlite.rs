// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::marker::PhantomData;
use std::rc::Rc;

use chrono::Utc;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use tracing::{debug, warn};

use super::{check_values, decode, Entity, Repository};
use crate::error::{RepoError, RepoResult};
use crate::ids::{IdGenerator, TimestampIds};
use crate::query::{build_where, Filters, Query, ToSqlValue};
use crate::row::RawRow;

/// Repository over the shared SQLite connection. The connection's lifecycle
/// belongs to the caller; failures surface as [`RepoError::Persistence`].
pub struct SqliteRepository<'c, E> {
    conn: &'c Connection,
    ids: Rc<dyn IdGenerator>,
    entity: PhantomData<fn() -> E>,
}

impl<'c, E: Entity> SqliteRepository<'c, E> {
    pub fn new(conn: &'c Connection) -> Self {
        Self::with_ids(conn, Rc::new(TimestampIds))
    }

    pub fn with_ids(conn: &'c Connection, ids: Rc<dyn IdGenerator>) -> Self {
        SqliteRepository {
            conn,
            ids,
            entity: PhantomData,
        }
    }

    fn fetch(&self, operation: &'static str, id: &str) -> RepoResult<Option<E>> {
        let sql = format!("SELECT * FROM {} WHERE id = ?1", E::TABLE);
        let row = self
            .conn
            .query_row(&sql, params![id], RawRow::from_sql_row)
            .optional()
            .map_err(|e| RepoError::persistence(operation, E::NAME, e))?;
        row.map(|r| decode::<E>(operation, &r)).transpose()
    }
}

impl<E: Entity> Repository<E> for SqliteRepository<'_, E> {
    fn create(&self, data: E::New) -> RepoResult<E> {
        let id = self.ids.next_id();
        let now = Utc::now().to_sql_value();

        let columns = E::insert_values(&data);
        debug_assert_eq!(columns.len(), E::COLUMNS.len());
        check_values::<E>("create", E::COLUMNS.iter().copied().zip(columns.iter()))?;
        let mut values = Vec::with_capacity(columns.len() + 3);
        values.push(Value::Text(id.clone()));
        values.extend(columns);
        values.push(now.clone());
        values.push(now);

        let sql = format!(
            "INSERT INTO {} (id, {}, created_at, updated_at) VALUES ({})",
            E::TABLE,
            E::COLUMNS.join(", "),
            vec!["?"; values.len()].join(", ")
        );
        self.conn
            .execute(&sql, params_from_iter(values.iter()))
            .map_err(|e| RepoError::persistence("create", E::NAME, e))?;
        debug!(entity = E::NAME, id = %id, "created");

        self.fetch("create", &id)?
            .ok_or_else(|| RepoError::persistence("create", E::NAME, "row missing after insert"))
    }

    fn read(&self, id: &str) -> RepoResult<Option<E>> {
        self.fetch("read", id)
    }

    fn update(&self, id: &str, changes: E::Update) -> RepoResult<E> {
        let changed = E::update_values(&changes);
        check_values::<E>("update", changed.iter().map(|(c, v)| (*c, v)))?;
        let mut assignments: Vec<String> =
            changed.iter().map(|(c, _)| format!("{c} = ?")).collect();
        assignments.push("updated_at = ?".to_string());

        let mut values: Vec<Value> = changed.into_iter().map(|(_, v)| v).collect();
        values.push(Utc::now().to_sql_value());
        values.push(Value::Text(id.to_string()));

        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?",
            E::TABLE,
            assignments.join(", ")
        );
        let affected = self
            .conn
            .execute(&sql, params_from_iter(values.iter()))
            .map_err(|e| RepoError::persistence("update", E::NAME, e))?;
        if affected == 0 {
            warn!(entity = E::NAME, id, "update matched no row");
            return Err(RepoError::not_found(E::NAME, id));
        }
        debug!(entity = E::NAME, id, fields = assignments.len() - 1, "updated");

        self.fetch("update", id)?
            .ok_or_else(|| RepoError::not_found(E::NAME, id))
    }

    fn delete(&self, id: &str) -> RepoResult<bool> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", E::TABLE);
        let affected = self
            .conn
            .execute(&sql, params![id])
            .map_err(|e| RepoError::persistence("delete", E::NAME, e))?;
        debug!(entity = E::NAME, id, removed = affected > 0, "deleted");
        Ok(affected > 0)
    }

    fn find_rows(&self, query: &Query) -> RepoResult<Vec<RawRow>> {
        let clause = build_where(&query.filters);
        let dir = query.direction.as_sql();
        let mut sql = format!(
            "SELECT * FROM {}{} ORDER BY {} {dir}, id {dir}",
            E::TABLE,
            clause.sql(),
            query.order_by
        );
        let mut values = clause.params;
        match query.limit {
            Some(limit) => {
                sql.push_str(" LIMIT ? OFFSET ?");
                values.push(limit.to_sql_value());
                values.push(query.offset.to_sql_value());
            }
            None if query.offset > 0 => {
                sql.push_str(" LIMIT -1 OFFSET ?");
                values.push(query.offset.to_sql_value());
            }
            None => {}
        }
        debug!(entity = E::NAME, sql = %sql, params = values.len(), "query");

        let fail = |e: rusqlite::Error| RepoError::persistence("list", E::NAME, e);
        let mut stmt = self.conn.prepare(&sql).map_err(fail)?;
        let rows = stmt
            .query_map(params_from_iter(values.iter()), RawRow::from_sql_row)
            .map_err(fail)?;
        let collected: rusqlite::Result<Vec<RawRow>> = rows.collect();
        collected.map_err(fail)
    }

    fn count(&self, filters: &Filters) -> RepoResult<u64> {
        let clause = build_where(filters);
        let sql = format!("SELECT COUNT(*) FROM {}{}", E::TABLE, clause.sql());
        let n: i64 = self
            .conn
            .query_row(&sql, params_from_iter(clause.params.iter()), |r| r.get(0))
            .map_err(|e| RepoError::persistence("count", E::NAME, e))?;
        Ok(u64::try_from(n).unwrap_or_default())
    }
}
