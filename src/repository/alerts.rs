// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::types::Value;

use super::{ChangeSet, Entity, Repository};
use crate::error::RepoResult;
use crate::models::{Alert, AlertUpdate, NewAlert};
use crate::query::{Filters, ToSqlValue};
use crate::row::{RawRow, RowError};

impl Entity for Alert {
    const NAME: &'static str = "alert";
    const TABLE: &'static str = "alerts";
    const COLUMNS: &'static [&'static str] =
        &["alert_type", "severity", "message", "is_read", "related_id"];
    const DEFAULT_ORDER: &'static str = "created_at";

    type New = NewAlert;
    type Update = AlertUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &RawRow) -> Result<Self, RowError> {
        Ok(Alert {
            id: row.text("id")?,
            alert_type: row.variant("alert_type")?,
            severity: row.variant("severity")?,
            message: row.text("message")?,
            is_read: row.flag("is_read")?,
            related_id: row.opt_text("related_id")?,
            created_at: row.timestamp("created_at")?,
            updated_at: row.timestamp("updated_at")?,
        })
    }

    fn insert_values(a: &NewAlert) -> Vec<Value> {
        vec![
            a.alert_type.to_sql_value(),
            a.severity.to_sql_value(),
            a.message.to_sql_value(),
            a.is_read.to_sql_value(),
            a.related_id.to_sql_value(),
        ]
    }

    fn update_values(c: &AlertUpdate) -> Vec<(&'static str, Value)> {
        ChangeSet::new()
            .field("alert_type", &c.alert_type)
            .field("severity", &c.severity)
            .field("message", &c.message)
            .field("is_read", &c.is_read)
            .field("related_id", &c.related_id)
            .into_values()
    }
}

pub trait AlertQueries: Repository<Alert> {
    fn find_unread(&self) -> RepoResult<Vec<Alert>> {
        self.find_where(Filters::new().eq("is_read", false))
    }

    fn mark_read(&self, id: &str) -> RepoResult<Alert> {
        self.update(
            id,
            AlertUpdate {
                is_read: Some(true),
                ..Default::default()
            },
        )
    }
}

impl<R: Repository<Alert> + ?Sized> AlertQueries for R {}
