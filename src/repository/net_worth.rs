// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::types::Value;

use super::{ChangeSet, Entity, Repository};
use crate::error::RepoResult;
use crate::models::{NetWorthEntry, NetWorthEntryUpdate, NewNetWorthEntry};
use crate::query::{Filters, Query, SortDirection, ToSqlValue};
use crate::row::{RawRow, RowError};

impl Entity for NetWorthEntry {
    const NAME: &'static str = "net worth entry";
    const TABLE: &'static str = "net_worth_entries";
    const COLUMNS: &'static [&'static str] = &[
        "date",
        "total_assets",
        "total_liabilities",
        "net_worth",
        "notes",
    ];
    const DEFAULT_ORDER: &'static str = "date";

    type New = NewNetWorthEntry;
    type Update = NetWorthEntryUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &RawRow) -> Result<Self, RowError> {
        Ok(NetWorthEntry {
            id: row.text("id")?,
            date: row.date("date")?,
            total_assets: row.decimal("total_assets")?,
            total_liabilities: row.decimal("total_liabilities")?,
            net_worth: row.decimal("net_worth")?,
            notes: row.opt_text("notes")?,
            created_at: row.timestamp("created_at")?,
            updated_at: row.timestamp("updated_at")?,
        })
    }

    fn insert_values(n: &NewNetWorthEntry) -> Vec<Value> {
        vec![
            n.date.to_sql_value(),
            n.total_assets.to_sql_value(),
            n.total_liabilities.to_sql_value(),
            n.net_worth.to_sql_value(),
            n.notes.to_sql_value(),
        ]
    }

    fn update_values(c: &NetWorthEntryUpdate) -> Vec<(&'static str, Value)> {
        ChangeSet::new()
            .field("date", &c.date)
            .field("total_assets", &c.total_assets)
            .field("total_liabilities", &c.total_liabilities)
            .field("net_worth", &c.net_worth)
            .field("notes", &c.notes)
            .into_values()
    }
}

pub trait NetWorthQueries: Repository<NetWorthEntry> {
    fn find_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<NetWorthEntry>> {
        self.find_where(Filters::new().between("date", start, end))
    }

    /// Most recent entry by date.
    fn latest(&self) -> RepoResult<Option<NetWorthEntry>> {
        let mut query = Query::new(Filters::new(), "date", SortDirection::Desc);
        query.limit = Some(1);
        Ok(self.find(&query)?.into_iter().next())
    }
}

impl<R: Repository<NetWorthEntry> + ?Sized> NetWorthQueries for R {}
