// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::types::Value;

use super::{ChangeSet, Entity, Repository};
use crate::error::RepoResult;
use crate::models::{CalendarEvent, CalendarEventUpdate, EventType, NewCalendarEvent};
use crate::query::{Filters, ToSqlValue};
use crate::row::{RawRow, RowError};

impl Entity for CalendarEvent {
    const NAME: &'static str = "calendar event";
    const TABLE: &'static str = "calendar_events";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "date",
        "event_type",
        "amount",
        "related_id",
        "notes",
    ];
    const DEFAULT_ORDER: &'static str = "date";

    type New = NewCalendarEvent;
    type Update = CalendarEventUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &RawRow) -> Result<Self, RowError> {
        Ok(CalendarEvent {
            id: row.text("id")?,
            title: row.text("title")?,
            date: row.date("date")?,
            event_type: row.variant("event_type")?,
            amount: row.opt_decimal("amount")?,
            related_id: row.opt_text("related_id")?,
            notes: row.opt_text("notes")?,
            created_at: row.timestamp("created_at")?,
            updated_at: row.timestamp("updated_at")?,
        })
    }

    fn insert_values(e: &NewCalendarEvent) -> Vec<Value> {
        vec![
            e.title.to_sql_value(),
            e.date.to_sql_value(),
            e.event_type.to_sql_value(),
            e.amount.to_sql_value(),
            e.related_id.to_sql_value(),
            e.notes.to_sql_value(),
        ]
    }

    fn update_values(c: &CalendarEventUpdate) -> Vec<(&'static str, Value)> {
        ChangeSet::new()
            .field("title", &c.title)
            .field("date", &c.date)
            .field("event_type", &c.event_type)
            .field("amount", &c.amount)
            .field("related_id", &c.related_id)
            .field("notes", &c.notes)
            .into_values()
    }
}

pub trait CalendarEventQueries: Repository<CalendarEvent> {
    fn find_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<CalendarEvent>> {
        self.find_where(Filters::new().between("date", start, end))
    }

    fn find_by_type(&self, event_type: EventType) -> RepoResult<Vec<CalendarEvent>> {
        self.find_where(Filters::new().eq("event_type", event_type))
    }
}

impl<R: Repository<CalendarEvent> + ?Sized> CalendarEventQueries for R {}
