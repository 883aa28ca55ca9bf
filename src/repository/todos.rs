// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::types::Value;

use super::{ChangeSet, Entity, Repository};
use crate::error::RepoResult;
use crate::models::{NewTodoItem, TodoItem, TodoItemUpdate};
use crate::query::{Filters, ToSqlValue};
use crate::row::{RawRow, RowError};

impl Entity for TodoItem {
    const NAME: &'static str = "todo item";
    const TABLE: &'static str = "todo_items";
    const COLUMNS: &'static [&'static str] =
        &["title", "due_date", "completed", "priority", "notes"];
    const DEFAULT_ORDER: &'static str = "created_at";

    type New = NewTodoItem;
    type Update = TodoItemUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &RawRow) -> Result<Self, RowError> {
        Ok(TodoItem {
            id: row.text("id")?,
            title: row.text("title")?,
            due_date: row.opt_date("due_date")?,
            completed: row.flag("completed")?,
            priority: row.variant("priority")?,
            notes: row.opt_text("notes")?,
            created_at: row.timestamp("created_at")?,
            updated_at: row.timestamp("updated_at")?,
        })
    }

    fn insert_values(t: &NewTodoItem) -> Vec<Value> {
        vec![
            t.title.to_sql_value(),
            t.due_date.to_sql_value(),
            t.completed.to_sql_value(),
            t.priority.to_sql_value(),
            t.notes.to_sql_value(),
        ]
    }

    fn update_values(c: &TodoItemUpdate) -> Vec<(&'static str, Value)> {
        ChangeSet::new()
            .field("title", &c.title)
            .field("due_date", &c.due_date)
            .field("completed", &c.completed)
            .field("priority", &c.priority)
            .field("notes", &c.notes)
            .into_values()
    }
}

pub trait TodoItemQueries: Repository<TodoItem> {
    fn find_open(&self) -> RepoResult<Vec<TodoItem>> {
        self.find_where(Filters::new().eq("completed", false))
    }

    fn set_completed(&self, id: &str, completed: bool) -> RepoResult<TodoItem> {
        self.update(
            id,
            TodoItemUpdate {
                completed: Some(completed),
                ..Default::default()
            },
        )
    }
}

impl<R: Repository<TodoItem> + ?Sized> TodoItemQueries for R {}
