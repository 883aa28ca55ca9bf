// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::types::Value;

use super::{ChangeSet, Entity, Repository};
use crate::error::RepoResult;
use crate::models::{Category, CategoryType, CategoryUpdate, NewCategory};
use crate::query::{Filters, ToSqlValue};
use crate::row::{RawRow, RowError};

impl Entity for Category {
    const NAME: &'static str = "category";
    const TABLE: &'static str = "categories";
    const COLUMNS: &'static [&'static str] = &["name", "type", "color", "icon", "parent_id"];
    const DEFAULT_ORDER: &'static str = "created_at";

    type New = NewCategory;
    type Update = CategoryUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &RawRow) -> Result<Self, RowError> {
        Ok(Category {
            id: row.text("id")?,
            name: row.text("name")?,
            r#type: row.variant("type")?,
            color: row.opt_text("color")?,
            icon: row.opt_text("icon")?,
            parent_id: row.opt_text("parent_id")?,
            created_at: row.timestamp("created_at")?,
            updated_at: row.timestamp("updated_at")?,
        })
    }

    fn insert_values(c: &NewCategory) -> Vec<Value> {
        vec![
            c.name.to_sql_value(),
            c.r#type.to_sql_value(),
            c.color.to_sql_value(),
            c.icon.to_sql_value(),
            c.parent_id.to_sql_value(),
        ]
    }

    fn update_values(c: &CategoryUpdate) -> Vec<(&'static str, Value)> {
        ChangeSet::new()
            .field("name", &c.name)
            .field("type", &c.r#type)
            .field("color", &c.color)
            .field("icon", &c.icon)
            .field("parent_id", &c.parent_id)
            .into_values()
    }
}

pub trait CategoryQueries: Repository<Category> {
    fn find_by_type(&self, kind: CategoryType) -> RepoResult<Vec<Category>> {
        self.find_where(Filters::new().eq("type", kind))
    }

    fn find_children(&self, parent_id: &str) -> RepoResult<Vec<Category>> {
        self.find_where(Filters::new().eq("parent_id", parent_id))
    }
}

impl<R: Repository<Category> + ?Sized> CategoryQueries for R {}
