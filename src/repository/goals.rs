// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::types::Value;
use rust_decimal::Decimal;

use super::{ChangeSet, Entity, Repository};
use crate::error::{RepoError, RepoResult};
use crate::models::{Goal, GoalStatus, GoalUpdate, NewGoal};
use crate::query::{Filters, ToSqlValue};
use crate::row::{RawRow, RowError};

impl Entity for Goal {
    const NAME: &'static str = "goal";
    const TABLE: &'static str = "goals";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "target_amount",
        "current_amount",
        "due_date",
        "priority",
        "status",
        "description",
    ];
    const DEFAULT_ORDER: &'static str = "due_date";

    type New = NewGoal;
    type Update = GoalUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &RawRow) -> Result<Self, RowError> {
        Ok(Goal {
            id: row.text("id")?,
            name: row.text("name")?,
            target_amount: row.decimal("target_amount")?,
            current_amount: row.decimal("current_amount")?,
            due_date: row.date("due_date")?,
            priority: row.variant("priority")?,
            status: row.variant("status")?,
            description: row.opt_text("description")?,
            created_at: row.timestamp("created_at")?,
            updated_at: row.timestamp("updated_at")?,
        })
    }

    fn insert_values(g: &NewGoal) -> Vec<Value> {
        vec![
            g.name.to_sql_value(),
            g.target_amount.to_sql_value(),
            g.current_amount.to_sql_value(),
            g.due_date.to_sql_value(),
            g.priority.to_sql_value(),
            g.status.to_sql_value(),
            g.description.to_sql_value(),
        ]
    }

    fn update_values(c: &GoalUpdate) -> Vec<(&'static str, Value)> {
        ChangeSet::new()
            .field("name", &c.name)
            .field("target_amount", &c.target_amount)
            .field("current_amount", &c.current_amount)
            .field("due_date", &c.due_date)
            .field("priority", &c.priority)
            .field("status", &c.status)
            .field("description", &c.description)
            .into_values()
    }
}

pub trait GoalQueries: Repository<Goal> {
    fn find_by_status(&self, status: GoalStatus) -> RepoResult<Vec<Goal>> {
        self.find_where(Filters::new().eq("status", status))
    }

    /// Adds `amount` (which may be negative) to the goal's current amount.
    fn add_progress(&self, id: &str, amount: Decimal) -> RepoResult<Goal> {
        let goal = self
            .read(id)?
            .ok_or_else(|| RepoError::not_found(Goal::NAME, id))?;
        self.update(
            id,
            GoalUpdate {
                current_amount: Some(goal.current_amount + amount),
                ..Default::default()
            },
        )
    }
}

impl<R: Repository<Goal> + ?Sized> GoalQueries for R {}
