// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::rc::Rc;

use rusqlite::Connection;

use super::{fixtures, MemoryRepository, Repository, SqliteRepository};
use crate::error::RepoResult;
use crate::ids::{IdGenerator, SequentialIds, TimestampIds};
use crate::models::{
    Account, Alert, Budget, CalendarEvent, Category, Expense, Forecast, Goal, IncomeSource,
    NetWorthEntry, Settings, TodoItem, Transaction,
};

/// One repository per entity, all over the same backend.
pub struct Store<'c> {
    pub transactions: Box<dyn Repository<Transaction> + 'c>,
    pub accounts: Box<dyn Repository<Account> + 'c>,
    pub categories: Box<dyn Repository<Category> + 'c>,
    pub budgets: Box<dyn Repository<Budget> + 'c>,
    pub goals: Box<dyn Repository<Goal> + 'c>,
    pub expenses: Box<dyn Repository<Expense> + 'c>,
    pub income_sources: Box<dyn Repository<IncomeSource> + 'c>,
    pub forecasts: Box<dyn Repository<Forecast> + 'c>,
    pub calendar_events: Box<dyn Repository<CalendarEvent> + 'c>,
    pub todo_items: Box<dyn Repository<TodoItem> + 'c>,
    pub alerts: Box<dyn Repository<Alert> + 'c>,
    pub net_worth: Box<dyn Repository<NetWorthEntry> + 'c>,
    pub settings: Box<dyn Repository<Settings> + 'c>,
}

impl<'c> Store<'c> {
    pub fn sqlite(conn: &'c Connection) -> Self {
        Self::sqlite_with_ids(conn, Rc::new(TimestampIds))
    }

    pub fn sqlite_with_ids(conn: &'c Connection, ids: Rc<dyn IdGenerator>) -> Self {
        Store {
            transactions: Box::new(SqliteRepository::with_ids(conn, ids.clone())),
            accounts: Box::new(SqliteRepository::with_ids(conn, ids.clone())),
            categories: Box::new(SqliteRepository::with_ids(conn, ids.clone())),
            budgets: Box::new(SqliteRepository::with_ids(conn, ids.clone())),
            goals: Box::new(SqliteRepository::with_ids(conn, ids.clone())),
            expenses: Box::new(SqliteRepository::with_ids(conn, ids.clone())),
            income_sources: Box::new(SqliteRepository::with_ids(conn, ids.clone())),
            forecasts: Box::new(SqliteRepository::with_ids(conn, ids.clone())),
            calendar_events: Box::new(SqliteRepository::with_ids(conn, ids.clone())),
            todo_items: Box::new(SqliteRepository::with_ids(conn, ids.clone())),
            alerts: Box::new(SqliteRepository::with_ids(conn, ids.clone())),
            net_worth: Box::new(SqliteRepository::with_ids(conn, ids.clone())),
            settings: Box::new(SqliteRepository::with_ids(conn, ids)),
        }
    }
}

impl Store<'static> {
    pub fn in_memory() -> Self {
        Self::in_memory_with_ids(Rc::new(TimestampIds))
    }

    pub fn in_memory_with_ids(ids: Rc<dyn IdGenerator>) -> Self {
        Store {
            transactions: Box::new(MemoryRepository::with_ids(ids.clone())),
            accounts: Box::new(MemoryRepository::with_ids(ids.clone())),
            categories: Box::new(MemoryRepository::with_ids(ids.clone())),
            budgets: Box::new(MemoryRepository::with_ids(ids.clone())),
            goals: Box::new(MemoryRepository::with_ids(ids.clone())),
            expenses: Box::new(MemoryRepository::with_ids(ids.clone())),
            income_sources: Box::new(MemoryRepository::with_ids(ids.clone())),
            forecasts: Box::new(MemoryRepository::with_ids(ids.clone())),
            calendar_events: Box::new(MemoryRepository::with_ids(ids.clone())),
            todo_items: Box::new(MemoryRepository::with_ids(ids.clone())),
            alerts: Box::new(MemoryRepository::with_ids(ids.clone())),
            net_worth: Box::new(MemoryRepository::with_ids(ids.clone())),
            settings: Box::new(MemoryRepository::with_ids(ids)),
        }
    }

    /// In-memory store seeded with the demo data set; ids are `demo-1`, `demo-2`, ...
    pub fn demo() -> RepoResult<Self> {
        let store = Self::in_memory_with_ids(Rc::new(SequentialIds::new("demo")));
        fixtures::seed(&store)?;
        Ok(store)
    }
}
