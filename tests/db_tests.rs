// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finboard::db;
use finboard::models::NewSettings;
use finboard::repository::{SettingsQueries, Store};
use finboard::Repository;
use tempfile::tempdir;

#[test]
fn open_creates_parent_dirs_and_persists() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("finboard.sqlite");
    {
        let conn = db::open_or_init(&path).unwrap();
        Store::sqlite(&conn)
            .settings
            .create(NewSettings {
                key: "base_currency".into(),
                value: "EUR".into(),
            })
            .unwrap();
    }
    assert!(path.exists());

    // Reopening runs the schema again without touching existing rows.
    let conn = db::open_or_init(&path).unwrap();
    let store = Store::sqlite(&conn);
    assert_eq!(store.settings.get("base_currency").unwrap().unwrap().value, "EUR");
}

#[test]
fn schema_has_every_table() {
    let conn = db::open_in_memory().unwrap();
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    let tables: Vec<String> = stmt
        .query_map([], |r| r.get(0))
        .unwrap()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(
        tables,
        [
            "accounts",
            "alerts",
            "budgets",
            "calendar_events",
            "categories",
            "expenses",
            "forecasts",
            "goals",
            "income_sources",
            "net_worth_entries",
            "settings",
            "todo_items",
            "transactions",
        ]
    );
}

#[test]
fn explicit_path_wins() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("explicit.sqlite");
    assert_eq!(db::resolve_path(Some(path.clone())).unwrap(), path);
}
