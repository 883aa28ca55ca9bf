// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#[macro_use]
mod common;

use std::rc::Rc;

use finboard::db;
use finboard::ids::SequentialIds;
use finboard::models::{Account, NewTransaction, TransactionType};
use finboard::repository::{SqliteRepository, Store};
use finboard::{RepoError, Repository};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;

use common::{date, new_account, new_tx};

fn with_store(check: fn(&Store)) {
    let conn = db::open_in_memory().unwrap();
    check(&Store::sqlite(&conn));
}

contract_tests!(with_store);

#[test]
fn amounts_are_stored_as_real() {
    let conn = db::open_in_memory().unwrap();
    let store = Store::sqlite(&conn);
    let tx = store
        .transactions
        .create(new_tx(date(2026, 1, 2), TransactionType::Expense, "12.34", "a", "c"))
        .unwrap();
    let (kind, amount): (String, f64) = conn
        .query_row(
            "SELECT typeof(amount), amount FROM transactions WHERE id = ?1",
            params![tx.id],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .unwrap();
    assert_eq!(kind, "real");
    assert_eq!(amount, 12.34);
}

#[test]
fn tags_and_flags_use_their_column_encodings() {
    let conn = db::open_in_memory().unwrap();
    let store = Store::sqlite(&conn);
    let tx = store
        .transactions
        .create(finboard::models::NewTransaction {
            tags: Some(vec!["b".into(), "a".into()]),
            is_recurring: true,
            ..new_tx(date(2026, 1, 2), TransactionType::Expense, "1", "a", "c")
        })
        .unwrap();
    let (tags, recurring, created): (String, i64, String) = conn
        .query_row(
            "SELECT tags, is_recurring, created_at FROM transactions WHERE id = ?1",
            params![tx.id],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        )
        .unwrap();
    assert_eq!(tags, r#"["b","a"]"#);
    assert_eq!(recurring, 1);
    assert!(created.ends_with('Z'));
}

#[test]
fn duplicate_id_surfaces_as_persistence_error() {
    let conn = db::open_in_memory().unwrap();
    let first = Store::sqlite_with_ids(&conn, Rc::new(SequentialIds::new("acc")));
    let second = Store::sqlite_with_ids(&conn, Rc::new(SequentialIds::new("acc")));
    first
        .accounts
        .create(new_account("One", "USD", "0", true))
        .unwrap();

    let err = second
        .accounts
        .create(new_account("Two", "USD", "0", true))
        .unwrap_err();
    assert!(matches!(err, RepoError::Persistence { .. }));
    let msg = err.to_string();
    assert!(msg.starts_with("Failed to create account: "), "{msg}");
    assert!(msg.contains("UNIQUE constraint failed"), "{msg}");
}

#[test]
fn missing_table_fails_every_operation_with_context() {
    let conn = Connection::open_in_memory().unwrap();
    let repo: SqliteRepository<Account> = SqliteRepository::new(&conn);

    let err = repo.read("x").unwrap_err();
    assert!(err.to_string().starts_with("Failed to read account: "));
    let err = repo.delete("x").unwrap_err();
    assert!(err.to_string().starts_with("Failed to delete account: "));
    let err = repo
        .create(new_account("One", "USD", "0", true))
        .unwrap_err();
    assert!(err.to_string().contains("no such table: accounts"));
}

#[test]
fn undecodable_rows_are_reported_not_skipped() {
    let conn = db::open_in_memory().unwrap();
    conn.execute(
        "INSERT INTO transactions(id, date, type, amount, account_id, category_id, created_at, updated_at)
         VALUES ('t1', '2026-01-01', 'refund', 5, 'a', 'c', '2026-01-01T00:00:00.000Z', '2026-01-01T00:00:00.000Z')",
        [],
    )
    .unwrap();
    let store = Store::sqlite(&conn);
    let err = store.transactions.read("t1").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Failed to read transaction: column 'type': unknown TransactionType 'refund'"
    );
}

#[test]
fn rows_written_elsewhere_decode_with_defaults() {
    let conn = db::open_in_memory().unwrap();
    conn.execute(
        "INSERT INTO transactions(id, date, type, amount, account_id, category_id, merchant, tags, created_at, updated_at)
         VALUES ('t1', '2026-01-01', 'income', 2500, 'a', 'c', '', '', '2026-01-01T00:00:00Z', '2026-01-01T00:00:00Z')",
        [],
    )
    .unwrap();
    let tx = Store::sqlite(&conn).transactions.read("t1").unwrap().unwrap();
    assert_eq!(tx.amount, common::money("2500"));
    assert_eq!(tx.merchant, None);
    assert_eq!(tx.tags, None);
    assert!(!tx.is_recurring);
}

#[test]
fn rejected_amount_leaves_no_row_behind() {
    let conn = db::open_in_memory().unwrap();
    let store = Store::sqlite(&conn);
    let err = store
        .transactions
        .create(NewTransaction {
            amount: Decimal::MAX,
            ..new_tx(date(2026, 3, 2), TransactionType::Expense, "1", "a", "c")
        })
        .unwrap_err();
    assert!(err.to_string().starts_with("Failed to create transaction: column 'amount'"));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM transactions", [], |r| r.get(0))
        .unwrap();
    assert_eq!(rows, 0);
    assert!(store.transactions.read_all(&Default::default()).unwrap().data.is_empty());
}
