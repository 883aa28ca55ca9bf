// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#[macro_use]
mod common;

use std::io;
use std::sync::{Arc, Mutex};

use finboard::db;
use finboard::models::{Budget, TransactionType};
use finboard::repository::{
    AlertQueries, BudgetQueries, MemoryRepository, SettingsQueries, Store, TransactionQueries,
};
use finboard::Repository;
use tracing_subscriber::fmt::MakeWriter;

use common::{date, new_budget, new_tx};

fn with_store(check: fn(&Store)) {
    check(&Store::in_memory());
}

contract_tests!(with_store);

#[test]
fn standalone_repository_tracks_length() {
    let repo: MemoryRepository<Budget> = MemoryRepository::new();
    assert!(repo.is_empty());
    let b = repo.create(new_budget(date(2026, 1, 1), None)).unwrap();
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.find_current_on(date(2026, 1, 31)).unwrap()[0].id, b.id);
    assert!(repo.delete(&b.id).unwrap());
    assert!(repo.is_empty());
}

#[test]
fn demo_store_is_seeded_with_predictable_ids() {
    let store = Store::demo().unwrap();
    assert_eq!(store.settings.get("base_currency").unwrap().unwrap().value, "USD");

    let accounts = store.accounts.read_all(&Default::default()).unwrap();
    assert_eq!(accounts.total, 2);
    assert!(accounts.data.iter().all(|a| a.id.starts_with("demo-")));

    let summary = store.transactions.summary_by_category(None, None).unwrap();
    assert_eq!(summary.len(), 2);
    assert_eq!(store.alerts.find_unread().unwrap().len(), 1);
    assert_eq!(store.budgets.find_current().unwrap().len(), 1);
}

#[test]
fn stores_do_not_share_rows() {
    let a = Store::in_memory();
    let b = Store::in_memory();
    a.transactions
        .create(new_tx(date(2026, 1, 1), TransactionType::Income, "1", "x", "y"))
        .unwrap();
    assert_eq!(a.transactions.read_all(&Default::default()).unwrap().total, 1);
    assert_eq!(b.transactions.read_all(&Default::default()).unwrap().total, 0);
}

/// Collects formatted log lines in memory.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn delete_log(store: &Store) -> String {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let tx = store
            .transactions
            .create(new_tx(date(2026, 1, 5), TransactionType::Expense, "4", "a", "c"))
            .unwrap();
        assert!(store.transactions.delete(&tx.id).unwrap());
        assert!(!store.transactions.delete(&tx.id).unwrap());
    });
    logs.contents()
}

#[test]
fn both_backends_log_deletes_alike() {
    let conn = db::open_in_memory().unwrap();
    for logs in [delete_log(&Store::sqlite(&conn)), delete_log(&Store::in_memory())] {
        let deletes: Vec<&str> = logs.lines().filter(|l| l.contains("deleted")).collect();
        assert_eq!(deletes.len(), 2, "{logs}");
        assert!(deletes[0].contains("transaction"));
        assert!(deletes[0].contains("removed=true"));
        assert!(deletes[1].contains("removed=false"));
    }
}
