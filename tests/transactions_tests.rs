// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finboard::models::{NewTransaction, TaxFlag, TransactionType};
use finboard::repository::Store;
use finboard::{cli, commands::transactions};
use rust_decimal::Decimal;

fn setup() -> Store<'static> {
    let store = Store::in_memory();
    for (i, account) in [(1, "A1"), (2, "A2"), (3, "A1")] {
        store
            .transactions
            .create(NewTransaction {
                date: NaiveDate::from_ymd_opt(2025, 1, i).unwrap(),
                r#type: TransactionType::Expense,
                amount: Decimal::new(-10, 0),
                account_id: account.into(),
                category_id: "Cat1".into(),
                merchant: Some("P".into()),
                description: None,
                tags: None,
                tax_flag: TaxFlag::None,
                is_recurring: false,
                recurring_pattern: None,
            })
            .unwrap();
    }
    store
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["finboard", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            return list_m.clone();
        }
    }
    panic!("no tx list subcommand");
}

#[test]
fn list_limit_respected() {
    let store = setup();
    let options = transactions::list_options(&list_matches(&["--limit", "2"])).unwrap();
    let page = store.transactions.read_all(&options).unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.total, 3);
    assert_eq!(page.data[0].date.to_string(), "2025-01-03");
}

#[test]
fn list_filters_by_account_and_window() {
    let store = setup();
    let options = transactions::list_options(&list_matches(&[
        "--account", "A1", "--from", "2025-01-02", "--asc",
    ]))
    .unwrap();
    let page = store.transactions.read_all(&options).unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].date.to_string(), "2025-01-03");

    let options =
        transactions::list_options(&list_matches(&["--account", "A1", "--account", "A2"]))
            .unwrap();
    assert_eq!(store.transactions.read_all(&options).unwrap().total, 3);
}

#[test]
fn list_rejects_malformed_dates() {
    let err = transactions::list_options(&list_matches(&["--from", "01/02/2025"])).unwrap_err();
    assert!(err.to_string().contains("expected YYYY-MM-DD"));
}

#[test]
fn update_flags_become_a_partial_change_set() {
    let store = setup();
    let id = store
        .transactions
        .read_all(&Default::default())
        .unwrap()
        .data[0]
        .id
        .clone();
    let matches = cli::build_cli().get_matches_from([
        "finboard", "tx", "update", id.as_str(), "--amount", "-12.50", "--merchant", "",
    ]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("update", update_m)) = tx_m.subcommand() else {
        panic!("no update subcommand");
    };
    let changes = transactions::changes(update_m).unwrap();
    assert_eq!(changes.merchant, Some(None));
    assert_eq!(changes.date, None);

    let tx = store.transactions.update(&id, changes).unwrap();
    assert_eq!(tx.amount, Decimal::new(-1250, 2));
    assert_eq!(tx.merchant, None);
    assert_eq!(tx.category_id, "Cat1");
}
