// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Repository contract checks shared by the SQLite and in-memory suites.

#![allow(dead_code)]

use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, Utc};
use finboard::models::*;
use finboard::query::{Filters, QueryOptions, SortDirection};
use finboard::repository::{
    AccountQueries, AlertQueries, BudgetQueries, CalendarEventQueries, CategoryQueries,
    ExpenseQueries, ForecastQueries, GoalQueries, IncomeSourceQueries, NetWorthQueries,
    SettingsQueries, Store, TodoItemQueries, TransactionQueries,
};
use finboard::{RepoError, Repository};
use rust_decimal::Decimal;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn money(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

pub fn new_tx(
    on: NaiveDate,
    kind: TransactionType,
    amount: &str,
    account: &str,
    category: &str,
) -> NewTransaction {
    NewTransaction {
        date: on,
        r#type: kind,
        amount: money(amount),
        account_id: account.into(),
        category_id: category.into(),
        merchant: None,
        description: None,
        tags: None,
        tax_flag: TaxFlag::None,
        is_recurring: false,
        recurring_pattern: None,
    }
}

pub fn new_account(name: &str, currency: &str, balance: &str, active: bool) -> NewAccount {
    NewAccount {
        name: name.into(),
        r#type: AccountType::Checking,
        institution: None,
        balance: money(balance),
        currency: currency.into(),
        is_active: active,
    }
}

pub fn new_budget(start: NaiveDate, end: Option<NaiveDate>) -> NewBudget {
    NewBudget {
        category_id: "food".into(),
        account_id: None,
        amount: money("400"),
        period: BudgetPeriod::Monthly,
        start_date: start,
        end_date: end,
        alert_threshold: money("80"),
    }
}

pub fn create_assigns_id_and_timestamps(store: &Store) {
    let a = store
        .accounts
        .create(new_account("Checking", "USD", "100.50", true))
        .unwrap();
    assert!(!a.id.is_empty());
    assert_eq!(a.created_at, a.updated_at);
    assert_eq!(a.balance, money("100.50"));

    let b = store
        .accounts
        .create(new_account("Savings", "USD", "0", true))
        .unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(store.accounts.read(&a.id).unwrap(), Some(a));
}

pub fn transaction_round_trips_every_field(store: &Store) {
    let created = store
        .transactions
        .create(NewTransaction {
            merchant: Some("Corner Market".into()),
            description: None,
            tags: Some(vec!["weekly".into(), "cash".into(), "a".into()]),
            tax_flag: TaxFlag::Deductible,
            is_recurring: true,
            recurring_pattern: Some("weekly".into()),
            ..new_tx(date(2026, 2, 14), TransactionType::Expense, "12.34", "acc", "food")
        })
        .unwrap();

    let read = store.transactions.read(&created.id).unwrap().unwrap();
    assert_eq!(read, created);
    assert_eq!(read.amount, money("12.34"));
    assert_eq!(read.date, date(2026, 2, 14));
    assert_eq!(read.tags.as_deref().unwrap(), ["weekly", "cash", "a"]);
    assert_eq!(read.merchant.as_deref(), Some("Corner Market"));
    assert_eq!(read.description, None);
    assert!(read.is_recurring);
}

pub fn absent_optionals_stay_absent(store: &Store) {
    let none = store
        .transactions
        .create(new_tx(date(2026, 1, 1), TransactionType::Income, "5", "a", "c"))
        .unwrap();
    let empty = store
        .transactions
        .create(NewTransaction {
            tags: Some(vec![]),
            merchant: Some(String::new()),
            ..new_tx(date(2026, 1, 1), TransactionType::Income, "0", "a", "c")
        })
        .unwrap();

    assert_eq!(none.tags, None);
    assert_eq!(none.merchant, None);
    assert_eq!(empty.tags, Some(vec![]));
    assert_eq!(empty.merchant, None);
    assert_eq!(empty.amount, Decimal::ZERO);
    assert!(!empty.is_recurring);
}

pub fn update_writes_only_given_fields(store: &Store) {
    let tx = store
        .transactions
        .create(NewTransaction {
            description: Some("groceries".into()),
            ..new_tx(date(2026, 3, 1), TransactionType::Expense, "20", "acc", "food")
        })
        .unwrap();

    let updated = store
        .transactions
        .update(
            &tx.id,
            TransactionUpdate {
                merchant: Some(Some("Bakery".into())),
                description: Some(None),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.merchant.as_deref(), Some("Bakery"));
    assert_eq!(updated.description, None);
    assert_eq!(updated.amount, tx.amount);
    assert_eq!(updated.date, tx.date);
    assert_eq!(updated.category_id, tx.category_id);
    assert_eq!(updated.created_at, tx.created_at);
    assert!(updated.updated_at >= tx.updated_at);
    assert_eq!(store.transactions.read(&tx.id).unwrap(), Some(updated));
}

pub fn update_of_missing_id_is_not_found(store: &Store) {
    let err = store
        .transactions
        .update(
            "nope",
            TransactionUpdate {
                amount: Some(money("1")),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "transaction 'nope' not found");
}

pub fn delete_reports_whether_a_row_went_away(store: &Store) {
    let todo = store
        .todo_items
        .create(NewTodoItem {
            title: "Cancel gym".into(),
            due_date: None,
            completed: false,
            priority: Priority::Low,
            notes: None,
        })
        .unwrap();
    assert!(store.todo_items.delete(&todo.id).unwrap());
    assert!(!store.todo_items.delete(&todo.id).unwrap());
    assert_eq!(store.todo_items.read(&todo.id).unwrap(), None);
    assert_eq!(store.todo_items.read("never-existed").unwrap(), None);
}

pub fn membership_filter_matches_any_listed_value(store: &Store) {
    for account in ["A", "B", "C"] {
        store
            .transactions
            .create(new_tx(date(2026, 1, 5), TransactionType::Expense, "1", account, "x"))
            .unwrap();
    }
    let options = QueryOptions::new().filters(Filters::new().any_of("account_id", ["A", "C"]));
    let page = store.transactions.read_all(&options).unwrap();
    let mut accounts: Vec<_> = page.data.iter().map(|t| t.account_id.as_str()).collect();
    accounts.sort();
    assert_eq!(accounts, ["A", "C"]);
    assert_eq!(page.total, 2);
}

pub fn range_filter_is_inclusive(store: &Store) {
    for d in [
        date(2025, 12, 31),
        date(2026, 1, 1),
        date(2026, 6, 30),
        date(2026, 12, 31),
        date(2027, 1, 1),
    ] {
        store
            .transactions
            .create(new_tx(d, TransactionType::Expense, "1", "a", "c"))
            .unwrap();
    }
    let found = store
        .transactions
        .find_by_date_range(date(2026, 1, 1), date(2026, 12, 31))
        .unwrap();
    let dates: Vec<_> = found.iter().map(|t| t.date).collect();
    assert_eq!(dates, [date(2026, 12, 31), date(2026, 6, 30), date(2026, 1, 1)]);

    let open_ended = QueryOptions::new()
        .filters(Filters::new().between("date", Some(date(2026, 7, 1)), None::<NaiveDate>));
    assert_eq!(store.transactions.read_all(&open_ended).unwrap().total, 2);
}

pub fn null_filter_values_are_skipped(store: &Store) {
    store
        .transactions
        .create(new_tx(date(2026, 1, 1), TransactionType::Expense, "1", "a", "c"))
        .unwrap();
    let filters = Filters::new()
        .eq("merchant", None::<String>)
        .between("date", None::<NaiveDate>, None::<NaiveDate>);
    let page = store
        .transactions
        .read_all(&QueryOptions::new().filters(filters))
        .unwrap();
    assert_eq!(page.total, 1);
}

pub fn read_all_paginates_with_total(store: &Store) {
    let start = date(2026, 1, 1);
    for i in 0..60 {
        store
            .transactions
            .create(new_tx(start + Duration::days(i), TransactionType::Expense, "1", "a", "c"))
            .unwrap();
    }

    let first = store.transactions.read_all(&QueryOptions::new()).unwrap();
    assert_eq!(first.data.len(), 50);
    assert_eq!((first.total, first.limit, first.offset), (60, 50, 0));
    assert_eq!(first.data[0].date, start + Duration::days(59));

    let rest = store
        .transactions
        .read_all(&QueryOptions::new().offset(50))
        .unwrap();
    assert_eq!(rest.data.len(), 10);
    assert_eq!(rest.total, 60);
    assert_eq!(rest.data.last().unwrap().date, start);

    let asc = store
        .transactions
        .read_all(&QueryOptions::new().limit(3).order_by("date", SortDirection::Asc))
        .unwrap();
    let dates: Vec<_> = asc.data.iter().map(|t| t.date).collect();
    assert_eq!(dates, [start, start + Duration::days(1), start + Duration::days(2)]);
}

pub fn numeric_columns_sort_numerically(store: &Store) {
    for amount in ["9", "10.5", "100"] {
        store
            .transactions
            .create(new_tx(date(2026, 1, 1), TransactionType::Expense, amount, "a", "c"))
            .unwrap();
    }
    let page = store
        .transactions
        .read_all(&QueryOptions::new().order_by("amount", SortDirection::Asc))
        .unwrap();
    let amounts: Vec<_> = page.data.iter().map(|t| t.amount).collect();
    assert_eq!(amounts, [money("9"), money("10.5"), money("100")]);
}

pub fn unknown_columns_are_rejected(store: &Store) {
    let err = store
        .transactions
        .read_all(&QueryOptions::new().order_by("bogus", SortDirection::Asc))
        .unwrap_err();
    assert!(matches!(err, RepoError::Persistence { .. }));
    assert_eq!(
        err.to_string(),
        "Failed to list transaction: unknown column 'bogus'"
    );

    let err = store
        .transactions
        .read_all(&QueryOptions::new().filters(Filters::new().eq("payee", "x")))
        .unwrap_err();
    assert!(err.to_string().contains("unknown column 'payee'"));
}

pub fn expense_summary_groups_by_category(store: &Store) {
    let d = date(2026, 4, 10);
    for (kind, amount, category) in [
        (TransactionType::Expense, "10", "food"),
        (TransactionType::Expense, "20", "food"),
        (TransactionType::Expense, "5", "transport"),
        (TransactionType::Income, "100", "food"),
    ] {
        store
            .transactions
            .create(new_tx(d, kind, amount, "a", category))
            .unwrap();
    }
    store
        .transactions
        .create(new_tx(date(2026, 5, 1), TransactionType::Expense, "7", "a", "food"))
        .unwrap();

    let all = store.transactions.summary_by_category(None, None).unwrap();
    assert_eq!(all["food"], money("37"));

    let april = store
        .transactions
        .summary_by_category(Some(date(2026, 4, 1)), Some(date(2026, 4, 30)))
        .unwrap();
    assert_eq!(april.len(), 2);
    assert_eq!(april["food"], money("30"));
    assert_eq!(april["transport"], money("5"));

    let by_type = store.transactions.totals_by_type(None, None).unwrap();
    assert_eq!(by_type["income"], money("100"));
    assert_eq!(by_type["expense"], money("42"));
}

pub fn current_budgets_respect_their_window(store: &Store) {
    let open = store.budgets.create(new_budget(date(2026, 3, 1), None)).unwrap();
    let ended = store
        .budgets
        .create(new_budget(date(2026, 2, 1), Some(date(2026, 3, 14))))
        .unwrap();
    let ends_today = store
        .budgets
        .create(new_budget(date(2026, 2, 1), Some(date(2026, 3, 15))))
        .unwrap();
    store.budgets.create(new_budget(date(2026, 4, 1), None)).unwrap();

    let current: Vec<_> = store
        .budgets
        .find_current_on(date(2026, 3, 15))
        .unwrap()
        .into_iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(current.len(), 2);
    assert!(current.contains(&open.id));
    assert!(current.contains(&ends_today.id));
    assert!(!current.contains(&ended.id));

    assert_eq!(store.budgets.find_by_category("food").unwrap().len(), 4);
}

pub fn budget_started_this_month_is_current(store: &Store) {
    let today = Utc::now().date_naive();
    let first = today.with_day(1).unwrap();
    let open = store.budgets.create(new_budget(first, None)).unwrap();
    store
        .budgets
        .create(new_budget(first - Duration::days(40), Some(today - Duration::days(1))))
        .unwrap();

    let current = store.budgets.find_current().unwrap();
    assert_eq!(current.len(), 1);
    assert_eq!(current[0].id, open.id);
}

pub fn account_and_category_finders(store: &Store) {
    store.accounts.create(new_account("Main", "USD", "100.25", true)).unwrap();
    store.accounts.create(new_account("Travel", "EUR", "50", true)).unwrap();
    store.accounts.create(new_account("Old", "USD", "999", false)).unwrap();

    assert_eq!(store.accounts.find_active().unwrap().len(), 2);
    let balances = store.accounts.balances_by_currency().unwrap();
    assert_eq!(balances["USD"], money("100.25"));
    assert_eq!(balances["EUR"], money("50"));

    let food = store
        .categories
        .create(NewCategory {
            name: "Food".into(),
            r#type: CategoryType::Expense,
            color: None,
            icon: None,
            parent_id: None,
        })
        .unwrap();
    store
        .categories
        .create(NewCategory {
            name: "Restaurants".into(),
            r#type: CategoryType::Expense,
            color: Some("#ff0000".into()),
            icon: None,
            parent_id: Some(food.id.clone()),
        })
        .unwrap();
    store
        .categories
        .create(NewCategory {
            name: "Salary".into(),
            r#type: CategoryType::Income,
            color: None,
            icon: None,
            parent_id: None,
        })
        .unwrap();

    let children = store.categories.find_children(&food.id).unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].name, "Restaurants");
    assert_eq!(store.categories.find_by_type(CategoryType::Expense).unwrap().len(), 2);
}

pub fn goal_progress_accumulates(store: &Store) {
    let goal = store
        .goals
        .create(NewGoal {
            name: "Holiday".into(),
            target_amount: money("2000"),
            current_amount: money("150.10"),
            due_date: date(2026, 12, 1),
            priority: Priority::High,
            status: GoalStatus::Active,
            description: None,
        })
        .unwrap();
    let goal = store.goals.add_progress(&goal.id, money("49.90")).unwrap();
    assert_eq!(goal.current_amount, money("200"));
    assert_eq!(store.goals.find_by_status(GoalStatus::Active).unwrap().len(), 1);
    assert!(store.goals.find_by_status(GoalStatus::Paused).unwrap().is_empty());

    let err = store.goals.add_progress("missing", money("1")).unwrap_err();
    assert!(err.is_not_found());
}

pub fn bill_lifecycle(store: &Store) {
    let rent = store
        .expenses
        .create(NewExpense {
            name: "Rent".into(),
            amount: money("1450"),
            next_due_date: date(2026, 5, 1),
            recurrence: Recurrence::Monthly,
            is_paid: false,
            auto_pay: false,
            category_id: None,
            account_id: None,
        })
        .unwrap();
    store
        .expenses
        .create(NewExpense {
            name: "Insurance".into(),
            amount: money("300"),
            next_due_date: date(2026, 9, 1),
            recurrence: Recurrence::Yearly,
            is_paid: false,
            auto_pay: true,
            category_id: None,
            account_id: None,
        })
        .unwrap();

    let may = store
        .expenses
        .find_due_between(date(2026, 5, 1), date(2026, 5, 31))
        .unwrap();
    assert_eq!(may.len(), 1);
    assert_eq!(may[0].id, rent.id);

    let paid = store.expenses.mark_paid(&rent.id).unwrap();
    assert!(paid.is_paid);
    let unpaid = store.expenses.find_unpaid().unwrap();
    assert_eq!(unpaid.len(), 1);
    assert_eq!(unpaid[0].name, "Insurance");
}

pub fn todo_and_alert_flags(store: &Store) {
    let todo = store
        .todo_items
        .create(NewTodoItem {
            title: "File taxes".into(),
            due_date: Some(date(2026, 4, 15)),
            completed: false,
            priority: Priority::High,
            notes: None,
        })
        .unwrap();
    assert_eq!(store.todo_items.find_open().unwrap().len(), 1);
    assert!(store.todo_items.set_completed(&todo.id, true).unwrap().completed);
    assert!(store.todo_items.find_open().unwrap().is_empty());

    let alert = store
        .alerts
        .create(NewAlert {
            alert_type: AlertType::Budget,
            severity: Severity::Critical,
            message: "Food budget exceeded".into(),
            is_read: false,
            related_id: None,
        })
        .unwrap();
    assert_eq!(store.alerts.find_unread().unwrap().len(), 1);
    assert!(store.alerts.mark_read(&alert.id).unwrap().is_read);
    assert!(store.alerts.find_unread().unwrap().is_empty());
}

pub fn net_worth_latest_is_by_date(store: &Store) {
    assert_eq!(store.net_worth.latest().unwrap(), None);
    for (d, net) in [
        (date(2026, 2, 1), "1000"),
        (date(2026, 3, 1), "1500"),
        (date(2026, 1, 1), "900"),
    ] {
        store
            .net_worth
            .create(NewNetWorthEntry {
                date: d,
                total_assets: money(net),
                total_liabilities: Decimal::ZERO,
                net_worth: money(net),
                notes: None,
            })
            .unwrap();
    }
    let latest = store.net_worth.latest().unwrap().unwrap();
    assert_eq!(latest.date, date(2026, 3, 1));
    assert_eq!(latest.net_worth, money("1500"));
    assert_eq!(
        store
            .net_worth
            .find_by_date_range(date(2026, 1, 15), date(2026, 3, 1))
            .unwrap()
            .len(),
        2
    );
}

pub fn settings_set_upserts_by_key(store: &Store) {
    assert_eq!(store.settings.get("base_currency").unwrap(), None);
    let first = store.settings.set("base_currency", "USD").unwrap();
    let second = store.settings.set("base_currency", "EUR").unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(store.settings.value_or("base_currency", "USD").unwrap(), "EUR");
    assert_eq!(store.settings.value_or("theme", "dark").unwrap(), "dark");
    assert_eq!(store.settings.read_all(&QueryOptions::new()).unwrap().total, 1);
}

pub fn settings_keys_are_unique_in_storage(store: &Store) {
    let currency = store.settings.set("base_currency", "USD").unwrap();
    let err = store
        .settings
        .create(NewSettings {
            key: "base_currency".into(),
            value: "EUR".into(),
        })
        .unwrap_err();
    assert!(matches!(err, RepoError::Persistence { operation: "create", .. }));
    assert_eq!(
        err.to_string(),
        "Failed to create setting: UNIQUE constraint failed: settings.key"
    );

    let theme = store
        .settings
        .create(NewSettings {
            key: "theme".into(),
            value: "dark".into(),
        })
        .unwrap();
    let err = store
        .settings
        .update(
            &theme.id,
            SettingsUpdate {
                key: Some("base_currency".into()),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(err.to_string().contains("UNIQUE constraint failed: settings.key"));

    // Rewriting a row's own key is not a conflict.
    store
        .settings
        .update(
            &currency.id,
            SettingsUpdate {
                key: Some("base_currency".into()),
                value: Some("GBP".into()),
            },
        )
        .unwrap();
    assert_eq!(store.settings.read_all(&QueryOptions::new()).unwrap().total, 2);
    assert_eq!(store.settings.value_or("base_currency", "USD").unwrap(), "GBP");
    assert_eq!(store.settings.value_or("theme", "light").unwrap(), "dark");
}

pub fn unreadable_amounts_are_never_written(store: &Store) {
    store
        .transactions
        .create(new_tx(date(2026, 3, 1), TransactionType::Expense, "1", "acc", "cat"))
        .unwrap();
    let err = store
        .transactions
        .create(NewTransaction {
            amount: Decimal::MAX,
            ..new_tx(date(2026, 3, 2), TransactionType::Expense, "1", "acc", "cat")
        })
        .unwrap_err();
    assert!(matches!(err, RepoError::Persistence { operation: "create", .. }));
    assert!(err.to_string().contains("column 'amount'"));

    let page = store.transactions.read_all(&QueryOptions::new()).unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.data[0].amount, money("1"));

    let err = store
        .transactions
        .update(
            &page.data[0].id,
            TransactionUpdate {
                amount: Some(Decimal::MAX),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, RepoError::Persistence { operation: "update", .. }));
    let kept = store.transactions.read(&page.data[0].id).unwrap().unwrap();
    assert_eq!(kept.amount, money("1"));
    assert_eq!(
        store
            .transactions
            .summary_by_category(None, None)
            .unwrap()
            .get("cat"),
        Some(&money("1"))
    );
}

pub fn income_forecast_and_calendar_finders(store: &Store) {
    for (name, amount, frequency, active) in [
        ("Salary", "3000", IncomeFrequency::Monthly, true),
        ("Bonus", "500", IncomeFrequency::Monthly, true),
        ("Side gig", "200", IncomeFrequency::Weekly, true),
        ("Old job", "2500", IncomeFrequency::Monthly, false),
    ] {
        store
            .income_sources
            .create(NewIncomeSource {
                name: name.into(),
                amount: money(amount),
                frequency,
                next_pay_date: None,
                account_id: None,
                is_active: active,
            })
            .unwrap();
    }
    assert_eq!(store.income_sources.find_active().unwrap().len(), 3);
    let totals = store.income_sources.total_by_frequency().unwrap();
    assert_eq!(totals["monthly"], money("3500"));
    assert_eq!(totals["weekly"], money("200"));

    for month in 1..=3 {
        store
            .forecasts
            .create(NewForecast {
                date: date(2026, month, 1),
                projected_income: money("3000"),
                projected_expenses: money("2500.75"),
                projected_balance: money("499.25"),
                notes: None,
            })
            .unwrap();
    }
    let q1 = store
        .forecasts
        .find_by_date_range(date(2026, 2, 1), date(2026, 3, 31))
        .unwrap();
    assert_eq!(q1.len(), 2);
    assert_eq!(q1[0].projected_balance, money("499.25"));

    store
        .calendar_events
        .create(NewCalendarEvent {
            title: "Rent".into(),
            date: date(2026, 5, 1),
            event_type: EventType::Bill,
            amount: Some(money("1450")),
            related_id: None,
            notes: None,
        })
        .unwrap();
    store
        .calendar_events
        .create(NewCalendarEvent {
            title: "Check in on savings".into(),
            date: date(2026, 5, 3),
            event_type: EventType::Reminder,
            amount: None,
            related_id: None,
            notes: None,
        })
        .unwrap();
    let bills = store.calendar_events.find_by_type(EventType::Bill).unwrap();
    assert_eq!(bills.len(), 1);
    assert_eq!(bills[0].amount, Some(money("1450")));
    assert_eq!(
        store
            .calendar_events
            .find_by_date_range(date(2026, 5, 2), date(2026, 5, 31))
            .unwrap()[0]
            .amount,
        None
    );
}

/// One `#[test]` per contract check. `$with_store` builds a fresh store and
/// hands it to the check.
macro_rules! contract_tests {
    ($with_store:ident) => {
        contract_tests!(
            $with_store;
            create_assigns_id_and_timestamps,
            transaction_round_trips_every_field,
            absent_optionals_stay_absent,
            update_writes_only_given_fields,
            update_of_missing_id_is_not_found,
            delete_reports_whether_a_row_went_away,
            membership_filter_matches_any_listed_value,
            range_filter_is_inclusive,
            null_filter_values_are_skipped,
            read_all_paginates_with_total,
            numeric_columns_sort_numerically,
            unknown_columns_are_rejected,
            expense_summary_groups_by_category,
            current_budgets_respect_their_window,
            budget_started_this_month_is_current,
            account_and_category_finders,
            goal_progress_accumulates,
            bill_lifecycle,
            todo_and_alert_flags,
            net_worth_latest_is_by_date,
            settings_set_upserts_by_key,
            settings_keys_are_unique_in_storage,
            unreadable_amounts_are_never_written,
            income_forecast_and_calendar_finders,
        );
    };
    ($with_store:ident; $($name:ident),+ $(,)?) => {
        $(
            #[test]
            fn $name() {
                $with_store(common::$name);
            }
        )+
    };
}
