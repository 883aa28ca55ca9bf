// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Demo data set, written through the repository contract so it works on
//! either backend.

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::debug;

use super::settings::BASE_CURRENCY;
use super::{SettingsQueries, Store};
use crate::error::RepoResult;
use crate::models::{
    AccountType, AlertType, BudgetPeriod, CategoryType, GoalStatus, NewAccount, NewAlert,
    NewBudget, NewCategory, NewExpense, NewGoal, NewNetWorthEntry, NewTodoItem, NewTransaction,
    Priority, Recurrence, Severity, TaxFlag, TransactionType,
};

fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn this_month(day: u32) -> NaiveDate {
    let today = Utc::now().date_naive();
    today.with_day(day.min(28)).unwrap_or(today)
}

pub fn seed(store: &Store<'_>) -> RepoResult<()> {
    store.settings.set(BASE_CURRENCY, "USD")?;

    let checking = store.accounts.create(NewAccount {
        name: "Everyday Checking".into(),
        r#type: AccountType::Checking,
        institution: Some("First Local Bank".into()),
        balance: money(254_000),
        currency: "USD".into(),
        is_active: true,
    })?;
    let card = store.accounts.create(NewAccount {
        name: "Rewards Card".into(),
        r#type: AccountType::Credit,
        institution: None,
        balance: money(-42_050),
        currency: "USD".into(),
        is_active: true,
    })?;

    let salary = store.categories.create(NewCategory {
        name: "Salary".into(),
        r#type: CategoryType::Income,
        color: Some("#2e7d32".into()),
        icon: None,
        parent_id: None,
    })?;
    let groceries = store.categories.create(NewCategory {
        name: "Groceries".into(),
        r#type: CategoryType::Expense,
        color: Some("#f9a825".into()),
        icon: None,
        parent_id: None,
    })?;
    let transport = store.categories.create(NewCategory {
        name: "Transport".into(),
        r#type: CategoryType::Expense,
        color: None,
        icon: None,
        parent_id: None,
    })?;

    let txs = [
        (1, TransactionType::Income, 320_000, &checking.id, &salary.id, "Employer Inc"),
        (3, TransactionType::Expense, 8_415, &card.id, &groceries.id, "Corner Market"),
        (5, TransactionType::Expense, 2_750, &card.id, &transport.id, "City Transit"),
        (9, TransactionType::Expense, 6_120, &checking.id, &groceries.id, "Corner Market"),
    ];
    for (day, kind, cents, account_id, category_id, merchant) in txs {
        store.transactions.create(NewTransaction {
            date: this_month(day),
            r#type: kind,
            amount: money(cents),
            account_id: account_id.clone(),
            category_id: category_id.clone(),
            merchant: Some(merchant.into()),
            description: None,
            tags: None,
            tax_flag: TaxFlag::None,
            is_recurring: kind == TransactionType::Income,
            recurring_pattern: (kind == TransactionType::Income).then(|| "monthly".to_string()),
        })?;
    }

    store.budgets.create(NewBudget {
        category_id: groceries.id.clone(),
        account_id: None,
        amount: money(50_000),
        period: BudgetPeriod::Monthly,
        start_date: this_month(1),
        end_date: None,
        alert_threshold: Decimal::new(80, 0),
    })?;

    store.goals.create(NewGoal {
        name: "Emergency fund".into(),
        target_amount: money(1_000_000),
        current_amount: money(250_000),
        due_date: this_month(28) + chrono::Duration::days(365),
        priority: Priority::High,
        status: GoalStatus::Active,
        description: None,
    })?;

    store.expenses.create(NewExpense {
        name: "Rent".into(),
        amount: money(145_000),
        next_due_date: this_month(28),
        recurrence: Recurrence::Monthly,
        is_paid: false,
        auto_pay: false,
        category_id: None,
        account_id: Some(checking.id.clone()),
    })?;

    store.net_worth.create(NewNetWorthEntry {
        date: this_month(1),
        total_assets: money(254_000),
        total_liabilities: money(42_050),
        net_worth: money(211_950),
        notes: None,
    })?;

    store.alerts.create(NewAlert {
        alert_type: AlertType::Bill,
        severity: Severity::Warning,
        message: "Rent is due this month".into(),
        is_read: false,
        related_id: None,
    })?;

    store.todo_items.create(NewTodoItem {
        title: "Review subscriptions".into(),
        due_date: None,
        completed: false,
        priority: Priority::Medium,
        notes: None,
    })?;

    debug!("demo data seeded");
    Ok(())
}
