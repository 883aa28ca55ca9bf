// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::UnknownVariant;

/// Closed set of lowercase strings persisted in a TEXT column.
macro_rules! text_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $text)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(UnknownVariant {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl crate::query::ToSqlValue for $name {
            fn to_sql_value(&self) -> rusqlite::types::Value {
                rusqlite::types::Value::Text(self.as_str().to_string())
            }
        }
    };
}

text_enum! {
    TransactionType { Income => "income", Expense => "expense", Transfer => "transfer" }
}

text_enum! {
    TaxFlag { Taxable => "taxable", Deductible => "deductible", None => "none", Unknown => "unknown" }
}

text_enum! {
    AccountType {
        Checking => "checking",
        Savings => "savings",
        Credit => "credit",
        Investment => "investment",
        Loan => "loan",
        Cash => "cash",
        Other => "other",
    }
}

text_enum! {
    CategoryType { Income => "income", Expense => "expense" }
}

text_enum! {
    BudgetPeriod { Monthly => "monthly", Quarterly => "quarterly", Yearly => "yearly" }
}

text_enum! {
    Priority { Low => "low", Medium => "medium", High => "high" }
}

text_enum! {
    GoalStatus { Active => "active", Completed => "completed", Paused => "paused", Cancelled => "cancelled" }
}

text_enum! {
    Recurrence {
        Once => "once",
        Weekly => "weekly",
        Monthly => "monthly",
        Quarterly => "quarterly",
        Yearly => "yearly",
    }
}

text_enum! {
    IncomeFrequency {
        Weekly => "weekly",
        Biweekly => "biweekly",
        Monthly => "monthly",
        Quarterly => "quarterly",
        Yearly => "yearly",
        Irregular => "irregular",
    }
}

text_enum! {
    EventType { Bill => "bill", Income => "income", Goal => "goal", Reminder => "reminder", Custom => "custom" }
}

text_enum! {
    AlertType { Budget => "budget", Bill => "bill", Goal => "goal", System => "system" }
}

text_enum! {
    Severity { Info => "info", Warning => "warning", Critical => "critical" }
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub r#type: TransactionType,
    pub amount: Decimal,
    pub account_id: String,
    pub category_id: String,
    pub merchant: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub tax_flag: TaxFlag,
    pub is_recurring: bool,
    pub recurring_pattern: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub r#type: TransactionType,
    pub amount: Decimal,
    pub account_id: String,
    pub category_id: String,
    pub merchant: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub tax_flag: TaxFlag,
    pub is_recurring: bool,
    pub recurring_pattern: Option<String>,
}

/// `None` leaves a field untouched; `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionUpdate {
    pub date: Option<NaiveDate>,
    pub r#type: Option<TransactionType>,
    pub amount: Option<Decimal>,
    pub account_id: Option<String>,
    pub category_id: Option<String>,
    pub merchant: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub tags: Option<Option<Vec<String>>>,
    pub tax_flag: Option<TaxFlag>,
    pub is_recurring: Option<bool>,
    pub recurring_pattern: Option<Option<String>>,
}

// ---------------------------------------------------------------------------
// Accounts & categories
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub r#type: AccountType,
    pub institution: Option<String>,
    pub balance: Decimal,
    pub currency: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    pub name: String,
    pub r#type: AccountType,
    pub institution: Option<String>,
    pub balance: Decimal,
    pub currency: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountUpdate {
    pub name: Option<String>,
    pub r#type: Option<AccountType>,
    pub institution: Option<Option<String>>,
    pub balance: Option<Decimal>,
    pub currency: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub r#type: CategoryType,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub parent_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub name: String,
    pub r#type: CategoryType,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub parent_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub r#type: Option<CategoryType>,
    pub color: Option<Option<String>>,
    pub icon: Option<Option<String>>,
    pub parent_id: Option<Option<String>>,
}

// ---------------------------------------------------------------------------
// Budgets & goals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub category_id: String,
    pub account_id: Option<String>,
    pub amount: Decimal,
    pub period: BudgetPeriod,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    /// Percentage of `amount` at which an alert should fire.
    pub alert_threshold: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub category_id: String,
    pub account_id: Option<String>,
    pub amount: Decimal,
    pub period: BudgetPeriod,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub alert_threshold: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetUpdate {
    pub category_id: Option<String>,
    pub account_id: Option<Option<String>>,
    pub amount: Option<Decimal>,
    pub period: Option<BudgetPeriod>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<Option<NaiveDate>>,
    pub alert_threshold: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub status: GoalStatus,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub status: GoalStatus,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalUpdate {
    pub name: Option<String>,
    pub target_amount: Option<Decimal>,
    pub current_amount: Option<Decimal>,
    pub due_date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub status: Option<GoalStatus>,
    pub description: Option<Option<String>>,
}

// ---------------------------------------------------------------------------
// Bills (recurring expenses) & income
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub next_due_date: NaiveDate,
    pub recurrence: Recurrence,
    pub is_paid: bool,
    pub auto_pay: bool,
    pub category_id: Option<String>,
    pub account_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub type Bill = Expense;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub name: String,
    pub amount: Decimal,
    pub next_due_date: NaiveDate,
    pub recurrence: Recurrence,
    pub is_paid: bool,
    pub auto_pay: bool,
    pub category_id: Option<String>,
    pub account_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseUpdate {
    pub name: Option<String>,
    pub amount: Option<Decimal>,
    pub next_due_date: Option<NaiveDate>,
    pub recurrence: Option<Recurrence>,
    pub is_paid: Option<bool>,
    pub auto_pay: Option<bool>,
    pub category_id: Option<Option<String>>,
    pub account_id: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSource {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub frequency: IncomeFrequency,
    pub next_pay_date: Option<NaiveDate>,
    pub account_id: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIncomeSource {
    pub name: String,
    pub amount: Decimal,
    pub frequency: IncomeFrequency,
    pub next_pay_date: Option<NaiveDate>,
    pub account_id: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncomeSourceUpdate {
    pub name: Option<String>,
    pub amount: Option<Decimal>,
    pub frequency: Option<IncomeFrequency>,
    pub next_pay_date: Option<Option<NaiveDate>>,
    pub account_id: Option<Option<String>>,
    pub is_active: Option<bool>,
}

// ---------------------------------------------------------------------------
// Planning: forecasts, calendar, todos, alerts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
    pub id: String,
    pub date: NaiveDate,
    pub projected_income: Decimal,
    pub projected_expenses: Decimal,
    pub projected_balance: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewForecast {
    pub date: NaiveDate,
    pub projected_income: Decimal,
    pub projected_expenses: Decimal,
    pub projected_balance: Decimal,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastUpdate {
    pub date: Option<NaiveDate>,
    pub projected_income: Option<Decimal>,
    pub projected_expenses: Option<Decimal>,
    pub projected_balance: Option<Decimal>,
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub event_type: EventType,
    pub amount: Option<Decimal>,
    pub related_id: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCalendarEvent {
    pub title: String,
    pub date: NaiveDate,
    pub event_type: EventType,
    pub amount: Option<Decimal>,
    pub related_id: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarEventUpdate {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub event_type: Option<EventType>,
    pub amount: Option<Option<Decimal>>,
    pub related_id: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub priority: Priority,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodoItem {
    pub title: String,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub priority: Priority,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoItemUpdate {
    pub title: Option<String>,
    pub due_date: Option<Option<NaiveDate>>,
    pub completed: Option<bool>,
    pub priority: Option<Priority>,
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub alert_type: AlertType,
    pub severity: Severity,
    pub message: String,
    pub is_read: bool,
    pub related_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAlert {
    pub alert_type: AlertType,
    pub severity: Severity,
    pub message: String,
    pub is_read: bool,
    pub related_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertUpdate {
    pub alert_type: Option<AlertType>,
    pub severity: Option<Severity>,
    pub message: Option<String>,
    pub is_read: Option<bool>,
    pub related_id: Option<Option<String>>,
}

// ---------------------------------------------------------------------------
// Net worth & settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthEntry {
    pub id: String,
    pub date: NaiveDate,
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    /// Stored as given; never recomputed from assets and liabilities.
    pub net_worth: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNetWorthEntry {
    pub date: NaiveDate,
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub net_worth: Decimal,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetWorthEntryUpdate {
    pub date: Option<NaiveDate>,
    pub total_assets: Option<Decimal>,
    pub total_liabilities: Option<Decimal>,
    pub net_worth: Option<Decimal>,
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub id: String,
    pub key: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSettings {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsUpdate {
    pub key: Option<String>,
    pub value: Option<String>,
}
