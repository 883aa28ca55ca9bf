// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::types::Value;

use super::{ChangeSet, Entity, Repository};
use crate::error::RepoResult;
use crate::models::{Forecast, ForecastUpdate, NewForecast};
use crate::query::{Filters, ToSqlValue};
use crate::row::{RawRow, RowError};

impl Entity for Forecast {
    const NAME: &'static str = "forecast";
    const TABLE: &'static str = "forecasts";
    const COLUMNS: &'static [&'static str] = &[
        "date",
        "projected_income",
        "projected_expenses",
        "projected_balance",
        "notes",
    ];
    const DEFAULT_ORDER: &'static str = "date";

    type New = NewForecast;
    type Update = ForecastUpdate;

    fn id(&self) -> &str {
        &self.id
    }

    fn from_row(row: &RawRow) -> Result<Self, RowError> {
        Ok(Forecast {
            id: row.text("id")?,
            date: row.date("date")?,
            projected_income: row.decimal("projected_income")?,
            projected_expenses: row.decimal("projected_expenses")?,
            projected_balance: row.decimal("projected_balance")?,
            notes: row.opt_text("notes")?,
            created_at: row.timestamp("created_at")?,
            updated_at: row.timestamp("updated_at")?,
        })
    }

    fn insert_values(f: &NewForecast) -> Vec<Value> {
        vec![
            f.date.to_sql_value(),
            f.projected_income.to_sql_value(),
            f.projected_expenses.to_sql_value(),
            f.projected_balance.to_sql_value(),
            f.notes.to_sql_value(),
        ]
    }

    fn update_values(c: &ForecastUpdate) -> Vec<(&'static str, Value)> {
        ChangeSet::new()
            .field("date", &c.date)
            .field("projected_income", &c.projected_income)
            .field("projected_expenses", &c.projected_expenses)
            .field("projected_balance", &c.projected_balance)
            .field("notes", &c.notes)
            .into_values()
    }
}

pub trait ForecastQueries: Repository<Forecast> {
    fn find_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> RepoResult<Vec<Forecast>> {
        self.find_where(Filters::new().between("date", start, end))
    }
}

impl<R: Repository<Forecast> + ?Sized> ForecastQueries for R {}
