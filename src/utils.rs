// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use clap::ArgMatches;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;
use std::fmt::Display;
use std::str::FromStr;

use crate::query::{QueryOptions, SortDirection};
use crate::row::DATE_FORMAT;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn fmt_money(d: &Decimal, ccy: &str) -> String {
    format!("{} {}", ccy, d.round_dp(2))
}

pub fn fmt_opt<T: Display>(v: &Option<T>) -> String {
    v.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

/// A string argument the parser already marked as required.
pub fn required<'a>(m: &'a ArgMatches, name: &str) -> Result<&'a str> {
    m.get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("Missing argument '{}'", name))
}

pub fn optional<'a>(m: &'a ArgMatches, name: &str) -> Option<&'a str> {
    m.get_one::<String>(name).map(String::as_str)
}

pub fn required_date(m: &ArgMatches, name: &str) -> Result<NaiveDate> {
    parse_date(required(m, name)?)
}

pub fn optional_date(m: &ArgMatches, name: &str) -> Result<Option<NaiveDate>> {
    optional(m, name).map(parse_date).transpose()
}

pub fn required_decimal(m: &ArgMatches, name: &str) -> Result<Decimal> {
    parse_decimal(required(m, name)?)
}

pub fn optional_decimal(m: &ArgMatches, name: &str) -> Result<Option<Decimal>> {
    optional(m, name).map(parse_decimal).transpose()
}

/// Parses a closed-set value such as an account type or a recurrence.
pub fn parse_variant<T>(m: &ArgMatches, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    Ok(required(m, name)?.parse::<T>()?)
}

/// Paging flags shared by every `list` command.
pub fn query_options(m: &ArgMatches) -> QueryOptions {
    let mut options = QueryOptions::new();
    if let Some(limit) = m.get_one::<u32>("limit") {
        options = options.limit(*limit);
    }
    if let Some(offset) = m.get_one::<u32>("offset") {
        options = options.offset(*offset);
    }
    let direction = if m.get_flag("asc") {
        SortDirection::Asc
    } else {
        SortDirection::Desc
    };
    if let Some(column) = m.get_one::<String>("order-by") {
        options = options.order_by(column.clone(), direction);
    } else {
        options.order_direction = Some(direction);
    }
    options
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

/// `--json`/`--jsonl` on the given matches, if the command defines them.
pub fn output_flags(m: &ArgMatches) -> (bool, bool) {
    let flag = |name: &str| matches!(m.try_get_one::<bool>(name), Ok(Some(true)));
    (flag("json"), flag("jsonl"))
}
