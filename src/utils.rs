// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

const UA: &str = concat!(
    "outlay/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/outlay)"
);

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

// Non-negative, at most two decimal places.
static AMOUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+(\.\d{1,2})?$").expect("amount pattern")
});

/// Parses a monetary amount. Rejects negatives, signs, and more than two
/// decimal places before handing off to the decimal parser.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    if !AMOUNT_RE.is_match(s) {
        anyhow::bail!(
            "Invalid amount '{}', expected a non-negative number with at most two decimal places",
            s
        );
    }
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid amount '{}'", s))
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("${:.2}", d.round_dp(2))
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

/// Splits a shell line into words, honoring double quotes so titles with
/// spaces survive (`add --title "Gas Station" ...`).
pub fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut seen = false;
    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                seen = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if seen {
                    words.push(std::mem::take(&mut current));
                    seen = false;
                }
            }
            c => {
                current.push(c);
                seen = true;
            }
        }
    }
    if in_quotes {
        anyhow::bail!("Unclosed quote in input");
    }
    if seen {
        words.push(current);
    }
    Ok(words)
}
