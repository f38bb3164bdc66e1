// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::commands::expenses::category_filter;
use crate::models::Category;
use crate::stats;
use crate::store::{ExpenseStore, ListOptions};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

#[derive(Serialize)]
struct SummaryReport {
    count: usize,
    total: rust_decimal::Decimal,
    average: rust_decimal::Decimal,
    top_category: Option<Category>,
}

pub fn handle(store: &ExpenseStore, sub: &ArgMatches) -> Result<()> {
    let expenses = store.list(ListOptions {
        category: category_filter(sub)?,
        ..Default::default()
    });
    let report = SummaryReport {
        count: expenses.len(),
        total: stats::total(&expenses),
        average: stats::average(&expenses),
        top_category: stats::top_category(&expenses),
    };
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &report)? {
        return Ok(());
    }
    let rows = vec![vec![
        fmt_money(&report.total),
        fmt_money(&report.average),
        report
            .top_category
            .map(|c| c.to_string())
            .unwrap_or_else(|| "None".to_string()),
    ]];
    println!(
        "{}",
        pretty_table(&["Total Spent", "Average Expense", "Top Category"], rows)
    );
    Ok(())
}

pub fn chart(store: &ExpenseStore, sub: &ArgMatches) -> Result<()> {
    let expenses = store.list(ListOptions {
        category: category_filter(sub)?,
        ..Default::default()
    });
    let slices = stats::chart_slices(&expenses);
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &slices)? {
        return Ok(());
    }
    if slices.is_empty() {
        println!("No data");
        println!("Add expenses first");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = slices
        .iter()
        .map(|s| {
            vec![
                format!("{} {}", s.category.icon(), s.category),
                fmt_money(&s.amount),
                format!("{:.1}%", s.percent.round_dp(1)),
                bar(s.percent.to_f64().unwrap_or(0.0)),
                s.color.to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Category", "Amount", "Share", "", "Color"], rows)
    );
    Ok(())
}

// One block per two percent, minimum one for any non-zero share.
fn bar(percent: f64) -> String {
    let width = ((percent / 2.0).round() as usize).max(1);
    "█".repeat(width)
}
