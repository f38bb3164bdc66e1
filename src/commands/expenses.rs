// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use clap::ArgMatches;

use crate::models::{Category, ExpenseInput};
use crate::store::{ExpenseStore, ListOptions, SortKey};
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_date, pretty_table};

pub fn handle(store: &mut ExpenseStore, m: &ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn parse_input(sub: &ArgMatches) -> Result<ExpenseInput> {
    let title = sub.get_one::<String>("title").cloned().unwrap_or_default();
    if title.trim().is_empty() {
        anyhow::bail!("title: Please enter expense title");
    }
    // Required args are enforced by clap; unwraps below cannot fire.
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let category: Category = sub.get_one::<String>("category").unwrap().parse()?;
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    Ok(ExpenseInput {
        title,
        amount,
        category,
        date,
    })
}

fn add(store: &mut ExpenseStore, sub: &ArgMatches) -> Result<()> {
    let input = parse_input(sub)?;
    let expense = store.add(input);
    println!(
        "Expense added successfully! (id {}, {} {} on {})",
        expense.id,
        fmt_money(&expense.amount),
        expense.category,
        expense.date
    );
    Ok(())
}

fn edit(store: &mut ExpenseStore, sub: &ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let input = parse_input(sub)?;
    store.update(id, input)?;
    println!("Expense updated successfully!");
    Ok(())
}

fn rm(store: &mut ExpenseStore, sub: &ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let removed = store.remove(id)?;
    println!("Expense deleted successfully! ('{}')", removed.title);
    Ok(())
}

/// Optional `--category` restriction, shared with the summary commands.
pub fn category_filter(sub: &ArgMatches) -> Result<Option<Category>> {
    match sub.get_one::<String>("category") {
        Some(s) => Ok(Some(s.parse::<Category>()?)),
        None => Ok(None),
    }
}

pub fn list_options(sub: &ArgMatches) -> Result<ListOptions> {
    let category = category_filter(sub)?;
    let sort = match sub.get_one::<String>("sort").map(String::as_str) {
        Some("amount") => Some(SortKey::Amount),
        Some("date") => Some(SortKey::Date),
        _ => None,
    };
    Ok(ListOptions {
        category,
        sort,
        descending: sub.get_flag("desc"),
    })
}

fn list(store: &ExpenseStore, sub: &ArgMatches) -> Result<()> {
    let expenses = store.list(list_options(sub)?);
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if maybe_print_json(json_flag, jsonl_flag, &expenses)? {
        return Ok(());
    }
    if expenses.is_empty() {
        println!("No expenses added yet");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = expenses
        .iter()
        .map(|e| {
            vec![
                e.id.clone(),
                e.title.clone(),
                fmt_money(&e.amount),
                format!("{} {}", e.category.icon(), e.category),
                e.date.format("%b %d, %Y").to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Id", "Title", "Amount", "Category", "Date"], rows)
    );
    Ok(())
}
