// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over a sequence of expenses. Everything here is
//! recomputed from scratch on each query; nothing mutates the store.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Category, Expense};

/// One category's share of total spend, as rendered in the breakdown chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSlice {
    pub category: Category,
    pub amount: Decimal,
    pub color: &'static str,
    pub percent: Decimal,
}

pub fn total(expenses: &[&Expense]) -> Decimal {
    expenses.iter().map(|e| e.amount).sum()
}

/// Mean expense, rounded to cents. Zero for an empty sequence.
pub fn average(expenses: &[&Expense]) -> Decimal {
    if expenses.is_empty() {
        return Decimal::ZERO;
    }
    (total(expenses) / Decimal::from(expenses.len())).round_dp(2)
}

/// Summed amount per category, in canonical category order.
pub fn by_category(expenses: &[&Expense]) -> BTreeMap<Category, Decimal> {
    let mut totals = BTreeMap::new();
    for e in expenses {
        *totals.entry(e.category).or_insert(Decimal::ZERO) += e.amount;
    }
    totals
}

/// Category with the largest summed amount. Ties resolve to the earliest
/// category in canonical order; None for an empty sequence.
pub fn top_category(expenses: &[&Expense]) -> Option<Category> {
    let mut best: Option<(Category, Decimal)> = None;
    for (cat, amount) in by_category(expenses) {
        // Strictly-greater keeps the earliest category on a tie, since the
        // map iterates in canonical order.
        match best {
            Some((_, top)) if amount <= top => {}
            _ => best = Some((cat, amount)),
        }
    }
    best.map(|(cat, _)| cat)
}

/// Proportional breakdown for the chart, one slice per category present.
/// Empty when total spend is zero, so there is never a division by zero.
pub fn chart_slices(expenses: &[&Expense]) -> Vec<ChartSlice> {
    let grand = total(expenses);
    if grand.is_zero() {
        return Vec::new();
    }
    by_category(expenses)
        .into_iter()
        .map(|(category, amount)| ChartSlice {
            category,
            amount,
            color: category.color(),
            percent: amount * Decimal::from(100) / grand,
        })
        .collect()
}
