// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use outlay::models::{Category, Expense};
use outlay::stats;

fn expense(id: &str, amount: &str, category: Category) -> Expense {
    Expense {
        id: id.to_string(),
        title: format!("expense {}", id),
        amount: amount.parse::<Decimal>().unwrap(),
        category,
        date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        owner: "demo".to_string(),
    }
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn demo_scenario_totals() {
    let expenses = vec![
        expense("1", "85.50", Category::Food),
        expense("2", "45.00", Category::Transport),
        expense("3", "15.99", Category::Entertainment),
    ];
    let refs: Vec<&Expense> = expenses.iter().collect();
    assert_eq!(stats::total(&refs), dec("146.49"));
    assert_eq!(stats::average(&refs), dec("48.83"));
    assert_eq!(stats::top_category(&refs), Some(Category::Food));
}

#[test]
fn empty_sequence_degrades_to_zero() {
    let refs: Vec<&Expense> = Vec::new();
    assert_eq!(stats::total(&refs), Decimal::ZERO);
    assert_eq!(stats::average(&refs), Decimal::ZERO);
    assert_eq!(stats::top_category(&refs), None);
    assert!(stats::chart_slices(&refs).is_empty());
}

#[test]
fn total_matches_category_breakdown() {
    let expenses = vec![
        expense("1", "10.00", Category::Food),
        expense("2", "20.50", Category::Food),
        expense("3", "5.25", Category::Bills),
        expense("4", "3.00", Category::Others),
    ];
    let refs: Vec<&Expense> = expenses.iter().collect();
    let breakdown = stats::by_category(&refs);
    let summed: Decimal = breakdown.values().copied().sum();
    assert_eq!(summed, stats::total(&refs));
    assert_eq!(breakdown[&Category::Food], dec("30.50"));
    assert_eq!(breakdown.len(), 3);
}

#[test]
fn top_category_tie_breaks_in_canonical_order() {
    // Bills and Transport tie; Transport comes first in the canonical order.
    let expenses = vec![
        expense("1", "40.00", Category::Bills),
        expense("2", "40.00", Category::Transport),
        expense("3", "1.00", Category::Others),
    ];
    let refs: Vec<&Expense> = expenses.iter().collect();
    assert_eq!(stats::top_category(&refs), Some(Category::Transport));
}

#[test]
fn slices_carry_share_color_and_canonical_order() {
    let expenses = vec![
        expense("1", "25.00", Category::Bills),
        expense("2", "75.00", Category::Food),
    ];
    let refs: Vec<&Expense> = expenses.iter().collect();
    let slices = stats::chart_slices(&refs);
    assert_eq!(slices.len(), 2);
    // Canonical order, not insertion order.
    assert_eq!(slices[0].category, Category::Food);
    assert_eq!(slices[0].percent, dec("75"));
    assert_eq!(slices[0].color, "#f97316");
    assert_eq!(slices[1].category, Category::Bills);
    assert_eq!(slices[1].percent, dec("25"));
}

#[test]
fn slice_percentages_sum_to_one_hundred() {
    let expenses = vec![
        expense("1", "33.33", Category::Food),
        expense("2", "33.33", Category::Transport),
        expense("3", "33.34", Category::Healthcare),
    ];
    let refs: Vec<&Expense> = expenses.iter().collect();
    let summed: Decimal = stats::chart_slices(&refs).iter().map(|s| s.percent).sum();
    let drift = (summed - Decimal::from(100)).abs();
    assert!(drift < dec("0.0001"), "percent sum drifted: {}", summed);
}

#[test]
fn zero_amount_expenses_yield_no_slices() {
    let expenses = vec![expense("1", "0.00", Category::Food)];
    let refs: Vec<&Expense> = expenses.iter().collect();
    assert!(stats::chart_slices(&refs).is_empty());
    assert_eq!(stats::average(&refs), Decimal::ZERO);
}
