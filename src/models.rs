// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Closed set of spending classifications. The declaration order is the
/// canonical order: it drives breakdown listings and the top-category
/// tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Bills,
    Healthcare,
    Others,
}

pub const CATEGORIES: [Category; 7] = [
    Category::Food,
    Category::Transport,
    Category::Shopping,
    Category::Entertainment,
    Category::Bills,
    Category::Healthcare,
    Category::Others,
];

impl Category {
    pub fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Shopping => "Shopping",
            Category::Entertainment => "Entertainment",
            Category::Bills => "Bills",
            Category::Healthcare => "Healthcare",
            Category::Others => "Others",
        }
    }

    /// Display color, hex, as used by the breakdown chart.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Food => "#f97316",
            Category::Transport => "#3b82f6",
            Category::Shopping => "#8b5cf6",
            Category::Entertainment => "#ec4899",
            Category::Bills => "#ef4444",
            Category::Healthcare => "#10b981",
            Category::Others => "#6b7280",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Food => "🍕",
            Category::Transport => "🚗",
            Category::Shopping => "🛍️",
            Category::Entertainment => "🎬",
            Category::Bills => "📄",
            Category::Healthcare => "🏥",
            Category::Others => "📦",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for cat in CATEGORIES {
            if cat.name().eq_ignore_ascii_case(s) {
                return Ok(cat);
            }
        }
        let valid: Vec<&str> = CATEGORIES.iter().map(|c| c.name()).collect();
        Err(anyhow::anyhow!(
            "Unknown category '{}', expected one of: {}",
            s,
            valid.join(", ")
        ))
    }
}

/// A single recorded spending event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub amount: Decimal,
    pub category: Category,
    pub date: NaiveDate,
    pub owner: String,
}

/// The user-submitted fields of an expense. The store assigns the id and
/// owner on add, and preserves both on update.
#[derive(Debug, Clone)]
pub struct ExpenseInput {
    pub title: String,
    pub amount: Decimal,
    pub category: Category,
    pub date: NaiveDate,
}

/// Seed records shown before any real data is entered.
pub fn demo_expenses() -> Vec<ExpenseInput> {
    let entries = [
        ("Demo: Grocery Shopping", "85.50", Category::Food, "2024-01-15"),
        ("Demo: Gas Station", "45.00", Category::Transport, "2024-01-14"),
        (
            "Demo: Netflix Subscription",
            "15.99",
            Category::Entertainment,
            "2024-01-13",
        ),
    ];
    entries
        .into_iter()
        .map(|(title, amount, category, date)| ExpenseInput {
            // Literals above are known-good.
            title: title.to_string(),
            amount: amount.parse().unwrap_or(Decimal::ZERO),
            category,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap_or_default(),
        })
        .collect()
}
