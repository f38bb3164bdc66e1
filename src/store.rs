// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::Utc;
use thiserror::Error;

use crate::models::{Category, Expense, ExpenseInput};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("No expense with id '{0}'")]
    NotFound(String),
}

/// Sort key for listings. Insertion order applies when no key is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Amount,
    Date,
}

/// Listing options: optional single-category restriction plus an optional
/// stable sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    pub category: Option<Category>,
    pub sort: Option<SortKey>,
    pub descending: bool,
}

/// In-memory ordered collection of expenses for one session. Discarded when
/// the process exits; there is no persistence layer for expense data.
#[derive(Debug, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    owner: String,
}

impl ExpenseStore {
    pub fn new(owner: &str) -> Self {
        Self {
            expenses: Vec::new(),
            owner: owner.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Appends a new expense under a freshly generated identifier and returns
    /// a reference to it. Titles may repeat.
    pub fn add(&mut self, input: ExpenseInput) -> &Expense {
        let id = self.next_id();
        self.expenses.push(Expense {
            id,
            title: input.title,
            amount: input.amount,
            category: input.category,
            date: input.date,
            owner: self.owner.clone(),
        });
        // Just pushed, so last() is present.
        self.expenses.last().unwrap()
    }

    /// Replaces every field of the matching expense except its id and owner.
    pub fn update(&mut self, id: &str, input: ExpenseInput) -> Result<&Expense, StoreError> {
        let pos = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let owner = self.expenses[pos].owner.clone();
        self.expenses[pos] = Expense {
            id: id.to_string(),
            title: input.title,
            amount: input.amount,
            category: input.category,
            date: input.date,
            owner,
        };
        Ok(&self.expenses[pos])
    }

    /// Removes and returns the matching expense.
    pub fn remove(&mut self, id: &str) -> Result<Expense, StoreError> {
        let pos = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(self.expenses.remove(pos))
    }

    /// Insertion-ordered view, optionally restricted to one category and
    /// stably sorted by amount or date.
    pub fn list(&self, opts: ListOptions) -> Vec<&Expense> {
        let mut out: Vec<&Expense> = self
            .expenses
            .iter()
            .filter(|e| opts.category.is_none_or(|c| e.category == c))
            .collect();
        // Comparators flip for descending instead of reversing afterwards,
        // keeping the sort stable for equal keys.
        match (opts.sort, opts.descending) {
            (Some(SortKey::Amount), false) => out.sort_by(|a, b| a.amount.cmp(&b.amount)),
            (Some(SortKey::Amount), true) => out.sort_by(|a, b| b.amount.cmp(&a.amount)),
            (Some(SortKey::Date), false) => out.sort_by(|a, b| a.date.cmp(&b.date)),
            (Some(SortKey::Date), true) => out.sort_by(|a, b| b.date.cmp(&a.date)),
            (None, _) => {}
        }
        out
    }

    /// Millisecond timestamp, bumped until unique within the collection.
    fn next_id(&self) -> String {
        let mut millis = Utc::now().timestamp_millis();
        loop {
            let id = millis.to_string();
            if self.get(&id).is_none() {
                return id;
            }
            millis += 1;
        }
    }
}
