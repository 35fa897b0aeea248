// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::errors::DashboardError;
use crate::models::{Transaction, next_id};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

pub const EXPENSE_CATEGORIES: [&str; 4] = [
    "toiletries",
    "cleaning materials",
    "cleaner payments",
    "other",
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"all"` is the sentinel; anything else is matched verbatim.
    pub fn parse(s: &str) -> CategoryFilter {
        if s == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(s.to_string())
        }
    }

    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => category == Some(c.as_str()),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(c) => f.write_str(c),
        }
    }
}

pub fn filter_expenses<'a>(expenses: &'a [Transaction], filter: &CategoryFilter) -> Vec<&'a Transaction> {
    expenses
        .iter()
        .filter(|e| filter.matches(e.category.as_deref()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinancialSummary {
    pub total_earnings: Decimal,
    pub total_expenses: Decimal,
    pub net_profit: Decimal,
}

pub fn summarize(earnings: &[Transaction], expenses: &[Transaction]) -> FinancialSummary {
    let total_earnings: Decimal = earnings.iter().map(|t| t.amount).sum();
    let total_expenses: Decimal = expenses.iter().map(|t| t.amount).sum();
    FinancialSummary {
        total_earnings,
        total_expenses,
        net_profit: total_earnings - total_expenses,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Earning,
    Expense,
}

#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub category: Option<String>,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<(), DashboardError> {
        if self.description.trim().is_empty() {
            return Err(DashboardError::InvalidTransaction(
                "description must not be empty".into(),
            ));
        }
        if self.amount <= Decimal::ZERO {
            return Err(DashboardError::InvalidTransaction(format!(
                "amount must be positive, got {}",
                self.amount
            )));
        }
        match (self.kind, self.category.as_deref()) {
            (TransactionKind::Earning, Some(c)) => Err(DashboardError::InvalidTransaction(
                format!("earnings are not categorized (got '{}')", c),
            )),
            (TransactionKind::Expense, None) => Err(DashboardError::InvalidTransaction(
                "expenses need a category".into(),
            )),
            (TransactionKind::Expense, Some(c)) if !EXPENSE_CATEGORIES.contains(&c.trim()) => {
                Err(DashboardError::InvalidTransaction(format!(
                    "unknown category '{}' (use {})",
                    c,
                    EXPENSE_CATEGORIES.join("|")
                )))
            }
            _ => Ok(()),
        }
    }
}

/// Returns a new collection with `tx` appended under the next numeric id.
pub fn append(existing: &[Transaction], tx: NewTransaction) -> Result<Vec<Transaction>, DashboardError> {
    tx.validate()?;
    let id = next_id(existing.iter().map(|t| t.id.as_str()), "transactions")?;
    let mut out = existing.to_vec();
    out.push(Transaction {
        id,
        date: tx.date,
        description: tx.description.trim().to_string(),
        amount: tx.amount,
        category: tx.category.map(|c| c.trim().to_string()),
    });
    Ok(out)
}
