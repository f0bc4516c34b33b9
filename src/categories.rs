// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Suggested category labels. Entries may carry any label; this list only
//! feeds pickers and hints.

use crate::models::EntryType;

pub const INCOME_CATEGORIES: [&str; 4] = ["Salary", "Investments", "Gifts", "Refunds"];

pub const EXPENSE_CATEGORIES: [&str; 8] = [
    "Food & Drinks",
    "Shopping",
    "Transportation",
    "Bills",
    "Entertainment",
    "Health",
    "Education",
    "Other",
];

pub fn palette() -> impl Iterator<Item = (EntryType, &'static str)> {
    INCOME_CATEGORIES
        .into_iter()
        .map(|c| (EntryType::Income, c))
        .chain(EXPENSE_CATEGORIES.into_iter().map(|c| (EntryType::Expense, c)))
}

/// The type a palette category belongs to; `None` for custom labels.
pub fn palette_kind(category: &str) -> Option<EntryType> {
    palette()
        .find(|(_, c)| c.eq_ignore_ascii_case(category.trim()))
        .map(|(k, _)| k)
}
