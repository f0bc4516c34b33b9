// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{EntryType, FinanceEntry};
use crate::utils::{month_label, month_start};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryShare {
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub percentage: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotals {
    pub month: String,
    #[serde(skip)]
    pub starts_on: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub expense: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expense: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_balance: Decimal,
    pub category_breakdown: Vec<CategoryShare>,
    pub monthly_trend: Vec<MonthlyTotals>,
}

/// Folds a page of entries into totals, a per-category breakdown in
/// first-seen order, and a month-by-month trend in calendar order.
pub fn aggregate(entries: &[FinanceEntry]) -> AnalyticsSummary {
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;

    let mut categories: Vec<(String, Decimal)> = Vec::new();
    let mut category_pos: HashMap<&str, usize> = HashMap::new();
    let mut months: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();

    for e in entries {
        let month = months
            .entry(month_start(e.date))
            .or_insert((Decimal::ZERO, Decimal::ZERO));
        match e.kind {
            EntryType::Income => {
                add_clamped(&mut total_income, e.amount);
                add_clamped(&mut month.0, e.amount);
            }
            EntryType::Expense => {
                add_clamped(&mut total_expense, e.amount);
                add_clamped(&mut month.1, e.amount);
            }
        }

        match category_pos.get(e.category.as_str()) {
            Some(&i) => add_clamped(&mut categories[i].1, e.amount),
            None => {
                category_pos.insert(&e.category, categories.len());
                categories.push((e.category.clone(), e.amount));
            }
        }
    }

    let mut total_amount = total_income;
    add_clamped(&mut total_amount, total_expense);
    let hundred = Decimal::ONE_HUNDRED;
    let category_breakdown = categories
        .into_iter()
        .map(|(category, amount)| {
            let percentage = if total_amount > Decimal::ZERO {
                amount
                    .checked_div(total_amount)
                    .and_then(|r| r.checked_mul(hundred))
                    .unwrap_or_else(|| clamp_to_sign(amount))
            } else {
                Decimal::ZERO
            };
            CategoryShare {
                category,
                amount,
                percentage,
            }
        })
        .collect();

    // BTreeMap keys are month starts, so iteration is already chronological.
    let monthly_trend = months
        .into_iter()
        .map(|(starts_on, (income, expense))| MonthlyTotals {
            month: month_label(starts_on),
            starts_on,
            income,
            expense,
        })
        .collect();

    AnalyticsSummary {
        total_income,
        total_expense,
        net_balance: total_income.saturating_sub(total_expense),
        category_breakdown,
        monthly_trend,
    }
}

/// Adds in place, clamping to `Decimal::MAX`/`Decimal::MIN` on overflow.
fn add_clamped(total: &mut Decimal, amount: Decimal) {
    *total = match total.checked_add(amount) {
        Some(sum) => sum,
        None => {
            tracing::warn!(%amount, "amount total overflowed, clamping");
            clamp_to_sign(amount)
        }
    };
}

fn clamp_to_sign(d: Decimal) -> Decimal {
    if d.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}
