// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finpulse::analytics::aggregate;
use finpulse::models::{EntryType, FinanceEntry};
use rust_decimal::Decimal;

fn entry(id: u32, kind: EntryType, category: &str, amount: i64, date: &str) -> FinanceEntry {
    entry_exact(id, kind, category, Decimal::from(amount), date)
}

fn entry_exact(id: u32, kind: EntryType, category: &str, amount: Decimal, date: &str) -> FinanceEntry {
    FinanceEntry {
        id: id.to_string(),
        kind,
        category: category.to_string(),
        amount,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        label: None,
        description: None,
    }
}

fn salary_and_food() -> Vec<FinanceEntry> {
    vec![
        entry(1, EntryType::Income, "Salary", 1000, "2024-01-15"),
        entry(2, EntryType::Expense, "Food & Drinks", 200, "2024-01-20"),
        entry(3, EntryType::Expense, "Food & Drinks", 50, "2024-02-01"),
    ]
}

#[test]
fn summary_for_salary_and_food() {
    let s = aggregate(&salary_and_food());
    assert_eq!(s.total_income, Decimal::from(1000));
    assert_eq!(s.total_expense, Decimal::from(250));
    assert_eq!(s.net_balance, Decimal::from(750));

    assert_eq!(s.category_breakdown.len(), 2);
    assert_eq!(s.category_breakdown[0].category, "Salary");
    assert_eq!(s.category_breakdown[0].amount, Decimal::from(1000));
    assert_eq!(s.category_breakdown[0].percentage, Decimal::from(80));
    assert_eq!(s.category_breakdown[1].category, "Food & Drinks");
    assert_eq!(s.category_breakdown[1].amount, Decimal::from(250));
    assert_eq!(s.category_breakdown[1].percentage, Decimal::from(20));

    assert_eq!(s.monthly_trend.len(), 2);
    assert_eq!(s.monthly_trend[0].month, "Jan 2024");
    assert_eq!(s.monthly_trend[0].income, Decimal::from(1000));
    assert_eq!(s.monthly_trend[0].expense, Decimal::from(200));
    assert_eq!(s.monthly_trend[1].month, "Feb 2024");
    assert_eq!(s.monthly_trend[1].income, Decimal::ZERO);
    assert_eq!(s.monthly_trend[1].expense, Decimal::from(50));
}

#[test]
fn empty_input_is_all_zero() {
    let s = aggregate(&[]);
    assert_eq!(s.total_income, Decimal::ZERO);
    assert_eq!(s.total_expense, Decimal::ZERO);
    assert_eq!(s.net_balance, Decimal::ZERO);
    assert!(s.category_breakdown.is_empty());
    assert!(s.monthly_trend.is_empty());
}

#[test]
fn totals_match_sum_of_amounts() {
    let entries = vec![
        entry(1, EntryType::Expense, "Bills", 120, "2023-11-03"),
        entry(2, EntryType::Income, "Gifts", 40, "2024-03-09"),
        entry(3, EntryType::Expense, "Health", 75, "2023-12-30"),
        entry(4, EntryType::Income, "Salary", 2500, "2024-03-01"),
    ];
    let s = aggregate(&entries);
    let sum: Decimal = entries.iter().map(|e| e.amount).sum();
    assert_eq!(s.total_income + s.total_expense, sum);
    assert_eq!(s.net_balance, s.total_income - s.total_expense);
}

#[test]
fn percentages_add_up_to_hundred() {
    let entries = vec![
        entry(1, EntryType::Expense, "Bills", 1, "2024-01-01"),
        entry(2, EntryType::Expense, "Shopping", 1, "2024-01-02"),
        entry(3, EntryType::Income, "Refunds", 1, "2024-01-03"),
    ];
    let s = aggregate(&entries);
    let total: Decimal = s.category_breakdown.iter().map(|c| c.percentage).sum();
    let diff = (total - Decimal::ONE_HUNDRED).abs();
    assert!(diff < Decimal::new(1, 10), "sum was {}", total);
}

#[test]
fn zero_amounts_give_zero_percentages() {
    let entries = vec![
        entry(1, EntryType::Expense, "Other", 0, "2024-05-05"),
        entry(2, EntryType::Income, "Gifts", 0, "2024-05-06"),
    ];
    let s = aggregate(&entries);
    assert_eq!(s.category_breakdown.len(), 2);
    assert!(s.category_breakdown.iter().all(|c| c.percentage.is_zero()));
}

#[test]
fn monthly_trend_is_chronological_regardless_of_input_order() {
    // Alphabetical order of the labels (Apr, Dec, Feb, Jan) would be wrong.
    let entries = vec![
        entry(1, EntryType::Expense, "Bills", 10, "2024-04-10"),
        entry(2, EntryType::Expense, "Bills", 10, "2023-12-01"),
        entry(3, EntryType::Income, "Salary", 10, "2024-02-28"),
        entry(4, EntryType::Income, "Salary", 10, "2024-01-31"),
        entry(5, EntryType::Expense, "Bills", 10, "2024-04-01"),
    ];
    let s = aggregate(&entries);
    let months: Vec<&str> = s.monthly_trend.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(months, ["Dec 2023", "Jan 2024", "Feb 2024", "Apr 2024"]);
    assert_eq!(s.monthly_trend[3].expense, Decimal::from(20));
    assert!(s
        .monthly_trend
        .windows(2)
        .all(|w| w[0].starts_on < w[1].starts_on));
}

#[test]
fn category_order_is_first_seen() {
    let entries = vec![
        entry(1, EntryType::Expense, "Transportation", 5, "2024-01-01"),
        entry(2, EntryType::Income, "Salary", 5, "2024-01-01"),
        entry(3, EntryType::Expense, "Transportation", 5, "2024-01-02"),
        entry(4, EntryType::Expense, "my own label", 5, "2024-01-03"),
    ];
    let s = aggregate(&entries);
    let cats: Vec<&str> = s
        .category_breakdown
        .iter()
        .map(|c| c.category.as_str())
        .collect();
    assert_eq!(cats, ["Transportation", "Salary", "my own label"]);
    assert_eq!(s.category_breakdown[0].amount, Decimal::from(10));
}

#[test]
fn repeated_calls_do_not_accumulate() {
    let entries = salary_and_food();
    let first = aggregate(&entries);
    let second = aggregate(&entries);
    assert_eq!(first, second);
}

#[test]
fn summary_serializes_with_camel_case_numbers() {
    let s = aggregate(&salary_and_food());
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["totalIncome"], serde_json::json!(1000.0));
    assert_eq!(v["netBalance"], serde_json::json!(750.0));
    assert_eq!(v["categoryBreakdown"][0]["percentage"], serde_json::json!(80.0));
    assert_eq!(v["monthlyTrend"][1]["month"], "Feb 2024");
    assert!(v["monthlyTrend"][0].get("startsOn").is_none());
}

#[test]
fn huge_amounts_clamp_instead_of_overflowing() {
    let entries = vec![
        entry_exact(1, EntryType::Income, "Salary", Decimal::MAX, "2024-01-01"),
        entry_exact(2, EntryType::Income, "Salary", Decimal::MAX, "2024-01-02"),
        entry_exact(3, EntryType::Expense, "Bills", Decimal::MAX, "2024-01-03"),
    ];
    let s = aggregate(&entries);
    assert_eq!(s.total_income, Decimal::MAX);
    assert_eq!(s.total_expense, Decimal::MAX);
    assert_eq!(s.net_balance, Decimal::ZERO);
    assert_eq!(s.monthly_trend[0].income, Decimal::MAX);
    assert_eq!(s.category_breakdown[0].amount, Decimal::MAX);
    assert_eq!(s.category_breakdown[0].percentage, Decimal::ONE_HUNDRED);
    assert_eq!(s.category_breakdown[1].percentage, Decimal::ONE_HUNDRED);
}

#[test]
fn huge_negative_amounts_clamp_to_min() {
    let entries = vec![
        entry_exact(1, EntryType::Expense, "Refunds", Decimal::MIN, "2024-01-01"),
        entry_exact(2, EntryType::Expense, "Refunds", Decimal::MIN, "2024-01-02"),
    ];
    let s = aggregate(&entries);
    assert_eq!(s.total_expense, Decimal::MIN);
    assert_eq!(s.category_breakdown[0].percentage, Decimal::ZERO);
}
