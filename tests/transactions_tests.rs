// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use finpulse::cli;
use finpulse::commands::{analytics, transactions};
use finpulse::config::Settings;
use finpulse::filters::build_query;
use finpulse::models::{EntryType, FinanceEntry, Page};
use rust_decimal::Decimal;

fn sub_matches(args: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(args);
    let (_, first) = matches.subcommand().expect("no subcommand");
    match first.subcommand() {
        Some((_, second)) => second.clone(),
        None => first.clone(),
    }
}

fn default_sort() -> Vec<String> {
    vec!["date,desc".to_string()]
}

#[test]
fn list_flags_become_query() {
    let m = sub_matches(&[
        "finpulse", "tx", "list", "--type", "expense", "--category", "Bills", "--min", "10",
        "--to", "2024-06-30", "--page", "2", "--size", "5", "--sort", "amount,ASC",
    ]);
    let params = transactions::params_from_matches(&m, 10, &default_sort()).unwrap();
    assert_eq!(params.filters.kind, Some(EntryType::Expense));
    assert_eq!(params.page, 2);
    assert_eq!(params.size, 5);

    let q: Vec<(String, String)> = build_query(&params);
    let keys: Vec<&str> = q.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        ["type", "category", "minAmount", "endDate", "page", "size", "sort"]
    );
    assert_eq!(q.last().unwrap().1, "amount,asc");
}

#[test]
fn list_without_flags_uses_configured_defaults() {
    let m = sub_matches(&["finpulse", "tx", "list"]);
    let params = transactions::params_from_matches(&m, 15, &default_sort()).unwrap();
    assert!(params.filters.is_empty());
    assert_eq!(params.page, 0);
    assert_eq!(params.size, 15);
    assert_eq!(params.sort, default_sort());
}

#[test]
fn invalid_amount_flag_is_dropped() {
    let m = sub_matches(&["finpulse", "tx", "list", "--max", "lots", "--search", " "]);
    let params = transactions::params_from_matches(&m, 10, &default_sort()).unwrap();
    assert_eq!(params.filters.max_amount, None);
    assert_eq!(params.filters.search_term.as_deref(), Some(" "));
}

#[test]
fn empty_search_flag_is_absent() {
    let m = sub_matches(&["finpulse", "tx", "list", "--search", ""]);
    let params = transactions::params_from_matches(&m, 10, &default_sort()).unwrap();
    assert_eq!(params.filters.search_term, None);
}

#[test]
fn bad_sort_flag_is_an_error() {
    let m = sub_matches(&["finpulse", "tx", "list", "--sort", "date"]);
    assert!(transactions::params_from_matches(&m, 10, &default_sort()).is_err());
}

#[test]
fn token_is_a_global_flag() {
    let matches =
        cli::build_cli().get_matches_from(["finpulse", "tx", "list", "--token", "abc123"]);
    assert_eq!(
        matches.get_one::<String>("token").map(String::as_str),
        Some("abc123")
    );
}

#[test]
fn analytics_default_to_last_month_with_large_page() {
    let m = sub_matches(&["finpulse", "analytics"]);
    let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
    let params = analytics::analytics_params(&m, &Settings::default(), today).unwrap();
    assert_eq!(params.size, 100);
    assert_eq!(params.filters.start_date, NaiveDate::from_ymd_opt(2024, 4, 15));
    assert_eq!(params.filters.end_date, Some(today));
}

#[test]
fn analytics_range_and_explicit_dates() {
    let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();

    let m = sub_matches(&["finpulse", "analytics", "--range", "year", "--from", "2020-01-01"]);
    let params = analytics::analytics_params(&m, &Settings::default(), today).unwrap();
    assert_eq!(params.filters.start_date, NaiveDate::from_ymd_opt(2023, 5, 15));

    let m = sub_matches(&["finpulse", "analytics", "--from", "2020-01-01"]);
    let params = analytics::analytics_params(&m, &Settings::default(), today).unwrap();
    assert_eq!(params.filters.start_date, NaiveDate::from_ymd_opt(2020, 1, 1));
    assert_eq!(params.filters.end_date, None);
}

#[test]
fn rows_carry_sign_from_type() {
    let entries = vec![
        FinanceEntry {
            id: "1".into(),
            kind: EntryType::Income,
            category: "Salary".into(),
            amount: Decimal::new(300000, 2),
            date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            label: Some("Pay".into()),
            description: None,
        },
        FinanceEntry {
            id: "2".into(),
            kind: EntryType::Expense,
            category: "Bills".into(),
            amount: Decimal::from(1200),
            date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            label: None,
            description: None,
        },
    ];
    let rows = transactions::entry_rows(&entries);
    assert_eq!(rows[0], ["2024-01-31", "Income", "Salary", "Pay", "+3000.00"]);
    assert_eq!(rows[1], ["2024-02-01", "Expense", "Bills", "", "-1200.00"]);
}

#[test]
fn footer_is_one_based() {
    let page: Page<FinanceEntry> = Page {
        content: vec![],
        total_pages: 4,
        total_elements: 37,
        number: 0,
    };
    assert_eq!(transactions::page_footer(&page), "Page 1 of 4 (37 transactions)");
    assert!(page.has_next());
    assert!(!page.has_previous());

    let empty: Page<FinanceEntry> = Page {
        content: vec![],
        total_pages: 0,
        total_elements: 0,
        number: 0,
    };
    assert_eq!(transactions::page_footer(&empty), "No transactions found");
    assert!(!empty.has_next());
}

#[test]
fn paging_hints_follow_position() {
    let page = |number: u32| -> Page<FinanceEntry> {
        Page {
            content: vec![],
            total_pages: 3,
            total_elements: 25,
            number,
        }
    };
    assert_eq!(transactions::page_hints(&page(0)), ["Next: --page 1"]);
    assert_eq!(
        transactions::page_hints(&page(1)),
        ["Prev: --page 0", "Next: --page 2"]
    );
    assert_eq!(transactions::page_hints(&page(2)), ["Prev: --page 1"]);
}
