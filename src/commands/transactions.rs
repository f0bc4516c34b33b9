// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::palette_kind;
use crate::commands::AppContext;
use crate::filters::{parse_sort, FilterField, FilterParams, FilterState};
use crate::models::{EntryType, FinanceEntry, NewTransaction, Page};
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::{anyhow, Context, Result};
use rust_decimal::Decimal;

const FILTER_FLAGS: [(&str, FilterField); 7] = [
    ("type", FilterField::Type),
    ("category", FilterField::Category),
    ("min", FilterField::MinAmount),
    ("max", FilterField::MaxAmount),
    ("from", FilterField::StartDate),
    ("to", FilterField::EndDate),
    ("search", FilterField::SearchTerm),
];

pub fn handle(ctx: &AppContext, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(ctx, sub)?,
        Some(("add", sub)) => add(ctx, sub)?,
        _ => {}
    }
    Ok(())
}

/// Builds the search parameters from the shared filter flags. The flags
/// form a draft that is applied in one go, then page/size/sort overrides
/// are layered on top.
pub fn params_from_matches(
    sub: &clap::ArgMatches,
    page_size: u32,
    default_sort: &[String],
) -> Result<FilterParams> {
    let mut state = FilterState::new(page_size, default_sort.to_vec());
    state.open_draft();
    for (flag, field) in FILTER_FLAGS {
        let raw = sub.get_one::<String>(flag).map(String::as_str);
        let draft = state.edit_draft(field, raw);
        if let Some(raw) = raw.filter(|r| !r.is_empty()) {
            if draft.get(field).is_none() {
                tracing::warn!("ignoring --{} '{}': not a valid {}", flag, raw, field.key());
            }
        }
    }
    state.apply();

    if let Some(size) = sub.get_one::<u32>("size") {
        state.set_size(*size);
    }
    if let Some(sort) = sub.get_many::<String>("sort") {
        let raw: Vec<&String> = sort.collect();
        state.set_sort(parse_sort(&raw)?);
    }
    if let Some(page) = sub.get_one::<u32>("page") {
        state.set_page(*page);
    }
    Ok(state.active().clone())
}

pub fn entry_rows(entries: &[FinanceEntry]) -> Vec<Vec<String>> {
    entries
        .iter()
        .map(|e| {
            let signed = match e.kind {
                EntryType::Income => format!("+{}", fmt_money(&e.amount)),
                EntryType::Expense => format!("-{}", fmt_money(&e.amount)),
            };
            vec![
                e.date.to_string(),
                e.kind.to_string(),
                e.category.clone(),
                e.label.clone().unwrap_or_default(),
                signed,
            ]
        })
        .collect()
}

pub fn page_footer<T>(page: &Page<T>) -> String {
    if page.total_pages == 0 {
        return "No transactions found".to_string();
    }
    format!(
        "Page {} of {} ({} transactions)",
        page.number + 1,
        page.total_pages,
        page.total_elements
    )
}

/// `--page` hints for the neighbouring pages that exist.
pub fn page_hints<T>(page: &Page<T>) -> Vec<String> {
    let mut hints = Vec::new();
    if page.has_previous() {
        hints.push(format!("Prev: --page {}", page.number - 1));
    }
    if page.has_next() {
        hints.push(format!("Next: --page {}", page.number + 1));
    }
    hints
}

fn list(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<()> {
    ctx.require_token()?;
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let params = params_from_matches(sub, ctx.settings.page_size, &ctx.settings.default_sort)?;
    let page = ctx.client.search(&params).context("Fetch transactions")?;

    if jsonl_flag {
        maybe_print_json(false, true, &page.content)?;
        return Ok(());
    }
    if !maybe_print_json(json_flag, false, &page)? {
        println!(
            "{}",
            pretty_table(
                &["Date", "Type", "Category", "Label", "Amount"],
                entry_rows(&page.content),
            )
        );
        println!("{}", page_footer(&page));
        for hint in page_hints(&page) {
            println!("{}", hint);
        }
    }
    Ok(())
}

fn add(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<()> {
    ctx.require_token()?;
    let kind: EntryType = sub
        .get_one::<String>("type")
        .unwrap()
        .parse()
        .map_err(|e: String| anyhow!(e))?;
    let label = sub.get_one::<String>("label").unwrap().trim().to_string();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    if amount < Decimal::ZERO {
        return Err(anyhow!(
            "Amount must not be negative; use --type Expense for money going out"
        ));
    }
    let category = sub.get_one::<String>("category").unwrap().trim().to_string();
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;

    if let Some(suggested) = palette_kind(&category).filter(|k| *k != kind) {
        tracing::warn!("category '{}' is usually {}, recording as {}", category, suggested, kind);
    }

    let tx = NewTransaction {
        kind,
        label,
        amount,
        category,
        date,
    };
    ctx.client.add_transaction(&tx).context("Add transaction")?;
    println!(
        "Recorded {} {} on {} ({}: '{}')",
        tx.kind, tx.amount, tx.date, tx.category, tx.label
    );
    Ok(())
}
