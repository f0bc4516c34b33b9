// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::analytics::{aggregate, AnalyticsSummary};
use crate::commands::transactions::params_from_matches;
use crate::commands::AppContext;
use crate::config::Settings;
use crate::filters::{DateRange, FilterParams};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;

pub fn handle(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<()> {
    ctx.require_token()?;
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let today = chrono::Local::now().date_naive();
    let params = analytics_params(sub, &ctx.settings, today)?;

    let page = ctx.client.search(&params).context("Fetch transactions for analytics")?;
    if page.has_next() {
        tracing::warn!(
            "analytics cover {} of {} transactions; raise --size to include more",
            page.content.len(),
            page.total_elements
        );
    }
    let summary = aggregate(&page.content);

    if !maybe_print_json(json_flag, jsonl_flag, &summary)? {
        print_summary(&summary);
    }
    Ok(())
}

/// Analytics fetch a larger page than the transaction list and default
/// to the last month.
pub fn analytics_params(
    sub: &clap::ArgMatches,
    settings: &Settings,
    today: NaiveDate,
) -> Result<FilterParams> {
    let params = params_from_matches(
        sub,
        settings.analytics_page_size,
        &settings.default_sort,
    )?;
    let explicit_dates = params.filters.start_date.is_some() || params.filters.end_date.is_some();
    let range = match sub.get_one::<String>("range") {
        Some(r) => Some(r.parse::<DateRange>().map_err(|e| anyhow!(e))?),
        None if explicit_dates => None,
        None => Some(DateRange::Month),
    };
    Ok(match range {
        Some(r) => params.with_date_range(r, today),
        None => params,
    })
}

fn print_summary(s: &AnalyticsSummary) {
    println!(
        "{}",
        pretty_table(
            &["Income", "Expense", "Net"],
            vec![vec![
                fmt_money(&s.total_income),
                fmt_money(&s.total_expense),
                fmt_money(&s.net_balance),
            ]],
        )
    );

    let cats = s
        .category_breakdown
        .iter()
        .map(|c| {
            vec![
                c.category.clone(),
                fmt_money(&c.amount),
                format!("{:.1}%", c.percentage.round_dp(1)),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Category", "Amount", "Share"], cats));

    let months = s
        .monthly_trend
        .iter()
        .map(|m| vec![m.month.clone(), fmt_money(&m.income), fmt_money(&m.expense)])
        .collect();
    println!("{}", pretty_table(&["Month", "Income", "Expense"], months));
}
