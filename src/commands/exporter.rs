// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::transactions::params_from_matches;
use crate::commands::AppContext;
use crate::models::FinanceEntry;
use anyhow::{Context, Result};
use std::path::Path;

pub fn handle(ctx: &AppContext, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(ctx, sub),
        _ => Ok(()),
    }
}

fn export_transactions(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<()> {
    ctx.require_token()?;
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let all = sub.get_flag("all");

    let mut params = params_from_matches(sub, ctx.settings.page_size, &ctx.settings.default_sort)?;
    let mut entries = Vec::new();
    loop {
        let page = ctx
            .client
            .search(&params)
            .with_context(|| format!("Fetch page {}", params.page))?;
        entries.extend(page.content);
        if !all {
            break;
        }
        match params.next_page(page.total_pages) {
            Some(next) => params = next,
            None => break,
        }
    }

    match fmt.as_str() {
        "csv" => write_csv(Path::new(out), &entries)?,
        "json" => std::fs::write(out, serde_json::to_string_pretty(&entries)?)?,
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported {} transactions to {}", entries.len(), out);
    Ok(())
}

pub fn write_csv(out: &Path, entries: &[FinanceEntry]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(out)
        .with_context(|| format!("Create {}", out.display()))?;
    wtr.write_record(["id", "date", "type", "category", "amount", "label", "description"])?;
    for e in entries {
        wtr.write_record([
            e.id.clone(),
            e.date.to_string(),
            e.kind.to_string(),
            e.category.clone(),
            e.amount.to_string(),
            e.label.clone().unwrap_or_default(),
            e.description.clone().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
