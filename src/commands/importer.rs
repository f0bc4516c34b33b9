// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::AppContext;
use crate::csv_preview::{preview_file, CsvPreview};
use crate::utils::pretty_table;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

pub fn handle_preview(sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let p = preview_file(Path::new(path)).with_context(|| format!("Preview {}", path))?;
    print_preview(&p);
    Ok(())
}

pub fn handle_upload(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<()> {
    ctx.require_token()?;
    let path = Path::new(sub.get_one::<String>("path").unwrap().trim());
    // An empty or non-CSV file is refused before anything is sent.
    let p = preview_file(path).with_context(|| format!("Preview {}", path.display()))?;
    print_preview(&p);

    let resp = ctx
        .client
        .upload_csv(path)
        .with_context(|| format!("Upload {}", path.display()))?;
    println!("{}", upload_message(&resp, p.entry_count));
    Ok(())
}

pub fn print_preview(p: &CsvPreview) {
    println!("File summary: {} entries", p.entry_count);
    if p.headers.is_empty() {
        return;
    }
    // Short rows are padded so the table stays rectangular.
    let width = p.headers.len();
    let rows = p
        .rows
        .iter()
        .map(|r| {
            let mut r = r.clone();
            r.resize(width.max(r.len()), String::new());
            r
        })
        .collect();
    let headers: Vec<&str> = p.headers.iter().map(String::as_str).collect();
    println!("{}", pretty_table(&headers, rows));
    if p.entry_count > p.rows.len() {
        println!("... and {} more", p.entry_count - p.rows.len());
    }
}

fn upload_message(resp: &Value, entry_count: usize) -> String {
    match resp.get("message").and_then(Value::as_str) {
        Some(m) if !m.is_empty() => format!("CSV uploaded successfully: {}", m),
        _ => format!("CSV uploaded successfully ({} entries sent)", entry_count),
    }
}
