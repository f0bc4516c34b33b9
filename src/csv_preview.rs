// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Quick look at a CSV file before it is uploaded for import.
//!
//! Fields are split on every comma. Quoted fields that contain commas or
//! newlines are split incorrectly; the server-side importer is the one
//! that parses the file for real.

use serde::Serialize;
use std::path::Path;
use thiserror::Error;

pub const MAX_PREVIEW_ROWS: usize = 5;

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("CSV file appears to be empty")]
    EmptyFile,
    #[error("'{0}' is not a CSV file")]
    NotCsv(String),
    #[error("Failed to read CSV file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvPreview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub entry_count: usize,
}

fn split_line(line: &str) -> Vec<String> {
    line.split(',').map(|f| f.trim().to_string()).collect()
}

pub fn preview(raw: &str) -> Result<CsvPreview, PreviewError> {
    let mut lines = raw.lines().filter(|l| !l.trim().is_empty());
    let headers = split_line(lines.next().ok_or(PreviewError::EmptyFile)?);

    let mut rows = Vec::with_capacity(MAX_PREVIEW_ROWS);
    let mut entry_count = 0;
    for line in lines {
        if rows.len() < MAX_PREVIEW_ROWS {
            rows.push(split_line(line));
        }
        entry_count += 1;
    }

    Ok(CsvPreview {
        headers,
        rows,
        entry_count,
    })
}

/// Only `.csv` names are accepted, matching what the importer will take.
pub fn ensure_csv_name(path: &Path) -> Result<(), PreviewError> {
    let ok = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if ok {
        Ok(())
    } else {
        Err(PreviewError::NotCsv(path.display().to_string()))
    }
}

pub fn preview_file(path: &Path) -> Result<CsvPreview, PreviewError> {
    ensure_csv_name(path)?;
    let raw = std::fs::read_to_string(path)?;
    let p = preview(&raw)?;
    tracing::debug!(path = %path.display(), entries = p.entry_count, "generated CSV preview");
    Ok(p)
}
