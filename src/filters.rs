// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Filter parameters for the transaction search and their lifecycle.
//!
//! An optional dimension is either present with a meaningful value or
//! `None`. Blank or unparsable input never reaches the query as an empty
//! string or a sentinel.

use crate::models::EntryType;
use crate::utils::{months_before, parse_date, parse_decimal};
use chrono::{Days, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_SORT: &str = "date,desc";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Type,
    Category,
    MinAmount,
    MaxAmount,
    StartDate,
    EndDate,
    SearchTerm,
}

impl FilterField {
    pub const ALL: [FilterField; 7] = [
        FilterField::Type,
        FilterField::Category,
        FilterField::MinAmount,
        FilterField::MaxAmount,
        FilterField::StartDate,
        FilterField::EndDate,
        FilterField::SearchTerm,
    ];

    /// Query parameter name understood by the backend.
    pub fn key(&self) -> &'static str {
        match self {
            FilterField::Type => "type",
            FilterField::Category => "category",
            FilterField::MinAmount => "minAmount",
            FilterField::MaxAmount => "maxAmount",
            FilterField::StartDate => "startDate",
            FilterField::EndDate => "endDate",
            FilterField::SearchTerm => "searchTerm",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EntryType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
}

impl Filters {
    pub fn is_empty(&self) -> bool {
        FilterField::ALL.iter().all(|f| self.get(*f).is_none())
    }

    /// The field's value in its transport form, if present.
    pub fn get(&self, field: FilterField) -> Option<String> {
        match field {
            FilterField::Type => self.kind.map(|k| k.to_string()),
            FilterField::Category => self.category.clone(),
            FilterField::MinAmount => self.min_amount.map(|d| d.to_string()),
            FilterField::MaxAmount => self.max_amount.map(|d| d.to_string()),
            FilterField::StartDate => self.start_date.map(|d| d.to_string()),
            FilterField::EndDate => self.end_date.map(|d| d.to_string()),
            FilterField::SearchTerm => self.search_term.clone(),
        }
    }

    /// Returns a copy with `field` set to `value`, or removed when `value`
    /// is `None`, empty, or does not parse for the field's type. Category
    /// and search text are stored exactly as given.
    pub fn set_field(&self, field: FilterField, value: Option<&str>) -> Filters {
        let mut next = self.clone();
        next.clear(field);

        let Some(raw) = value.filter(|v| !v.is_empty()) else {
            return next;
        };

        let typed = raw.trim();
        let stored = match field {
            FilterField::Type => typed.parse::<EntryType>().map(|k| next.kind = Some(k)).is_ok(),
            FilterField::Category => {
                next.category = Some(raw.to_string());
                true
            }
            FilterField::MinAmount => parse_decimal(typed).map(|d| next.min_amount = Some(d)).is_ok(),
            FilterField::MaxAmount => parse_decimal(typed).map(|d| next.max_amount = Some(d)).is_ok(),
            FilterField::StartDate => parse_date(typed).map(|d| next.start_date = Some(d)).is_ok(),
            FilterField::EndDate => parse_date(typed).map(|d| next.end_date = Some(d)).is_ok(),
            FilterField::SearchTerm => {
                next.search_term = Some(raw.to_string());
                true
            }
        };
        if !stored {
            tracing::debug!(field = field.key(), value = raw, "discarding unparsable filter value");
        }
        next
    }

    fn clear(&mut self, field: FilterField) {
        match field {
            FilterField::Type => self.kind = None,
            FilterField::Category => self.category = None,
            FilterField::MinAmount => self.min_amount = None,
            FilterField::MaxAmount => self.max_amount = None,
            FilterField::StartDate => self.start_date = None,
            FilterField::EndDate => self.end_date = None,
            FilterField::SearchTerm => self.search_term = None,
        }
    }
}

pub fn set_field(current: &Filters, field: FilterField, value: Option<&str>) -> Filters {
    current.set_field(field, value)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterParams {
    #[serde(flatten)]
    pub filters: Filters,
    pub page: u32,
    pub size: u32,
    pub sort: Vec<String>,
}

impl Default for FilterParams {
    fn default() -> Self {
        reset_filters()
    }
}

impl FilterParams {
    pub fn new(size: u32, sort: Vec<String>) -> Self {
        FilterParams {
            filters: Filters::default(),
            page: 0,
            size: size.max(1),
            sort,
        }
    }

    pub fn set_field(&self, field: FilterField, value: Option<&str>) -> FilterParams {
        FilterParams {
            filters: self.filters.set_field(field, value),
            ..self.clone()
        }
    }

    /// Sets `startDate`/`endDate` to the preset window ending at `today`.
    pub fn with_date_range(&self, range: DateRange, today: NaiveDate) -> FilterParams {
        let (start, end) = range.bounds(today);
        let mut next = self.clone();
        next.filters.start_date = Some(start);
        next.filters.end_date = Some(end);
        next
    }

    /// The following page, or `None` when `page` is already the last one.
    pub fn next_page(&self, total_pages: u32) -> Option<FilterParams> {
        if self.page + 1 >= total_pages {
            return None;
        }
        Some(FilterParams {
            page: self.page + 1,
            ..self.clone()
        })
    }

    pub fn previous_page(&self) -> Option<FilterParams> {
        let page = self.page.checked_sub(1)?;
        Some(FilterParams { page, ..self.clone() })
    }
}

/// Commits `draft` as the whole filter set. Pagination restarts at page 0;
/// page size and sort carry over from `active`.
pub fn apply_filters(active: &FilterParams, draft: Filters) -> FilterParams {
    FilterParams {
        filters: draft,
        page: 0,
        size: active.size,
        sort: active.sort.clone(),
    }
}

pub fn reset_filters() -> FilterParams {
    FilterParams::new(DEFAULT_PAGE_SIZE, vec![DEFAULT_SORT.to_string()])
}

/// Key/value pairs for the search query string, in a fixed order.
pub fn build_query(params: &FilterParams) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = FilterField::ALL
        .iter()
        .filter_map(|f| params.filters.get(*f).map(|v| (f.key().to_string(), v)))
        .filter(|(_, v)| !v.is_empty())
        .collect();
    out.push(("page".into(), params.page.to_string()));
    out.push(("size".into(), params.size.to_string()));
    for token in &params.sort {
        out.push(("sort".into(), token.clone()));
    }
    out
}

/// Active filters plus the draft being edited, if any.
#[derive(Debug, Clone)]
pub struct FilterState {
    active: FilterParams,
    draft: Option<Filters>,
    default_size: u32,
    default_sort: Vec<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState::new(DEFAULT_PAGE_SIZE, vec![DEFAULT_SORT.to_string()])
    }
}

impl FilterState {
    pub fn new(default_size: u32, default_sort: Vec<String>) -> Self {
        FilterState {
            active: FilterParams::new(default_size, default_sort.clone()),
            draft: None,
            default_size,
            default_sort,
        }
    }

    pub fn active(&self) -> &FilterParams {
        &self.active
    }

    pub fn draft(&self) -> Option<&Filters> {
        self.draft.as_ref()
    }

    /// Edits one field of the active set directly. The caller re-fetches.
    pub fn set_field(&mut self, field: FilterField, value: Option<&str>) -> &FilterParams {
        self.active = self.active.set_field(field, value);
        &self.active
    }

    pub fn set_page(&mut self, page: u32) -> &FilterParams {
        self.active.page = page;
        &self.active
    }

    pub fn set_size(&mut self, size: u32) -> &FilterParams {
        self.active.size = size.max(1);
        &self.active
    }

    pub fn set_sort(&mut self, sort: Vec<String>) -> &FilterParams {
        self.active.sort = sort;
        &self.active
    }

    pub fn open_draft(&mut self) -> &Filters {
        self.draft.insert(self.active.filters.clone())
    }

    pub fn edit_draft(&mut self, field: FilterField, value: Option<&str>) -> &Filters {
        let current = self
            .draft
            .take()
            .unwrap_or_else(|| self.active.filters.clone());
        self.draft.insert(current.set_field(field, value))
    }

    pub fn cancel_draft(&mut self) {
        self.draft = None;
    }

    /// Commits the open draft. Without a draft the active filters are
    /// re-applied, which still resets the page.
    pub fn apply(&mut self) -> &FilterParams {
        let draft = self
            .draft
            .take()
            .unwrap_or_else(|| self.active.filters.clone());
        self.active = apply_filters(&self.active, draft);
        &self.active
    }

    pub fn reset(&mut self) -> &FilterParams {
        self.draft = None;
        self.active = FilterParams::new(self.default_size, self.default_sort.clone());
        &self.active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRange {
    Week,
    Month,
    Year,
}

impl DateRange {
    /// `(start, end)` with `end == today`.
    pub fn bounds(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let start = match self {
            DateRange::Week => today.checked_sub_days(Days::new(7)).unwrap_or(NaiveDate::MIN),
            DateRange::Month => months_before(today, 1),
            DateRange::Year => months_before(today, 12),
        };
        (start, today)
    }
}

impl FromStr for DateRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(DateRange::Week),
            "month" => Ok(DateRange::Month),
            "year" => Ok(DateRange::Year),
            other => Err(format!("Unknown range '{}', expected week|month|year", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortToken {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid sort '{0}', expected FIELD,asc|desc")]
pub struct SortTokenError(pub String);

static SORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_.]*)\s*,\s*((?i:asc|desc))\s*$")
        .expect("sort token pattern is valid")
});

impl FromStr for SortToken {
    type Err = SortTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = SORT_RE
            .captures(s)
            .ok_or_else(|| SortTokenError(s.to_string()))?;
        let direction = if caps[2].eq_ignore_ascii_case("asc") {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        };
        Ok(SortToken {
            field: caps[1].to_string(),
            direction,
        })
    }
}

impl fmt::Display for SortToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dir = match self.direction {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        };
        write!(f, "{},{}", self.field, dir)
    }
}

/// Validates and normalizes raw sort tokens, keeping their order.
pub fn parse_sort<S: AsRef<str>>(raw: &[S]) -> Result<Vec<String>, SortTokenError> {
    raw.iter()
        .map(|s| s.as_ref().parse::<SortToken>().map(|t| t.to_string()))
        .collect()
}
