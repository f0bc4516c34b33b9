// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::filters::{DEFAULT_PAGE_SIZE, DEFAULT_SORT};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Finpulse", "finpulse"));

pub const BASE_URL_ENV: &str = "FINPULSE_BASE_URL";
pub const TOKEN_ENV: &str = "FINPULSE_TOKEN";

/// Client settings. The access token is deliberately not one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
    pub page_size: u32,
    pub analytics_page_size: u32,
    pub default_sort: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            analytics_page_size: 100,
            default_sort: vec![DEFAULT_SORT.to_string()],
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("config.json"))
}

/// Reads settings from `path`; a missing file yields the defaults.
pub fn load_from(path: &Path) -> Result<Settings> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Settings::default());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Read config at {}", path.display()));
        }
    };
    serde_json::from_str(&content).with_context(|| format!("Parse config at {}", path.display()))
}

pub fn save_to(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config dir")?;
    }
    fs::write(path, serde_json::to_string_pretty(settings)?)
        .with_context(|| format!("Write config at {}", path.display()))?;
    Ok(())
}

/// Applies `FINPULSE_BASE_URL` on top of file settings.
pub fn apply_env(mut settings: Settings) -> Settings {
    if let Ok(url) = std::env::var(BASE_URL_ENV) {
        if !url.trim().is_empty() {
            settings.base_url = url.trim().to_string();
        }
    }
    settings
}

pub fn load() -> Result<Settings> {
    let path = config_path()?;
    let settings = load_from(&path)?;
    tracing::debug!(path = %path.display(), "loaded settings");
    Ok(apply_env(settings))
}
