// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::ApiClient;
use crate::config::Settings;
use anyhow::{Context, Result};

pub mod analytics;
pub mod auth;
pub mod categories;
pub mod exporter;
pub mod importer;
pub mod settings;
pub mod transactions;

/// What a command needs to reach the backend. Built once in `main` and
/// passed down; nothing here is global.
pub struct AppContext {
    pub settings: Settings,
    pub client: ApiClient,
}

impl AppContext {
    pub fn new(settings: Settings, token: Option<String>) -> Result<Self> {
        let client = ApiClient::new(&settings.base_url)
            .with_context(|| format!("Backend URL '{}'", settings.base_url))?
            .with_token(token);
        Ok(Self { settings, client })
    }

    pub fn require_token(&self) -> Result<()> {
        if !self.client.has_token() {
            anyhow::bail!("Not signed in: pass --token or set FINPULSE_TOKEN (see `finpulse login`)");
        }
        Ok(())
    }
}
