// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::ApiClient;
use crate::config::{config_path, load_from, save_to};
use crate::utils::pretty_table;
use anyhow::{Context, Result};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let path = config_path()?;
    match m.subcommand() {
        Some(("show", _)) => {
            let s = load_from(&path)?;
            let data = vec![
                vec!["base_url".into(), s.base_url],
                vec!["page_size".into(), s.page_size.to_string()],
                vec!["analytics_page_size".into(), s.analytics_page_size.to_string()],
                vec!["default_sort".into(), s.default_sort.join(" ")],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], data));
            println!("Config file: {}", path.display());
        }
        Some(("set-url", sub)) => {
            let url = sub.get_one::<String>("url").unwrap().trim().to_string();
            ApiClient::new(&url).with_context(|| format!("Check URL '{}'", url))?;
            let mut s = load_from(&path)?;
            s.base_url = url;
            save_to(&s, &path)?;
            println!("Backend URL set to {}", s.base_url);
        }
        Some(("set-page-size", sub)) => {
            let size = *sub.get_one::<u32>("size").unwrap();
            let mut s = load_from(&path)?;
            s.page_size = size;
            save_to(&s, &path)?;
            println!("Page size set to {}", size);
        }
        _ => {}
    }
    Ok(())
}
