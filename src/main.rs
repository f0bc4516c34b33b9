// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use finpulse::commands::{self, AppContext};
use finpulse::{cli, config, logging};

fn main() -> Result<()> {
    logging::init_tracing();
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    // Local-only commands never touch the backend.
    match matches.subcommand() {
        Some(("config", sub)) => return commands::settings::handle(sub),
        Some(("categories", _)) => return commands::categories::handle(),
        Some(("import", sub)) => {
            if let Some(("preview", p)) = sub.subcommand() {
                return commands::importer::handle_preview(p);
            }
        }
        _ => {}
    }

    let mut settings = config::load()?;
    if let Some(url) = matches.get_one::<String>("base_url") {
        settings.base_url = url.trim().to_string();
    }
    let token = matches.get_one::<String>("token").cloned();
    let ctx = AppContext::new(settings, token)?;

    match matches.subcommand() {
        Some(("login", sub)) => commands::auth::login(&ctx, sub)?,
        Some(("register", sub)) => commands::auth::register(&ctx, sub)?,
        Some(("logout", _)) => commands::auth::logout(&ctx)?,
        Some(("password", sub)) => commands::auth::password(&ctx, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&ctx, sub)?,
        Some(("analytics", sub)) => commands::analytics::handle(&ctx, sub)?,
        Some(("import", sub)) => {
            if let Some(("upload", up)) = sub.subcommand() {
                commands::importer::handle_upload(&ctx, up)?;
            }
        }
        Some(("export", sub)) => commands::exporter::handle(&ctx, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
