// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::AppContext;
use crate::models::{LoginRequest, RegisterRequest, ResetPasswordRequest, UpdatePasswordRequest};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn login(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<()> {
    let req = LoginRequest {
        username: sub.get_one::<String>("username").unwrap().trim().to_string(),
        password: sub.get_one::<String>("password").unwrap().to_string(),
        two_factor_code: sub.get_one::<String>("code").unwrap().trim().to_string(),
    };
    let session = ctx.client.login(&req).context("Login failed")?;

    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &session.user)? {
        println!("{}", session.access_token);
        return Ok(());
    }
    let u = &session.user;
    println!(
        "{}",
        pretty_table(
            &["ID", "Username", "Email", "Roles", "2FA"],
            vec![vec![
                u.id.clone(),
                u.username.clone(),
                u.email.clone(),
                u.roles.join(","),
                (if u.two_factor_required { "yes" } else { "no" }).to_string(),
            ]],
        )
    );
    println!("Access token (export as FINPULSE_TOKEN, it is not saved):");
    println!("{}", session.access_token);
    Ok(())
}

pub fn register(ctx: &AppContext, sub: &clap::ArgMatches) -> Result<()> {
    let roles: Vec<String> = sub
        .get_many::<String>("role")
        .map(|r| r.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect())
        .filter(|r: &Vec<String>| !r.is_empty())
        .unwrap_or_else(|| vec!["user".to_string()]);
    let profile_image = sub
        .get_one::<String>("profile_image")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from);
    let req = RegisterRequest {
        username: sub.get_one::<String>("username").unwrap().trim().to_string(),
        email: sub.get_one::<String>("email").unwrap().trim().to_string(),
        password: sub.get_one::<String>("password").unwrap().to_string(),
        roles,
        profile_image,
    };
    let resp = ctx.client.register(&req).context("Registration failed")?;
    println!("{}", resp.message);
    if let Some(setup) = resp.two_factor_setup {
        println!("Two-factor secret (add it to your authenticator app): {}", setup.secret);
    }
    Ok(())
}

pub fn logout(ctx: &AppContext) -> Result<()> {
    ctx.require_token()?;
    ctx.client.logout().context("Logout failed")?;
    println!("Logged out. Unset FINPULSE_TOKEN to forget the token locally.");
    Ok(())
}

pub fn password(ctx: &AppContext, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("update", sub)) => {
            ctx.require_token()?;
            let user_id = sub.get_one::<String>("user_id").unwrap().trim();
            let req = UpdatePasswordRequest {
                current_password: sub.get_one::<String>("current").unwrap().to_string(),
                new_password: sub.get_one::<String>("new").unwrap().to_string(),
            };
            ctx.client
                .update_password(user_id, &req)
                .context("Failed to update password")?;
            println!("Password updated successfully");
        }
        Some(("check", sub)) => {
            let username = sub.get_one::<String>("username").unwrap().trim();
            ctx.client
                .check_user(username)
                .with_context(|| format!("Failed to find a user named '{}'", username))?;
            println!("User '{}' exists; continue with `password reset`", username);
        }
        Some(("reset", sub)) => {
            let req = ResetPasswordRequest {
                username: sub.get_one::<String>("username").unwrap().trim().to_string(),
                two_factor_code: *sub.get_one::<u32>("code").unwrap(),
                new_password: sub.get_one::<String>("new").unwrap().to_string(),
            };
            ctx.client
                .reset_password(&req)
                .context("Failed to reset password")?;
            println!("Password updated successfully");
        }
        _ => {}
    }
    Ok(())
}
