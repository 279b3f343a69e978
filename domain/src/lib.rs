/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod claims;
pub mod consts;
pub mod database;
pub mod error;
pub mod guard;
pub mod input;
pub mod password;
pub mod session;
pub mod systems;
pub mod token;
pub mod types;
pub mod users;

use anyhow::{Context, Result};
use database::connect_db;
use input::load_secret;
use std::sync::Arc;
use token::TokenService;
use tracing_subscriber::EnvFilter;
use types::*;

pub fn init_tracing(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_new(&cli.log_level)
        .with_context(|| format!("Invalid log level: {}", cli.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = if cli.log_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}

pub async fn init_state(cli: Cli) -> Result<Arc<ServerState>> {
    tracing::info!("Starting SystemDesk on {}:{}", cli.ip, cli.port);

    let secret = load_secret(&cli.jwt_secret_file).context("Failed to load JWT secret")?;
    let tokens = TokenService::new(
        secret.as_bytes(),
        chrono::Duration::minutes(cli.token_ttl_minutes),
    );

    password::prepare_dummy_hash();

    let db = connect_db(&cli).await?;

    Ok(Arc::new(ServerState { db, cli, tokens }))
}
