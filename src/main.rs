/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use clap::Parser;
use domain::database::close;
use domain::types::Cli;
use domain::{init_state, init_tracing};
use std::sync::Arc;

#[tokio::main]
pub async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let state = init_state(cli).await?;

    web::serve_web(Arc::clone(&state))
        .await
        .context("HTTP server stopped with an error")?;

    close(&state.db).await?;
    tracing::info!("Database connections closed");

    Ok(())
}
