/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use chrono::Utc;
use migration::Migrator;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection, EntityTrait, QueryOrder,
};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::log::LevelFilter;
use uuid::Uuid;

use super::consts::DEFAULT_ORGANIZATION_NAME;
use super::error::RecordError;
use super::input::load_secret;
use super::types::*;
use super::users::{NewUser, create_user, find_user_by_email};

pub async fn connect_db(cli: &Cli) -> Result<DatabaseConnection> {
    let db_url = if let Some(file) = &cli.database_url_file {
        load_secret(file).context("Failed to read database url from file")?
    } else if let Some(url) = &cli.database_url {
        url.clone()
    } else {
        anyhow::bail!("No database url provided")
    };

    let mut opt = ConnectOptions::new(db_url);

    if cli.log_level == "debug" {
        opt.sqlx_logging(true).sqlx_logging_level(LevelFilter::Debug);
    } else {
        opt.sqlx_logging(false);
    }

    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(300));

    let db = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&db, None)
        .await
        .context("Failed to run database migrations")?;
    update_db(&db, cli).await.context("Failed to update database")?;
    Ok(db)
}

/// Startup bootstrap. Safe to run on every start.
pub async fn update_db(db: &DatabaseConnection, cli: &Cli) -> Result<()> {
    let organization = ensure_default_organization(db).await?;

    match (&cli.admin_email, &cli.admin_password_file) {
        (Some(email), Some(password_file)) => {
            if find_user_by_email(db, email).await?.is_none() {
                let password =
                    load_secret(password_file).context("Failed to read admin password file")?;

                let admin = create_user(
                    db,
                    NewUser {
                        first_name: cli.admin_first_name.clone(),
                        last_name: cli.admin_last_name.clone(),
                        email: email.clone(),
                        password: Some(password),
                        organization: Some(organization.id),
                        is_admin: true,
                    },
                )
                .await
                .context("Failed to create admin user")?;

                tracing::info!("Created admin user {}", admin.email);
            }
        }
        (Some(email), None) => {
            tracing::warn!(
                "Admin e-mail {} is set without an admin password file, skipping admin bootstrap",
                email
            );
        }
        _ => {}
    }

    Ok(())
}

/// First organization by creation time, creating the default one when the
/// table is empty.
pub async fn ensure_default_organization<C: ConnectionTrait>(
    db: &C,
) -> Result<MOrganization, RecordError> {
    let existing = EOrganization::find()
        .order_by_asc(COrganization::CreatedAt)
        .one(db)
        .await?;

    if let Some(organization) = existing {
        return Ok(organization);
    }

    let aorganization = AOrganization {
        id: Set(Uuid::new_v4()),
        name: Set(DEFAULT_ORGANIZATION_NAME.to_string()),
        created_at: Set(Utc::now()),
    };

    let organization = aorganization.insert(db).await?;
    tracing::info!("Created organization {}", organization.name);

    Ok(organization)
}

/// Closes the pool behind a shared connection. Later queries fail.
pub async fn close(db: &DatabaseConnection) -> Result<()> {
    db.close_by_ref().await.context("Failed to close database")
}
