/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use domain::database::ensure_default_organization;
use domain::systems::{NewSystem, create_system};
use domain::types::*;
use domain::users::{NewUser, create_user};
use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use uuid::Uuid;

/// Fresh in-memory SQLite database with every migration applied. A single
/// pooled connection keeps the database alive for the whole test.
pub async fn setup_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub async fn seed_organization(db: &DatabaseConnection) -> MOrganization {
    ensure_default_organization(db).await.unwrap()
}

pub async fn seed_user(
    db: &DatabaseConnection,
    organization: Uuid,
    first_name: &str,
    is_admin: bool,
) -> MUser {
    create_user(
        db,
        NewUser {
            first_name: first_name.to_string(),
            last_name: "Tester".to_string(),
            email: format!("{}@example.com", first_name.to_lowercase()),
            password: None,
            organization: Some(organization),
            is_admin,
        },
    )
    .await
    .unwrap()
}

pub async fn seed_system(db: &DatabaseConnection, organization: Uuid, name: &str) -> MSystem {
    create_system(
        db,
        organization,
        NewSystem {
            name: name.to_string(),
            status: None,
            department: None,
            notes: None,
        },
    )
    .await
    .unwrap()
}
