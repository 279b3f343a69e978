/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::Utc;
use entity::system::SystemStatus;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, SqlErr,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use super::error::RecordError;
use super::input::validate_system_name;
use super::types::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSystem {
    pub name: String,
    pub status: Option<SystemStatus>,
    pub department: Option<Uuid>,
    pub notes: Option<String>,
}

/// A system and the user currently holding it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemOverview {
    #[serde(flatten)]
    pub system: MSystem,
    pub holder: Option<ListItem>,
    pub claim: Option<Uuid>,
}

pub async fn create_system<C: ConnectionTrait>(
    db: &C,
    organization: Uuid,
    new: NewSystem,
) -> Result<MSystem, RecordError> {
    validate_system_name(&new.name).map_err(|e| RecordError::invalid("name", e))?;

    let existing = ESystem::find()
        .filter(CSystem::Name.eq(new.name.as_str()))
        .one(db)
        .await?;

    if existing.is_some() {
        return Err(RecordError::AlreadyExists("System"));
    }

    if let Some(department) = new.department {
        EDepartment::find_by_id(department)
            .filter(CDepartment::Organization.eq(organization))
            .one(db)
            .await?
            .ok_or(RecordError::NotFound("Department"))?;
    }

    let asystem = ASystem {
        id: Set(Uuid::new_v4()),
        name: Set(new.name),
        status: Set(new.status.unwrap_or(SystemStatus::Free)),
        organization: Set(organization),
        department: Set(new.department),
        notes: Set(new.notes),
        created_at: Set(Utc::now()),
        updated_at: Set(None),
    };

    let system = asystem.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => RecordError::AlreadyExists("System"),
        _ => RecordError::StorageUnavailable(e),
    })?;

    tracing::info!("Created system {} ({})", system.name, system.id);

    Ok(system)
}

pub async fn get_system<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<MSystem, RecordError> {
    ESystem::find_by_id(id)
        .one(db)
        .await?
        .ok_or(RecordError::NotFound("System"))
}

pub async fn list_systems<C: ConnectionTrait>(
    db: &C,
    organization: Uuid,
) -> Result<Vec<MSystem>, RecordError> {
    Ok(ESystem::find()
        .filter(CSystem::Organization.eq(organization))
        .order_by_asc(CSystem::Name)
        .all(db)
        .await?)
}

/// Systems of `organization` joined with their open claim and its holder.
pub async fn list_system_overviews<C: ConnectionTrait>(
    db: &C,
    organization: Uuid,
) -> Result<Vec<SystemOverview>, RecordError> {
    let systems = list_systems(db, organization).await?;

    let open_claims = ESystemClaim::find()
        .filter(CSystemClaim::Organization.eq(organization))
        .filter(CSystemClaim::ReleasedAt.is_null())
        .all(db)
        .await?;

    let holders: HashMap<Uuid, MUser> = EUser::find()
        .filter(CUser::Id.is_in(open_claims.iter().map(|claim| claim.claimed_by)))
        .all(db)
        .await?
        .into_iter()
        .map(|user| (user.id, user))
        .collect();

    let open_claims: HashMap<Uuid, MSystemClaim> = open_claims
        .into_iter()
        .map(|claim| (claim.system, claim))
        .collect();

    Ok(systems
        .into_iter()
        .map(|system| {
            let claim = open_claims.get(&system.id);
            let holder = claim
                .and_then(|claim| holders.get(&claim.claimed_by))
                .map(|user| ListItem {
                    id: user.id,
                    name: user.full_name(),
                });

            SystemOverview {
                claim: claim.map(|claim| claim.id),
                holder,
                system,
            }
        })
        .collect())
}
