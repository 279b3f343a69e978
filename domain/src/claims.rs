/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Claim lifecycle of a system.
//!
//! A system is either available (no open claim, status `FREE`) or claimed
//! (exactly one claim with `released_at IS NULL`, operational status). Both
//! transitions write the claim row and the system status in one transaction.
//! The partial unique index on `system_claim(system) WHERE released_at IS NULL`
//! backs the single-open-claim rule at the storage layer.

use chrono::{DateTime, Utc};
use entity::system::SystemStatus;
use sea_orm::ActiveValue::Set;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, SqlErr, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

use super::error::ClaimError;
use super::types::*;

const UNKNOWN_HOLDER: &str = "another user";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClaim {
    pub status: SystemStatus,
    pub notes: Option<String>,
}

/// A claim together with the names needed to render it in a feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    #[serde(flatten)]
    pub claim: MSystemClaim,
    pub system_name: String,
    pub claimed_by_name: String,
}

pub async fn claim_system(
    db: &DatabaseConnection,
    system_id: Uuid,
    user: &MUser,
    request: NewClaim,
) -> Result<MSystemClaim, ClaimError> {
    if request.status == SystemStatus::Free {
        return Err(ClaimError::InvalidStatus(request.status));
    }

    let txn = db.begin().await?;

    let system = ESystem::find_by_id(system_id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .filter(|system| Some(system.organization) == user.organization)
        .ok_or(ClaimError::SystemNotFound)?;

    if let Some(holder) = current_holder(&txn, system.id).await? {
        let holder = holder.full_name();
        txn.rollback().await?;

        tracing::warn!(
            "User {} tried to claim {} which is held by {}",
            user.id,
            system.name,
            holder
        );

        return Err(ClaimError::AlreadyClaimed {
            system: system.name,
            holder,
        });
    }

    let now = Utc::now();

    let claim = match insert_open_claim(&txn, &system, user, request.notes, now).await {
        Err(ClaimError::AlreadyClaimed { system: name, .. }) => {
            txn.rollback().await?;

            let holder = current_holder(db, system.id)
                .await?
                .map(|holder| holder.full_name())
                .unwrap_or_else(|| UNKNOWN_HOLDER.to_string());

            tracing::warn!("Concurrent claim on {} lost against {}", name, holder);

            return Err(ClaimError::AlreadyClaimed {
                system: name,
                holder,
            });
        }
        result => result?,
    };

    let system_name = system.name.clone();
    let mut asystem: ASystem = system.into();
    asystem.status = Set(request.status);
    asystem.updated_at = Set(Some(now));
    asystem.update(&txn).await?;

    txn.commit().await?;

    tracing::info!(
        "System {} claimed by {} as {}",
        system_name,
        user.email,
        request.status
    );

    Ok(claim)
}

/// Closes an open claim and returns its system to `FREE`. Only the holder or
/// an admin may release.
pub async fn release_claim(
    db: &DatabaseConnection,
    claim_id: Uuid,
    actor: &MUser,
) -> Result<MSystemClaim, ClaimError> {
    let txn = db.begin().await?;

    let claim = ESystemClaim::find_by_id(claim_id)
        .lock_exclusive()
        .one(&txn)
        .await?
        .filter(|claim| Some(claim.organization) == actor.organization)
        .ok_or(ClaimError::ClaimNotFound)?;

    if !claim.is_open() {
        return Err(ClaimError::NotClaimed);
    }

    if claim.claimed_by != actor.id && !actor.is_admin {
        tracing::warn!(
            "User {} tried to release claim {} held by {}",
            actor.id,
            claim.id,
            claim.claimed_by
        );
        return Err(ClaimError::NotHolder);
    }

    let now = Utc::now();

    let released = ESystemClaim::update_many()
        .col_expr(CSystemClaim::ReleasedAt, Expr::value(now))
        .filter(CSystemClaim::Id.eq(claim.id))
        .filter(CSystemClaim::ReleasedAt.is_null())
        .exec(&txn)
        .await?;

    if released.rows_affected == 0 {
        return Err(ClaimError::NotClaimed);
    }

    let system = ESystem::find_by_id(claim.system)
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or(ClaimError::SystemNotFound)?;

    let system_name = system.name.clone();
    let mut asystem: ASystem = system.into();
    asystem.status = Set(SystemStatus::Free);
    asystem.updated_at = Set(Some(now));
    asystem.update(&txn).await?;

    txn.commit().await?;

    tracing::info!("System {} released by {}", system_name, actor.email);

    Ok(MSystemClaim {
        released_at: Some(now),
        ..claim
    })
}

/// Writes a new open claim for `system`. The open-claim index rejects a
/// second one, which comes back as `AlreadyClaimed` without a holder name.
pub async fn insert_open_claim<C: ConnectionTrait>(
    db: &C,
    system: &MSystem,
    user: &MUser,
    notes: Option<String>,
    claimed_at: DateTime<Utc>,
) -> Result<MSystemClaim, ClaimError> {
    let aclaim = ASystemClaim {
        id: Set(Uuid::new_v4()),
        organization: Set(system.organization),
        system: Set(system.id),
        claimed_by: Set(user.id),
        notes: Set(notes.filter(|notes| !notes.trim().is_empty())),
        claimed_at: Set(claimed_at),
        released_at: Set(None),
    };

    aclaim.insert(db).await.map_err(|err| match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ClaimError::AlreadyClaimed {
            system: system.name.clone(),
            holder: UNKNOWN_HOLDER.to_string(),
        },
        _ => err.into(),
    })
}

pub async fn open_claim<C: ConnectionTrait>(
    db: &C,
    system_id: Uuid,
) -> Result<Option<MSystemClaim>, ClaimError> {
    Ok(ESystemClaim::find()
        .filter(CSystemClaim::System.eq(system_id))
        .filter(CSystemClaim::ReleasedAt.is_null())
        .one(db)
        .await?)
}

/// The open claim on `system_id` together with the user holding it.
pub async fn current_claim<C: ConnectionTrait>(
    db: &C,
    system_id: Uuid,
) -> Result<Option<(MSystemClaim, MUser)>, ClaimError> {
    let Some(claim) = open_claim(db, system_id).await? else {
        return Ok(None);
    };

    let holder = EUser::find_by_id(claim.claimed_by).one(db).await?;

    Ok(holder.map(|holder| (claim, holder)))
}

/// The user holding the open claim on `system_id`, if any.
pub async fn current_holder<C: ConnectionTrait>(
    db: &C,
    system_id: Uuid,
) -> Result<Option<MUser>, ClaimError> {
    Ok(current_claim(db, system_id).await?.map(|(_, holder)| holder))
}

/// Latest claims, newest first, at most `limit` rows. Every call queries
/// storage again.
pub async fn recent_activity<C: ConnectionTrait>(
    db: &C,
    organization: Option<Uuid>,
    limit: u64,
) -> Result<Vec<MSystemClaim>, ClaimError> {
    if limit == 0 {
        return Ok(Vec::new());
    }

    let mut query = ESystemClaim::find();

    if let Some(organization) = organization {
        query = query.filter(CSystemClaim::Organization.eq(organization));
    }

    Ok(query
        .order_by_desc(CSystemClaim::ClaimedAt)
        .limit(limit)
        .all(db)
        .await?)
}

/// Attaches system and user names to a batch of claims, preserving order.
pub async fn describe_activity<C: ConnectionTrait>(
    db: &C,
    claims: Vec<MSystemClaim>,
) -> Result<Vec<ActivityEntry>, ClaimError> {
    if claims.is_empty() {
        return Ok(Vec::new());
    }

    let system_ids: HashSet<Uuid> = claims.iter().map(|claim| claim.system).collect();
    let user_ids: HashSet<Uuid> = claims.iter().map(|claim| claim.claimed_by).collect();

    let systems: HashMap<Uuid, String> = ESystem::find()
        .filter(CSystem::Id.is_in(system_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|system| (system.id, system.name))
        .collect();

    let users: HashMap<Uuid, String> = EUser::find()
        .filter(CUser::Id.is_in(user_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|user| (user.id, user.full_name()))
        .collect();

    Ok(claims
        .into_iter()
        .map(|claim| ActivityEntry {
            system_name: systems.get(&claim.system).cloned().unwrap_or_default(),
            claimed_by_name: users.get(&claim.claimed_by).cloned().unwrap_or_default(),
            claim,
        })
        .collect())
}
