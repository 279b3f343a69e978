/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, SqlErr};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::{AuthError, RecordError};
use super::input::{normalize_email, validate_email, validate_password, validate_person_name};
use super::password::{hash_password, verify_dummy, verify_password};
use super::types::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: Option<String>,
    pub organization: Option<Uuid>,
    #[serde(default)]
    pub is_admin: bool,
}

pub async fn find_user_by_email<C: ConnectionTrait>(
    db: &C,
    email: &str,
) -> Result<Option<MUser>, sea_orm::DbErr> {
    EUser::find()
        .filter(CUser::Email.eq(normalize_email(email)))
        .one(db)
        .await
}

pub async fn get_user<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<MUser, RecordError> {
    EUser::find_by_id(id)
        .one(db)
        .await?
        .ok_or(RecordError::NotFound("User"))
}

pub async fn create_user<C: ConnectionTrait>(db: &C, new: NewUser) -> Result<MUser, RecordError> {
    let email = normalize_email(&new.email);

    validate_email(&email).map_err(|e| RecordError::invalid("email", e))?;
    validate_person_name(&new.first_name).map_err(|e| RecordError::invalid("first_name", e))?;
    validate_person_name(&new.last_name).map_err(|e| RecordError::invalid("last_name", e))?;

    if let Some(password) = &new.password {
        validate_password(password).map_err(|e| RecordError::invalid("password", e))?;
    }

    if find_user_by_email(db, &email).await?.is_some() {
        return Err(RecordError::AlreadyExists("User"));
    }

    let auser = AUser {
        id: Set(Uuid::new_v4()),
        first_name: Set(new.first_name.trim().to_string()),
        last_name: Set(new.last_name.trim().to_string()),
        email: Set(email),
        password_hash: Set(new.password.as_deref().map(hash_password)),
        organization: Set(new.organization),
        is_active: Set(true),
        is_admin: Set(new.is_admin),
        last_login_at: Set(None),
        created_at: Set(Utc::now()),
        updated_at: Set(None),
    };

    let user = auser.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => RecordError::AlreadyExists("User"),
        _ => RecordError::StorageUnavailable(e),
    })?;

    tracing::info!("Created user {} ({})", user.email, user.id);

    Ok(user)
}

/// Checks a login attempt. Unknown e-mails, accounts without a password and
/// wrong passwords are indistinguishable to the caller.
pub async fn authenticate<C: ConnectionTrait>(
    db: &C,
    email: &str,
    password: &str,
) -> Result<MUser, AuthError> {
    let Some(user) = find_user_by_email(db, email).await? else {
        verify_dummy(password);
        return Err(AuthError::InvalidCredentials);
    };

    let Some(digest) = user.password_hash.as_deref() else {
        verify_dummy(password);
        return Err(AuthError::InvalidCredentials);
    };

    if !verify_password(password, digest) {
        tracing::warn!("Failed login for {}", user.email);
        return Err(AuthError::InvalidCredentials);
    }

    if !user.is_active {
        return Err(AuthError::UserInactive);
    }

    let mut auser: AUser = user.into();
    auser.last_login_at = Set(Some(Utc::now()));
    let user = auser.update(db).await?;

    tracing::info!("User {} logged in", user.email);

    Ok(user)
}

pub async fn set_password<C: ConnectionTrait>(
    db: &C,
    user: MUser,
    password: &str,
) -> Result<MUser, RecordError> {
    validate_password(password).map_err(|e| RecordError::invalid("password", e))?;

    let mut auser: AUser = user.into();
    auser.password_hash = Set(Some(hash_password(password)));
    auser.updated_at = Set(Some(Utc::now()));

    Ok(auser.update(db).await?)
}

pub async fn set_active<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
    active: bool,
) -> Result<MUser, RecordError> {
    let user = get_user(db, user_id).await?;

    if user.is_active == active {
        return Ok(user);
    }

    let mut auser: AUser = user.into();
    auser.is_active = Set(active);
    auser.updated_at = Set(Some(Utc::now()));
    let user = auser.update(db).await?;

    tracing::info!("User {} active = {}", user.email, user.is_active);

    Ok(user)
}
