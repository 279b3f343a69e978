/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use domain::guard::require_admin;
use domain::password::verify_password;
use domain::types::*;
use domain::users::{NewUser, create_user, get_user, set_active, set_password};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{WebError, WebResult};

#[derive(Serialize, Deserialize, Debug)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SetActiveRequest {
    pub active: bool,
}

pub async fn get(Extension(user): Extension<MUser>) -> WebResult<Json<BaseResponse<MUser>>> {
    Ok(Json(BaseResponse {
        error: false,
        message: user,
    }))
}

pub async fn post_password(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    body: Result<Json<ChangePasswordRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<String>>> {
    let Json(body) = body?;

    let current_ok = user
        .password_hash
        .as_deref()
        .is_some_and(|digest| verify_password(&body.current_password, digest));

    if !current_ok {
        return Err(WebError::BadRequest("Current password is incorrect".to_string()));
    }

    set_password(&state.db, user, &body.new_password).await?;

    Ok(Json(BaseResponse {
        error: false,
        message: "Password updated".to_string(),
    }))
}

pub async fn post_users(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    body: Result<Json<MakeUserRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<BaseResponse<MUser>>)> {
    let admin = require_admin(Ok(user))?;
    let Json(body) = body?;

    let created = create_user(
        &state.db,
        NewUser {
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            password: body.password,
            organization: admin.organization,
            is_admin: body.is_admin,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(BaseResponse {
            error: false,
            message: created,
        }),
    ))
}

pub async fn post_user_active(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(target): Path<Uuid>,
    body: Result<Json<SetActiveRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<MUser>>> {
    let admin = require_admin(Ok(user))?;
    let Json(body) = body?;

    if target == admin.id && !body.active {
        return Err(WebError::BadRequest(
            "Cannot deactivate your own account".to_string(),
        ));
    }

    let target = get_user(&state.db, target).await?;

    if target.organization != admin.organization {
        return Err(WebError::not_found("User"));
    }

    let updated = set_active(&state.db, target.id, body.active).await?;

    Ok(Json(BaseResponse {
        error: false,
        message: updated,
    }))
}
