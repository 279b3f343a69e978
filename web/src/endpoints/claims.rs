/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use domain::claims::{
    ActivityEntry, NewClaim, claim_system, describe_activity, recent_activity, release_claim,
};
use domain::consts::MAX_ACTIVITY_LIMIT;
use domain::types::*;
use entity::system::SystemStatus;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::WebResult;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeClaimRequest {
    pub status: SystemStatus,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ActivityQuery {
    pub limit: Option<u64>,
}

pub async fn post_claim(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(system): Path<Uuid>,
    body: Result<Json<MakeClaimRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<BaseResponse<MSystemClaim>>)> {
    let Json(body) = body?;

    let claim = claim_system(
        &state.db,
        system,
        &user,
        NewClaim {
            status: body.status,
            notes: body.notes,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(BaseResponse {
            error: false,
            message: claim,
        }),
    ))
}

pub async fn post_release(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(claim): Path<Uuid>,
) -> WebResult<Json<BaseResponse<MSystemClaim>>> {
    let claim = release_claim(&state.db, claim, &user).await?;

    Ok(Json(BaseResponse {
        error: false,
        message: claim,
    }))
}

pub async fn get_activity(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    query: Result<Query<ActivityQuery>, QueryRejection>,
) -> WebResult<Json<BaseResponse<Vec<ActivityEntry>>>> {
    let Query(query) = query?;

    let Some(organization) = user.organization else {
        return Ok(Json(BaseResponse {
            error: false,
            message: Vec::new(),
        }));
    };

    let limit = query
        .limit
        .unwrap_or(state.cli.activity_limit)
        .min(MAX_ACTIVITY_LIMIT);

    let claims = recent_activity(&state.db, Some(organization), limit).await?;
    let activity = describe_activity(&state.db, claims).await?;

    Ok(Json(BaseResponse {
        error: false,
        message: activity,
    }))
}
