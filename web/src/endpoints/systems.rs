/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use domain::claims::current_claim;
use domain::guard::require_admin;
use domain::systems::{NewSystem, SystemOverview, create_system, get_system, list_system_overviews};
use domain::types::*;
use entity::system::SystemStatus;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{WebError, WebResult};

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeSystemRequest {
    pub name: String,
    pub status: Option<SystemStatus>,
    pub department: Option<Uuid>,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct HolderResponse {
    pub system: Uuid,
    pub status: SystemStatus,
    pub claim: Option<Uuid>,
    pub holder: Option<ListItem>,
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
) -> WebResult<Json<BaseResponse<Vec<SystemOverview>>>> {
    let systems = match user.organization {
        Some(organization) => list_system_overviews(&state.db, organization).await?,
        None => Vec::new(),
    };

    Ok(Json(BaseResponse {
        error: false,
        message: systems,
    }))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    body: Result<Json<MakeSystemRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<BaseResponse<MSystem>>)> {
    let admin = require_admin(Ok(user))?;
    let Json(body) = body?;

    let organization = admin.organization.ok_or_else(WebError::no_organization)?;

    let system = create_system(
        &state.db,
        organization,
        NewSystem {
            name: body.name,
            status: body.status,
            department: body.department,
            notes: body.notes,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(BaseResponse {
            error: false,
            message: system,
        }),
    ))
}

pub async fn get_holder(
    state: State<Arc<ServerState>>,
    Extension(user): Extension<MUser>,
    Path(system): Path<Uuid>,
) -> WebResult<Json<BaseResponse<HolderResponse>>> {
    let system = get_system(&state.db, system).await?;

    if Some(system.organization) != user.organization {
        return Err(WebError::not_found("System"));
    }

    let current = current_claim(&state.db, system.id).await?;

    Ok(Json(BaseResponse {
        error: false,
        message: HolderResponse {
            system: system.id,
            status: system.status,
            claim: current.as_ref().map(|(claim, _)| claim.id),
            holder: current.map(|(_, holder)| ListItem {
                id: holder.id,
                name: holder.full_name(),
            }),
        },
    }))
}
