/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use domain::error::AuthError;
use domain::types::*;
use domain::users::authenticate;
use http::header::SET_COOKIE;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::authorization::{clear_session_cookie, session_cookie};
use crate::error::{WebError, WebResult};

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeLoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub expires_in: i64,
}

pub async fn post_login(
    state: State<Arc<ServerState>>,
    body: Result<Json<MakeLoginRequest>, JsonRejection>,
) -> WebResult<Response> {
    let Json(body) = body?;

    let user = match authenticate(&state.db, &body.email, &body.password).await {
        Ok(user) => user,
        Err(AuthError::UserInactive) => return Err(WebError::invalid_credentials()),
        Err(e) => return Err(e.into()),
    };

    let token = state.tokens.issue(&user.email)?;
    let expires_in = state.tokens.ttl().num_seconds();
    let cookie = session_cookie(&state.cli, &token, expires_in);

    let res = BaseResponse {
        error: false,
        message: LoginResponse { token, expires_in },
    };

    Ok(([(SET_COOKIE, cookie)], Json(res)).into_response())
}

pub async fn post_logout(state: State<Arc<ServerState>>) -> Response {
    let res = BaseResponse {
        error: false,
        message: "Logged out".to_string(),
    };

    ([(SET_COOKIE, clear_session_cookie(&state.cli))], Json(res)).into_response()
}
