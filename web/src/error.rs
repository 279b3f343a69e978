/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::error::{AuthError, ClaimError, RecordError};
use domain::types::BaseResponse;
use sea_orm::DbErr;
use std::fmt;

#[derive(Debug)]
pub enum WebError {
    BadRequest(String),
    Unauthorized(String),
    Forbidden(String),
    NotFound(String),
    Conflict(String),
    InternalServerError(String),
    Database(DbErr),
    JsonParsing(JsonRejection),
    QueryParsing(QueryRejection),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            WebError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            WebError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            WebError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            WebError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            WebError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
            WebError::Database(err) => write!(f, "Database error: {}", err),
            WebError::JsonParsing(err) => write!(f, "JSON parsing error: {}", err),
            WebError::QueryParsing(err) => write!(f, "Query parsing error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Database(err) => Some(err),
            WebError::JsonParsing(err) => Some(err),
            WebError::QueryParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbErr> for WebError {
    fn from(err: DbErr) -> Self {
        WebError::Database(err)
    }
}

impl From<JsonRejection> for WebError {
    fn from(err: JsonRejection) -> Self {
        WebError::JsonParsing(err)
    }
}

impl From<QueryRejection> for WebError {
    fn from(err: QueryRejection) -> Self {
        WebError::QueryParsing(err)
    }
}

impl From<AuthError> for WebError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::UserNotFound
            | AuthError::UserInactive => {
                tracing::debug!("Rejected request: {}", err);
                WebError::not_authenticated()
            }
            AuthError::InvalidCredentials => WebError::invalid_credentials(),
            AuthError::Forbidden => WebError::Forbidden("Insufficient permissions".to_string()),
            AuthError::Signing(msg) => {
                tracing::error!("Failed to sign token: {}", msg);
                WebError::failed_to_generate_token()
            }
            AuthError::StorageUnavailable(err) => WebError::Database(err),
        }
    }
}

impl From<ClaimError> for WebError {
    fn from(err: ClaimError) -> Self {
        match err {
            ClaimError::SystemNotFound => WebError::not_found("System"),
            ClaimError::ClaimNotFound => WebError::not_found("Claim"),
            ClaimError::AlreadyClaimed { .. } | ClaimError::NotClaimed => {
                WebError::Conflict(err.to_string())
            }
            ClaimError::NotHolder => WebError::Forbidden(err.to_string()),
            ClaimError::InvalidStatus(_) => WebError::BadRequest(err.to_string()),
            ClaimError::StorageUnavailable(err) => WebError::Database(err),
        }
    }
}

impl From<RecordError> for WebError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::Invalid { .. } => WebError::BadRequest(err.to_string()),
            RecordError::AlreadyExists(resource) => WebError::already_exists(resource),
            RecordError::NotFound(resource) => WebError::not_found(resource),
            RecordError::StorageUnavailable(err) => WebError::Database(err),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            WebError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            WebError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            WebError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            WebError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            WebError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            WebError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            WebError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                )
            }
            WebError::JsonParsing(err) => {
                (StatusCode::BAD_REQUEST, format!("Invalid JSON: {}", err.body_text()))
            }
            WebError::QueryParsing(err) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid query: {}", err.body_text()),
            ),
        };

        let body = Json(BaseResponse {
            error: true,
            message: error_message,
        });

        (status, body).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;

impl WebError {
    pub fn already_exists(resource: &str) -> Self {
        WebError::Conflict(format!("{} already exists", resource))
    }

    pub fn not_found(resource: &str) -> Self {
        WebError::NotFound(format!("{} not found", resource))
    }

    pub fn not_authenticated() -> Self {
        WebError::Unauthorized("Not authenticated".to_string())
    }

    pub fn invalid_credentials() -> Self {
        WebError::Unauthorized("Invalid credentials".to_string())
    }

    pub fn failed_to_generate_token() -> Self {
        WebError::InternalServerError("Failed to generate token".to_string())
    }

    pub fn no_organization() -> Self {
        WebError::BadRequest("User is not a member of any organization".to_string())
    }
}
