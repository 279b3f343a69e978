/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use entity::system::SystemStatus;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no session token supplied")]
    MissingToken,

    #[error("session token is invalid or expired")]
    InvalidToken,

    #[error("session user does not exist")]
    UserNotFound,

    #[error("user account is inactive")]
    UserInactive,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("insufficient permissions")]
    Forbidden,

    #[error("failed to sign session token: {0}")]
    Signing(String),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] DbErr),
}

impl AuthError {
    /// True for every failure of the session resolution chain. Callers only
    /// ever see these as a single "not authenticated" outcome.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(
            self,
            AuthError::MissingToken
                | AuthError::InvalidToken
                | AuthError::UserNotFound
                | AuthError::UserInactive
        )
    }
}

#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("system not found")]
    SystemNotFound,

    #[error("claim not found")]
    ClaimNotFound,

    #[error("system {system} is already claimed by {holder}")]
    AlreadyClaimed { system: String, holder: String },

    #[error("claim is not active")]
    NotClaimed,

    #[error("only the claim holder or an admin may release this claim")]
    NotHolder,

    #[error("{0} is not a valid status for a claimed system")]
    InvalidStatus(SystemStatus),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] DbErr),
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid {field}: {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },

    #[error("{0} already exists")]
    AlreadyExists(&'static str),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] DbErr),
}

impl RecordError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        RecordError::Invalid {
            field,
            message: message.into(),
        }
    }
}
