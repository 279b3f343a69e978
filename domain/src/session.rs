/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Resolves the user behind an inbound request.
//!
//! A token may arrive in the session cookie (browser) or in an
//! `Authorization: Bearer` header (API clients). Both feed the same
//! verification and lookup path in [`resolve_session`].

use http::HeaderMap;
use http::header::{AUTHORIZATION, COOKIE};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use super::consts::BEARER_PREFIX;
use super::error::AuthError;
use super::token::TokenService;
use super::types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Cookie with the given name.
    Cookie(String),
    /// `Authorization: Bearer <token>`.
    Header,
}

impl CredentialSource {
    pub fn extract(&self, headers: &HeaderMap) -> Option<String> {
        match self {
            CredentialSource::Cookie(name) => cookie_value(headers, name),
            CredentialSource::Header => bearer_value(headers),
        }
    }
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"'))
        .map(|value| value.strip_prefix(BEARER_PREFIX).unwrap_or(value).trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn bearer_value(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = header.split_whitespace();

    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("Bearer") => {
            Some(token.to_string())
        }
        _ => None,
    }
}

/// First token found across `sources`, in order.
pub fn extract_token(headers: &HeaderMap, sources: &[CredentialSource]) -> Result<String, AuthError> {
    sources
        .iter()
        .find_map(|source| source.extract(headers))
        .ok_or(AuthError::MissingToken)
}

/// Verifies `token` and loads the active user it names.
pub async fn resolve_session<C: ConnectionTrait>(
    db: &C,
    tokens: &TokenService,
    token: &str,
) -> Result<MUser, AuthError> {
    let email = tokens.verify(token)?;

    let user = EUser::find()
        .filter(CUser::Email.eq(email))
        .one(db)
        .await?
        .ok_or(AuthError::UserNotFound)?;

    if !user.is_active {
        return Err(AuthError::UserInactive);
    }

    Ok(user)
}

/// Cookie first, then the bearer header.
pub fn request_sources(state: &ServerState) -> [CredentialSource; 2] {
    [
        CredentialSource::Cookie(state.cli.session_cookie_name.clone()),
        CredentialSource::Header,
    ]
}

pub async fn resolve_request(state: &ServerState, headers: &HeaderMap) -> Result<MUser, AuthError> {
    let token = extract_token(headers, &request_sources(state))?;
    resolve_session(&state.db, &state.tokens, &token).await
}
