/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Session resolution against a mocked database.

use chrono::{Duration, Utc};
use clap::Parser;
use domain::error::AuthError;
use domain::guard::{require_active, require_admin};
use domain::session::*;
use domain::token::TokenService;
use domain::types::*;
use http::header::{AUTHORIZATION, COOKIE};
use http::{HeaderMap, HeaderValue};
use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
use uuid::Uuid;

fn tokens() -> TokenService {
    TokenService::new(b"session-test-secret", Duration::minutes(30))
}

fn user(email: &str, is_active: bool, is_admin: bool) -> MUser {
    MUser {
        id: Uuid::new_v4(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: email.to_string(),
        password_hash: None,
        organization: Some(Uuid::new_v4()),
        is_active,
        is_admin,
        last_login_at: None,
        created_at: Utc::now(),
        updated_at: None,
    }
}

fn cli() -> Cli {
    Cli::parse_from([
        "systemdesk-server",
        "--jwt-secret-file",
        "/nonexistent/jwt",
        "--session-cookie-name",
        "sd_session",
    ])
}

#[tokio::test]
async fn test_resolve_session_valid() {
    let tokens = tokens();
    let expected = user("alice@example.com", true, false);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![expected.clone()]])
        .into_connection();

    let token = tokens.issue("alice@example.com").unwrap();
    let resolved = resolve_session(&db, &tokens, &token).await.unwrap();

    assert_eq!(resolved, expected);
}

#[tokio::test]
async fn test_resolve_session_unknown_user() {
    let tokens = tokens();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MUser>::new()])
        .into_connection();

    let token = tokens.issue("ghost@example.com").unwrap();
    let err = resolve_session(&db, &tokens, &token).await.unwrap_err();

    assert!(matches!(err, AuthError::UserNotFound));
    assert!(err.is_unauthenticated());
}

#[tokio::test]
async fn test_resolve_session_inactive_user() {
    let tokens = tokens();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user("bob@example.com", false, true)]])
        .into_connection();

    let token = tokens.issue("bob@example.com").unwrap();
    let err = resolve_session(&db, &tokens, &token).await.unwrap_err();

    assert!(matches!(err, AuthError::UserInactive));
    assert!(err.is_unauthenticated());
}

#[tokio::test]
async fn test_resolve_session_invalid_token_skips_lookup() {
    let tokens = tokens();
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let foreign = TokenService::new(b"other-secret", Duration::minutes(30))
        .issue("alice@example.com")
        .unwrap();

    let err = resolve_session(&db, &tokens, &foreign).await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidToken));
    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn test_resolve_session_expired_token() {
    let tokens = tokens();
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let expired = tokens
        .issue_with_ttl("alice@example.com", Duration::minutes(-5))
        .unwrap();

    let err = resolve_session(&db, &tokens, &expired).await.unwrap_err();
    assert!(matches!(err, AuthError::InvalidToken));
}

#[tokio::test]
async fn test_resolve_session_storage_failure() {
    let tokens = tokens();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("connection reset".to_string())])
        .into_connection();

    let token = tokens.issue("alice@example.com").unwrap();
    let err = resolve_session(&db, &tokens, &token).await.unwrap_err();

    assert!(matches!(err, AuthError::StorageUnavailable(_)));
    assert!(!err.is_unauthenticated());
}

#[tokio::test]
async fn test_resolve_request_from_cookie_and_header() {
    let tokens = tokens();
    let alice = user("alice@example.com", true, true);
    let token = tokens.issue("alice@example.com").unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![alice.clone()], vec![alice.clone()]])
        .into_connection();
    let state = ServerState {
        db,
        cli: cli(),
        tokens,
    };

    let mut cookie = HeaderMap::new();
    cookie.insert(
        COOKIE,
        HeaderValue::from_str(&format!("sd_session={}", token)).unwrap(),
    );
    let resolved = resolve_request(&state, &cookie).await.unwrap();
    assert_eq!(resolved.id, alice.id);

    let mut bearer = HeaderMap::new();
    bearer.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    let resolved = require_admin(resolve_request(&state, &bearer).await).unwrap();
    assert_eq!(resolved.id, alice.id);
}

#[tokio::test]
async fn test_resolve_request_without_credentials() {
    let state = ServerState {
        db: MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        cli: cli(),
        tokens: tokens(),
    };

    let mut other_cookie = HeaderMap::new();
    other_cookie.insert(COOKIE, HeaderValue::from_static("access_token=abc"));

    for headers in [HeaderMap::new(), other_cookie] {
        let err = require_active(resolve_request(&state, &headers).await).unwrap_err();
        assert!(matches!(err, AuthError::MissingToken));
    }
}

#[test]
fn test_request_sources_follow_config() {
    let state = ServerState {
        db: MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        cli: cli(),
        tokens: tokens(),
    };

    assert_eq!(
        request_sources(&state),
        [
            CredentialSource::Cookie("sd_session".to_string()),
            CredentialSource::Header,
        ]
    );
    assert_eq!(state.cli.token_ttl_minutes, 30);
    assert_eq!(state.cli.activity_limit, 20);
}
