/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use chrono::Duration;
use clap::Parser;
use domain::database::ensure_default_organization;
use domain::systems::{NewSystem, create_system};
use domain::token::TokenService;
use domain::types::*;
use domain::users::{NewUser, create_user};
use http_body_util::BodyExt;
use migration::Migrator;
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub fn create_test_cli() -> Cli {
    Cli::parse_from([
        "systemdesk-server",
        "--jwt-secret-file",
        "/nonexistent/jwt",
        "--database-url",
        "sqlite::memory:",
        "--activity-limit",
        "3",
    ])
}

pub async fn create_test_state() -> Arc<ServerState> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    Arc::new(ServerState {
        db,
        cli: create_test_cli(),
        tokens: TokenService::new(b"web-test-secret", Duration::minutes(30)),
    })
}

pub async fn seed_organization(state: &ServerState) -> MOrganization {
    ensure_default_organization(&state.db).await.unwrap()
}

pub async fn seed_user(
    state: &ServerState,
    organization: Uuid,
    first_name: &str,
    password: Option<&str>,
    is_admin: bool,
) -> MUser {
    create_user(
        &state.db,
        NewUser {
            first_name: first_name.to_string(),
            last_name: "Tester".to_string(),
            email: format!("{}@example.com", first_name.to_lowercase()),
            password: password.map(str::to_string),
            organization: Some(organization),
            is_admin,
        },
    )
    .await
    .unwrap()
}

pub async fn seed_system(state: &ServerState, organization: Uuid, name: &str) -> MSystem {
    create_system(
        &state.db,
        organization,
        NewSystem {
            name: name.to_string(),
            status: None,
            department: None,
            notes: None,
        },
    )
    .await
    .unwrap()
}

pub fn bearer(state: &ServerState, user: &MUser) -> String {
    format!("Bearer {}", state.tokens.issue(&user.email).unwrap())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(
    state: &Arc<ServerState>,
    method: Method,
    uri: &str,
    auth: Option<&str>,
    body: Option<Value>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    send_request(state, request).await
}

pub async fn send_request(state: &Arc<ServerState>, request: Request<Body>) -> TestResponse {
    let response = web::router(Arc::clone(state))
        .oneshot(request)
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse {
        status,
        headers,
        body,
    }
}
