/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod authorization;
pub mod endpoints;
pub mod error;

use axum::routing::{get, post};
use axum::{Router, middleware};
use domain::types::ServerState;
use endpoints::{auth, claims, systems, user};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/api/user", get(user::get))
        .route("/api/user/password", post(user::post_password))
        .route("/api/users", post(user::post_users))
        .route("/api/users/{user}/active", post(user::post_user_active))
        .route("/api/systems", get(systems::get).post(systems::post))
        .route("/api/systems/{system}/holder", get(systems::get_holder))
        .route("/api/systems/{system}/claim", post(claims::post_claim))
        .route("/api/claims/{claim}/release", post(claims::post_release))
        .route("/api/activity", get(claims::get_activity))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            authorization::authorize,
        ))
        .route("/api/auth/login", post(auth::post_login))
        .route("/api/auth/logout", post(auth::post_logout))
        .route("/api/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on {}", server_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
