/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use domain::guard::require_active;
use domain::session::resolve_request;
use domain::types::*;
use std::sync::Arc;

use crate::error::WebResult;

/// Resolves the session of every protected request and stores the user in the
/// request extensions.
pub async fn authorize(
    state: State<Arc<ServerState>>,
    mut req: Request,
    next: Next,
) -> WebResult<Response> {
    let user = require_active(resolve_request(&state, req.headers()).await)?;

    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

pub fn session_cookie(cli: &Cli, token: &str, max_age: i64) -> String {
    let mut cookie = format!(
        "{}={}; HttpOnly; Path=/; SameSite=Lax; Max-Age={}",
        cli.session_cookie_name, token, max_age
    );

    if cli.secure_cookies {
        cookie.push_str("; Secure");
    }

    cookie
}

pub fn clear_session_cookie(cli: &Cli) -> String {
    session_cookie(cli, "", 0)
}
