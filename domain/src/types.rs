/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range, token_ttl_in_range};
use super::token::TokenService;
use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Parser, Debug, Clone)]
#[command(name = "SystemDesk", display_name = "SystemDesk", bin_name = "systemdesk-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "SYSTEMDESK_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "SYSTEMDESK_LOG_JSON", default_value = "false")]
    pub log_json: bool,
    #[arg(long, env = "SYSTEMDESK_IP", default_value = "127.0.0.1")]
    pub ip: String,
    #[arg(long, env = "SYSTEMDESK_PORT", value_parser = port_in_range, default_value_t = 3000)]
    pub port: u16,
    #[arg(long, env = "SYSTEMDESK_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "SYSTEMDESK_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "SYSTEMDESK_JWT_SECRET_FILE")]
    pub jwt_secret_file: String,
    #[arg(long, env = "SYSTEMDESK_TOKEN_TTL_MINUTES", value_parser = token_ttl_in_range, default_value = "30")]
    pub token_ttl_minutes: i64,
    #[arg(
        long,
        env = "SYSTEMDESK_SESSION_COOKIE_NAME",
        default_value = "access_token"
    )]
    pub session_cookie_name: String,
    #[arg(long, env = "SYSTEMDESK_SECURE_COOKIES", default_value = "false")]
    pub secure_cookies: bool,
    #[arg(long, env = "SYSTEMDESK_ACTIVITY_LIMIT", value_parser = greater_than_zero::<u64>, default_value = "20")]
    pub activity_limit: u64,
    #[arg(long, env = "SYSTEMDESK_ADMIN_EMAIL")]
    pub admin_email: Option<String>,
    #[arg(long, env = "SYSTEMDESK_ADMIN_PASSWORD_FILE")]
    pub admin_password_file: Option<String>,
    #[arg(long, env = "SYSTEMDESK_ADMIN_FIRST_NAME", default_value = "Admin")]
    pub admin_first_name: String,
    #[arg(long, env = "SYSTEMDESK_ADMIN_LAST_NAME", default_value = "User")]
    pub admin_last_name: String,
}

/// Process-wide state, built once at startup and shared behind an `Arc`.
#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
    pub tokens: TokenService,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListItem {
    pub id: Uuid,
    pub name: String,
}

pub type EOrganization = organization::Entity;
pub type EUser = user::Entity;
pub type EDepartment = department::Entity;
pub type EDepartmentMembership = department_membership::Entity;
pub type ESystem = system::Entity;
pub type ESystemClaim = system_claim::Entity;
pub type EPost = post::Entity;

pub type MOrganization = organization::Model;
pub type MUser = user::Model;
pub type MDepartment = department::Model;
pub type MDepartmentMembership = department_membership::Model;
pub type MSystem = system::Model;
pub type MSystemClaim = system_claim::Model;
pub type MPost = post::Model;

pub type AOrganization = organization::ActiveModel;
pub type AUser = user::ActiveModel;
pub type ADepartment = department::ActiveModel;
pub type ADepartmentMembership = department_membership::ActiveModel;
pub type ASystem = system::ActiveModel;
pub type ASystemClaim = system_claim::ActiveModel;
pub type APost = post::ActiveModel;

pub type COrganization = organization::Column;
pub type CUser = user::Column;
pub type CDepartment = department::Column;
pub type CDepartmentMembership = department_membership::Column;
pub type CSystem = system::Column;
pub type CSystemClaim = system_claim::Column;
pub type CPost = post::Column;
