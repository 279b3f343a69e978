/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for user entity

use chrono::{TimeZone, Utc};
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

fn test_user(id: Uuid) -> user::Model {
    let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    user::Model {
        id,
        first_name: "Test".to_owned(),
        last_name: "User".to_owned(),
        email: "test@example.com".to_owned(),
        password_hash: Some("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_owned()),
        organization: Some(Uuid::new_v4()),
        is_active: true,
        is_admin: false,
        last_login_at: None,
        created_at,
        updated_at: None,
    }
}

#[tokio::test]
async fn test_user_entity_basic() -> Result<(), DbErr> {
    let user_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![test_user(user_id)]])
        .into_connection();

    let result = user::Entity::find_by_id(user_id).one(&db).await?;

    assert!(result.is_some());
    let user = result.unwrap();
    assert_eq!(user.email, "test@example.com");
    assert_eq!(user.full_name(), "Test User");
    assert!(user.is_active);

    Ok(())
}

#[test]
fn test_user_serialization_hides_password_hash() {
    let user = test_user(Uuid::new_v4());

    let json = serde_json::to_string(&user).unwrap();
    assert!(json.contains("test@example.com"));
    assert!(!json.contains("password_hash"));
    assert!(!json.contains("argon2"));
}
