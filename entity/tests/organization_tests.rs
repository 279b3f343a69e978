/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for organization and department entities

use chrono::{TimeZone, Utc};
use entity::*;
use sea_orm::{DatabaseBackend, MockDatabase, entity::prelude::*};
use uuid::Uuid;

#[tokio::test]
async fn test_organization_entity_basic() -> Result<(), DbErr> {
    let org_id = Uuid::new_v4();
    let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![organization::Model {
            id: org_id,
            name: "Default Organization".to_owned(),
            created_at,
        }]])
        .into_connection();

    let result = organization::Entity::find_by_id(org_id).one(&db).await?;

    assert!(result.is_some());
    let org = result.unwrap();
    assert_eq!(org.name, "Default Organization");
    assert_eq!(org.created_at, created_at);

    Ok(())
}

#[tokio::test]
async fn test_department_membership_roles() -> Result<(), DbErr> {
    let org_id = Uuid::new_v4();
    let department_id = Uuid::new_v4();
    let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let membership = |role: &str| department_membership::Model {
        id: Uuid::new_v4(),
        user: Uuid::new_v4(),
        department: department_id,
        organization: org_id,
        role: role.to_owned(),
        created_at,
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![membership("lead"), membership("tester")]])
        .into_connection();

    let members = department_membership::Entity::find()
        .filter(department_membership::Column::Department.eq(department_id))
        .all(&db)
        .await?;

    let roles: Vec<&str> = members.iter().map(|m| m.role.as_str()).collect();
    assert_eq!(roles, vec!["lead", "tester"]);

    Ok(())
}
