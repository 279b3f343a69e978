/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DepartmentMembership::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DepartmentMembership::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DepartmentMembership::User).uuid().not_null())
                    .col(
                        ColumnDef::new(DepartmentMembership::Department)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DepartmentMembership::Organization)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DepartmentMembership::Role)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DepartmentMembership::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-department_membership-user")
                            .from(DepartmentMembership::Table, DepartmentMembership::User)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-department_membership-department")
                            .from(
                                DepartmentMembership::Table,
                                DepartmentMembership::Department,
                            )
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-department_membership-organization")
                            .from(
                                DepartmentMembership::Table,
                                DepartmentMembership::Organization,
                            )
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DepartmentMembership::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DepartmentMembership {
    Table,
    Id,
    User,
    Department,
    Organization,
    Role,
    CreatedAt,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Department {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Organization {
    Table,
    Id,
}
