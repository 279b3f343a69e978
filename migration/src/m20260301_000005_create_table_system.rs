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
                    .table(System::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(System::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(System::Name)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(System::Status)
                            .string_len(20)
                            .not_null()
                            .default("FREE"),
                    )
                    .col(ColumnDef::new(System::Organization).uuid().not_null())
                    .col(ColumnDef::new(System::Department).uuid().null())
                    .col(ColumnDef::new(System::Notes).text().null())
                    .col(
                        ColumnDef::new(System::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(System::UpdatedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-system-organization")
                            .from(System::Table, System::Organization)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-system-department")
                            .from(System::Table, System::Department)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(System::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum System {
    Table,
    Id,
    Name,
    Status,
    Organization,
    Department,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Organization {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Department {
    Table,
    Id,
}
