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
                    .table(SystemClaim::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SystemClaim::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SystemClaim::Organization).uuid().not_null())
                    .col(ColumnDef::new(SystemClaim::System).uuid().not_null())
                    .col(ColumnDef::new(SystemClaim::ClaimedBy).uuid().not_null())
                    .col(ColumnDef::new(SystemClaim::Notes).text().null())
                    .col(
                        ColumnDef::new(SystemClaim::ClaimedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SystemClaim::ReleasedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-system_claim-organization")
                            .from(SystemClaim::Table, SystemClaim::Organization)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-system_claim-system")
                            .from(SystemClaim::Table, SystemClaim::System)
                            .to(System::Table, System::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-system_claim-claimed_by")
                            .from(SystemClaim::Table, SystemClaim::ClaimedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-system_claim-claimed_at")
                    .table(SystemClaim::Table)
                    .col(SystemClaim::ClaimedAt)
                    .to_owned(),
            )
            .await?;

        // At most one open claim per system.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .unique()
                    .name("idx-system_claim-open-system")
                    .table(SystemClaim::Table)
                    .col(SystemClaim::System)
                    .and_where(Expr::col(SystemClaim::ReleasedAt).is_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SystemClaim::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SystemClaim {
    Table,
    Id,
    Organization,
    System,
    ClaimedBy,
    Notes,
    ClaimedAt,
    ReleasedAt,
}

#[derive(DeriveIden)]
enum Organization {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum System {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
}
