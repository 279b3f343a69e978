/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One checkout of a system by a user. Rows are never deleted; the table
/// doubles as the activity history.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "system_claim")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization: Uuid,
    pub system: Uuid,
    pub claimed_by: Uuid,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub claimed_at: DateTimeUtc,
    /// `None` while the claim is open.
    pub released_at: Option<DateTimeUtc>,
}

impl Model {
    pub fn is_open(&self) -> bool {
        self.released_at.is_none()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::Organization",
        to = "super::organization::Column::Id"
    )]
    Organization,
    #[sea_orm(
        belongs_to = "super::system::Entity",
        from = "Column::System",
        to = "super::system::Column::Id"
    )]
    System,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ClaimedBy",
        to = "super::user::Column::Id"
    )]
    ClaimedBy,
}

impl ActiveModelBehavior for ActiveModel {}
