/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, DeriveActiveEnum, EnumIter, Deserialize, Serialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemStatus {
    #[sea_orm(string_value = "FREE")]
    Free,
    #[sea_orm(string_value = "CHARGING")]
    Charging,
    #[sea_orm(string_value = "MAINTENANCE")]
    Maintenance,
    #[sea_orm(string_value = "ISLANDING")]
    Islanding,
    #[sea_orm(string_value = "PEAKSHAVING")]
    Peakshaving,
    #[sea_orm(string_value = "OFFLINE")]
    Offline,
}

impl SystemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemStatus::Free => "FREE",
            SystemStatus::Charging => "CHARGING",
            SystemStatus::Maintenance => "MAINTENANCE",
            SystemStatus::Islanding => "ISLANDING",
            SystemStatus::Peakshaving => "PEAKSHAVING",
            SystemStatus::Offline => "OFFLINE",
        }
    }
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SystemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "FREE" => Ok(SystemStatus::Free),
            "CHARGING" => Ok(SystemStatus::Charging),
            "MAINTENANCE" => Ok(SystemStatus::Maintenance),
            "ISLANDING" => Ok(SystemStatus::Islanding),
            "PEAKSHAVING" => Ok(SystemStatus::Peakshaving),
            "OFFLINE" => Ok(SystemStatus::Offline),
            _ => Err(format!("Unknown system status: {}", s)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "system")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique, indexed)]
    pub name: String,
    pub status: SystemStatus,
    pub organization: Uuid,
    pub department: Option<Uuid>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: Option<DateTimeUtc>,
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
        belongs_to = "super::department::Entity",
        from = "Column::Department",
        to = "super::department::Column::Id"
    )]
    Department,
}

impl ActiveModelBehavior for ActiveModel {}
