/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for entity enums

use entity::*;
use std::str::FromStr;

#[test]
fn test_system_status_from_str() {
    assert_eq!(
        system::SystemStatus::from_str("FREE").unwrap(),
        system::SystemStatus::Free
    );
    assert_eq!(
        system::SystemStatus::from_str("charging").unwrap(),
        system::SystemStatus::Charging
    );
    assert_eq!(
        system::SystemStatus::from_str("PeakShaving").unwrap(),
        system::SystemStatus::Peakshaving
    );

    assert!(system::SystemStatus::from_str("idle").is_err());
}

#[test]
fn test_system_status_display_matches_storage_value() {
    assert_eq!(system::SystemStatus::Maintenance.to_string(), "MAINTENANCE");
    assert_eq!(system::SystemStatus::Islanding.as_str(), "ISLANDING");
}

#[test]
fn test_system_status_serde() {
    let json = serde_json::to_string(&system::SystemStatus::Offline).unwrap();
    assert_eq!(json, "\"OFFLINE\"");

    let status: system::SystemStatus = serde_json::from_str("\"CHARGING\"").unwrap();
    assert_eq!(status, system::SystemStatus::Charging);
}
