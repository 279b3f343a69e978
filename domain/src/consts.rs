/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

pub const PORT_RANGE: RangeInclusive<usize> = 1..=65535;

/// Session token lifetime in minutes, up to one year.
pub const TOKEN_TTL_MINUTES: RangeInclusive<i64> = 1..=525_600;

pub const DEFAULT_ORGANIZATION_NAME: &str = "Default Organization";

pub const PASSWORD_LENGTH: RangeInclusive<usize> = 8..=128;
pub const SYSTEM_NAME_LENGTH: RangeInclusive<usize> = 1..=50;
pub const PERSON_NAME_MAX_LENGTH: usize = 50;
pub const EMAIL_MAX_LENGTH: usize = 100;

pub const MAX_ACTIVITY_LIMIT: u64 = 100;

/// Prefix the login flow historically stored in front of the cookie value.
pub const BEARER_PREFIX: &str = "Bearer ";
