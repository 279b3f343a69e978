/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result, bail};
use email_address::EmailAddress;

use super::consts::*;

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn token_ttl_in_range(s: &str) -> Result<i64, String> {
    let minutes: i64 = s
        .parse()
        .map_err(|_| format!("`{s}` is not a number of minutes"))?;

    if TOKEN_TTL_MINUTES.contains(&minutes) {
        Ok(minutes)
    } else {
        Err(format!(
            "token lifetime not in range {}-{} minutes",
            TOKEN_TTL_MINUTES.start(),
            TOKEN_TTL_MINUTES.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

/// Reads a secret from `path`, trimming surrounding whitespace. An empty
/// file counts as missing.
pub fn load_secret(path: &str) -> Result<String> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read secret file {}", path))?;
    let s = s.trim().replace(char::from(25), "");

    if s.is_empty() {
        bail!("Secret file {} is empty", path);
    }

    Ok(s)
}

pub fn validate_password(password: &str) -> Result<(), String> {
    let length = password.chars().count();

    if length < *PASSWORD_LENGTH.start() {
        return Err(format!(
            "Password must be at least {} characters long",
            PASSWORD_LENGTH.start()
        ));
    }

    if length > *PASSWORD_LENGTH.end() {
        return Err(format!(
            "Password cannot exceed {} characters",
            PASSWORD_LENGTH.end()
        ));
    }

    Ok(())
}

pub fn validate_person_name(s: &str) -> Result<(), String> {
    if s.trim().is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if s.chars().count() > PERSON_NAME_MAX_LENGTH {
        return Err(format!(
            "Name cannot exceed {} characters",
            PERSON_NAME_MAX_LENGTH
        ));
    }

    Ok(())
}

pub fn validate_system_name(s: &str) -> Result<(), String> {
    if s.trim() != s {
        return Err("System name cannot have leading or trailing whitespace".to_string());
    }

    if !SYSTEM_NAME_LENGTH.contains(&s.chars().count()) {
        return Err(format!(
            "System name must be between {} and {} characters",
            SYSTEM_NAME_LENGTH.start(),
            SYSTEM_NAME_LENGTH.end()
        ));
    }

    if s.chars().any(|c| c.is_control()) {
        return Err("System name cannot contain control characters".to_string());
    }

    Ok(())
}

pub fn validate_email(s: &str) -> Result<(), String> {
    if s.len() > EMAIL_MAX_LENGTH {
        return Err(format!(
            "Email cannot exceed {} characters",
            EMAIL_MAX_LENGTH
        ));
    }

    if !EmailAddress::is_valid(s) {
        return Err("Invalid Email".to_string());
    }

    Ok(())
}

/// Lowercases and trims an e-mail address so lookups are case-insensitive.
pub fn normalize_email(s: &str) -> String {
    s.trim().to_lowercase()
}
