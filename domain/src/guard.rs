/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::error::AuthError;
use super::types::MUser;

/// Passes active users through unchanged.
pub fn require_active(resolved: Result<MUser, AuthError>) -> Result<MUser, AuthError> {
    let user = resolved?;

    if !user.is_active {
        return Err(AuthError::UserInactive);
    }

    Ok(user)
}

pub fn require_admin(resolved: Result<MUser, AuthError>) -> Result<MUser, AuthError> {
    let user = require_active(resolved)?;

    if !user.is_admin {
        return Err(AuthError::Forbidden);
    }

    Ok(user)
}
