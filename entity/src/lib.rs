/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod department;
pub mod department_membership;
pub mod organization;
pub mod post;
pub mod system;
pub mod system_claim;
pub mod user;
