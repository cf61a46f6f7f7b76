// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Environment-provisioned credential store.
//!
//! Users are provisioned as numbered environment entries
//! (`OSINT_USER_1`, `OSINT_USER_2`, …) holding
//! `login:passwordHash:email[:role[:status]]`. The scan is contiguous: the
//! first missing index ends it. Because stored password hashes are
//! themselves `salt:hash` pairs, the parser anchors on the email field (the
//! first `@`-bearing field) rather than on fixed positions.
//!
//! The store is built once at startup and injected by handle; it is
//! immutable for the life of the process.

use std::env;

use chrono::Utc;

use crate::config::USER_ENV_PREFIX;
use crate::models::{PublicUser, Role, UserRecord, UserStatus};

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// Startup must fail rather than fall back to implicit accounts.
    #[error("no valid users configured; set OSINT_USER_1 before starting")]
    NoUsersConfigured,
}

/// Immutable set of provisioned users.
pub struct CredentialStore {
    users: Vec<UserRecord>,
}

impl CredentialStore {
    /// Load the store from `OSINT_USER_<n>` environment entries.
    pub fn from_env() -> Result<Self, CredentialError> {
        Self::from_lookup(|index| env::var(format!("{USER_ENV_PREFIX}{index}")).ok())
    }

    /// Load the store from an arbitrary indexed entry source.
    ///
    /// Scans indices 1, 2, … until `lookup` returns `None`; malformed
    /// entries are skipped with a warning and the scan continues. An empty
    /// result is an error: the service must not start without users.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CredentialError>
    where
        F: Fn(u32) -> Option<String>,
    {
        let mut users: Vec<UserRecord> = Vec::new();
        let mut index = 1u32;

        while let Some(raw) = lookup(index) {
            match parse_entry(index, &raw) {
                Ok(record) => {
                    if users.iter().any(|existing| existing.login == record.login) {
                        tracing::warn!(
                            index,
                            login = %record.login,
                            "duplicate login in credential configuration; keeping the first entry"
                        );
                    } else {
                        users.push(record);
                    }
                }
                Err(reason) => {
                    tracing::warn!(index, %reason, "skipping malformed credential entry");
                }
            }
            index += 1;
        }

        if users.is_empty() {
            return Err(CredentialError::NoUsersConfigured);
        }

        for user in &users {
            tracing::info!(login = %user.login, role = %user.role, status = %user.status, "loaded user");
        }
        Ok(Self { users })
    }

    /// Find an `active` record by login. Blocked and pending records are
    /// invisible here, so they can never authenticate.
    pub fn find_by_login(&self, login: &str) -> Option<&UserRecord> {
        self.users
            .iter()
            .find(|user| user.login == login && user.status == UserStatus::Active)
    }

    /// All active users, passwords redacted.
    pub fn list_active(&self) -> Vec<PublicUser> {
        self.users
            .iter()
            .filter(|user| user.status == UserStatus::Active)
            .map(UserRecord::redacted)
            .collect()
    }
}

/// Parse one `login:passwordHash:email[:role[:status]]` entry.
///
/// The password field may itself contain a colon (the `salt:hash` storage
/// form), so fields after the login are grouped by locating the email: the
/// first field from the third position onwards containing `@`.
fn parse_entry(index: u32, raw: &str) -> Result<UserRecord, String> {
    let fields: Vec<&str> = raw.split(':').map(str::trim).collect();

    let login = *fields.first().ok_or("missing login")?;
    if login.is_empty() {
        return Err("missing login".to_string());
    }

    let email_pos = fields
        .iter()
        .enumerate()
        .skip(2)
        .find(|(_, field)| field.contains('@'))
        .map(|(pos, _)| pos)
        .ok_or("missing email")?;

    let password_hash = fields[1..email_pos].join(":");
    if password_hash.is_empty() {
        return Err("missing password".to_string());
    }
    let email = fields[email_pos].to_string();

    let role = match fields.get(email_pos + 1).copied().filter(|f| !f.is_empty()) {
        Some(raw_role) => Role::parse(raw_role).ok_or_else(|| format!("unrecognized role `{raw_role}`"))?,
        None => Role::default(),
    };
    let status = match fields.get(email_pos + 2).copied().filter(|f| !f.is_empty()) {
        Some(raw_status) => {
            UserStatus::parse(raw_status).ok_or_else(|| format!("unrecognized status `{raw_status}`"))?
        }
        None => UserStatus::Active,
    };
    if fields.len() > email_pos + 3 {
        return Err("unexpected trailing fields".to_string());
    }

    Ok(UserRecord {
        id: index.to_string(),
        login: login.to_string(),
        email,
        password_hash,
        role,
        status,
        created_at: Utc::now(),
    })
}
