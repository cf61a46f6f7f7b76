// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Domain Data Models
//!
//! This module defines the user records held by the credential store, the
//! redacted projection exposed to API callers, and the validated wallet
//! address wrapper used on the NFT login path.
//!
//! ## Wallet Address Type
//!
//! The [`WalletAddress`] type wraps Ethereum-style addresses (0x-prefixed,
//! 40 hex characters). Construction goes through [`WalletAddress::parse`],
//! so holding one implies the format check already passed.

use std::str::FromStr;

use alloy::primitives::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Wallet Address Type
// =============================================================================

/// A malformed wallet address (anything but `0x` + 40 hex digits).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid wallet address format: expected 0x followed by 40 hex digits")]
pub struct InvalidWalletAddress;

/// Validated Ethereum-compatible wallet address.
///
/// Keeps the caller's original spelling for display while carrying the
/// parsed 20-byte form for chain calls and signer comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WalletAddress {
    raw: String,
    parsed: Address,
}

impl WalletAddress {
    /// Parse and validate a `0x`-prefixed, 40-hex-digit address.
    ///
    /// A bad format is a client error, never a zero-balance result.
    pub fn parse(raw: &str) -> Result<Self, InvalidWalletAddress> {
        if !raw.starts_with("0x") || raw.len() != 42 {
            return Err(InvalidWalletAddress);
        }
        let parsed = Address::from_str(raw).map_err(|_| InvalidWalletAddress)?;
        Ok(Self {
            raw: raw.to_string(),
            parsed,
        })
    }

    /// The address as supplied by the caller.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed 20-byte address.
    pub fn address(&self) -> Address {
        self.parsed
    }

    /// Abbreviated `0x1234…abcd` form used as the synthetic login handle.
    pub fn short_form(&self) -> String {
        format!("{}...{}", &self.raw[..6], &self.raw[self.raw.len() - 4..])
    }
}

impl std::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

// =============================================================================
// User Records
// =============================================================================

/// User roles for authorization.
///
/// - `Admin` - Operator account from configuration
/// - `User` - Normal account from configuration
/// - `NftHolder` - Synthetic identity for wallet-based logins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative access
    Admin,
    /// Normal user account
    User,
    /// Wallet-derived identity (never stored)
    NftHolder,
}

impl Role {
    /// Parse a role from a configuration field (case-insensitive).
    pub fn parse(s: &str) -> Option<Role> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "user" => Some(Role::User),
            "nft_holder" => Some(Role::NftHolder),
            _ => None,
        }
    }
}

impl Default for Role {
    /// Default role is User (least privilege for configured accounts).
    fn default() -> Self {
        Role::User
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::User => write!(f, "user"),
            Role::NftHolder => write!(f, "nft_holder"),
        }
    }
}

/// Account status. Only `active` records authenticate successfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Account may authenticate
    Active,
    /// Account is locked out
    Blocked,
    /// Account awaits approval
    Pending,
}

impl UserStatus {
    /// Parse a status from a configuration field (case-insensitive).
    pub fn parse(s: &str) -> Option<UserStatus> {
        match s.to_lowercase().as_str() {
            "active" => Some(UserStatus::Active),
            "blocked" => Some(UserStatus::Blocked),
            "pending" => Some(UserStatus::Pending),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserStatus::Active => write!(f, "active"),
            UserStatus::Blocked => write!(f, "blocked"),
            UserStatus::Pending => write!(f, "pending"),
        }
    }
}

/// A provisioned user as held by the credential store.
///
/// Deliberately not serializable: `password_hash` must never leave the
/// store. API responses go through [`UserRecord::redacted`].
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// Stable identifier (configuration position, or the wallet address for
    /// NFT-derived identities).
    pub id: String,
    /// Unique handle used as the password-login lookup key.
    pub login: String,
    /// Contact address.
    pub email: String,
    /// `hex(salt):hex(derivedKey)` pair, never the raw password.
    pub password_hash: String,
    /// Authorization role.
    pub role: Role,
    /// Account status.
    pub status: UserStatus,
    /// Record creation time (credential load time for configured users).
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Projection safe to return to callers (no password material).
    pub fn redacted(&self) -> PublicUser {
        PublicUser {
            id: self.id.clone(),
            login: self.login.clone(),
            email: self.email.clone(),
            role: self.role,
            status: self.status,
            created_at: self.created_at,
            wallet_address: None,
        }
    }
}

/// Redacted user representation returned by the API.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    /// Stable identifier.
    pub id: String,
    /// Login handle (abbreviated wallet form for NFT identities).
    pub login: String,
    /// Contact address.
    pub email: String,
    /// Authorization role.
    pub role: Role,
    /// Account status.
    pub status: UserStatus,
    /// Record creation time.
    pub created_at: DateTime<Utc>,
    /// Originating wallet, present on NFT-derived identities only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
}
