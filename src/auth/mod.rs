// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! The credential and session core of the service.
//!
//! ## Auth Flows
//!
//! 1. Password login:
//!    - `POST /login` with `{login, password}`
//!    - [`CredentialStore`] lookup (active records only)
//!    - [`password`] verification (memory-hard KDF, constant-time compare)
//!    - [`SessionIssuer`] mints a signed, expiring bearer token
//! 2. Wallet login:
//!    - `POST /nft-auth` with `{walletAddress, signature, message}`
//!    - exact challenge-message check plus [`signature`] recovery of the
//!      signer address
//!    - on-chain NFT ownership check (see `crate::blockchain`)
//!    - [`SessionIssuer`] mints a token for the synthetic `nft_holder`
//!      identity
//!
//! ## Security
//!
//! - The credential set comes from configuration only; an empty set aborts
//!   startup (no fallback accounts)
//! - Password hashes never leave the store
//! - Failed logins take a fixed minimum time and return one uniform error

pub mod credentials;
pub mod error;
pub mod login;
pub mod password;
pub mod session;
pub mod signature;

pub use credentials::{CredentialError, CredentialStore};
pub use error::AuthError;
pub use session::{SessionClaims, SessionIssuer};
