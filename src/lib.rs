// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! OSINT HUB - Authentication Service
//!
//! This crate provides the credential and session authentication core for
//! the OSINT HUB lookup product: password login against an env-provisioned
//! credential store, NFT-ownership wallet login, and session token issuance.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Credential store, password hashing, sessions, wallet signatures
//! - `blockchain` - Multi-network ERC-721 ownership verification

pub mod api;
pub mod auth;
pub mod blockchain;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
