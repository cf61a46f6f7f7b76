// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Multi-network ERC-721 ownership verification.
//!
//! One [`client::ChainClient`] per configured network issues the
//! `balanceOf` read; [`verifier::NftVerifier`] fans the reads out
//! concurrently and aggregates the balances.

pub mod client;
pub mod erc721;
pub mod types;
pub mod verifier;

pub use client::{ChainClient, ChainClientError};
pub use types::{configured_networks, NetworkConfig, NetworkOwnership, NftOwnership};
pub use verifier::NftVerifier;
