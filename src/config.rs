// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `OSINT_USER_<n>` | Credential entry `login:passwordHash:email[:role[:status]]`, `n` = 1, 2, … contiguous | Required (at least one) |
//! | `OSINT_SESSION_SECRET` | Shared secret for session token issuance | Insecure default (warns) |
//! | `OSINT_MONAD_RPC_URL` | Monad testnet JSON-RPC endpoint | Public endpoint |
//! | `OSINT_MONAD_NFT_CONTRACT` | NFT collection contract on Monad testnet | Built-in collection |
//! | `OSINT_BASE_RPC_URL` | Base mainnet JSON-RPC endpoint | Public endpoint |
//! | `OSINT_BASE_NFT_CONTRACT` | NFT collection contract on Base mainnet | Built-in collection |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

/// Prefix for numbered credential entries (`OSINT_USER_1`, `OSINT_USER_2`, …).
pub const USER_ENV_PREFIX: &str = "OSINT_USER_";

/// Environment variable holding the shared session secret.
pub const SESSION_SECRET_ENV: &str = "OSINT_SESSION_SECRET";

/// Fallback secret used when [`SESSION_SECRET_ENV`] is unset. Tokens minted
/// with it are forgeable by anyone who reads this source; startup warns.
pub const INSECURE_DEFAULT_SECRET: &str = "default-secret";

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable name selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Override for the Monad testnet RPC endpoint.
pub const MONAD_RPC_URL_ENV: &str = "OSINT_MONAD_RPC_URL";

/// Override for the NFT collection contract on Monad testnet.
pub const MONAD_NFT_CONTRACT_ENV: &str = "OSINT_MONAD_NFT_CONTRACT";

/// Override for the Base mainnet RPC endpoint.
pub const BASE_RPC_URL_ENV: &str = "OSINT_BASE_RPC_URL";

/// Override for the NFT collection contract on Base mainnet.
pub const BASE_NFT_CONTRACT_ENV: &str = "OSINT_BASE_NFT_CONTRACT";

/// Read the session secret from the environment.
///
/// Falls back to [`INSECURE_DEFAULT_SECRET`] with an operational warning
/// when the variable is unset or empty.
pub fn session_secret() -> String {
    match env::var(SESSION_SECRET_ENV) {
        Ok(secret) if !secret.is_empty() => secret,
        _ => {
            tracing::warn!(
                "{SESSION_SECRET_ENV} is not set; session tokens will use an insecure default secret"
            );
            INSECURE_DEFAULT_SECRET.to_string()
        }
    }
}
