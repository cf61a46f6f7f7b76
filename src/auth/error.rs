// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::blockchain::types::NftOwnership;

/// Authentication failure, as surfaced to API callers.
///
/// Login failures deliberately collapse into one uniform
/// `InvalidCredentials` variant so that unknown-user and wrong-password
/// outcomes are indistinguishable.
#[derive(Debug)]
pub enum AuthError {
    /// Request body is missing required fields (message names them)
    MissingFields(&'static str),
    /// Wallet address is not `0x` + 40 hex digits
    InvalidWalletAddress,
    /// Challenge message does not match the expected format
    InvalidMessage,
    /// Signature is not 65 hex-encoded bytes or cannot be decoded
    MalformedSignature,
    /// Recovered signer differs from the claimed wallet address
    SignerMismatch,
    /// Unknown login or wrong password (uniform)
    InvalidCredentials,
    /// Wallet owns no NFT on any configured network
    OwnershipDenied(NftOwnership),
    /// Session token is malformed
    MalformedToken,
    /// Session token signature does not verify
    InvalidTokenSignature,
    /// Session token has expired
    TokenExpired,
}

#[derive(Serialize)]
struct AuthErrorBody {
    error: String,
    /// Per-network breakdown, populated on ownership denials for
    /// transparency toward the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    ownership: Option<NftOwnership>,
}

impl AuthError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingFields(_)
            | AuthError::InvalidWalletAddress
            | AuthError::InvalidMessage
            | AuthError::MalformedSignature => StatusCode::BAD_REQUEST,
            AuthError::SignerMismatch
            | AuthError::InvalidCredentials
            | AuthError::MalformedToken
            | AuthError::InvalidTokenSignature
            | AuthError::TokenExpired => StatusCode::UNAUTHORIZED,
            AuthError::OwnershipDenied(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::MissingFields(message) => write!(f, "{message}"),
            AuthError::InvalidWalletAddress => write!(f, "Invalid wallet address format"),
            AuthError::InvalidMessage => write!(f, "Invalid message format"),
            AuthError::MalformedSignature => write!(f, "Invalid signature format"),
            AuthError::SignerMismatch => {
                write!(f, "Signature does not match the wallet address")
            }
            AuthError::InvalidCredentials => write!(f, "Invalid credentials"),
            AuthError::OwnershipDenied(_) => write!(
                f,
                "Access denied: You must own an NFT from the authorized collection to use this service"
            ),
            AuthError::MalformedToken => write!(f, "Token is malformed"),
            AuthError::InvalidTokenSignature => write!(f, "Token signature is invalid"),
            AuthError::TokenExpired => write!(f, "Token has expired"),
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let ownership = match self {
            AuthError::OwnershipDenied(ref breakdown) => Some(breakdown.clone()),
            _ => None,
        };
        let body = Json(AuthErrorBody {
            error: self.to_string(),
            ownership,
        });
        (status, body).into_response()
    }
}
