// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet authentication endpoints.
//!
//! `POST /nft-auth` performs the full wallet login: challenge-message
//! check, signature recovery, on-chain ownership check, session issuance.
//! `POST /verify-nft` is the read-only ownership probe used by the UI.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::session::SESSION_KIND_NFT;
use crate::auth::signature::{self, SignatureError};
use crate::auth::AuthError;
use crate::blockchain::NetworkOwnership;
use crate::models::{PublicUser, Role, UserStatus, WalletAddress};
use crate::state::AppState;

/// Request body for `POST /nft-auth`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NftAuthRequest {
    /// Claimed wallet address (`0x` + 40 hex digits)
    pub wallet_address: Option<String>,
    /// 65-byte hex signature over the challenge message
    pub signature: Option<String>,
    /// The signed challenge message, verbatim
    pub message: Option<String>,
}

/// Successful wallet login response.
#[derive(Debug, Serialize, ToSchema)]
pub struct NftAuthResponse {
    pub success: bool,
    /// Synthetic `nft_holder` identity derived from the wallet
    pub user: PublicUser,
    /// Bearer token for the search backend
    pub token: String,
    pub message: String,
}

/// Authenticate by proving NFT ownership with a wallet signature.
#[utoipa::path(
    post,
    path = "/nft-auth",
    request_body = NftAuthRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Ownership verified, session issued", body = NftAuthResponse),
        (status = 400, description = "Missing fields, bad address, or message mismatch"),
        (status = 401, description = "Signature does not match the wallet"),
        (status = 403, description = "No NFT found on any configured network"),
    )
)]
pub async fn nft_auth(
    State(state): State<AppState>,
    Json(request): Json<NftAuthRequest>,
) -> Result<Json<NftAuthResponse>, AuthError> {
    let not_empty = |field: Option<String>| field.filter(|value| !value.is_empty());
    let (Some(wallet_address), Some(sig), Some(message)) = (
        not_empty(request.wallet_address),
        not_empty(request.signature),
        not_empty(request.message),
    ) else {
        return Err(AuthError::MissingFields(
            "Wallet address, signature, and message are required",
        ));
    };

    let wallet =
        WalletAddress::parse(&wallet_address).map_err(|_| AuthError::InvalidWalletAddress)?;

    // The challenge is fixed per wallet; anything else is rejected before
    // touching the signature.
    if message != signature::login_message(&wallet) {
        return Err(AuthError::InvalidMessage);
    }

    signature::verify_wallet_signature(&wallet, &message, &sig).map_err(|error| match error {
        SignatureError::SignerMismatch => AuthError::SignerMismatch,
        SignatureError::InvalidFormat | SignatureError::RecoveryFailed => {
            AuthError::MalformedSignature
        }
    })?;

    let ownership = state.verifier.verify(&wallet).await;
    if !ownership.has_nft {
        tracing::warn!(wallet = %wallet, "NFT access denied");
        return Err(AuthError::OwnershipDenied(ownership));
    }

    let token = state.sessions.issue(wallet.as_str(), SESSION_KIND_NFT);
    tracing::info!(wallet = %wallet, "NFT holder authenticated");

    Ok(Json(NftAuthResponse {
        success: true,
        user: nft_holder_identity(&wallet),
        token,
        message: "NFT ownership verified. Access granted!".to_string(),
    }))
}

/// Request body for `POST /verify-nft`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyNftRequest {
    /// Wallet address to probe (`0x` + 40 hex digits)
    pub wallet_address: Option<String>,
}

/// Ownership probe result.
#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyNftResponse {
    #[serde(rename = "hasNFT")]
    pub has_nft: bool,
    /// Aggregate balance across networks
    pub balance: u64,
    /// Networks where the wallet holds tokens
    pub networks: Vec<NetworkOwnership>,
    /// Full per-network breakdown, failures included
    pub details: Vec<NetworkOwnership>,
}

/// Check NFT ownership without authenticating.
#[utoipa::path(
    post,
    path = "/verify-nft",
    request_body = VerifyNftRequest,
    tag = "Auth",
    responses(
        (status = 200, description = "Ownership breakdown", body = VerifyNftResponse),
        (status = 400, description = "Missing or malformed wallet address"),
    )
)]
pub async fn verify_nft(
    State(state): State<AppState>,
    Json(request): Json<VerifyNftRequest>,
) -> Result<Json<VerifyNftResponse>, AuthError> {
    let Some(wallet_address) = request.wallet_address.filter(|address| !address.is_empty())
    else {
        return Err(AuthError::MissingFields("Wallet address is required"));
    };

    let wallet =
        WalletAddress::parse(&wallet_address).map_err(|_| AuthError::InvalidWalletAddress)?;

    let ownership = state.verifier.verify(&wallet).await;

    Ok(Json(VerifyNftResponse {
        has_nft: ownership.has_nft,
        balance: ownership.total_balance,
        networks: ownership.owned_networks(),
        details: ownership.per_network,
    }))
}

/// Ephemeral identity for a verified NFT holder; nothing is persisted.
fn nft_holder_identity(wallet: &WalletAddress) -> PublicUser {
    PublicUser {
        id: wallet.as_str().to_string(),
        login: wallet.short_form(),
        email: format!("{}@nft.holder", wallet.as_str()),
        role: Role::NftHolder,
        status: UserStatus::Active,
        created_at: Utc::now(),
        wallet_address: Some(wallet.as_str().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nft_holder_identity_is_wallet_derived() {
        let wallet = WalletAddress::parse("0xC1C4d4A5A384DE53BcFadB43D0e8b08966195757").unwrap();
        let user = nft_holder_identity(&wallet);

        assert_eq!(user.id, wallet.as_str());
        assert_eq!(user.login, "0xC1C4...5757");
        assert_eq!(user.email, format!("{}@nft.holder", wallet.as_str()));
        assert_eq!(user.role, Role::NftHolder);
        assert_eq!(user.status, UserStatus::Active);
        assert_eq!(user.wallet_address.as_deref(), Some(wallet.as_str()));
    }
}
