// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Per-network JSON-RPC client for NFT balance reads.

use alloy::{
    network::Ethereum,
    primitives::U256,
    providers::{
        fillers::{BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller},
        Identity, ProviderBuilder, RootProvider,
    },
};

use super::erc721::Erc721Contract;
use super::types::NetworkConfig;
use crate::models::WalletAddress;

/// HTTP provider type (with alloy's default fillers).
type HttpProvider = FillProvider<
    JoinFill<
        Identity,
        JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
    >,
    RootProvider<Ethereum>,
>;

/// Read-only client for one configured network.
#[derive(Debug)]
pub struct ChainClient {
    /// Network configuration
    network: NetworkConfig,
    /// Alloy HTTP provider
    provider: HttpProvider,
}

impl ChainClient {
    /// Create a new client for the specified network.
    pub fn new(network: NetworkConfig) -> Result<Self, ChainClientError> {
        let url: url::Url = network
            .rpc_url
            .parse()
            .map_err(|e: url::ParseError| ChainClientError::InvalidRpcUrl(e.to_string()))?;

        let provider = ProviderBuilder::new().connect_http(url);

        Ok(Self { network, provider })
    }

    /// Get the network configuration.
    pub fn network(&self) -> &NetworkConfig {
        &self.network
    }

    /// ERC-721 balance of `wallet` against this network's collection contract.
    pub async fn nft_balance(&self, wallet: &WalletAddress) -> Result<U256, ChainClientError> {
        let contract = Erc721Contract::new(&self.provider, &self.network.contract_address)?;
        contract.balance_of(wallet).await
    }
}

/// Errors that can occur during chain reads.
#[derive(Debug, thiserror::Error)]
pub enum ChainClientError {
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("RPC error: {0}")]
    RpcError(String),

    #[error("Contract error: {0}")]
    ContractError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(rpc_url: &str) -> NetworkConfig {
        NetworkConfig {
            name: "Test".to_string(),
            chain_id: 1,
            rpc_url: rpc_url.to_string(),
            contract_address: "0xC1C4d4A5A384DE53BcFadB43D0e8b08966195757".to_string(),
        }
    }

    #[test]
    fn client_rejects_unparseable_rpc_urls() {
        let error = ChainClient::new(network("not a url")).unwrap_err();
        assert!(matches!(error, ChainClientError::InvalidRpcUrl(_)));
    }

    #[test]
    fn client_accepts_valid_rpc_urls() {
        let client = ChainClient::new(network("http://127.0.0.1:8545")).unwrap();
        assert_eq!(client.network().name, "Test");
    }
}
