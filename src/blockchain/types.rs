// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Network configuration and ownership result types.

use std::env;

use serde::Serialize;
use utoipa::ToSchema;

use crate::config::{
    BASE_NFT_CONTRACT_ENV, BASE_RPC_URL_ENV, MONAD_NFT_CONTRACT_ENV, MONAD_RPC_URL_ENV,
};

/// One supported network: a JSON-RPC endpoint plus the NFT collection
/// contract deployed there.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Network name for display
    pub name: String,
    /// Chain ID
    pub chain_id: u64,
    /// RPC endpoint URL
    pub rpc_url: String,
    /// NFT collection contract address
    pub contract_address: String,
}

/// Monad testnet, with env overrides for endpoint and contract.
fn monad_testnet() -> NetworkConfig {
    NetworkConfig {
        name: "Monad Testnet".to_string(),
        chain_id: 10143,
        rpc_url: env::var(MONAD_RPC_URL_ENV)
            .unwrap_or_else(|_| "https://testnet-rpc.monad.xyz".to_string()),
        contract_address: env::var(MONAD_NFT_CONTRACT_ENV)
            .unwrap_or_else(|_| "0xC1C4d4A5A384DE53BcFadB43D0e8b08966195757".to_string()),
    }
}

/// Base mainnet, with env overrides for endpoint and contract.
fn base_mainnet() -> NetworkConfig {
    NetworkConfig {
        name: "Base Mainnet".to_string(),
        chain_id: 8453,
        rpc_url: env::var(BASE_RPC_URL_ENV).unwrap_or_else(|_| "https://1rpc.io/base".to_string()),
        contract_address: env::var(BASE_NFT_CONTRACT_ENV)
            .unwrap_or_else(|_| "0x8cf392D33050F96cF6D0748486490d3dEae52564".to_string()),
    }
}

/// All networks checked during ownership verification. Holding the
/// collection NFT on any single one of them grants access.
pub fn configured_networks() -> Vec<NetworkConfig> {
    vec![monad_testnet(), base_mainnet()]
}

/// Ownership result for a single network.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NetworkOwnership {
    /// Network display name
    pub network: String,
    /// Collection contract queried
    pub contract_address: String,
    /// Whether this network alone grants access
    #[serde(rename = "hasNFT")]
    pub has_nft: bool,
    /// Token balance on this network (0 when the query failed)
    pub balance: u64,
}

/// Aggregated ownership result across all configured networks.
///
/// Computed fresh per verification call, never cached.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NftOwnership {
    /// Whether any network reported a positive balance
    #[serde(rename = "hasNFT")]
    pub has_nft: bool,
    /// Sum of balances across networks
    pub total_balance: u64,
    /// Per-network breakdown
    pub per_network: Vec<NetworkOwnership>,
}

impl NftOwnership {
    /// Aggregate per-network results into the overall verdict.
    pub fn from_balances(per_network: Vec<NetworkOwnership>) -> Self {
        let total_balance = per_network
            .iter()
            .fold(0u64, |sum, network| sum.saturating_add(network.balance));
        Self {
            has_nft: total_balance > 0,
            total_balance,
            per_network,
        }
    }

    /// Only the networks where the wallet actually holds tokens.
    pub fn owned_networks(&self) -> Vec<NetworkOwnership> {
        self.per_network
            .iter()
            .filter(|network| network.balance > 0)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(name: &str, balance: u64) -> NetworkOwnership {
        NetworkOwnership {
            network: name.to_string(),
            contract_address: "0x0000000000000000000000000000000000000001".to_string(),
            has_nft: balance > 0,
            balance,
        }
    }

    #[test]
    fn aggregation_sums_across_networks() {
        let ownership = NftOwnership::from_balances(vec![network("a", 3), network("b", 0)]);
        assert!(ownership.has_nft);
        assert_eq!(ownership.total_balance, 3);
        assert_eq!(ownership.owned_networks().len(), 1);
        assert_eq!(ownership.owned_networks()[0].network, "a");
    }

    #[test]
    fn zero_everywhere_means_no_nft() {
        let ownership = NftOwnership::from_balances(vec![network("a", 0), network("b", 0)]);
        assert!(!ownership.has_nft);
        assert_eq!(ownership.total_balance, 0);
        assert!(ownership.owned_networks().is_empty());
    }

    #[test]
    fn aggregate_saturates_instead_of_overflowing() {
        let ownership =
            NftOwnership::from_balances(vec![network("a", u64::MAX), network("b", 1)]);
        assert_eq!(ownership.total_balance, u64::MAX);
        assert!(ownership.has_nft);
    }

    #[test]
    fn serialized_field_names_match_the_api_contract() {
        let json =
            serde_json::to_value(NftOwnership::from_balances(vec![network("a", 2)])).unwrap();
        assert_eq!(json["hasNFT"], true);
        assert_eq!(json["totalBalance"], 2);
        assert_eq!(json["perNetwork"][0]["hasNFT"], true);
        assert_eq!(json["perNetwork"][0]["contractAddress"].as_str().is_some(), true);
    }
}
