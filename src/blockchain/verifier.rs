// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Concurrent multi-network ownership verification.

use std::sync::Arc;

use alloy::primitives::U256;

use super::client::{ChainClient, ChainClientError};
use super::types::{NetworkConfig, NetworkOwnership, NftOwnership};
use crate::models::WalletAddress;

/// Checks NFT ownership across every configured network.
pub struct NftVerifier {
    clients: Vec<Arc<ChainClient>>,
}

impl NftVerifier {
    /// Build one chain client per configured network.
    pub fn new(networks: Vec<NetworkConfig>) -> Result<Self, ChainClientError> {
        let clients = networks
            .into_iter()
            .map(|network| ChainClient::new(network).map(Arc::new))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { clients })
    }

    /// Query every configured network concurrently and aggregate.
    ///
    /// A network that fails to answer (transport error or RPC error
    /// response) counts as balance 0 instead of failing the whole check;
    /// ownership on any single network is sufficient.
    pub async fn verify(&self, wallet: &WalletAddress) -> NftOwnership {
        let mut queries = Vec::with_capacity(self.clients.len());
        for client in &self.clients {
            let client = Arc::clone(client);
            let wallet = wallet.clone();
            queries.push(tokio::spawn(async move {
                let balance = match client.nft_balance(&wallet).await {
                    Ok(balance) => balance,
                    Err(error) => {
                        tracing::warn!(
                            network = %client.network().name,
                            %error,
                            "NFT balance query failed; counting this network as zero"
                        );
                        U256::ZERO
                    }
                };
                NetworkOwnership {
                    network: client.network().name.clone(),
                    contract_address: client.network().contract_address.clone(),
                    has_nft: !balance.is_zero(),
                    balance: u64::try_from(balance).unwrap_or(u64::MAX),
                }
            }));
        }

        let mut per_network = Vec::with_capacity(queries.len());
        for query in queries {
            match query.await {
                Ok(result) => per_network.push(result),
                Err(error) => tracing::warn!(%error, "NFT balance task failed"),
            }
        }

        NftOwnership::from_balances(per_network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::routing::post;
    use axum::{Json, Router};

    /// Bind a mock JSON-RPC endpoint answering `eth_call` with `result`,
    /// or an RPC error object when `result` is `None`.
    async fn spawn_rpc(result: Option<u64>) -> String {
        let handler = move |Json(request): Json<serde_json::Value>| async move {
            let body = match result {
                Some(balance) => serde_json::json!({
                    "jsonrpc": "2.0",
                    "id": request["id"],
                    "result": format!("0x{balance:064x}"),
                }),
                None => serde_json::json!({
                    "jsonrpc": "2.0",
                    "id": request["id"],
                    "error": { "code": -32000, "message": "execution reverted" },
                }),
            };
            Json(body)
        };
        let app = Router::new().route("/", post(handler));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/")
    }

    fn network(name: &str, rpc_url: String) -> NetworkConfig {
        NetworkConfig {
            name: name.to_string(),
            chain_id: 1,
            rpc_url,
            contract_address: "0xC1C4d4A5A384DE53BcFadB43D0e8b08966195757".to_string(),
        }
    }

    fn wallet() -> WalletAddress {
        WalletAddress::parse("0x0000000000000000000000000000000000000001").unwrap()
    }

    #[tokio::test]
    async fn balances_are_summed_across_networks() {
        let first = spawn_rpc(Some(2)).await;
        let second = spawn_rpc(Some(1)).await;
        let verifier =
            NftVerifier::new(vec![network("a", first), network("b", second)]).unwrap();

        let ownership = verifier.verify(&wallet()).await;
        assert!(ownership.has_nft);
        assert_eq!(ownership.total_balance, 3);
        assert_eq!(ownership.per_network.len(), 2);
    }

    #[tokio::test]
    async fn single_network_failure_degrades_to_zero() {
        let healthy = spawn_rpc(Some(3)).await;
        let failing = spawn_rpc(None).await;
        let verifier =
            NftVerifier::new(vec![network("a", healthy), network("b", failing)]).unwrap();

        let ownership = verifier.verify(&wallet()).await;
        assert!(ownership.has_nft);
        assert_eq!(ownership.total_balance, 3);

        let failed = ownership
            .per_network
            .iter()
            .find(|entry| entry.network == "b")
            .unwrap();
        assert_eq!(failed.balance, 0);
        assert!(!failed.has_nft);
    }

    #[tokio::test]
    async fn unreachable_endpoint_degrades_to_zero() {
        let healthy = spawn_rpc(Some(1)).await;
        // Nothing listens on port 1; the transport error must be absorbed.
        let verifier = NftVerifier::new(vec![
            network("a", healthy),
            network("b", "http://127.0.0.1:1/".to_string()),
        ])
        .unwrap();

        let ownership = verifier.verify(&wallet()).await;
        assert!(ownership.has_nft);
        assert_eq!(ownership.total_balance, 1);
    }

    #[tokio::test]
    async fn zero_balance_everywhere_denies_ownership() {
        let first = spawn_rpc(Some(0)).await;
        let second = spawn_rpc(Some(0)).await;
        let verifier =
            NftVerifier::new(vec![network("a", first), network("b", second)]).unwrap();

        let ownership = verifier.verify(&wallet()).await;
        assert!(!ownership.has_nft);
        assert_eq!(ownership.total_balance, 0);
    }
}
