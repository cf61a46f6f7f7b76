// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! ERC-721 collection contract reads.

use std::str::FromStr;

use alloy::{
    primitives::{Address, U256},
    providers::Provider,
    sol,
};

use super::client::ChainClientError;
use crate::models::WalletAddress;

// The only read the ownership check needs from the collection contract.
sol! {
    #[sol(rpc)]
    interface IERC721 {
        function balanceOf(address owner) external view returns (uint256);
    }
}

/// ERC-721 contract wrapper.
pub struct Erc721Contract<P> {
    contract: IERC721::IERC721Instance<P>,
}

impl<P: Provider + Clone> Erc721Contract<P> {
    /// Create a new contract instance against a provider.
    pub fn new(provider: &P, contract_address: &str) -> Result<Self, ChainClientError> {
        let address = Address::from_str(contract_address)
            .map_err(|e| ChainClientError::InvalidAddress(e.to_string()))?;

        Ok(Self {
            contract: IERC721::new(address, provider.clone()),
        })
    }

    /// Get the token balance of a wallet.
    pub async fn balance_of(&self, wallet: &WalletAddress) -> Result<U256, ChainClientError> {
        self.contract
            .balanceOf(wallet.address())
            .call()
            .await
            .map_err(|e| ChainClientError::ContractError(e.to_string()))
    }
}
