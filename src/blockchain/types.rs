// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain types and constants.

use std::str::FromStr;

use alloy::primitives::{Address, U256};

use super::error::DetherError;

/// Static network preset.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Network name for display
    pub name: &'static str,
    /// Chain ID
    pub chain_id: u64,
    /// Default RPC endpoint URL
    pub rpc_url: &'static str,
    /// Block explorer URL
    pub explorer_url: &'static str,
}

/// Ethereum mainnet configuration.
pub const ETH_MAINNET: NetworkConfig = NetworkConfig {
    name: "Ethereum Mainnet",
    chain_id: 1,
    rpc_url: "https://cloudflare-eth.com",
    explorer_url: "https://etherscan.io",
};

/// Kovan testnet configuration.
pub const ETH_KOVAN: NetworkConfig = NetworkConfig {
    name: "Kovan Testnet",
    chain_id: 42,
    rpc_url: "https://kovan.infura.io",
    explorer_url: "https://kovan.etherscan.io",
};

/// Resolve a network preset by its short identifier.
pub fn network_by_name(raw: &str) -> Result<NetworkConfig, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "mainnet" | "homestead" => Ok(ETH_MAINNET),
        "kovan" => Ok(ETH_KOVAN),
        other => Err(format!(
            "Unsupported network `{other}` (expected `mainnet` or `kovan`)"
        )),
    }
}

/// Endpoint a wallet or contract handle talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub name: String,
    pub chain_id: u64,
    pub rpc_url: String,
    pub explorer_url: String,
}

impl Connection {
    pub fn for_network(network: &NetworkConfig) -> Self {
        Self {
            name: network.name.to_string(),
            chain_id: network.chain_id,
            rpc_url: network.rpc_url.to_string(),
            explorer_url: network.explorer_url.to_string(),
        }
    }

    /// Replace the preset RPC endpoint.
    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = rpc_url.into();
        self
    }

    pub fn tx_url(&self, tx_hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_url, tx_hash)
    }
}

/// Options merged into every transaction sent through a custom signer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TxOptions {
    /// Value attached to the transaction, in wei
    pub value: Option<U256>,
    /// Gas limit override
    pub gas_limit: Option<u64>,
}

impl TxOptions {
    pub fn with_value(value: U256) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }
}

/// Add the `0x` prefix if missing.
pub fn add_0x(address: &str) -> String {
    if address.starts_with("0x") || address.starts_with("0X") {
        address.to_string()
    } else {
        format!("0x{address}")
    }
}

/// Check that `address` is 40 hex digits, optionally `0x`-prefixed.
pub fn is_address(address: &str) -> bool {
    let digits = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address);
    digits.len() == 40 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Validate and parse an account address.
pub fn parse_address(address: &str) -> Result<Address, DetherError> {
    if !is_address(address) {
        return Err(DetherError::InvalidAddress(address.to_string()));
    }
    Address::from_str(&add_0x(address)).map_err(|e| DetherError::InvalidAddress(e.to_string()))
}
