// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment once at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `DETHER_NETWORK` | `mainnet` or `kovan` | `kovan` |
//! | `DETHER_RPC_URL` | RPC endpoint override | network preset |
//! | `DETHER_CONTRACT_ADDRESS` | Deployed Dether contract | Required |
//! | `DETHER_WALLET_PEM` | Path to the operator wallet key (PEM) | Unset (read-only) |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::path::PathBuf;

use alloy::primitives::Address;

use crate::blockchain::{network_by_name, parse_address, Connection};

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const NETWORK_ENV: &str = "DETHER_NETWORK";
pub const RPC_URL_ENV: &str = "DETHER_RPC_URL";
pub const CONTRACT_ADDRESS_ENV: &str = "DETHER_CONTRACT_ADDRESS";
pub const WALLET_PEM_ENV: &str = "DETHER_WALLET_PEM";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_NETWORK: &str = "kovan";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Service configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub connection: Connection,
    pub contract_address: Address,
    pub wallet_pem: Option<PathBuf>,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host = get(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get(PORT_ENV) {
            Some(raw) => raw.parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                name: PORT_ENV,
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let network_name = get(NETWORK_ENV).unwrap_or_else(|| DEFAULT_NETWORK.to_string());
        let network = network_by_name(&network_name).map_err(|reason| ConfigError::Invalid {
            name: NETWORK_ENV,
            reason,
        })?;
        let mut connection = Connection::for_network(&network);
        if let Some(rpc_url) = get(RPC_URL_ENV) {
            connection = connection.with_rpc_url(rpc_url);
        }

        let contract_address = get(CONTRACT_ADDRESS_ENV)
            .ok_or(ConfigError::Missing(CONTRACT_ADDRESS_ENV))
            .and_then(|raw| {
                parse_address(&raw).map_err(|e| ConfigError::Invalid {
                    name: CONTRACT_ADDRESS_ENV,
                    reason: e.to_string(),
                })
            })?;

        Ok(Self {
            host,
            port,
            connection,
            contract_address,
            wallet_pem: get(WALLET_PEM_ENV).map(PathBuf::from),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
