// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Network context shared by balance reads and user sessions.

use std::sync::Arc;

use crate::blockchain::{parse_address, Connection, ContractBinding, ContractFactory, DetherError};

use super::balance;
use super::teller::TellerInfo;

/// Connection to one Dether deployment plus the factory that binds contract
/// handles to it.
#[derive(Clone)]
pub struct DetherContext {
    connection: Connection,
    factory: Arc<dyn ContractFactory>,
}

impl DetherContext {
    pub fn new(connection: Connection, factory: Arc<dyn ContractFactory>) -> Self {
        Self {
            connection,
            factory,
        }
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn factory(&self) -> &Arc<dyn ContractFactory> {
        &self.factory
    }

    /// Escrowed balance of `address`, in whole tokens.
    pub async fn get_balance(&self, address: &str) -> Result<f64, DetherError> {
        balance::get_balance(self.factory.as_ref(), address, &self.connection.rpc_url).await
    }

    /// Registered sell point of `address`.
    pub async fn get_teller(&self, address: &str) -> Result<TellerInfo, DetherError> {
        let teller = parse_address(address)?;
        let contract = self
            .factory
            .dether_contract(ContractBinding::Url(self.connection.rpc_url.clone()))
            .ok_or_else(|| DetherError::InvalidProvider("Invalid provider URL".to_string()))?;

        let record = contract.get_teller(teller).await?;
        Ok(TellerInfo::from(record))
    }
}

impl std::fmt::Debug for DetherContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetherContext")
            .field("connection", &self.connection)
            .finish_non_exhaustive()
    }
}
