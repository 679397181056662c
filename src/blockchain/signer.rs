// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Signer interface used by contract handles to submit transactions.

use std::sync::Arc;

use alloy::{
    primitives::{Address, TxHash},
    rpc::types::TransactionRequest,
};
use async_trait::async_trait;

use super::error::DetherError;
use super::types::{Connection, TxOptions};

/// Anything that can sign and broadcast a transaction for one account.
#[async_trait]
pub trait TransactionSigner: Send + Sync {
    /// Account the signer sends from.
    fn address(&self) -> Address;

    /// Endpoint the signer broadcasts to, if connected.
    fn connection(&self) -> Option<&Connection>;

    /// Sign and broadcast `tx`, returning its hash.
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, DetherError>;
}

/// Signer adapter that merges fixed [`TxOptions`] into every request before
/// forwarding it to the wrapped signer.
///
/// Options win over fields already set on the request.
pub struct CustomSigner {
    inner: Arc<dyn TransactionSigner>,
    options: TxOptions,
}

impl CustomSigner {
    pub fn new(inner: Arc<dyn TransactionSigner>, options: TxOptions) -> Self {
        Self { inner, options }
    }

    pub fn options(&self) -> &TxOptions {
        &self.options
    }

    fn apply(&self, mut tx: TransactionRequest) -> TransactionRequest {
        if let Some(value) = self.options.value {
            tx = tx.value(value);
        }
        if let Some(limit) = self.options.gas_limit {
            tx = tx.gas_limit(limit);
        }
        tx
    }
}

#[async_trait]
impl TransactionSigner for CustomSigner {
    fn address(&self) -> Address {
        self.inner.address()
    }

    fn connection(&self) -> Option<&Connection> {
        self.inner.connection()
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, DetherError> {
        self.inner.send_transaction(self.apply(tx)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::ETH_KOVAN;
    use crate::testing::RecordingSigner;
    use alloy::primitives::U256;

    #[tokio::test]
    async fn forwards_with_options_merged() {
        let inner = Arc::new(RecordingSigner::new(Some(Connection::for_network(&ETH_KOVAN))));
        let custom = CustomSigner::new(inner.clone(), TxOptions::with_value(U256::from(12u64)));

        let hash = custom
            .send_transaction(TransactionRequest::default())
            .await
            .unwrap();

        assert_eq!(hash, RecordingSigner::HASH);
        let sent = inner.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].value, Some(U256::from(12u64)));
        assert_eq!(sent[0].gas, None);
    }

    #[tokio::test]
    async fn options_override_request_fields() {
        let inner = Arc::new(RecordingSigner::new(None));
        let options = TxOptions {
            value: Some(U256::from(5u64)),
            gas_limit: Some(300_000),
        };
        let custom = CustomSigner::new(inner.clone(), options);

        let tx = TransactionRequest::default().value(U256::from(1u64));
        custom.send_transaction(tx).await.unwrap();

        let sent = inner.sent();
        assert_eq!(sent[0].value, Some(U256::from(5u64)));
        assert_eq!(sent[0].gas, Some(300_000));
    }

    #[test]
    fn exposes_inner_address_and_connection() {
        let conn = Connection::for_network(&ETH_KOVAN);
        let inner = Arc::new(RecordingSigner::new(Some(conn.clone())));
        let custom = CustomSigner::new(inner.clone(), TxOptions::default());

        assert_eq!(custom.address(), inner.address());
        assert_eq!(custom.connection(), Some(&conn));
    }
}
