// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User session: a wallet plus a signed Dether contract handle.
//!
//! Each method is one independent round trip. No nonce sequencing is done
//! here; concurrent submissions from the same session are ordered by the
//! wallet and the network, not by this type.

use std::sync::Arc;

use alloy::primitives::TxHash;

use crate::blockchain::{
    parse_address, parse_ether, ContractBinding, CustomSigner, DetherContract, DetherError,
    TransactionSigner, TxOptions, Wallet,
};

use super::context::DetherContext;
use super::teller::{SellPoint, TellerInfo};

pub struct DetherUser {
    context: Arc<DetherContext>,
    wallet: Arc<dyn TransactionSigner>,
    signed_contract: Arc<dyn DetherContract>,
}

impl DetherUser {
    /// Connect `wallet` to the context's network and bind a signed contract
    /// handle to it.
    pub fn new(context: Arc<DetherContext>, mut wallet: Wallet) -> Result<Self, DetherError> {
        wallet.connect(context.connection().clone());
        Self::with_signer(context, Arc::new(wallet))
    }

    /// Session over an arbitrary signer. The signer is used as given; its
    /// connection is not replaced.
    pub fn with_signer(
        context: Arc<DetherContext>,
        wallet: Arc<dyn TransactionSigner>,
    ) -> Result<Self, DetherError> {
        let signed_contract = context
            .factory()
            .dether_contract(ContractBinding::Signer(wallet.clone()))
            .ok_or_else(|| {
                DetherError::InvalidProvider("No contract for wallet provider".to_string())
            })?;

        tracing::debug!(address = %wallet.address(), "User session ready");

        Ok(Self {
            context,
            wallet,
            signed_contract,
        })
    }

    pub fn context(&self) -> &Arc<DetherContext> {
        &self.context
    }

    pub fn wallet(&self) -> &Arc<dyn TransactionSigner> {
        &self.wallet
    }

    pub fn signed_contract(&self) -> &Arc<dyn DetherContract> {
        &self.signed_contract
    }

    /// Contract handle whose transactions carry `options` (e.g. an attached
    /// value) on top of the wallet's defaults.
    pub fn custom_contract(
        &self,
        options: TxOptions,
    ) -> Result<Arc<dyn DetherContract>, DetherError> {
        let signer = CustomSigner::new(self.wallet.clone(), options);
        self.context
            .factory()
            .dether_contract(ContractBinding::Signer(Arc::new(signer)))
            .ok_or_else(|| {
                DetherError::InvalidProvider("No contract for wallet provider".to_string())
            })
    }

    fn address_hex(&self) -> String {
        self.wallet.address().to_string()
    }

    /// Sell point registered by this wallet.
    pub async fn get_info(&self) -> Result<TellerInfo, DetherError> {
        self.context.get_teller(&self.address_hex()).await
    }

    /// Escrowed balance of this wallet, in whole tokens.
    pub async fn get_balance(&self) -> Result<f64, DetherError> {
        self.context.get_balance(&self.address_hex()).await
    }

    /// Register a sell point, depositing `sell_point.amount` as escrow.
    pub async fn add_sell_point(&self, sell_point: &SellPoint) -> Result<TxHash, DetherError> {
        let args = sell_point.register_args()?;
        let value = sell_point.value()?;

        let contract = self.custom_contract(TxOptions::with_value(value))?;
        let hash = contract.register_point(args).await?;

        tracing::info!(
            tx_hash = %hash,
            zone = sell_point.zone,
            value = %value,
            "Sell point registration submitted"
        );
        Ok(hash)
    }

    /// Transfer `amount` tokens (decimal) from the escrow to `receiver`.
    pub async fn send_coin(&self, receiver: &str, amount: &str) -> Result<TxHash, DetherError> {
        let receiver = parse_address(receiver)?;
        let amount = parse_ether(amount)?;

        let hash = self.signed_contract.send_coin(receiver, amount).await?;

        tracing::info!(
            tx_hash = %hash,
            receiver = %receiver,
            amount = %amount,
            "Coin transfer submitted"
        );
        Ok(hash)
    }

    /// Withdraw the whole escrowed balance.
    pub async fn withdraw_all(&self) -> Result<TxHash, DetherError> {
        let hash = self.signed_contract.withdraw_all().await?;

        tracing::info!(tx_hash = %hash, "Withdrawal submitted");
        Ok(hash)
    }
}

impl std::fmt::Debug for DetherUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetherUser")
            .field("address", &self.wallet.address())
            .field("connection", self.context.connection())
            .finish_non_exhaustive()
    }
}
