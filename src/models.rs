// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response bodies of the REST API. Amounts cross the API as
//! decimal strings on input and as numbers on output; addresses and hashes
//! are 0x-prefixed hex strings.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Escrowed balance of a teller.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct BalanceResponse {
    /// Teller address
    pub address: String,
    /// Network name
    pub network: String,
    /// Chain ID
    pub chain_id: u64,
    /// Balance in whole tokens
    pub balance: f64,
}

/// Operator wallet summary.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserResponse {
    /// Wallet address
    pub address: String,
    /// Network name
    pub network: String,
    /// Chain ID
    pub chain_id: u64,
}

/// Coin transfer out of the operator's escrow.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct SendCoinRequest {
    /// Recipient address
    pub receiver: String,
    /// Amount in whole tokens (e.g. "1.5")
    pub amount: String,
}

/// Submitted transaction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct TxResponse {
    /// Transaction hash
    pub tx_hash: String,
    /// Explorer URL for the transaction
    pub explorer_url: String,
}
