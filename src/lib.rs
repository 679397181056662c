// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Dether Client - teller balances and sell-point transactions
//!
//! Client layer over the Dether smart contract: reading a teller's escrowed
//! balance and submitting signed transactions on behalf of a user's wallet.
//! Signing, ABI encoding and transport are delegated to `alloy`.
//!
//! ## Modules
//!
//! - `blockchain` - Contract binding, wallets, signers, unit conversion
//! - `dether` - Balance reader, network context, user session
//! - `api` - HTTP API handlers (Axum)

pub mod api;
pub mod blockchain;
pub mod config;
pub mod dether;
pub mod error;
pub mod models;
pub mod state;
pub mod telemetry;

#[cfg(test)]
pub(crate) mod testing;
