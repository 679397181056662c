// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain integration module for the Dether contract.
//!
//! This module provides functionality for:
//! - Binding contract handles to a provider URL or a signer
//! - Local wallets and the signer interface
//! - Token unit conversion

pub mod contract;
pub mod error;
pub mod signer;
pub mod types;
pub mod units;
pub mod wallet;

pub use contract::{
    AlloyContractFactory, ContractBinding, ContractFactory, DetherContract, RegisterPointArgs,
    TellerRecord,
};
pub use error::{DetherError, ErrorKind};
pub use signer::{CustomSigner, TransactionSigner};
pub use types::*;
pub use units::{format_ether, parse_ether, wei_to_decimal};
pub use wallet::Wallet;
