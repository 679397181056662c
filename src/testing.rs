// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Recording test doubles for the contract factory, contract handles and
//! signers.

use std::sync::{Arc, Mutex};

use alloy::{
    primitives::{address, b256, Address, Bytes, TxHash, U256},
    rpc::types::TransactionRequest,
};
use async_trait::async_trait;

use crate::blockchain::{
    Connection, ContractBinding, ContractFactory, DetherContract, DetherError, RegisterPointArgs,
    TellerRecord, TransactionSigner,
};

/// Signer that records requests instead of broadcasting them.
pub struct RecordingSigner {
    connection: Option<Connection>,
    sent: Mutex<Vec<TransactionRequest>>,
}

impl RecordingSigner {
    pub const ADDRESS: Address = address!("0x00000000000000000000000000000000000a11ce");
    pub const HASH: TxHash =
        b256!("0x1111111111111111111111111111111111111111111111111111111111111111");

    pub fn new(connection: Option<Connection>) -> Self {
        Self {
            connection,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<TransactionRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransactionSigner for RecordingSigner {
    fn address(&self) -> Address {
        Self::ADDRESS
    }

    fn connection(&self) -> Option<&Connection> {
        self.connection.as_ref()
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<TxHash, DetherError> {
        self.sent.lock().unwrap().push(tx);
        Ok(Self::HASH)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractCall {
    GetTellerBalances(Address),
    GetTeller(Address),
    RegisterPoint(RegisterPointArgs),
    SendCoin(Address, U256),
    WithdrawAll,
}

/// Contract handle returning canned results and recording every call.
pub struct MockContract {
    calls: Mutex<Vec<ContractCall>>,
    balances: Result<Bytes, DetherError>,
    teller: Option<TellerRecord>,
    chain_id: Option<u64>,
}

impl MockContract {
    pub const HASH: TxHash =
        b256!("0xabababababababababababababababababababababababababababababababab");

    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            balances: Ok(encode_uint(U256::ZERO)),
            teller: None,
            chain_id: Some(42),
        }
    }

    /// Answer `getTellerBalances` with the ABI encoding of `wei`.
    pub fn with_balance(self, wei: U256) -> Self {
        self.with_raw_balance(encode_uint(wei))
    }

    pub fn with_raw_balance(mut self, raw: Bytes) -> Self {
        self.balances = Ok(raw);
        self
    }

    pub fn with_failure(mut self, err: DetherError) -> Self {
        self.balances = Err(err);
        self
    }

    pub fn with_teller(mut self, record: TellerRecord) -> Self {
        self.teller = Some(record);
        self
    }

    /// Report `chain_id` from `eth_chainId`, or fail when `None`.
    pub fn with_chain_id(mut self, chain_id: Option<u64>) -> Self {
        self.chain_id = chain_id;
        self
    }

    pub fn calls(&self) -> Vec<ContractCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ContractCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl DetherContract for MockContract {
    async fn get_teller_balances(&self, teller: Address) -> Result<Bytes, DetherError> {
        self.record(ContractCall::GetTellerBalances(teller));
        self.balances.clone()
    }

    async fn get_teller(&self, teller: Address) -> Result<TellerRecord, DetherError> {
        self.record(ContractCall::GetTeller(teller));
        self.teller
            .clone()
            .ok_or_else(|| DetherError::call_failed("execution reverted"))
    }

    async fn register_point(&self, args: RegisterPointArgs) -> Result<TxHash, DetherError> {
        self.record(ContractCall::RegisterPoint(args));
        Ok(Self::HASH)
    }

    async fn send_coin(&self, receiver: Address, amount: U256) -> Result<TxHash, DetherError> {
        self.record(ContractCall::SendCoin(receiver, amount));
        Ok(Self::HASH)
    }

    async fn withdraw_all(&self) -> Result<TxHash, DetherError> {
        self.record(ContractCall::WithdrawAll);
        Ok(Self::HASH)
    }

    async fn chain_id(&self) -> Result<u64, DetherError> {
        self.chain_id
            .ok_or_else(|| DetherError::call_failed("connection refused"))
    }
}

/// Factory handing out one shared [`MockContract`] (or nothing) and
/// recording every binding it was asked for.
pub struct MockFactory {
    contract: Option<Arc<MockContract>>,
    bindings: Mutex<Vec<ContractBinding>>,
}

impl MockFactory {
    pub fn returning(contract: Arc<MockContract>) -> Self {
        Self {
            contract: Some(contract),
            bindings: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self {
            contract: None,
            bindings: Mutex::new(Vec::new()),
        }
    }

    pub fn bindings(&self) -> Vec<ContractBinding> {
        self.bindings.lock().unwrap().clone()
    }
}

impl ContractFactory for MockFactory {
    fn dether_contract(&self, binding: ContractBinding) -> Option<Arc<dyn DetherContract>> {
        self.bindings.lock().unwrap().push(binding);
        self.contract
            .clone()
            .map(|contract| contract as Arc<dyn DetherContract>)
    }
}

pub fn encode_uint(value: U256) -> Bytes {
    Bytes::copy_from_slice(&value.to_be_bytes::<32>())
}
