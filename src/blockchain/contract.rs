// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Dether contract interface, contract handles and the factory that binds
//! them to a provider URL or a signer.

use std::sync::Arc;

use alloy::{
    primitives::{Address, Bytes, FixedBytes, TxHash, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    sol,
    sol_types::SolCall,
};
use async_trait::async_trait;

use super::error::DetherError;
use super::signer::TransactionSigner;

// Subset of the Dether ABI used by this client.
sol! {
    interface IDether {
        function getTellerBalances(address teller) external view returns (uint256);
        function getTeller(address teller) external view returns (
            int32 lat,
            int32 lng,
            int16 zoneId,
            int16 rate,
            int8 avatarId,
            int8 currencyId,
            bytes16 messagingAddr,
            bytes16 name,
            uint256 balance
        );
        function registerPoint(
            int32 lat,
            int32 lng,
            int16 zone,
            int16 rate,
            int8 avatarId,
            int8 currencyId,
            bytes16 messagingAddr,
            bytes16 name
        ) external payable;
        function sendCoin(address receiver, uint256 amount) external returns (bool);
        function withdrawAll() external;
    }
}

/// Arguments of `registerPoint`, already scaled to their on-chain types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterPointArgs {
    pub lat: i32,
    pub lng: i32,
    pub zone: i16,
    pub rate: i16,
    pub avatar: i8,
    pub currency: i8,
    pub telegram: FixedBytes<16>,
    pub username: FixedBytes<16>,
}

impl RegisterPointArgs {
    fn to_call(&self) -> IDether::registerPointCall {
        IDether::registerPointCall {
            lat: self.lat,
            lng: self.lng,
            zone: self.zone,
            rate: self.rate,
            avatarId: self.avatar,
            currencyId: self.currency,
            messagingAddr: self.telegram,
            name: self.username,
        }
    }
}

/// Raw `getTeller` record as stored on chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TellerRecord {
    pub lat: i32,
    pub lng: i32,
    pub zone: i16,
    pub rate: i16,
    pub avatar: i8,
    pub currency: i8,
    pub telegram: FixedBytes<16>,
    pub username: FixedBytes<16>,
    pub balance: U256,
}

/// Handle on a deployed Dether contract.
///
/// Write methods require a handle bound to a signer.
#[async_trait]
pub trait DetherContract: Send + Sync {
    /// Raw ABI return data of `getTellerBalances(teller)`.
    async fn get_teller_balances(&self, teller: Address) -> Result<Bytes, DetherError>;

    async fn get_teller(&self, teller: Address) -> Result<TellerRecord, DetherError>;

    async fn register_point(&self, args: RegisterPointArgs) -> Result<TxHash, DetherError>;

    async fn send_coin(&self, receiver: Address, amount: U256) -> Result<TxHash, DetherError>;

    async fn withdraw_all(&self) -> Result<TxHash, DetherError>;

    /// Chain id reported by the node behind this handle.
    async fn chain_id(&self) -> Result<u64, DetherError>;
}

/// What a contract handle is bound to.
#[derive(Clone)]
pub enum ContractBinding {
    /// Read-only handle over an RPC URL.
    Url(String),
    /// Signing handle; reads go to the signer's connection.
    Signer(Arc<dyn TransactionSigner>),
}

impl std::fmt::Debug for ContractBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContractBinding::Url(url) => f.debug_tuple("Url").field(url).finish(),
            ContractBinding::Signer(signer) => {
                f.debug_tuple("Signer").field(&signer.address()).finish()
            }
        }
    }
}

/// Source of contract handles. `None` means the binding has no usable
/// provider.
pub trait ContractFactory: Send + Sync {
    fn dether_contract(&self, binding: ContractBinding) -> Option<Arc<dyn DetherContract>>;
}

/// Factory producing alloy-backed handles for one deployed contract.
#[derive(Debug, Clone)]
pub struct AlloyContractFactory {
    dether_address: Address,
}

impl AlloyContractFactory {
    pub fn new(dether_address: Address) -> Self {
        Self { dether_address }
    }

    pub fn dether_address(&self) -> Address {
        self.dether_address
    }
}

impl ContractFactory for AlloyContractFactory {
    fn dether_contract(&self, binding: ContractBinding) -> Option<Arc<dyn DetherContract>> {
        let (rpc_url, signer) = match binding {
            ContractBinding::Url(url) => (url, None),
            ContractBinding::Signer(signer) => {
                let Some(rpc_url) = signer.connection().map(|c| c.rpc_url.clone()) else {
                    tracing::warn!(address = %signer.address(), "Signer has no connection");
                    return None;
                };
                (rpc_url, Some(signer))
            }
        };

        let url: url::Url = match rpc_url.parse() {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(rpc_url = %rpc_url, error = %e, "Invalid provider URL");
                return None;
            }
        };

        let reader = ProviderBuilder::new().connect_http(url).erased();

        Some(Arc::new(AlloyDetherContract {
            address: self.dether_address,
            reader,
            signer,
        }))
    }
}

/// Dether contract over an alloy HTTP provider.
pub struct AlloyDetherContract {
    address: Address,
    reader: DynProvider,
    signer: Option<Arc<dyn TransactionSigner>>,
}

impl AlloyDetherContract {
    async fn read(&self, data: Vec<u8>) -> Result<Bytes, DetherError> {
        let tx = TransactionRequest::default()
            .to(self.address)
            .input(data.into());

        self.reader
            .call(tx)
            .await
            .map_err(|e| DetherError::CallFailed(format!("eth_call failed: {e}")))
    }

    async fn write(&self, data: Vec<u8>) -> Result<TxHash, DetherError> {
        let signer = self.signer.as_ref().ok_or_else(|| {
            DetherError::InvalidProvider("Contract handle has no signer".to_string())
        })?;

        let tx = TransactionRequest::default()
            .to(self.address)
            .input(data.into());

        signer.send_transaction(tx).await
    }
}

#[async_trait]
impl DetherContract for AlloyDetherContract {
    async fn get_teller_balances(&self, teller: Address) -> Result<Bytes, DetherError> {
        self.read(IDether::getTellerBalancesCall { teller }.abi_encode())
            .await
    }

    async fn get_teller(&self, teller: Address) -> Result<TellerRecord, DetherError> {
        let raw = self.read(IDether::getTellerCall { teller }.abi_encode()).await?;
        let ret = IDether::getTellerCall::abi_decode_returns(&raw)
            .map_err(|e| DetherError::CallFailed(format!("Invalid getTeller result: {e}")))?;

        Ok(TellerRecord {
            lat: ret.lat,
            lng: ret.lng,
            zone: ret.zoneId,
            rate: ret.rate,
            avatar: ret.avatarId,
            currency: ret.currencyId,
            telegram: ret.messagingAddr,
            username: ret.name,
            balance: ret.balance,
        })
    }

    async fn register_point(&self, args: RegisterPointArgs) -> Result<TxHash, DetherError> {
        self.write(args.to_call().abi_encode()).await
    }

    async fn send_coin(&self, receiver: Address, amount: U256) -> Result<TxHash, DetherError> {
        self.write(IDether::sendCoinCall { receiver, amount }.abi_encode())
            .await
    }

    async fn withdraw_all(&self) -> Result<TxHash, DetherError> {
        self.write(IDether::withdrawAllCall {}.abi_encode()).await
    }

    async fn chain_id(&self) -> Result<u64, DetherError> {
        self.reader
            .get_chain_id()
            .await
            .map_err(|e| DetherError::CallFailed(format!("eth_chainId failed: {e}")))
    }
}
