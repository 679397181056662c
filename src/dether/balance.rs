// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Escrowed teller balance reads.

use alloy::sol_types::SolCall;

use crate::blockchain::{
    add_0x, contract::IDether, parse_address, wei_to_decimal, ContractBinding, ContractFactory,
    DetherError,
};

/// Read the escrowed token balance of `address` through `provider_url`.
///
/// Returns the balance in whole tokens (`raw / 10^18`). A result that does not
/// decode as a `uint256` is reported as `0.0`, not as an error.
///
/// # Errors
/// * `InvalidAddress` - `address` is not a 20-byte hex address
/// * `InvalidProvider` - `provider_url` is empty or the factory cannot bind it
/// * `CallFailed` - the read itself failed
pub async fn get_balance(
    factory: &dyn ContractFactory,
    address: &str,
    provider_url: &str,
) -> Result<f64, DetherError> {
    let teller = parse_address(address)?;
    if provider_url.trim().is_empty() {
        return Err(DetherError::InvalidProvider("No provider url".to_string()));
    }

    let contract = factory
        .dether_contract(ContractBinding::Url(provider_url.to_string()))
        .ok_or_else(|| DetherError::InvalidProvider("Invalid provider URL".to_string()))?;

    tracing::debug!(teller = %add_0x(address), "Reading teller balance");

    let raw = contract
        .get_teller_balances(teller)
        .await
        .map_err(|e| match e {
            DetherError::CallFailed(_) => e,
            other => DetherError::call_failed(other),
        })?;

    match IDether::getTellerBalancesCall::abi_decode_returns(&raw) {
        Ok(wei) => Ok(wei_to_decimal(wei)),
        Err(e) => {
            tracing::debug!(error = %e, raw = %raw, "Balance result is not numeric, using 0");
            Ok(0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ContractCall, MockContract, MockFactory};
    use alloy::primitives::{Address, Bytes, U256};
    use std::str::FromStr;
    use std::sync::Arc;

    const TELLER: &str = "0x085b30734fD4f48369D53225b410d7D04b2d9011";
    const RPC: &str = "http://127.0.0.1:8545";

    fn factory_with(contract: MockContract) -> (Arc<MockContract>, MockFactory) {
        let contract = Arc::new(contract);
        (contract.clone(), MockFactory::returning(contract))
    }

    #[tokio::test]
    async fn rejects_malformed_address_before_resolving() {
        let (contract, factory) = factory_with(MockContract::new());

        for bad in ["", "0x123", "hello", "0xZZ5b30734fD4f48369D53225b410d7D04b2d9011"] {
            let err = get_balance(&factory, bad, RPC).await.unwrap_err();
            assert!(matches!(err, DetherError::InvalidAddress(_)), "{bad}");
        }
        assert!(factory.bindings().is_empty());
        assert!(contract.calls().is_empty());
    }

    #[tokio::test]
    async fn rejects_empty_provider_url_before_resolving() {
        let (_, factory) = factory_with(MockContract::new());

        for url in ["", "   "] {
            let err = get_balance(&factory, TELLER, url).await.unwrap_err();
            assert_eq!(err, DetherError::InvalidProvider("No provider url".to_string()));
        }
        assert!(factory.bindings().is_empty());
    }

    #[tokio::test]
    async fn rejects_when_factory_returns_nothing() {
        let factory = MockFactory::empty();

        let err = get_balance(&factory, TELLER, RPC).await.unwrap_err();
        assert_eq!(err, DetherError::InvalidProvider("Invalid provider URL".to_string()));
        assert_eq!(factory.bindings().len(), 1);
    }

    #[tokio::test]
    async fn converts_raw_result_to_tokens() {
        let (contract, factory) =
            factory_with(MockContract::new().with_balance(U256::from(2_500_000_000_000_000_000u64)));

        let balance = get_balance(&factory, TELLER, RPC).await.unwrap();
        assert_eq!(balance, 2.5);

        let teller = Address::from_str(TELLER).unwrap();
        assert_eq!(contract.calls(), vec![ContractCall::GetTellerBalances(teller)]);
        assert!(matches!(
            &factory.bindings()[0],
            ContractBinding::Url(url) if url == RPC
        ));
    }

    #[tokio::test]
    async fn normalizes_unprefixed_address() {
        let (contract, factory) = factory_with(MockContract::new());

        get_balance(&factory, &TELLER[2..], RPC).await.unwrap();

        let teller = Address::from_str(TELLER).unwrap();
        assert_eq!(contract.calls(), vec![ContractCall::GetTellerBalances(teller)]);
    }

    #[tokio::test]
    async fn non_numeric_result_is_zero() {
        for raw in [Bytes::new(), Bytes::from_static(b"not a number")] {
            let (_, factory) = factory_with(MockContract::new().with_raw_balance(raw));
            assert_eq!(get_balance(&factory, TELLER, RPC).await.unwrap(), 0.0);
        }
    }

    #[tokio::test]
    async fn call_failures_are_wrapped() {
        let (_, factory) = factory_with(
            MockContract::new().with_failure(DetherError::InvalidProvider("gone".to_string())),
        );

        let err = get_balance(&factory, TELLER, RPC).await.unwrap_err();
        assert_eq!(err, DetherError::CallFailed("Invalid provider: gone".to_string()));
    }
}
