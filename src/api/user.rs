// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Operator session endpoints. All of them answer 503 when the service runs
//! without a wallet.

use std::sync::Arc;

use alloy::primitives::TxHash;
use axum::{extract::State, Json};

use crate::{
    dether::{DetherUser, SellPoint, TellerInfo},
    error::ApiError,
    models::{BalanceResponse, SendCoinRequest, TxResponse, UserResponse},
    state::AppState,
};

use super::tellers::balance_response;

fn session(state: &AppState) -> Result<&Arc<DetherUser>, ApiError> {
    state
        .user
        .as_ref()
        .ok_or_else(|| ApiError::service_unavailable("No operator wallet configured"))
}

fn tx_response(state: &AppState, hash: TxHash) -> TxResponse {
    let tx_hash = hash.to_string();
    TxResponse {
        explorer_url: state.context.connection().tx_url(&tx_hash),
        tx_hash,
    }
}

/// Get the operator wallet address and network.
#[utoipa::path(
    get,
    path = "/v1/user",
    tag = "User",
    responses(
        (status = 200, description = "Operator wallet", body = UserResponse),
        (status = 503, description = "No operator wallet configured")
    )
)]
pub async fn get_user(State(state): State<AppState>) -> Result<Json<UserResponse>, ApiError> {
    let user = session(&state)?;
    let connection = state.context.connection();
    Ok(Json(UserResponse {
        address: user.wallet().address().to_string(),
        network: connection.name.clone(),
        chain_id: connection.chain_id,
    }))
}

/// Get the operator's escrowed balance.
#[utoipa::path(
    get,
    path = "/v1/user/balance",
    tag = "User",
    responses(
        (status = 200, description = "Balance retrieved successfully", body = BalanceResponse),
        (status = 503, description = "No operator wallet or network unavailable")
    )
)]
pub async fn get_user_balance(
    State(state): State<AppState>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let user = session(&state)?;
    let balance = user.get_balance().await?;
    let address = user.wallet().address().to_string();
    Ok(Json(balance_response(&state, address, balance)))
}

/// Get the operator's registered sell point.
#[utoipa::path(
    get,
    path = "/v1/user/teller",
    tag = "User",
    responses(
        (status = 200, description = "Teller retrieved successfully", body = TellerInfo),
        (status = 503, description = "No operator wallet or network unavailable")
    )
)]
pub async fn get_user_teller(State(state): State<AppState>) -> Result<Json<TellerInfo>, ApiError> {
    let info = session(&state)?.get_info().await?;
    Ok(Json(info))
}

/// Register a sell point for the operator wallet.
#[utoipa::path(
    post,
    path = "/v1/user/sell-points",
    tag = "User",
    request_body = SellPoint,
    responses(
        (status = 200, description = "Registration submitted", body = TxResponse),
        (status = 400, description = "Invalid sell point"),
        (status = 503, description = "No operator wallet or network unavailable")
    )
)]
pub async fn add_sell_point(
    State(state): State<AppState>,
    Json(sell_point): Json<SellPoint>,
) -> Result<Json<TxResponse>, ApiError> {
    let hash = session(&state)?.add_sell_point(&sell_point).await?;
    Ok(Json(tx_response(&state, hash)))
}

/// Send coin from the operator's escrow.
#[utoipa::path(
    post,
    path = "/v1/user/coins",
    tag = "User",
    request_body = SendCoinRequest,
    responses(
        (status = 200, description = "Transfer submitted", body = TxResponse),
        (status = 400, description = "Invalid receiver or amount"),
        (status = 503, description = "No operator wallet or network unavailable")
    )
)]
pub async fn send_coin(
    State(state): State<AppState>,
    Json(request): Json<SendCoinRequest>,
) -> Result<Json<TxResponse>, ApiError> {
    let hash = session(&state)?
        .send_coin(&request.receiver, &request.amount)
        .await?;
    Ok(Json(tx_response(&state, hash)))
}

/// Withdraw the operator's whole escrow.
#[utoipa::path(
    post,
    path = "/v1/user/withdrawals",
    tag = "User",
    responses(
        (status = 200, description = "Withdrawal submitted", body = TxResponse),
        (status = 503, description = "No operator wallet or network unavailable")
    )
)]
pub async fn withdraw_all(State(state): State<AppState>) -> Result<Json<TxResponse>, ApiError> {
    let hash = session(&state)?.withdraw_all().await?;
    Ok(Json(tx_response(&state, hash)))
}
