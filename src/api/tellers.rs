// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Read-only teller endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{dether::TellerInfo, error::ApiError, models::BalanceResponse, state::AppState};

pub(crate) fn balance_response(state: &AppState, address: String, balance: f64) -> BalanceResponse {
    let connection = state.context.connection();
    BalanceResponse {
        address,
        network: connection.name.clone(),
        chain_id: connection.chain_id,
        balance,
    }
}

/// Get the escrowed token balance of a teller.
#[utoipa::path(
    get,
    path = "/v1/tellers/{address}/balance",
    tag = "Tellers",
    params(
        ("address" = String, Path, description = "Teller address")
    ),
    responses(
        (status = 200, description = "Balance retrieved successfully", body = BalanceResponse),
        (status = 400, description = "Invalid address"),
        (status = 503, description = "Blockchain network unavailable")
    )
)]
pub async fn get_teller_balance(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<BalanceResponse>, ApiError> {
    let balance = state.context.get_balance(&address).await?;
    Ok(Json(balance_response(&state, address, balance)))
}

/// Get the sell point registered by a teller.
#[utoipa::path(
    get,
    path = "/v1/tellers/{address}",
    tag = "Tellers",
    params(
        ("address" = String, Path, description = "Teller address")
    ),
    responses(
        (status = 200, description = "Teller retrieved successfully", body = TellerInfo),
        (status = 400, description = "Invalid address"),
        (status = 503, description = "Blockchain network unavailable")
    )
)]
pub async fn get_teller(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<TellerInfo>, ApiError> {
    let info = state.context.get_teller(&address).await?;
    Ok(Json(info))
}
