// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::blockchain::ContractBinding;
use crate::state::AppState;

/// Health check response with individual component status.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadyResponse {
    /// Overall health status ("ok" or "degraded").
    pub status: String,
    /// Individual health checks and their results.
    pub checks: HealthChecks,
}

/// Individual health check results.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthChecks {
    /// Whether the service process is running.
    pub service: String,
    /// Whether the RPC node answers on the configured chain.
    pub provider: String,
    /// Operator wallet status ("configured" or "absent").
    pub wallet: String,
}

/// Simple health check response for liveness probes.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Round trip to the node: `eth_chainId` must answer with the configured
/// chain id.
async fn check_provider(state: &AppState) -> bool {
    let connection = state.context.connection();
    let Some(contract) = state
        .context
        .factory()
        .dether_contract(ContractBinding::Url(connection.rpc_url.clone()))
    else {
        return false;
    };

    match contract.chain_id().await {
        Ok(chain_id) if chain_id == connection.chain_id => true,
        Ok(chain_id) => {
            tracing::warn!(
                expected = connection.chain_id,
                actual = chain_id,
                "Provider is on the wrong chain"
            );
            false
        }
        Err(e) => {
            tracing::warn!(error = %e, "Provider health check failed");
            false
        }
    }
}

/// Liveness probe handler.
///
/// Always returns 200 if the process is running.
#[utoipa::path(
    get,
    path = "/health/live",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    )
)]
pub async fn liveness() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Readiness probe handler.
///
/// Returns 503 when the RPC node is unreachable or on another chain. A missing
/// operator wallet does not make the service unready.
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Service is ready", body = ReadyResponse),
        (status = 503, description = "Provider unavailable", body = ReadyResponse)
    )
)]
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let provider_ok = check_provider(&state).await;

    let response = ReadyResponse {
        status: if provider_ok { "ok" } else { "degraded" }.to_string(),
        checks: HealthChecks {
            service: "ok".to_string(),
            provider: if provider_ok { "ok" } else { "unavailable" }.to_string(),
            wallet: if state.user.is_some() {
                "configured"
            } else {
                "absent"
            }
            .to_string(),
        },
    };

    let status = if provider_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
