// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dether::{SellPoint, TellerInfo},
    models::{BalanceResponse, SendCoinRequest, TxResponse, UserResponse},
    state::AppState,
};

pub mod health;
pub mod tellers;
pub mod user;

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/tellers/{address}", get(tellers::get_teller))
        .route(
            "/tellers/{address}/balance",
            get(tellers::get_teller_balance),
        )
        .route("/user", get(user::get_user))
        .route("/user/balance", get(user::get_user_balance))
        .route("/user/teller", get(user::get_user_teller))
        .route("/user/sell-points", post(user::add_sell_point))
        .route("/user/coins", post(user::send_coin))
        .route("/user/withdrawals", post(user::withdraw_all));

    let health_routes = Router::new()
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness));

    Router::new()
        .nest("/v1", v1_routes)
        .nest("/health", health_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::liveness,
        health::readiness,
        tellers::get_teller,
        tellers::get_teller_balance,
        user::get_user,
        user::get_user_balance,
        user::get_user_teller,
        user::add_sell_point,
        user::send_coin,
        user::withdraw_all
    ),
    components(
        schemas(
            BalanceResponse,
            UserResponse,
            SendCoinRequest,
            TxResponse,
            SellPoint,
            TellerInfo,
            health::HealthResponse,
            health::ReadyResponse,
            health::HealthChecks
        )
    ),
    tags(
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Tellers", description = "Teller balances and sell points"),
        (name = "User", description = "Operator wallet session")
    )
)]
struct ApiDoc;
