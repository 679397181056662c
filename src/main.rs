// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use dether_client::{
    api::router,
    blockchain::{AlloyContractFactory, Wallet},
    config::ServiceConfig,
    dether::{DetherContext, DetherUser},
    state::AppState,
    telemetry::{init_tracing, LogFormat},
};

#[tokio::main]
async fn main() {
    init_tracing(LogFormat::from_env());

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Dether client service failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServiceConfig::from_env()?;

    let factory = Arc::new(AlloyContractFactory::new(config.contract_address));
    let context = Arc::new(DetherContext::new(config.connection.clone(), factory));

    let user = match &config.wallet_pem {
        Some(path) => {
            let pem = std::fs::read(path)?;
            let user = DetherUser::new(context.clone(), Wallet::from_pem(&pem)?)?;
            tracing::info!(address = %user.wallet().address(), "Operator wallet loaded");
            Some(user)
        }
        None => {
            tracing::info!("No operator wallet configured, user endpoints disabled");
            None
        }
    };

    let app = router(AppState::new(context, user));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        %addr,
        network = %config.connection.name,
        chain_id = config.connection.chain_id,
        contract = %config.contract_address,
        "Dether client listening (docs at /docs)"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
