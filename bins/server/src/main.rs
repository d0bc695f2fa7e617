//! Ledgerly API Server
//!
//! Main entry point for the Ledgerly backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ledgerly_api::{AppState, create_router};
use ledgerly_core::auth::{AccountService, IdentityResolver};
use ledgerly_core::ledger::{LedgerEngine, StatementRules};
use ledgerly_db::{AccountRepository, StatementRepository, connect_with};
use ledgerly_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ledgerly=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    let db = connect_with(&config.database).await?;
    info!("Connected to database");

    let accounts = Arc::new(AccountRepository::new(db.clone()));
    let ledger = Arc::new(LedgerEngine::new(
        Arc::new(StatementRepository::new(db)),
        StatementRules::from(config.ledger.clone()),
    ));
    info!(
        description_max_len = config.ledger.description_max_len,
        value_ceiling = %config.ledger.value_ceiling,
        "Ledger rules configured"
    );

    let state = AppState {
        ledger: ledger.clone(),
        identity: IdentityResolver::new(accounts.clone()),
        accounts: AccountService::new(accounts),
    };

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Err(e) = ledger.close().await {
        warn!(error = %e, "Failed to close statement store");
    }
    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
