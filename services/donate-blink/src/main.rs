use std::sync::Arc;

use donate_blink::{
    config::Config, ledger::RpcLedger, price::HttpPriceSource, router, states::AssetRegistry,
    AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let http = reqwest::Client::new();
    let ledger = RpcLedger::with_client(http.clone(), config.rpc_url.clone());
    tracing::info!(rpc = ledger.url(), "using ledger rpc endpoint");
    let state = AppState::new(
        Arc::new(ledger),
        Arc::new(HttpPriceSource::with_client(http, config.price_api_url.clone())),
        AssetRegistry::mainnet(),
    )
    .with_public_url(config.public_url.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "donate blink listening");
    axum::serve(listener, router(state)).await?;

    Ok(())
}
