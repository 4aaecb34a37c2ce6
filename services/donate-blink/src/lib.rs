//! Solana action ("blink") server that lets a wallet donate SOL or SPL
//! tokens to a fixed recipient.
//!
//! The server never signs anything: `POST /api/actions/donate-sol` returns an
//! unsigned transaction that the caller's wallet signs and broadcasts.

use std::sync::Arc;

use axum::{routing::get, Router};

pub mod config;
pub mod contexts;
pub mod cors;
pub mod errors;
pub mod instructions;
pub mod ledger;
pub mod price;
pub mod states;
pub mod transaction;
pub mod utils;

use instructions::*;
use ledger::DynLedger;
use price::DynPriceSource;
use states::AssetRegistry;

pub const ACTIONS_JSON_PATH: &str = "/actions.json";
pub const DONATE_PATH: &str = "/api/actions/donate-sol";

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub ledger: DynLedger,
    pub prices: DynPriceSource,
    pub assets: Arc<AssetRegistry>,
    /// Origin prefixed to action hrefs; hrefs stay relative when unset.
    pub public_url: Option<String>,
}

impl AppState {
    pub fn new(ledger: DynLedger, prices: DynPriceSource, assets: AssetRegistry) -> Self {
        Self {
            ledger,
            prices,
            assets: Arc::new(assets),
            public_url: None,
        }
    }

    pub fn with_public_url(mut self, public_url: Option<String>) -> Self {
        self.public_url = public_url;
        self
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route(ACTIONS_JSON_PATH, get(actions_json).options(actions_json))
        .route(
            DONATE_PATH,
            get(donate_get).options(donate_get).post(donate_post),
        )
        .with_state(state)
}
