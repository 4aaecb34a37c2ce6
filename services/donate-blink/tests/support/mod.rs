#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::hash::Hash;
use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
    Router,
};
use donate_blink::{
    errors::{BlinkError, Result},
    ledger::Ledger,
    price::PriceSource,
    router,
    states::AssetRegistry,
    AppState,
};
use tower::ServiceExt;

pub const RENT_MINIMUM: u64 = 890_880;
pub const BLOCKHASH: [u8; 32] = [9; 32];

#[derive(Default)]
pub struct MemoryLedger {
    pub existing: HashSet<Pubkey>,
    pub fail: bool,
    pub reads: AtomicUsize,
}

impl MemoryLedger {
    pub fn with_accounts(accounts: impl IntoIterator<Item = Pubkey>) -> Self {
        Self {
            existing: accounts.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn read(&self) -> Result<()> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(BlinkError::Rpc("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Ledger for MemoryLedger {
    async fn minimum_balance_for_rent_exemption(&self, _data_len: usize) -> Result<u64> {
        self.read()?;
        Ok(RENT_MINIMUM)
    }

    async fn account_exists(&self, address: &Pubkey) -> Result<bool> {
        self.read()?;
        Ok(self.existing.contains(address))
    }

    async fn latest_blockhash(&self) -> Result<Hash> {
        self.read()?;
        Ok(Hash::new_from_array(BLOCKHASH))
    }
}

pub struct StaticPrices {
    pub prices: Option<HashMap<Pubkey, f64>>,
}

impl StaticPrices {
    pub fn new(prices: impl IntoIterator<Item = (Pubkey, f64)>) -> Self {
        Self {
            prices: Some(prices.into_iter().collect()),
        }
    }

    pub fn unavailable() -> Self {
        Self { prices: None }
    }
}

#[async_trait]
impl PriceSource for StaticPrices {
    async fn prices(&self, _mints: &[Pubkey]) -> Result<HashMap<Pubkey, f64>> {
        self.prices
            .clone()
            .ok_or_else(|| BlinkError::Rpc("price service down".to_string()))
    }
}

pub fn app(ledger: MemoryLedger, prices: StaticPrices) -> Router {
    router(AppState::new(
        Arc::new(ledger),
        Arc::new(prices),
        AssetRegistry::mainnet(),
    ))
}

pub async fn send(app: Router, request: Request<Body>) -> (Response<Body>, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap().to_vec();
    (Response::from_parts(parts, Body::empty()), bytes)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn options(uri: &str) -> Request<Body> {
    Request::builder()
        .method("OPTIONS")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap()
}
