use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

use anchor_lang::prelude::Pubkey;
use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::Result;

pub type DynPriceSource = Arc<dyn PriceSource>;

/// Source of USD (USDC) quotes keyed by mint.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Mints without a quote are simply absent from the returned map.
    async fn prices(&self, mints: &[Pubkey]) -> Result<HashMap<Pubkey, f64>>;
}

#[derive(Deserialize)]
struct PriceResponse {
    #[serde(default)]
    data: HashMap<String, Option<PriceEntry>>,
}

#[derive(Deserialize)]
struct PriceEntry {
    price: PriceValue,
}

/// The API reports prices as decimal strings but older versions used numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum PriceValue {
    Text(String),
    Number(f64),
}

impl PriceValue {
    fn as_f64(&self) -> Option<f64> {
        match self {
            PriceValue::Text(text) => text.parse().ok(),
            PriceValue::Number(number) => Some(*number),
        }
    }
}

/// Client for a Jupiter style `GET /price?ids=<mint>,<mint>` endpoint.
#[derive(Clone)]
pub struct HttpPriceSource {
    http: reqwest::Client,
    url: String,
}

impl HttpPriceSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[async_trait]
impl PriceSource for HttpPriceSource {
    async fn prices(&self, mints: &[Pubkey]) -> Result<HashMap<Pubkey, f64>> {
        if mints.is_empty() {
            return Ok(HashMap::new());
        }
        let ids = mints
            .iter()
            .map(Pubkey::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let response: PriceResponse = self
            .http
            .get(&self.url)
            .query(&[("ids", ids)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let prices = response
            .data
            .into_iter()
            .filter_map(|(mint, entry)| {
                let mint = Pubkey::from_str(&mint).ok()?;
                let price = entry?.price.as_f64()?;
                price.is_finite().then_some((mint, price))
            })
            .collect();

        Ok(prices)
    }
}
