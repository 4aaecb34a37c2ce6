use std::str::FromStr;
use std::sync::Arc;

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::hash::Hash;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};

use crate::errors::{BlinkError, Result};

pub type DynLedger = Arc<dyn Ledger>;

/// The three reads a donation needs from a Solana node.
#[async_trait]
pub trait Ledger: Send + Sync {
    async fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> Result<u64>;

    async fn account_exists(&self, address: &Pubkey) -> Result<bool>;

    async fn latest_blockhash(&self) -> Result<Hash>;
}

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

#[derive(Deserialize)]
struct WithContext<T> {
    value: T,
}

#[derive(Deserialize)]
struct LatestBlockhash {
    blockhash: String,
}

/// JSON-RPC client for a Solana node.
#[derive(Clone)]
pub struct RpcLedger {
    http: reqwest::Client,
    url: String,
}

impl RpcLedger {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    pub fn with_client(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T> {
        let request = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        tracing::debug!(method, "rpc request");

        let response: RpcResponse<T> = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(error) = response.error {
            return Err(BlinkError::Rpc(format!(
                "{method} failed ({}): {}",
                error.code, error.message
            )));
        }
        response
            .result
            .ok_or_else(|| BlinkError::Rpc(format!("{method} returned no result")))
    }
}

#[async_trait]
impl Ledger for RpcLedger {
    async fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> Result<u64> {
        self.call("getMinimumBalanceForRentExemption", json!([data_len]))
            .await
    }

    async fn account_exists(&self, address: &Pubkey) -> Result<bool> {
        let account: WithContext<Option<Value>> = self
            .call(
                "getAccountInfo",
                json!([address.to_string(), { "encoding": "base64" }]),
            )
            .await?;

        Ok(account.value.is_some())
    }

    async fn latest_blockhash(&self) -> Result<Hash> {
        let latest: WithContext<LatestBlockhash> = self
            .call("getLatestBlockhash", json!([{ "commitment": "finalized" }]))
            .await?;

        Hash::from_str(&latest.value.blockhash)
            .map_err(|err| BlinkError::Blockhash(format!("{}: {err}", latest.value.blockhash)))
    }
}
