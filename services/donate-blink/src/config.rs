use std::env;
use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const DEFAULT_PRICE_API_URL: &str = "https://api.jup.ag/price/v2";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub rpc_url: String,
    pub price_api_url: String,
    pub bind_addr: SocketAddr,
    pub public_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from any key lookup; unset or blank keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let rpc_url = get("SOLANA_RPC").unwrap_or_else(|| DEFAULT_RPC_URL.to_string());
        let price_api_url =
            get("PRICE_API_URL").unwrap_or_else(|| DEFAULT_PRICE_API_URL.to_string());

        let bind_addr = get("BLINK_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid {
                name: "BLINK_BIND_ADDR",
                value: bind_addr.clone(),
            })?;

        let public_url = get("BLINK_PUBLIC_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .map(|url| {
                if url.starts_with("http://") || url.starts_with("https://") {
                    Ok(url)
                } else {
                    Err(ConfigError::Invalid {
                        name: "BLINK_PUBLIC_URL",
                        value: url,
                    })
                }
            })
            .transpose()?;

        Ok(Self {
            rpc_url,
            price_api_url,
            bind_addr,
            public_url,
        })
    }
}
