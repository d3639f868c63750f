//! Service configuration and environment variable handling

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub alchemy_api_key: Option<String>,
    pub rpc_url: Option<String>,
    pub network: String,
    pub pool_address: Option<String>,
    // Known token decimals, skips the on-chain lookup when set
    pub token_decimals: Option<(u8, u8)>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            alchemy_api_key: env::var("ALCHEMY_API_KEY").ok(),
            rpc_url: env::var("RPC_URL").ok(),
            network: env::var("NETWORK")
                .unwrap_or_else(|_| "mainnet".to_string()),
            pool_address: env::var("POOL_ADDRESS").ok(),
            token_decimals: env::var("TOKEN_DECIMALS")
                .ok()
                .and_then(|s| parse_decimals_pair(&s)),
        }
    }

    /// Endpoint to connect to: an explicit RPC_URL wins, otherwise an
    /// Alchemy URL is built for the configured network.
    pub fn endpoint(&self) -> Result<String> {
        if let Some(url) = &self.rpc_url {
            return Ok(url.clone());
        }
        let key = self
            .alchemy_api_key
            .as_ref()
            .context("Either RPC_URL or ALCHEMY_API_KEY must be set")?;
        Ok(format!(
            "https://eth-{}.g.alchemy.com/v2/{}",
            self.network, key
        ))
    }
}

/// Parses a `"18,6"` style decimals pair.
fn parse_decimals_pair(raw: &str) -> Option<(u8, u8)> {
    let (d0, d1) = raw.split_once(',')?;
    Some((d0.trim().parse().ok()?, d1.trim().parse().ok()?))
}
