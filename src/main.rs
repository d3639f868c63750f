//! LP Pricer - Main Entry Point
//!
//! Prices a single Uniswap V2 pair and prints the result.

use alloy::primitives::Address;
use anyhow::{Context, Result};
use lp_pricer::*;
use std::str::FromStr;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    let _logging_guard = utils::setup_logging()?;
    utils::setup_output_directories()?;

    // Load configuration
    let config = CONFIG.clone();

    info!("💧 LP Pricer v0.1.0");
    info!("📋 Configuration:");
    info!("   Network: {}", config.network);
    if let Some((decimals0, decimals1)) = config.token_decimals {
        info!("   Decimals override: {} / {}", decimals0, decimals1);
    }

    let pool_address = config
        .pool_address
        .as_ref()
        .context("POOL_ADDRESS is required")?;
    let pool_address = Address::from_str(pool_address)
        .context("POOL_ADDRESS is not a valid address")?;

    // Setup network provider
    let provider = network::setup_provider(&config).await?;
    let chain = AlloyChain::new(provider);

    let (token0, token1) = get_pool_tokens(&chain, pool_address).await?;
    utils::print_pool_tokens(&token0, &token1);

    let result = get_price_for_pool(&chain, pool_address, config.token_decimals).await?;
    utils::print_pool_price(&result);

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
