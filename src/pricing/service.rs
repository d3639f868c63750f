//! Pool price orchestration
//!
//! Sequences the on-chain reads and the pure calculator into the
//! aggregate result callers consume. Fail-fast: any fetch error
//! propagates unchanged, there is no fallback pricing.

use alloy::primitives::{Address, U256};
use tracing::debug;

use crate::{
    errors::PriceResult,
    network::ChainClient,
    types::{PoolPrice, TokenInfo},
};

use super::calculator::{compute_prices, compute_reserves};

/// Reads the pair's two raw reserve values.
pub async fn fetch_reserves<C: ChainClient>(
    chain: &C,
    lp_address: Address,
) -> PriceResult<(U256, U256)> {
    let (reserve0, reserve1) = chain.get_reserves(lp_address).await?;
    debug!("Reserves for {}: {} / {}", lp_address, reserve0, reserve1);
    Ok((reserve0, reserve1))
}

/// Returns the pair's token decimals, using the caller-supplied override
/// verbatim when present. With an override no chain lookup is made.
pub async fn resolve_decimals<C: ChainClient>(
    chain: &C,
    lp_address: Address,
    decimals_override: Option<(u8, u8)>,
) -> PriceResult<(u8, u8)> {
    match decimals_override {
        Some(decimals) => Ok(decimals),
        None => chain.get_token_decimals(lp_address).await,
    }
}

/// Fetches ERC-20 metadata for both pool tokens, independent of pricing.
pub async fn get_pool_tokens<C: ChainClient>(
    chain: &C,
    lp_address: Address,
) -> PriceResult<(TokenInfo, TokenInfo)> {
    chain.get_token_metadata(lp_address).await
}

/// Prices the pool at `lp_address`.
///
/// Reserves and decimals have no data dependency on each other, so both
/// reads are issued concurrently and joined before calculation.
pub async fn get_price_for_pool<C: ChainClient>(
    chain: &C,
    lp_address: Address,
    decimals_override: Option<(u8, u8)>,
) -> PriceResult<PoolPrice> {
    let ((reserve0, reserve1), (decimals0, decimals1)) = tokio::try_join!(
        fetch_reserves(chain, lp_address),
        resolve_decimals(chain, lp_address, decimals_override),
    )?;

    let prices = compute_prices(reserve0, reserve1, decimals0, decimals1)?;
    let reserves = compute_reserves(reserve0, reserve1, decimals0, decimals1)?;

    Ok(PoolPrice {
        price: prices.price,
        price_formatted: prices.price_formatted,
        price_rev: prices.price_rev,
        price_rev_formatted: prices.price_rev_formatted,
        token0_reserves: reserves.token0_reserves,
        token1_reserves: reserves.token1_reserves,
        token0_reserves_formatted: reserves.token0_reserves_formatted,
        token1_reserves_formatted: reserves.token1_reserves_formatted,
        lp_address,
    })
}
