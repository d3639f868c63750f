//! Reserve normalization and spot price calculation
//!
//! All arithmetic uses `rust_decimal`. Native floats lose precision past
//! ~15 significant digits, which silently corrupts prices for 18-decimals
//! tokens with large reserves.

use alloy::primitives::U256;
use rust_decimal::prelude::*;
use std::str::FromStr;

use crate::{
    errors::{PriceError, PriceResult},
    types::{PoolPrices, PoolReserves},
    utils::{pow10, MAX_DECIMAL_SCALE},
};

use super::format::{format_grouped, format_price};

/// Computes the pool's spot price in both token orders.
///
/// `price` is token1 per token0 (`amount1 / amount0`), `price_rev` the
/// inverse. A zero reserve on either side leaves the price undefined and
/// is reported as [`PriceError::DivisionByZero`], never as an infinity.
pub fn compute_prices(
    reserve0: U256,
    reserve1: U256,
    decimals0: u8,
    decimals1: u8,
) -> PriceResult<PoolPrices> {
    let amount0 = normalize_reserve(reserve0, decimals0)?;
    let amount1 = normalize_reserve(reserve1, decimals1)?;

    if amount0.is_zero() {
        return Err(PriceError::DivisionByZero { side: "token0" });
    }
    if amount1.is_zero() {
        return Err(PriceError::DivisionByZero { side: "token1" });
    }

    let price = amount1 / amount0;
    let price_rev = amount0 / amount1;

    Ok(PoolPrices {
        price,
        price_formatted: format_price(price),
        price_rev,
        price_rev_formatted: format_price(price_rev),
    })
}

/// Normalizes both reserves to decimal token amounts.
///
/// The formatted variants are always two-decimal grouped strings, even for
/// amounts below 1 - unlike price formatting, which is threshold-gated.
pub fn compute_reserves(
    reserve0: U256,
    reserve1: U256,
    decimals0: u8,
    decimals1: u8,
) -> PriceResult<PoolReserves> {
    let token0_reserves = normalize_reserve(reserve0, decimals0)?;
    let token1_reserves = normalize_reserve(reserve1, decimals1)?;

    Ok(PoolReserves {
        token0_reserves,
        token1_reserves,
        token0_reserves_formatted: format_grouped(token0_reserves),
        token1_reserves_formatted: format_grouped(token1_reserves),
    })
}

/// Converts a raw reserve in smallest units to its decimal token amount,
/// `reserve / 10^decimals`.
pub fn normalize_reserve(reserve: U256, decimals: u8) -> PriceResult<Decimal> {
    if u32::from(decimals) > MAX_DECIMAL_SCALE {
        return Err(PriceError::InvalidDecimals {
            decimals: u32::from(decimals),
        });
    }

    let raw = Decimal::from_str(&reserve.to_string()).map_err(|e| PriceError::InvalidReserve {
        value: reserve.to_string(),
        source: anyhow::Error::new(e),
    })?;

    Ok((raw / pow10(u32::from(decimals))).normalize())
}
