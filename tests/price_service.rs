//! End-to-end service tests over an in-memory chain fixture.
//!
//! These exercise the public API: concurrent fetch + join, the decimals
//! override path, error propagation, and result assembly.

use std::sync::atomic::{AtomicU32, Ordering};

use alloy::primitives::{Address, U256};
use rust_decimal_macros::dec;

use lp_pricer::{
    get_pool_tokens, get_price_for_pool, ChainClient, PriceError, PriceResult, TokenInfo,
};

fn pool_address() -> Address {
    Address::repeat_byte(0x11)
}

fn token(byte: u8, symbol: &str, name: &str, decimals: u8) -> TokenInfo {
    TokenInfo {
        address: Address::repeat_byte(byte),
        symbol: symbol.to_string(),
        name: name.to_string(),
        decimals,
    }
}

/// Chain fixture that serves canned values and counts every lookup.
struct FixtureChain {
    reserves: (U256, U256),
    decimals: (u8, u8),
    reserve_calls: AtomicU32,
    decimals_calls: AtomicU32,
}

impl FixtureChain {
    fn new(reserve0: u64, reserve1: u64, decimals: (u8, u8)) -> Self {
        Self {
            reserves: (U256::from(reserve0), U256::from(reserve1)),
            decimals,
            reserve_calls: AtomicU32::new(0),
            decimals_calls: AtomicU32::new(0),
        }
    }
}

impl ChainClient for FixtureChain {
    async fn get_reserves(&self, _pool: Address) -> PriceResult<(U256, U256)> {
        self.reserve_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reserves)
    }

    async fn get_token_decimals(&self, _pool: Address) -> PriceResult<(u8, u8)> {
        self.decimals_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.decimals)
    }

    async fn get_token_metadata(&self, _pool: Address) -> PriceResult<(TokenInfo, TokenInfo)> {
        Ok((
            token(0xaa, "WETH", "Wrapped Ether", 18),
            token(0xbb, "USDC", "USD Coin", 6),
        ))
    }
}

/// Chain fixture whose every read fails.
struct FailingChain;

impl FailingChain {
    fn error(message: &str) -> PriceError {
        PriceError::Upstream {
            message: message.to_string(),
            source: anyhow::anyhow!("connection refused"),
        }
    }
}

impl ChainClient for FailingChain {
    async fn get_reserves(&self, _pool: Address) -> PriceResult<(U256, U256)> {
        Err(Self::error("getReserves failed"))
    }

    async fn get_token_decimals(&self, _pool: Address) -> PriceResult<(u8, u8)> {
        Err(Self::error("decimals lookup failed"))
    }

    async fn get_token_metadata(&self, _pool: Address) -> PriceResult<(TokenInfo, TokenInfo)> {
        Err(Self::error("token metadata lookup failed"))
    }
}

#[tokio::test]
async fn prices_and_reserves_are_assembled() {
    let chain = FixtureChain::new(1_000_000_000, 3_000_000, (9, 6));

    let result = get_price_for_pool(&chain, pool_address(), None)
        .await
        .expect("pool prices");

    assert_eq!(result.price, dec!(3));
    assert_eq!(result.price_formatted, "3.00");
    assert_eq!(result.price_rev.round_dp(6), dec!(0.333333));
    assert_eq!(result.price_rev_formatted, result.price_rev.to_string());
    assert_eq!(result.token0_reserves, dec!(1));
    assert_eq!(result.token1_reserves, dec!(3));
    assert_eq!(result.token0_reserves_formatted, "1.00");
    assert_eq!(result.token1_reserves_formatted, "3.00");
    assert_eq!(result.lp_address, pool_address());

    assert_eq!(chain.reserve_calls.load(Ordering::SeqCst), 1);
    assert_eq!(chain.decimals_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn decimals_override_skips_the_chain_lookup() {
    let chain = FixtureChain::new(1_000_000_000, 3_000_000, (0, 0));

    let result = get_price_for_pool(&chain, pool_address(), Some((9, 6)))
        .await
        .expect("pool prices");

    assert_eq!(result.price, dec!(3));
    assert_eq!(chain.reserve_calls.load(Ordering::SeqCst), 1);
    assert_eq!(chain.decimals_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn zero_reserve_pool_is_an_error() {
    let chain = FixtureChain::new(0, 3_000_000, (9, 6));

    let err = get_price_for_pool(&chain, pool_address(), None)
        .await
        .expect_err("empty pool side");

    assert!(matches!(err, PriceError::DivisionByZero { .. }));
}

#[tokio::test]
async fn upstream_failure_propagates_unchanged() {
    let err = get_price_for_pool(&FailingChain, pool_address(), None)
        .await
        .expect_err("chain is down");

    match err {
        PriceError::Upstream { message, .. } => {
            assert_eq!(message, "getReserves failed");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn pool_tokens_are_fetched_without_pricing() {
    let chain = FixtureChain::new(1_000_000_000, 3_000_000, (9, 6));

    let (token0, token1) = get_pool_tokens(&chain, pool_address())
        .await
        .expect("token metadata");

    assert_eq!(token0.symbol, "WETH");
    assert_eq!(token0.decimals, 18);
    assert_eq!(token1.symbol, "USDC");
    assert_eq!(token1.decimals, 6);
    assert_eq!(chain.reserve_calls.load(Ordering::SeqCst), 0);
    assert_eq!(chain.decimals_calls.load(Ordering::SeqCst), 0);
}
