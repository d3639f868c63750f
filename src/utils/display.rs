//! Display and printing utilities

use tracing::info;

use crate::types::{PoolPrice, TokenInfo};

pub fn print_pool_price(result: &PoolPrice) {
    info!("\n💧 Pool {}", result.lp_address);
    info!("💱 Prices:");
    info!("   token1 per token0: {}", result.price_formatted);
    info!("   token0 per token1: {}", result.price_rev_formatted);
    info!("📊 Reserves:");
    info!("   token0: {}", result.token0_reserves_formatted);
    info!("   token1: {}", result.token1_reserves_formatted);
}

pub fn print_pool_tokens(token0: &TokenInfo, token1: &TokenInfo) {
    info!("🪙 Pool tokens:");
    info!("   {} ({}) - {} decimals", token0.symbol, token0.name, token0.decimals);
    info!("   {} ({}) - {} decimals", token1.symbol, token1.name, token1.decimals);
}
