//! LP Pricer - Reserve and spot price service for Uniswap V2 pools
//!
//! Fetches on-chain reserves for two-token liquidity pools, normalizes them
//! by each token's decimal precision and computes spot prices in both token
//! orders, along with human-readable formatted variants.

pub mod config;
pub mod types;
pub mod errors;
pub mod network;
pub mod pools;
pub mod pricing;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{PriceError, PriceResult};
pub use network::{AlloyChain, ChainClient};
pub use pricing::{get_pool_tokens, get_price_for_pool};
pub use types::*;

// Type alias for our concrete provider
pub type ConcreteProvider = alloy::providers::RootProvider<alloy::transports::BoxTransport>;
