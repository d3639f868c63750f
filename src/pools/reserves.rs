//! Reserve reads from Uniswap V2 pair contracts

use alloy::{
    primitives::{Address, keccak256, U256},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
    sol_types::SolValue,
};
use anyhow::{Context, Result};

/// Calls `getReserves()` on the pair contract and returns the two raw
/// reserve values in each token's smallest unit. The third return slot
/// (`blockTimestampLast`) is discarded.
pub async fn get_pool_reserves(provider: &dyn Provider, pool: Address) -> Result<(U256, U256)> {
    let data = keccak256("getReserves()")[..4].to_vec();
    let tx = TransactionRequest::default()
        .to(pool)
        .input(data.into());

    let result = provider.call(&tx).await
        .context("Failed to call getReserves")?;
    let decoded = <(U256, U256, U256)>::abi_decode(&result, true)
        .context("Failed to decode reserves")?;
    Ok((decoded.0, decoded.1))
}
