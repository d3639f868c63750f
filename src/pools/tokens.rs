//! Token addresses and ERC-20 metadata reads

use alloy::{
    primitives::{Address, keccak256, U256},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
    sol_types::SolValue,
};
use anyhow::{Context, Result};
use tracing::debug;

use crate::types::TokenInfo;

/// Resolves the pair's two underlying token contract addresses.
pub async fn get_pool_token_addresses(
    provider: &dyn Provider,
    pool: Address,
) -> Result<(Address, Address)> {
    debug!("Resolving token addresses for pair {}", pool);

    let token0_data = keccak256("token0()")[..4].to_vec();
    let token1_data = keccak256("token1()")[..4].to_vec();

    let tx0 = TransactionRequest::default().to(pool).input(token0_data.into());
    let tx1 = TransactionRequest::default().to(pool).input(token1_data.into());

    let token0 = Address::abi_decode(&provider.call(&tx0).await
        .context("Failed to get token0")?, true)?;
    let token1 = Address::abi_decode(&provider.call(&tx1).await
        .context("Failed to get token1")?, true)?;

    Ok((token0, token1))
}

pub async fn get_token_decimals(provider: &dyn Provider, token: Address) -> Result<u8> {
    let data = keccak256("decimals()")[..4].to_vec();
    let tx = TransactionRequest::default().to(token).input(data.into());

    let decimals = U256::abi_decode(&provider.call(&tx).await
        .context("Failed to get token decimals")?, true)?;
    // decimals() is a uint8, the word cannot exceed u8
    Ok(decimals.saturating_to::<u8>())
}

/// Full ERC-20 metadata for one token contract.
pub async fn get_token_info(provider: &dyn Provider, token: Address) -> Result<TokenInfo> {
    debug!("Getting metadata for token {}", token);

    let symbol_data = keccak256("symbol()")[..4].to_vec();
    let name_data = keccak256("name()")[..4].to_vec();

    let tx_symbol = TransactionRequest::default().to(token).input(symbol_data.into());
    let tx_name = TransactionRequest::default().to(token).input(name_data.into());

    let symbol = String::abi_decode(&provider.call(&tx_symbol).await
        .context("Failed to get token symbol")?, true)?;
    let name = String::abi_decode(&provider.call(&tx_name).await
        .context("Failed to get token name")?, true)?;
    let decimals = get_token_decimals(provider, token).await?;

    Ok(TokenInfo {
        address: token,
        symbol,
        name,
        decimals,
    })
}
