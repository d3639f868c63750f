//! Chain access capability for pool and token reads

use alloy::primitives::{Address, U256};
use std::future::Future;
use std::sync::Arc;

use crate::{
    errors::{PriceError, PriceResult},
    pools,
    types::TokenInfo,
    ConcreteProvider,
};

/// The on-chain reads needed to price a pool.
///
/// Production code goes through [`AlloyChain`]; tests substitute an
/// in-memory implementation. Implementations do not retry: a failed call
/// surfaces as [`PriceError::Upstream`] with the underlying error attached.
pub trait ChainClient {
    fn get_reserves(
        &self,
        pool: Address,
    ) -> impl Future<Output = PriceResult<(U256, U256)>> + Send;

    fn get_token_decimals(
        &self,
        pool: Address,
    ) -> impl Future<Output = PriceResult<(u8, u8)>> + Send;

    fn get_token_metadata(
        &self,
        pool: Address,
    ) -> impl Future<Output = PriceResult<(TokenInfo, TokenInfo)>> + Send;
}

/// [`ChainClient`] backed by an alloy HTTP provider.
#[derive(Clone)]
pub struct AlloyChain {
    provider: Arc<ConcreteProvider>,
}

impl AlloyChain {
    pub fn new(provider: Arc<ConcreteProvider>) -> Self {
        Self { provider }
    }
}

impl ChainClient for AlloyChain {
    async fn get_reserves(&self, pool: Address) -> PriceResult<(U256, U256)> {
        pools::get_pool_reserves(self.provider.as_ref(), pool)
            .await
            .map_err(|e| PriceError::Upstream {
                message: format!("getReserves failed for {pool}"),
                source: e,
            })
    }

    async fn get_token_decimals(&self, pool: Address) -> PriceResult<(u8, u8)> {
        let provider = self.provider.as_ref();
        let lookup = async {
            let (token0, token1) = pools::get_pool_token_addresses(provider, pool).await?;
            // Independent token contracts, read both at once
            tokio::try_join!(
                pools::get_token_decimals(provider, token0),
                pools::get_token_decimals(provider, token1),
            )
        };

        lookup.await.map_err(|e| PriceError::Upstream {
            message: format!("decimals lookup failed for {pool}"),
            source: e,
        })
    }

    async fn get_token_metadata(&self, pool: Address) -> PriceResult<(TokenInfo, TokenInfo)> {
        let provider = self.provider.as_ref();
        let lookup = async {
            let (token0, token1) = pools::get_pool_token_addresses(provider, pool).await?;
            tokio::try_join!(
                pools::get_token_info(provider, token0),
                pools::get_token_info(provider, token1),
            )
        };

        lookup.await.map_err(|e| PriceError::Upstream {
            message: format!("token metadata lookup failed for {pool}"),
            source: e,
        })
    }
}
