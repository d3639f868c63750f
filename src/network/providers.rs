//! Network provider setup

use alloy::providers::{Provider, ProviderBuilder};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::{config::Config, ConcreteProvider};

pub async fn setup_provider(config: &Config) -> Result<Arc<ConcreteProvider>> {
    let rpc_url = config.endpoint()?;

    let provider: Arc<ConcreteProvider> = Arc::new(
        ProviderBuilder::new()
            .on_http(rpc_url.parse()?)
            .boxed()
    );

    info!("🔗 Testing connection to {}...", config.network);
    let block = provider.get_block_number().await
        .context("Failed to reach RPC endpoint")?;
    info!("✅ Connected to {} at block {}", config.network, block);

    Ok(provider)
}
