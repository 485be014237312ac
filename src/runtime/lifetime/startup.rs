use crate::errors::{DiscoveryError, Result};
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 安装 rustls 加密后端，已安装时跳过
fn install_crypto_provider() {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }
}

/// 输出数据概况
async fn log_catalog_summary(storage: &Arc<dyn Storage>) {
    match storage.get_universities().await {
        Ok(universities) => info!("Catalog contains {} universities", universities.len()),
        Err(e) => warn!("Failed to read catalog summary: {}", e),
    }
}

/// 准备服务器启动的上下文
/// 包括加密后端与存储（含迁移）
pub async fn prepare_server_startup() -> Result<StartupContext> {
    install_crypto_provider();

    let storage = crate::storage::create_storage().await.map_err(|e| {
        DiscoveryError::database_connection(format!("Failed to create storage backend: {e}"))
    })?;
    warn!("Storage backend initialized and migrations completed");

    log_catalog_summary(&storage).await;

    Ok(StartupContext { storage })
}
