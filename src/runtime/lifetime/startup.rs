use crate::authorization::AuthorizationChecker;
use crate::errors::{AssignError, Result};
use crate::storage::RecordStore;
use std::sync::Arc;
use tracing::warn;

pub struct StartupContext {
    pub storage: Arc<dyn RecordStore>,
    pub authorizer: Arc<dyn AuthorizationChecker>,
}

/// 准备服务器启动的上下文
/// 包括 TLS 加密后端、存储连接与数据库迁移
pub async fn prepare_server_startup() -> Result<StartupContext> {
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| AssignError::configuration("Failed to install rustls crypto provider"))?;

    let backends = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    Ok(StartupContext {
        storage: backends.store,
        authorizer: backends.authorizer,
    })
}
