use std::sync::Arc;

use anyhow::Context;
use ledger_config::LedgerConfig;
use ledger_db::service::LedgerService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: Arc<LedgerService>,
    pub config: LedgerConfig,
}

impl AppContext {
    /// Open the configured database (running migrations) and bundle it with
    /// the loaded configuration.
    pub async fn init(config: LedgerConfig) -> anyhow::Result<Self> {
        let service = LedgerService::new_local(&config.database.path)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;

        tracing::debug!(path = %config.database.path, "ledger database ready");

        Ok(Self {
            service: Arc::new(service),
            config,
        })
    }
}
