use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use globset::{Glob, GlobSet, GlobSetBuilder};
use ledger_actions::{InvoiceActions, Revalidate, ViewCache};
use ledger_auth::AccessGate;
use ledger_config::LedgerConfig;
use ledger_db::service::LedgerService;

/// Everything a request handler can reach. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<LedgerService>,
    pub config: Arc<LedgerConfig>,
    pub cache: Arc<ViewCache>,
    pub actions: InvoiceActions,
    pub gate: Arc<AccessGate>,
    pub bypass: Arc<GlobSet>,
}

impl AppState {
    pub fn new(service: Arc<LedgerService>, config: LedgerConfig) -> anyhow::Result<Self> {
        let cache = Arc::new(ViewCache::with_capacity(config.server.view_cache_entries));
        let actions = InvoiceActions::new(
            Arc::clone(&service),
            Arc::clone(&cache) as Arc<dyn Revalidate>,
            config.database.query_timeout(),
        );
        let gate = Arc::new(AccessGate::from_config(&config.auth));
        let bypass = Arc::new(build_bypass(&config.server.bypass_patterns)?);

        Ok(Self {
            service,
            config: Arc::new(config),
            cache,
            actions,
            gate,
            bypass,
        })
    }

    pub fn query_timeout(&self) -> Duration {
        self.config.database.query_timeout()
    }
}

fn build_bypass(patterns: &[String]) -> anyhow::Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).with_context(|| format!("invalid bypass pattern '{pattern}'"))?);
    }
    builder.build().context("failed to build bypass pattern set")
}
