use anyhow::Context;
use ledger_config::LedgerConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, then the layered configuration.
///
/// A `.env` next to an explicit `--config` file wins over one in the current
/// directory.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LedgerConfig> {
    load_dotenv(flags)?;
    LedgerConfig::load_from(flags.config.as_deref()).context("failed to load ledger configuration")
}

fn load_dotenv(flags: &GlobalFlags) -> anyhow::Result<()> {
    if let Some(config_dir) = flags.config.as_deref().and_then(std::path::Path::parent) {
        let env_path = config_dir.join(".env");
        if env_path.exists() {
            dotenvy::from_path(&env_path)
                .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
            return Ok(());
        }
    }

    dotenvy::dotenv().ok();
    Ok(())
}
