//! # ledger-config
//!
//! Layered configuration loading for the ledger dashboard using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LEDGER_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`, or project-level `ledger.toml`
//! 3. User-level `~/.config/ledger/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LEDGER_DATABASE__PATH` -> `database.path`,
//! `LEDGER_AUTH__LOGIN_PATH` -> `auth.login_path`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use ledger_config::LedgerConfig;
//!
//! let config = LedgerConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod auth;
mod database;
mod error;
mod general;
mod server;

pub use auth::{AuthConfig, MAX_SESSION_TTL_SECS};
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file name, resolved against the current directory.
pub const PROJECT_CONFIG_FILE: &str = "ledger.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LedgerConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LedgerConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading. The result is validated before it is returned.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, using `config_file` in place of the project-local
    /// `ledger.toml` when given.
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_with_file(config_file).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` for the current directory before building the figment.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the default figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with_file(None)
    }

    /// Build the provider chain with an optional explicit config file.
    #[must_use]
    pub fn figment_with_file(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Explicit file, else project-local config
        let local_path = config_file.map_or_else(|| PathBuf::from(PROJECT_CONFIG_FILE), Path::to_path_buf);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("LEDGER_").split("__"))
    }

    /// Reject values that would make the gate or the store misbehave.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotConfigured` when the database path is empty and
    /// `ConfigError::InvalidValue` for malformed paths, zero bounds, or bad globs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "database".into(),
            });
        }
        if self.database.query_timeout_ms == 0 {
            return Err(ConfigError::invalid(
                "database.query_timeout_ms",
                "must be greater than zero",
            ));
        }

        for (field, value) in [
            ("auth.protected_prefix", &self.auth.protected_prefix),
            ("auth.login_path", &self.auth.login_path),
            ("auth.home_path", &self.auth.home_path),
        ] {
            if !value.starts_with('/') {
                return Err(ConfigError::invalid(
                    field,
                    format!("'{value}' must start with '/'"),
                ));
            }
        }
        if self.auth.login_path.starts_with(&self.auth.protected_prefix) {
            return Err(ConfigError::invalid(
                "auth.login_path",
                "the login page cannot live under the protected prefix",
            ));
        }
        if self.auth.session_cookie.is_empty() {
            return Err(ConfigError::invalid("auth.session_cookie", "must not be empty"));
        }
        if !(1..=MAX_SESSION_TTL_SECS).contains(&self.auth.session_ttl_secs) {
            return Err(ConfigError::invalid(
                "auth.session_ttl_secs",
                format!("must be within 1..={MAX_SESSION_TTL_SECS}"),
            ));
        }
        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            return Err(ConfigError::invalid("auth.bcrypt_cost", "must be within 4..=31"));
        }

        for pattern in &self.server.bypass_patterns {
            globset::Glob::new(pattern).map_err(|e| {
                ConfigError::invalid("server.bypass_patterns", format!("'{pattern}': {e}"))
            })?;
        }

        if self.server.view_cache_entries == 0 {
            return Err(ConfigError::invalid(
                "server.view_cache_entries",
                "must be greater than zero",
            ));
        }

        if self.general.items_per_page == 0 {
            return Err(ConfigError::invalid(
                "general.items_per_page",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ledger").join("config.toml"))
    }
}
