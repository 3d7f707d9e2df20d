//! libSQL database configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "ledger.db".to_string()
}

/// Default per-statement bound, in milliseconds.
const fn default_query_timeout_ms() -> u64 {
    10_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the local libSQL file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Upper bound for a single read or write against the store.
    /// Storage calls are never retried; an elapsed bound is a storage failure.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            query_timeout_ms: default_query_timeout_ms(),
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub const fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    /// Whether the configured database lives only in memory.
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}
