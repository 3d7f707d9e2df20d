//! HTTP server configuration.

use serde::{Deserialize, Serialize};

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

/// Paths the access gate never runs on: API routes, static assets, the
/// image optimizer, and PNG files anywhere.
fn default_bypass_patterns() -> Vec<String> {
    ["/api", "/api/**", "/_next/static/**", "/_next/image/**", "*.png"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Cached listing views kept before the oldest are evicted.
const fn default_view_cache_entries() -> usize {
    128
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Glob patterns (matched against the request path) excluded from the gate.
    #[serde(default = "default_bypass_patterns")]
    pub bypass_patterns: Vec<String>,

    #[serde(default = "default_view_cache_entries")]
    pub view_cache_entries: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            bypass_patterns: default_bypass_patterns(),
            view_cache_entries: default_view_cache_entries(),
        }
    }
}
