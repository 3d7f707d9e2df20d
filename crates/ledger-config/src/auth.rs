//! Session and route-access configuration.

use serde::{Deserialize, Serialize};

fn default_protected_prefix() -> String {
    "/dashboard".to_string()
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_home_path() -> String {
    "/dashboard".to_string()
}

fn default_session_cookie() -> String {
    "ledger_session".to_string()
}

/// Longest accepted session lifetime: ten years.
pub const MAX_SESSION_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Thirty days.
const fn default_session_ttl_secs() -> u64 {
    30 * 24 * 60 * 60
}

const fn default_bcrypt_cost() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Requests whose path starts with this prefix require a session.
    #[serde(default = "default_protected_prefix")]
    pub protected_prefix: String,

    /// Where unauthenticated visitors of the protected area are sent.
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Where authenticated visitors of public pages are sent.
    #[serde(default = "default_home_path")]
    pub home_path: String,

    /// Name of the cookie carrying the session token.
    #[serde(default = "default_session_cookie")]
    pub session_cookie: String,

    /// Lifetime of a new session, in seconds.
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,

    /// bcrypt work factor for newly hashed passwords.
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            protected_prefix: default_protected_prefix(),
            login_path: default_login_path(),
            home_path: default_home_path(),
            session_cookie: default_session_cookie(),
            session_ttl_secs: default_session_ttl_secs(),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}
