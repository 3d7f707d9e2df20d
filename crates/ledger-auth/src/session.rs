//! Session cookie lifecycle: sign in, resolve, sign out.
//!
//! Every store call here runs under the caller's `limit`; there are no retries.

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use ledger_core::entities::{User, UserSession};
use ledger_db::error::DatabaseError;
use ledger_db::service::LedgerService;
use tokio::time::timeout;

use crate::claims::SessionClaim;
use crate::error::AuthError;
use crate::token::mint_session_token;

/// Where the gate resolves session tokens.
pub trait SessionStore {
    fn session_user(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> impl Future<Output = Result<Option<User>, DatabaseError>> + Send;
}

impl SessionStore for LedgerService {
    fn session_user(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> impl Future<Output = Result<Option<User>, DatabaseError>> + Send {
        self.find_session_user(token, now)
    }
}

/// Expiry for a session opened at `now`, or `None` past chrono's calendar.
fn expiry(now: DateTime<Utc>, ttl_secs: u64) -> Option<DateTime<Utc>> {
    let ttl = TimeDelta::try_seconds(i64::try_from(ttl_secs).ok()?)?;
    now.checked_add_signed(ttl)
}

/// Store a fresh session for `user` that lives for `ttl_secs`.
///
/// # Errors
///
/// Returns `AuthError::Token` if no token can be minted and
/// `AuthError::Session` if the lifetime is unrepresentable or the session row
/// cannot be written within `limit`.
pub async fn open_session(
    service: &LedgerService,
    user: &User,
    ttl_secs: u64,
    limit: Duration,
) -> Result<UserSession, AuthError> {
    let expires_at = expiry(Utc::now(), ttl_secs)
        .ok_or_else(|| AuthError::Session(format!("session ttl {ttl_secs}s out of range")))?;
    let token = mint_session_token()?;

    timeout(limit, service.create_session(&user.id, &token, expires_at))
        .await
        .map_err(|_| AuthError::Session(format!("session write timed out after {limit:?}")))?
        .map_err(|e| AuthError::Session(e.to_string()))
}

/// Map a session cookie to a claim. Never fails: a missing, unknown, or
/// expired token is anonymous, and a store error or timeout is logged and
/// treated as anonymous.
pub async fn resolve_claim<S>(
    store: &S,
    token: Option<&str>,
    now: DateTime<Utc>,
    limit: Duration,
) -> SessionClaim
where
    S: SessionStore + Sync,
{
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return SessionClaim::Anonymous;
    };
    match timeout(limit, store.session_user(token, now)).await {
        Ok(Ok(Some(user))) => SessionClaim::Authenticated { user_id: user.id },
        Ok(Ok(None)) => SessionClaim::Anonymous,
        Ok(Err(error)) => {
            tracing::warn!(%error, "session lookup failed; treating request as anonymous");
            SessionClaim::Anonymous
        }
        Err(_) => {
            tracing::warn!(?limit, "session lookup timed out; treating request as anonymous");
            SessionClaim::Anonymous
        }
    }
}

/// Drop the session behind `token`. Signing out twice is not an error.
///
/// # Errors
///
/// Returns `AuthError::Session` if the store cannot be reached within `limit`.
pub async fn close_session(
    service: &LedgerService,
    token: &str,
    limit: Duration,
) -> Result<(), AuthError> {
    let removed = timeout(limit, service.delete_session(token))
        .await
        .map_err(|_| AuthError::Session(format!("session delete timed out after {limit:?}")))?
        .map_err(|e| AuthError::Session(e.to_string()))?;
    tracing::debug!(removed, "session closed");
    Ok(())
}
