//! Browser session repository.
//!
//! A session row maps an opaque cookie token to a user until it expires.
//! Only presence of a live row matters to the access gate.

use chrono::{DateTime, Utc};
use ledger_core::entities::{User, UserSession};

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;
use crate::service::LedgerService;

impl LedgerService {
    pub async fn create_session(
        &self,
        user_id: &str,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<UserSession, DatabaseError> {
        let now = Utc::now();
        self.db()
            .conn()
            .execute(
                "INSERT INTO user_sessions (token, user_id, created_at, expires_at) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![token, user_id, now.to_rfc3339(), expires_at.to_rfc3339()],
            )
            .await?;

        Ok(UserSession {
            token: token.to_string(),
            user_id: user_id.to_string(),
            created_at: now,
            expires_at,
        })
    }

    /// Resolve a token to its user, ignoring sessions expired at `now`.
    pub async fn find_session_user(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<User>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT s.expires_at, u.id, u.name, u.email, u.password \
                 FROM user_sessions s JOIN users u ON u.id = s.user_id \
                 WHERE s.token = ?1",
                [token],
            )
            .await?;

        let Some(row) = rows.next().await? else {
            return Ok(None);
        };
        if parse_datetime(&row.get::<String>(0)?)? <= now {
            return Ok(None);
        }
        Ok(Some(User {
            id: row.get(1)?,
            name: row.get(2)?,
            email: row.get(3)?,
            password_hash: row.get(4)?,
        }))
    }

    /// Remove a session (sign-out). Returns whether a row was removed.
    pub async fn delete_session(&self, token: &str) -> Result<bool, DatabaseError> {
        let removed = self
            .db()
            .conn()
            .execute("DELETE FROM user_sessions WHERE token = ?1", [token])
            .await?;
        Ok(removed > 0)
    }

    /// Drop every session expired at `now`. Returns how many were removed.
    pub async fn purge_expired_sessions(&self, now: DateTime<Utc>) -> Result<u64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT token, expires_at FROM user_sessions", ())
            .await?;

        let mut expired = Vec::new();
        while let Some(row) = rows.next().await? {
            if parse_datetime(&row.get::<String>(1)?)? <= now {
                expired.push(row.get::<String>(0)?);
            }
        }
        drop(rows);

        let mut removed = 0;
        for token in &expired {
            removed += self
                .db()
                .conn()
                .execute("DELETE FROM user_sessions WHERE token = ?1", [token.as_str()])
                .await?;
        }
        if removed > 0 {
            tracing::debug!(removed, "purged expired sessions");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use chrono::TimeDelta;

    async fn service_with_user() -> (LedgerService, User) {
        let svc = test_service().await;
        let user = svc
            .create_user("User", "user@nextmail.com", "hash")
            .await
            .unwrap();
        (svc, user)
    }

    #[tokio::test]
    async fn live_session_resolves_user() {
        let (svc, user) = service_with_user().await;
        svc.create_session(&user.id, "tok-live", Utc::now() + TimeDelta::hours(1))
            .await
            .unwrap();

        let found = svc.find_session_user("tok-live", Utc::now()).await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(user.id));
    }

    #[tokio::test]
    async fn expired_session_is_ignored() {
        let (svc, user) = service_with_user().await;
        svc.create_session(&user.id, "tok-old", Utc::now() - TimeDelta::seconds(1))
            .await
            .unwrap();

        assert!(svc.find_session_user("tok-old", Utc::now()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unknown_token_is_none() {
        let svc = test_service().await;
        assert!(svc.find_session_user("nope", Utc::now()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_session_signs_out() {
        let (svc, user) = service_with_user().await;
        svc.create_session(&user.id, "tok", Utc::now() + TimeDelta::hours(1))
            .await
            .unwrap();

        assert!(svc.delete_session("tok").await.unwrap());
        assert!(!svc.delete_session("tok").await.unwrap());
        assert!(svc.find_session_user("tok", Utc::now()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn purge_removes_only_expired() {
        let (svc, user) = service_with_user().await;
        let now = Utc::now();
        svc.create_session(&user.id, "old", now - TimeDelta::minutes(5))
            .await
            .unwrap();
        svc.create_session(&user.id, "new", now + TimeDelta::minutes(5))
            .await
            .unwrap();

        assert_eq!(svc.purge_expired_sessions(now).await.unwrap(), 1);
        assert!(svc.find_session_user("new", now).await.unwrap().is_some());
    }
}
