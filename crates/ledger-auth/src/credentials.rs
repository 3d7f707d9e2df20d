//! Login credential check.
//!
//! `authenticate` never fails on bad input or a wrong password; those are
//! `Ok(None)`. Only a failed user lookup (or a corrupt stored hash) is an
//! error, and it is logged before being returned.

use std::future::Future;
use std::time::Duration;

use ledger_core::entities::User;
use ledger_db::service::LedgerService;

use crate::error::AuthError;
use crate::password;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Login form fields that passed the shape check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// `None` unless `email` looks like an address and `password` has at
    /// least [`MIN_PASSWORD_LEN`] characters.
    #[must_use]
    pub fn parse(email: &str, password: &str) -> Option<Self> {
        if !looks_like_email(email) || password.chars().count() < MIN_PASSWORD_LEN {
            return None;
        }
        Some(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

/// Where `authenticate` looks users up.
pub trait UserDirectory {
    fn lookup_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, AuthError>> + Send;
}

impl UserDirectory for LedgerService {
    fn lookup_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, AuthError>> + Send {
        async move {
            self.find_user_by_email(email)
                .await
                .map_err(|e| AuthError::Lookup(e.to_string()))
        }
    }
}

/// Resolve login form input to a user. The directory lookup runs under `limit`.
///
/// # Errors
///
/// Returns `AuthError::Lookup` if the directory cannot be queried in time and
/// `AuthError::Hash` if the stored hash is unreadable.
pub async fn authenticate<D>(
    directory: &D,
    email: &str,
    password: &str,
    limit: Duration,
) -> Result<Option<User>, AuthError>
where
    D: UserDirectory + Sync,
{
    let Some(credentials) = Credentials::parse(email, password) else {
        tracing::info!("Invalid credentials");
        return Ok(None);
    };

    let user = tokio::time::timeout(limit, directory.lookup_by_email(credentials.email()))
        .await
        .unwrap_or_else(|_| Err(AuthError::Lookup(format!("user lookup timed out after {limit:?}"))))
        .inspect_err(|error| tracing::error!(%error, "Failed to fetch user"))?;
    let Some(user) = user else {
        tracing::info!("Invalid credentials");
        return Ok(None);
    };

    // bcrypt is deliberately slow; keep it off the async workers.
    let submitted = credentials.password;
    let stored = user.password_hash.clone();
    let matches = tokio::task::spawn_blocking(move || password::verify(&submitted, &stored))
        .await
        .map_err(|e| AuthError::Other(format!("spawn_blocking join: {e}")))??;

    if matches {
        tracing::debug!(user_id = %user.id, "credentials accepted");
        Ok(Some(user))
    } else {
        tracing::info!("Invalid credentials");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const LIMIT: Duration = Duration::from_secs(5);

    struct FailingDirectory;

    struct StalledDirectory;

    impl UserDirectory for StalledDirectory {
        async fn lookup_by_email(&self, _email: &str) -> Result<Option<User>, AuthError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(None)
        }
    }

    impl UserDirectory for FailingDirectory {
        async fn lookup_by_email(&self, _email: &str) -> Result<Option<User>, AuthError> {
            Err(AuthError::Lookup("connection refused".into()))
        }
    }

    async fn directory_with_user() -> LedgerService {
        let svc = LedgerService::new_local(":memory:").await.unwrap();
        let hashed = password::hash("123456", 4).unwrap();
        svc.create_user("User", "user@nextmail.com", &hashed)
            .await
            .unwrap();
        svc
    }

    #[rstest]
    #[case("user@nextmail.com", "123456", true)]
    #[case("user@nextmail.com", "12345", false)]
    #[case("user@nextmail", "123456", false)]
    #[case("@nextmail.com", "123456", false)]
    #[case("user nextmail.com", "123456", false)]
    #[case("user@@nextmail.com", "123456", false)]
    #[case("", "", false)]
    fn credentials_shape(#[case] email: &str, #[case] password: &str, #[case] ok: bool) {
        assert_eq!(Credentials::parse(email, password).is_some(), ok);
    }

    #[tokio::test]
    async fn correct_password_returns_user() {
        let svc = directory_with_user().await;
        let user = authenticate(&svc, "user@nextmail.com", "123456", LIMIT)
            .await
            .unwrap()
            .expect("should authenticate");
        assert_eq!(user.email, "user@nextmail.com");
    }

    #[tokio::test]
    async fn wrong_password_is_none() {
        let svc = directory_with_user().await;
        let result = authenticate(&svc, "user@nextmail.com", "654321", LIMIT).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn unknown_user_is_none() {
        let svc = directory_with_user().await;
        let result = authenticate(&svc, "other@nextmail.com", "123456", LIMIT).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn malformed_input_skips_lookup() {
        let result = authenticate(&FailingDirectory, "not-an-email", "123456", LIMIT)
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn lookup_failure_is_error() {
        let result = authenticate(&FailingDirectory, "user@nextmail.com", "123456", LIMIT).await;
        assert!(matches!(result, Err(AuthError::Lookup(_))));
    }

    #[tokio::test]
    async fn store_failure_maps_to_lookup_error() {
        let svc = directory_with_user().await;
        svc.db().conn().execute("DROP TABLE user_sessions", ()).await.unwrap();
        svc.db().conn().execute("DROP TABLE users", ()).await.unwrap();
        let result = authenticate(&svc, "user@nextmail.com", "123456", LIMIT).await;
        assert!(matches!(result, Err(AuthError::Lookup(_))));
    }

    #[tokio::test]
    async fn stalled_lookup_is_lookup_error() {
        let result = authenticate(
            &StalledDirectory,
            "user@nextmail.com",
            "123456",
            Duration::from_millis(10),
        )
        .await;
        assert!(matches!(result, Err(AuthError::Lookup(message)) if message.contains("timed out")));
    }
}
