//! Sign-in and sign-out actions. Store calls run under the caller's `limit`.

use std::time::Duration;

use ledger_auth::AuthError;
use ledger_auth::credentials::authenticate;
use ledger_auth::session::{close_session, open_session};
use ledger_config::AuthConfig;
use ledger_core::entities::UserSession;
use ledger_db::service::LedgerService;

use crate::outcome::{ActionError, ActionOutcome};

const INVALID_CREDENTIALS: &str = "Invalid credentials.";
const SOMETHING_WENT_WRONG: &str = "Something went wrong.";

/// Result of a login form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    /// Credentials accepted; set the session cookie and navigate to `redirect`.
    SignedIn {
        session: UserSession,
        redirect: String,
    },
    /// Shown under the login form.
    Rejected { message: String },
}

impl SignInOutcome {
    fn rejected(message: &str) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

/// Check `email`/`password` and open a session on success.
///
/// Bad credentials and lookup failures are both reported as a rejection, but
/// with different messages; the lookup failure has already been logged.
pub async fn sign_in(
    service: &LedgerService,
    config: &AuthConfig,
    email: &str,
    password: &str,
    limit: Duration,
) -> SignInOutcome {
    let user = match authenticate(service, email, password, limit).await {
        Ok(Some(user)) => user,
        Ok(None) => return SignInOutcome::rejected(INVALID_CREDENTIALS),
        Err(AuthError::Lookup(_)) => return SignInOutcome::rejected(SOMETHING_WENT_WRONG),
        Err(error) => {
            tracing::error!(%error, "sign-in failed");
            return SignInOutcome::rejected(SOMETHING_WENT_WRONG);
        }
    };

    match open_session(service, &user, config.session_ttl_secs, limit).await {
        Ok(session) => {
            tracing::info!(user_id = %user.id, "signed in");
            SignInOutcome::SignedIn {
                session,
                redirect: config.home_path.clone(),
            }
        }
        Err(error) => {
            tracing::error!(%error, "failed to open session");
            SignInOutcome::rejected(SOMETHING_WENT_WRONG)
        }
    }
}

/// Close the session behind `token` (if any) and send the caller to login.
pub async fn sign_out(
    service: &LedgerService,
    config: &AuthConfig,
    token: Option<&str>,
    limit: Duration,
) -> ActionOutcome {
    if let Some(token) = token
        && let Err(error) = close_session(service, token, limit).await
    {
        tracing::error!(%error, "failed to close session");
        return ActionOutcome::failure(ActionError::Storage {
            message: SOMETHING_WENT_WRONG.into(),
        });
    }
    ActionOutcome::redirect(config.login_path.clone())
}
