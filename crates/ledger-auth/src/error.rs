use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("user lookup failed: {0}")]
    Lookup(String),

    #[error("password hash error: {0}")]
    Hash(String),

    #[error("session token error: {0}")]
    Token(String),

    #[error("session store error: {0}")]
    Session(String),

    #[error("{0}")]
    Other(String),
}
