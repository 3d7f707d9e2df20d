//! Opaque session tokens.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::error::AuthError;

/// Random bytes per session token.
pub const SESSION_TOKEN_BYTES: usize = 32;

/// Mint a new cookie-safe session token from the OS random source.
///
/// # Errors
///
/// Returns `AuthError::Token` if the OS random source is unavailable.
pub fn mint_session_token() -> Result<String, AuthError> {
    let mut bytes = [0u8; SESSION_TOKEN_BYTES];
    getrandom::fill(&mut bytes)
        .map_err(|e| AuthError::Token(format!("failed to read random bytes: {e}")))?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}
