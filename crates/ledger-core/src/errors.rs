//! Errors raised while building core values from untrusted text.
//!
//! Store, auth, and config failures have their own enums in their crates.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Text that names neither `pending` nor `paid`.
    #[error("unknown invoice status '{0}'")]
    UnknownStatus(String),
}
