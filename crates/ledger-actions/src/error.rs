use std::time::Duration;

use ledger_db::error::DatabaseError;
use thiserror::Error;

/// A storage call that did not complete.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{operation} timed out after {limit:?}")]
    Timeout {
        operation: &'static str,
        limit: Duration,
    },

    #[error("{operation} failed: {source}")]
    Database {
        operation: &'static str,
        #[source]
        source: DatabaseError,
    },
}

impl StoreError {
    /// True when the store answered but had no matching row.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Database {
                source: DatabaseError::NoResult,
                ..
            }
        )
    }
}
