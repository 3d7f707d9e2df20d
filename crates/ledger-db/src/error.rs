//! Errors raised by the ledger store.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Opening the schema failed at `step`.
    #[error("migration step {step} failed: {source}")]
    Migration {
        step: &'static str,
        #[source]
        source: libsql::Error,
    },

    /// A lookup that must return a row returned none.
    #[error("no matching row")]
    NoResult,

    /// A stored column value could not be turned back into its typed form.
    #[error("cannot decode stored {kind} '{value}': {reason}")]
    Decode {
        kind: &'static str,
        value: String,
        reason: String,
    },

    /// A paging argument or result does not fit the integer type SQL needs.
    #[error("{what} {value} is out of range")]
    OutOfRange { what: &'static str, value: u64 },

    #[error("libSQL: {0}")]
    LibSql(#[from] libsql::Error),
}
