//! Service layer owning the database handle.
//!
//! `LedgerService` wraps `LedgerDb` (raw database access). All repo methods
//! are implemented as `impl LedgerService` blocks under `repos/`.

use crate::LedgerDb;
use crate::error::DatabaseError;

/// Entry point for every read and write against the store.
///
/// Each mutation is a single parameterized statement, so no explicit
/// transaction or in-process locking is needed.
pub struct LedgerService {
    db: LedgerDb,
}

impl LedgerService {
    /// Create a new service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = LedgerDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `LedgerDb` (for testing).
    #[must_use]
    pub const fn from_db(db: LedgerDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &LedgerDb {
        &self.db
    }
}
