//! # ledger-db
//!
//! libSQL database operations for the ledger dashboard.
//!
//! Handles all relational state: invoices, customers, users, browser sessions,
//! and the monthly revenue series. Every statement is parameterized; no SQL
//! text is ever assembled from caller-supplied values.
//!
//! Uses the `libsql` crate (C `SQLite` fork) in local mode.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all ledger state operations.
///
/// Wraps a libSQL database and connection. Provides ID generation;
/// repository methods live on [`service::LedgerService`].
pub struct LedgerDb {
    /// Owns the database the connection was opened from.
    _db: libsql::Database,
    conn: libsql::Connection,
}

impl LedgerDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on every open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Foreign keys are per-connection in SQLite.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|source| DatabaseError::Migration {
                step: "foreign_keys",
                source,
            })?;

        let ledger_db = Self { _db: db, conn };
        ledger_db.run_migrations().await?;
        tracing::debug!(path, "opened ledger database");
        Ok(ledger_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"inv-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT ?1 || '-' || lower(hex(randomblob(4)))", [prefix])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Helper to create an in-memory database for testing.
    async fn test_db() -> LedgerDb {
        LedgerDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let tables = ["users", "customers", "invoices", "revenue", "user_sessions"];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("inv").await.unwrap();
        assert!(id.starts_with("inv-"), "ID should start with 'inv-': {id}");
        assert_eq!(
            id.len(),
            12,
            "ID should be 12 chars (3 prefix + 1 dash + 8 hex): {id}"
        );

        let hex_part = &id[4..];
        assert!(
            hex_part.chars().all(|c| c.is_ascii_hexdigit()),
            "Random part should be hex: {hex_part}"
        );
    }

    #[tokio::test]
    async fn generate_id_all_prefixes() {
        let db = test_db().await;
        for prefix in ledger_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[tokio::test]
    async fn generate_id_treats_prefix_as_data() {
        let db = test_db().await;
        let id = db.generate_id("x'; DROP TABLE invoices; --").await.unwrap();
        assert!(id.starts_with("x'; DROP TABLE invoices; ---"));

        let mut rows = db
            .conn()
            .query("SELECT count(*) FROM invoices", ())
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some(), "invoices table must survive");
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("tst").await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn invoice_requires_existing_customer() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO invoices (id, customer_id, amount, status, date) VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params!["inv-t1", "cus-missing", 100, "pending", "2024-01-01"],
            )
            .await;
        assert!(result.is_err(), "foreign key should reject unknown customer");
    }

    #[tokio::test]
    async fn invoice_status_is_checked() {
        let db = test_db().await;
        db.conn()
            .execute(
                "INSERT INTO customers (id, name, email) VALUES ('cus-t1', 'Amy', 'amy@example.com')",
                (),
            )
            .await
            .unwrap();

        let result = db
            .conn()
            .execute(
                "INSERT INTO invoices (id, customer_id, amount, status, date) VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params!["inv-t1", "cus-t1", 100, "overdue", "2024-01-01"],
            )
            .await;
        assert!(result.is_err(), "CHECK constraint should reject unknown status");
    }

    #[tokio::test]
    async fn on_disk_database_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.db");
        let path = path.to_string_lossy();

        {
            let db = LedgerDb::open_local(&path).await.unwrap();
            db.conn()
                .execute(
                    "INSERT INTO customers (id, name, email) VALUES ('cus-disk', 'Disk', 'disk@example.com')",
                    (),
                )
                .await
                .unwrap();
        }

        let db = LedgerDb::open_local(&path).await.unwrap();
        let mut rows = db
            .conn()
            .query("SELECT name FROM customers WHERE id = ?1", ["cus-disk"])
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<String>(0).unwrap(), "Disk");
    }
}
