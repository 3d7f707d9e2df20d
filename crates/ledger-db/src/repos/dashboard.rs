//! Dashboard read models: summary cards, revenue series, latest invoices.
//!
//! The three reads are independent so callers can issue them concurrently.

use ledger_core::entities::{CardData, LatestInvoice, Revenue};

use crate::error::DatabaseError;
use crate::helpers::get_string_or_empty;
use crate::service::LedgerService;

impl LedgerService {
    /// Invoice and customer counts plus paid and pending totals in cents.
    pub async fn fetch_card_data(&self) -> Result<CardData, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT \
                   (SELECT count(*) FROM invoices), \
                   (SELECT count(*) FROM customers), \
                   COALESCE((SELECT SUM(CASE WHEN status = 'paid' THEN amount ELSE 0 END) FROM invoices), 0), \
                   COALESCE((SELECT SUM(CASE WHEN status = 'pending' THEN amount ELSE 0 END) FROM invoices), 0)",
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;

        Ok(CardData {
            number_of_invoices: row.get(0)?,
            number_of_customers: row.get(1)?,
            total_paid_cents: row.get(2)?,
            total_pending_cents: row.get(3)?,
        })
    }

    /// Monthly revenue in insertion order (calendar order when seeded).
    pub async fn fetch_revenue(&self) -> Result<Vec<Revenue>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT month, revenue FROM revenue ORDER BY rowid", ())
            .await?;

        let mut series = Vec::new();
        while let Some(row) = rows.next().await? {
            series.push(Revenue {
                month: row.get(0)?,
                revenue: row.get(1)?,
            });
        }
        Ok(series)
    }

    /// The `limit` most recent invoices joined with their customer.
    pub async fn fetch_latest_invoices(
        &self,
        limit: u32,
    ) -> Result<Vec<LatestInvoice>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT i.id, c.name, c.email, c.image_url, i.amount \
                 FROM invoices i \
                 JOIN customers c ON i.customer_id = c.id \
                 ORDER BY i.date DESC, i.rowid DESC \
                 LIMIT ?1",
                [limit],
            )
            .await?;

        let mut latest = Vec::new();
        while let Some(row) = rows.next().await? {
            latest.push(LatestInvoice {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                image_url: get_string_or_empty(&row, 3)?,
                amount: row.get(4)?,
            });
        }
        Ok(latest)
    }

    /// Insert or replace one month of the revenue series.
    pub async fn upsert_revenue(&self, month: &str, revenue: i64) -> Result<(), DatabaseError> {
        self.db()
            .conn()
            .execute(
                "INSERT INTO revenue (month, revenue) VALUES (?1, ?2) \
                 ON CONFLICT(month) DO UPDATE SET revenue = excluded.revenue",
                libsql::params![month, revenue],
            )
            .await?;
        Ok(())
    }
}
