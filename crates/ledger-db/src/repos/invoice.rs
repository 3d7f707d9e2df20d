//! Invoice repository: create, read, replace, delete, filtered listing.
//!
//! Invoices are the only entity the mutation pipeline writes. Each write is a
//! single statement, so it is atomic on its own.

use ledger_core::entities::{Invoice, InvoiceDraft, InvoiceRow};
use ledger_core::ids::PREFIX_INVOICE;

use crate::error::DatabaseError;
use crate::helpers::{contains_pattern, get_string_or_empty, page_offset, parse_enum};
use crate::service::LedgerService;

const SELECT_COLS: &str = "id, customer_id, amount, status, date";

/// Listing filter shared by the page query and the page count.
const FILTER: &str = "c.name LIKE ?1 ESCAPE '\\' \
     OR c.email LIKE ?1 ESCAPE '\\' \
     OR CAST(i.amount AS TEXT) LIKE ?1 ESCAPE '\\' \
     OR i.date LIKE ?1 ESCAPE '\\' \
     OR i.status LIKE ?1 ESCAPE '\\'";

fn row_to_invoice(row: &libsql::Row) -> Result<Invoice, DatabaseError> {
    Ok(Invoice {
        id: row.get(0)?,
        customer_id: row.get(1)?,
        amount: row.get(2)?,
        status: parse_enum(&row.get::<String>(3)?)?,
        date: row.get(4)?,
    })
}

fn row_to_invoice_row(row: &libsql::Row) -> Result<InvoiceRow, DatabaseError> {
    Ok(InvoiceRow {
        id: row.get(0)?,
        customer_id: row.get(1)?,
        name: row.get(2)?,
        email: row.get(3)?,
        image_url: get_string_or_empty(row, 4)?,
        date: row.get(5)?,
        amount: row.get(6)?,
        status: parse_enum(&row.get::<String>(7)?)?,
    })
}

impl LedgerService {
    /// Insert a new invoice issued on `date` (`YYYY-MM-DD`).
    ///
    /// The customer reference is checked by the store's foreign key, not here.
    pub async fn create_invoice(
        &self,
        draft: &InvoiceDraft,
        date: &str,
    ) -> Result<Invoice, DatabaseError> {
        let id = self.db().generate_id(PREFIX_INVOICE).await?;

        self.db()
            .conn()
            .execute(
                &format!("INSERT INTO invoices ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5)"),
                libsql::params![
                    id.as_str(),
                    draft.customer_id.as_str(),
                    draft.amount_cents,
                    draft.status.as_str(),
                    date
                ],
            )
            .await?;

        tracing::debug!(%id, customer_id = %draft.customer_id, "invoice inserted");

        Ok(Invoice {
            id,
            customer_id: draft.customer_id.clone(),
            amount: draft.amount_cents,
            status: draft.status,
            date: date.to_string(),
        })
    }

    pub async fn get_invoice(&self, id: &str) -> Result<Invoice, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM invoices WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_invoice(&row)
    }

    /// Replace customer, amount, and status of invoice `id`. The issue date is
    /// left untouched.
    ///
    /// Returns the number of rows changed; `0` means no invoice has that id.
    pub async fn update_invoice(
        &self,
        id: &str,
        draft: &InvoiceDraft,
    ) -> Result<u64, DatabaseError> {
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE invoices SET customer_id = ?1, amount = ?2, status = ?3 WHERE id = ?4",
                libsql::params![
                    draft.customer_id.as_str(),
                    draft.amount_cents,
                    draft.status.as_str(),
                    id
                ],
            )
            .await?;
        Ok(changed)
    }

    /// Delete invoice `id`. Returns the number of rows removed.
    pub async fn delete_invoice(&self, id: &str) -> Result<u64, DatabaseError> {
        let removed = self
            .db()
            .conn()
            .execute("DELETE FROM invoices WHERE id = ?1", [id])
            .await?;
        Ok(removed)
    }

    pub async fn count_invoices(&self) -> Result<i64, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT count(*) FROM invoices", ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get(0)?)
    }

    /// One page of invoices matching `query` against customer name, email,
    /// amount, date, or status. Newest first.
    pub async fn list_filtered_invoices(
        &self,
        query: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<InvoiceRow>, DatabaseError> {
        let pattern = contains_pattern(query);
        let offset = i64::try_from(page_offset(page, per_page))
            .map_err(|_| DatabaseError::OutOfRange {
                what: "page",
                value: u64::from(page),
            })?;

        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT i.id, i.customer_id, c.name, c.email, c.image_url, i.date, i.amount, i.status \
                     FROM invoices i \
                     JOIN customers c ON i.customer_id = c.id \
                     WHERE {FILTER} \
                     ORDER BY i.date DESC, i.rowid DESC \
                     LIMIT ?2 OFFSET ?3"
                ),
                libsql::params![pattern, per_page, offset],
            )
            .await?;

        let mut invoices = Vec::new();
        while let Some(row) = rows.next().await? {
            invoices.push(row_to_invoice_row(&row)?);
        }
        Ok(invoices)
    }

    /// Number of listing pages for `query` (at least 0).
    pub async fn count_invoice_pages(
        &self,
        query: &str,
        per_page: u32,
    ) -> Result<u32, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT count(*) FROM invoices i \
                     JOIN customers c ON i.customer_id = c.id \
                     WHERE {FILTER}"
                ),
                [contains_pattern(query)],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let total = u64::try_from(row.get::<i64>(0)?).unwrap_or(0);
        let pages = total.div_ceil(u64::from(per_page.max(1)));
        u32::try_from(pages).map_err(|_| DatabaseError::OutOfRange {
            what: "page count",
            value: pages,
        })
    }
}
