use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::InvoiceStatus;

/// A stored invoice. `amount` is in cents, `date` is the issue day (`YYYY-MM-DD`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Invoice {
    pub id: String,
    pub customer_id: String,
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: String,
}

/// Invoice listing row, joined with the owning customer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InvoiceRow {
    pub id: String,
    pub customer_id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub date: String,
    pub amount: i64,
    pub status: InvoiceStatus,
}

/// The validated, writable subset of an invoice: what a create or update
/// persists. Only produced by the form schema in `ledger-actions`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InvoiceDraft {
    pub customer_id: String,
    /// Amount in cents, already rounded from the submitted dollar value.
    pub amount_cents: i64,
    pub status: InvoiceStatus,
}
