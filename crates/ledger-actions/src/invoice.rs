//! Create, update, and delete invoices.
//!
//! Each action is validate → one bounded write → revalidate → outcome.
//! Invalidation only happens after the write succeeded. Update and delete do
//! not check that the id exists: touching a missing invoice is a successful
//! no-op and still revalidates the listing.

use std::sync::Arc;
use std::time::Duration;

use ledger_core::dates::today_iso;
use ledger_core::money::format_cents;
use ledger_db::service::LedgerService;

use crate::bounded::bounded;
use crate::error::StoreError;
use crate::form::{FormInput, InvoiceForm};
use crate::outcome::{ActionError, ActionOutcome};
use crate::revalidate::Revalidate;

/// Listing view every invoice write invalidates, and where create/update land.
pub const INVOICES_PATH: &str = "/dashboard/invoices";

const CREATE_INVALID: &str = "Missing Fields. Failed to Create Invoice.";
const UPDATE_INVALID: &str = "Missing Fields. Failed to Update Invoice.";
const CREATE_FAILED: &str = "Database Error: Failed to Create Invoice.";
const UPDATE_FAILED: &str = "Database Error: Failed to Update Invoice.";
const DELETE_FAILED: &str = "Database Error: Failed to Delete Invoice.";
const DELETED: &str = "Deleted Invoice.";

/// The invoice mutation pipeline. Sole writer of invoice rows.
#[derive(Clone)]
pub struct InvoiceActions {
    service: Arc<LedgerService>,
    cache: Arc<dyn Revalidate>,
    timeout: Duration,
}

impl InvoiceActions {
    #[must_use]
    pub fn new(service: Arc<LedgerService>, cache: Arc<dyn Revalidate>, timeout: Duration) -> Self {
        Self {
            service,
            cache,
            timeout,
        }
    }

    /// Validate `input` and insert a new invoice dated today (UTC).
    pub async fn create(&self, input: &FormInput) -> ActionOutcome {
        let draft = match InvoiceForm::parse(input) {
            Ok(draft) => draft,
            Err(errors) => {
                tracing::debug!(fields = ?errors.fields().collect::<Vec<_>>(), "create rejected");
                return ActionOutcome::failure(ActionError::Validation {
                    message: CREATE_INVALID.into(),
                    errors,
                });
            }
        };

        let date = today_iso();
        let created = bounded(
            "create invoice",
            self.timeout,
            self.service.create_invoice(&draft, &date),
        )
        .await;
        match created {
            Ok(invoice) => tracing::info!(
                id = %invoice.id,
                amount = %format_cents(invoice.amount),
                "invoice created"
            ),
            Err(error) => {
                tracing::error!(%error, "Database Error: Failed to Create Invoice");
                return self.write_failed(&error, CREATE_FAILED);
            }
        }

        self.cache.revalidate_path(INVOICES_PATH);
        ActionOutcome::redirect(INVOICES_PATH)
    }

    /// Validate `input` and replace customer, amount, and status of `id`.
    pub async fn update(&self, id: &str, input: &FormInput) -> ActionOutcome {
        let draft = match InvoiceForm::parse(input) {
            Ok(draft) => draft,
            Err(errors) => {
                tracing::debug!(id, fields = ?errors.fields().collect::<Vec<_>>(), "update rejected");
                return ActionOutcome::failure(ActionError::Validation {
                    message: UPDATE_INVALID.into(),
                    errors,
                });
            }
        };

        match bounded(
            "update invoice",
            self.timeout,
            self.service.update_invoice(id, &draft),
        )
        .await
        {
            Ok(0) => tracing::debug!(id, "update matched no invoice"),
            Ok(_) => tracing::info!(id, "invoice updated"),
            Err(error) => {
                tracing::error!(id, %error, "Database Error: Failed to Update Invoice");
                return self.write_failed(&error, UPDATE_FAILED);
            }
        }

        self.cache.revalidate_path(INVOICES_PATH);
        ActionOutcome::redirect(INVOICES_PATH)
    }

    /// Delete `id`. The caller stays on its current view.
    pub async fn delete(&self, id: &str) -> ActionOutcome {
        match bounded("delete invoice", self.timeout, self.service.delete_invoice(id)).await {
            Ok(0) => tracing::debug!(id, "delete matched no invoice"),
            Ok(_) => tracing::info!(id, "invoice deleted"),
            Err(error) => {
                tracing::error!(id, %error, "Database Error: Failed to Delete Invoice");
                return self.write_failed(&error, DELETE_FAILED);
            }
        }

        self.cache.revalidate_path(INVOICES_PATH);
        ActionOutcome::rendered(DELETED)
    }

    /// A timed-out statement may still have committed, so the listing is
    /// dropped anyway; the caller is told the write failed either way.
    fn write_failed(&self, error: &StoreError, message: &str) -> ActionOutcome {
        if matches!(error, StoreError::Timeout { .. }) {
            self.cache.revalidate_path(INVOICES_PATH);
        }
        storage_failure(message)
    }
}

fn storage_failure(message: &str) -> ActionOutcome {
    ActionOutcome::failure(ActionError::Storage {
        message: message.into(),
    })
}
