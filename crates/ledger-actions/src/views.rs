//! Page data reads.
//!
//! Each page issues its independent reads concurrently and waits for all of
//! them. There is no partial result: if any read fails or times out the
//! whole fetch fails.

use std::time::Duration;

use ledger_core::entities::{CustomerField, DashboardData, Invoice, InvoiceRow};
use ledger_db::service::LedgerService;
use serde::Serialize;

use crate::bounded::bounded;
use crate::error::StoreError;

/// Cards, revenue series, and the `latest` most recent invoices.
///
/// # Errors
///
/// Returns the first `StoreError` among the three reads.
pub async fn fetch_dashboard(
    service: &LedgerService,
    latest: u32,
    timeout: Duration,
) -> Result<DashboardData, StoreError> {
    let (cards, revenue, latest_invoices) = tokio::try_join!(
        bounded("fetch card data", timeout, service.fetch_card_data()),
        bounded("fetch revenue", timeout, service.fetch_revenue()),
        bounded(
            "fetch latest invoices",
            timeout,
            service.fetch_latest_invoices(latest)
        ),
    )
    .inspect_err(|error| tracing::error!(%error, "Failed to fetch dashboard data"))?;

    Ok(DashboardData {
        cards,
        revenue,
        latest_invoices,
    })
}

/// One page of the searchable invoice listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoicePage {
    pub query: String,
    pub page: u32,
    pub total_pages: u32,
    pub invoices: Vec<InvoiceRow>,
}

/// # Errors
///
/// Returns a `StoreError` if either the page or the page count read fails.
pub async fn fetch_invoice_page(
    service: &LedgerService,
    query: &str,
    page: u32,
    per_page: u32,
    timeout: Duration,
) -> Result<InvoicePage, StoreError> {
    let page = page.max(1);
    let (invoices, total_pages) = tokio::try_join!(
        bounded(
            "fetch filtered invoices",
            timeout,
            service.list_filtered_invoices(query, page, per_page)
        ),
        bounded(
            "fetch invoice pages",
            timeout,
            service.count_invoice_pages(query, per_page)
        ),
    )
    .inspect_err(|error| tracing::error!(%error, "Failed to fetch invoices"))?;

    Ok(InvoicePage {
        query: query.to_string(),
        page,
        total_pages,
        invoices,
    })
}

/// Data for the create and edit invoice forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceFormView {
    /// The invoice being edited; `None` on the create form.
    pub invoice: Option<Invoice>,
    pub customers: Vec<CustomerField>,
}

/// # Errors
///
/// Returns a `StoreError` if the customer list cannot be read.
pub async fn fetch_create_form(
    service: &LedgerService,
    timeout: Duration,
) -> Result<InvoiceFormView, StoreError> {
    let customers = bounded("fetch customers", timeout, service.list_customers())
        .await
        .inspect_err(|error| tracing::error!(%error, "Failed to fetch all customers"))?;
    Ok(InvoiceFormView {
        invoice: None,
        customers,
    })
}

/// # Errors
///
/// Returns a `StoreError` if either read fails. A missing invoice is a
/// `StoreError` for which [`StoreError::is_not_found`] holds.
pub async fn fetch_edit_form(
    service: &LedgerService,
    id: &str,
    timeout: Duration,
) -> Result<InvoiceFormView, StoreError> {
    let (invoice, customers) = tokio::try_join!(
        bounded("fetch invoice", timeout, service.get_invoice(id)),
        bounded("fetch customers", timeout, service.list_customers()),
    )?;
    Ok(InvoiceFormView {
        invoice: Some(invoice),
        customers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_core::entities::InvoiceDraft;
    use ledger_core::enums::InvoiceStatus;
    use pretty_assertions::assert_eq;

    const TIMEOUT: Duration = Duration::from_secs(5);

    async fn seeded() -> (LedgerService, String) {
        let svc = LedgerService::new_local(":memory:").await.unwrap();
        let customer = svc
            .create_customer("Amy Burns", "amy@burns.com", "/customers/amy-burns.png")
            .await
            .unwrap();
        for (cents, status, date) in [
            (500, InvoiceStatus::Paid, "2024-01-01"),
            (700, InvoiceStatus::Pending, "2024-02-01"),
        ] {
            let draft = InvoiceDraft {
                customer_id: customer.id.clone(),
                amount_cents: cents,
                status,
            };
            svc.create_invoice(&draft, date).await.unwrap();
        }
        svc.upsert_revenue("Jan", 2000).await.unwrap();
        (svc, customer.id)
    }

    #[tokio::test]
    async fn dashboard_combines_three_reads() {
        let (svc, _) = seeded().await;
        let data = fetch_dashboard(&svc, 5, TIMEOUT).await.unwrap();

        assert_eq!(data.cards.number_of_invoices, 2);
        assert_eq!(data.cards.total_paid_cents, 500);
        assert_eq!(data.cards.total_pending_cents, 700);
        assert_eq!(data.revenue.len(), 1);
        assert_eq!(data.latest_invoices[0].amount, 700);
    }

    #[tokio::test]
    async fn dashboard_fails_as_a_unit() {
        let (svc, _) = seeded().await;
        svc.db()
            .conn()
            .execute("DROP TABLE revenue", ())
            .await
            .unwrap();

        let result = fetch_dashboard(&svc, 5, TIMEOUT).await;
        assert!(matches!(
            result,
            Err(StoreError::Database { operation: "fetch revenue", .. })
        ));
    }

    #[tokio::test]
    async fn invoice_page_clamps_page_zero() {
        let (svc, _) = seeded().await;
        let page = fetch_invoice_page(&svc, "", 0, 6, TIMEOUT).await.unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.invoices.len(), 2);
    }

    #[tokio::test]
    async fn invoice_page_applies_query() {
        let (svc, _) = seeded().await;
        let page = fetch_invoice_page(&svc, "pending", 1, 6, TIMEOUT).await.unwrap();
        assert_eq!(page.invoices.len(), 1);
        assert_eq!(page.query, "pending");
    }

    #[tokio::test]
    async fn create_form_lists_customers() {
        let (svc, customer_id) = seeded().await;
        let view = fetch_create_form(&svc, TIMEOUT).await.unwrap();
        assert!(view.invoice.is_none());
        assert_eq!(view.customers.len(), 1);
        assert_eq!(view.customers[0].id, customer_id);
    }

    #[tokio::test]
    async fn edit_form_for_missing_invoice_is_not_found() {
        let (svc, _) = seeded().await;
        let error = fetch_edit_form(&svc, "inv-missing", TIMEOUT).await.unwrap_err();
        assert!(error.is_not_found());
    }
}
