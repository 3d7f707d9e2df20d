//! Shared test utilities for ledger-db unit tests.

pub(crate) mod helpers {
    use ledger_core::entities::{Customer, InvoiceDraft};
    use ledger_core::enums::InvoiceStatus;

    use crate::LedgerDb;
    use crate::service::LedgerService;

    /// Create an in-memory LedgerService.
    pub async fn test_service() -> LedgerService {
        let db = LedgerDb::open_local(":memory:").await.unwrap();
        LedgerService::from_db(db)
    }

    /// Insert a customer and return it (most invoice tests need one for the FK).
    pub async fn seed_customer(svc: &LedgerService, name: &str) -> Customer {
        let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
        svc.create_customer(name, &email, "/customers/placeholder.png")
            .await
            .unwrap()
    }

    /// Build a draft for `customer_id`.
    pub fn draft(customer_id: &str, amount_cents: i64, status: InvoiceStatus) -> InvoiceDraft {
        InvoiceDraft {
            customer_id: customer_id.to_string(),
            amount_cents,
            status,
        }
    }
}
