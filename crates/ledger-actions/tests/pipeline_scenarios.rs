//! Mutation pipeline scenarios against a real store and view cache.

use std::sync::Arc;
use std::time::Duration;

use ledger_actions::views::fetch_invoice_page;
use ledger_actions::{
    ActionError, ActionOutcome, FormInput, INVOICES_PATH, InvoiceActions, Revalidate, ViewCache,
};
use ledger_core::dates::today_iso;
use ledger_core::enums::InvoiceStatus;
use ledger_db::service::LedgerService;
use pretty_assertions::assert_eq;

const TIMEOUT: Duration = Duration::from_secs(5);
const LISTING_KEY: &str = "/dashboard/invoices?query=&page=1";

struct Fixture {
    service: Arc<LedgerService>,
    cache: Arc<ViewCache>,
    actions: InvoiceActions,
    customer_id: String,
}

async fn fixture() -> Fixture {
    let service = Arc::new(LedgerService::new_local(":memory:").await.unwrap());
    let customer = service
        .create_customer("Lee Robinson", "lee@robinson.com", "/customers/lee-robinson.png")
        .await
        .unwrap();
    let cache = Arc::new(ViewCache::new());
    let actions = InvoiceActions::new(
        Arc::clone(&service),
        Arc::clone(&cache) as Arc<dyn Revalidate>,
        TIMEOUT,
    );
    Fixture {
        service,
        cache,
        actions,
        customer_id: customer.id,
    }
}

impl Fixture {
    /// Read the listing the way the server does: from cache, else the store.
    async fn listing(&self) -> serde_json::Value {
        if let Some(view) = self.cache.get(LISTING_KEY) {
            return view;
        }
        let page = fetch_invoice_page(&self.service, "", 1, 6, TIMEOUT)
            .await
            .unwrap();
        let view = serde_json::to_value(page).unwrap();
        self.cache.insert(LISTING_KEY, view.clone());
        view
    }
}

fn form(customer_id: &str, amount: &str, status: &str) -> FormInput {
    [
        ("customerId", customer_id),
        ("amount", amount),
        ("status", status),
    ]
    .into_iter()
    .collect()
}

#[tokio::test]
async fn create_invalidates_cached_listing() {
    let f = fixture().await;
    assert_eq!(f.listing().await["invoices"].as_array().unwrap().len(), 0);
    assert!(f.cache.get(LISTING_KEY).is_some());

    let outcome = f.actions.create(&form(&f.customer_id, "12.50", "pending")).await;
    assert_eq!(outcome, ActionOutcome::redirect(INVOICES_PATH));
    assert!(f.cache.get(LISTING_KEY).is_none());

    let listing = f.listing().await;
    let rows = listing["invoices"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["amount"], 1250);
    assert_eq!(rows[0]["status"], "pending");
    assert_eq!(rows[0]["date"], today_iso());
}

#[tokio::test]
async fn rejected_submission_keeps_cache_and_store() {
    let f = fixture().await;
    f.listing().await;

    let outcome = f.actions.create(&form("", "-5", "bad")).await;
    let ActionOutcome::Failure { error } = outcome else {
        panic!("expected failure");
    };
    assert!(error.is_validation());
    assert!(f.cache.get(LISTING_KEY).is_some());
    assert_eq!(f.service.count_invoices().await.unwrap(), 0);
}

#[tokio::test]
async fn full_lifecycle() {
    let f = fixture().await;
    f.actions.create(&form(&f.customer_id, "3", "pending")).await;
    let id = f.service.list_filtered_invoices("", 1, 6).await.unwrap()[0]
        .id
        .clone();

    let outcome = f.actions.update(&id, &form(&f.customer_id, "4.5", "paid")).await;
    assert_eq!(outcome, ActionOutcome::redirect(INVOICES_PATH));
    let invoice = f.service.get_invoice(&id).await.unwrap();
    assert_eq!((invoice.amount, invoice.status), (450, InvoiceStatus::Paid));

    f.listing().await;
    assert_eq!(f.actions.delete(&id).await, ActionOutcome::rendered("Deleted Invoice."));
    assert!(f.cache.get(LISTING_KEY).is_none());
    assert_eq!(f.service.count_invoices().await.unwrap(), 0);
}

#[tokio::test]
async fn storage_failure_is_typed() {
    let f = fixture().await;
    f.service
        .db()
        .conn()
        .execute("DROP TABLE invoices", ())
        .await
        .unwrap();

    let outcome = f.actions.update("inv-1", &form(&f.customer_id, "1", "paid")).await;
    assert_eq!(
        outcome,
        ActionOutcome::failure(ActionError::Storage {
            message: "Database Error: Failed to Update Invoice.".into()
        })
    );
}
