use std::collections::HashMap;

use anyhow::Context;
use ledger_core::entities::InvoiceDraft;
use ledger_core::enums::InvoiceStatus;
use ledger_db::service::LedgerService;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SeedArgs, UserAddArgs};
use crate::commands::user::add_user;
use crate::context::AppContext;
use crate::output::output;

const CUSTOMERS: [(&str, &str, &str); 6] = [
    ("Evil Rabbit", "evil@rabbit.com", "/customers/evil-rabbit.png"),
    ("Delba de Oliveira", "delba@oliveira.com", "/customers/delba-de-oliveira.png"),
    ("Lee Robinson", "lee@robinson.com", "/customers/lee-robinson.png"),
    ("Michael Novotny", "michael@novotny.com", "/customers/michael-novotny.png"),
    ("Amy Burns", "amy@burns.com", "/customers/amy-burns.png"),
    ("Balazs Orban", "balazs@orban.com", "/customers/balazs-orban.png"),
];

/// (customer email, cents, status, date)
const INVOICES: [(&str, i64, InvoiceStatus, &str); 13] = [
    ("evil@rabbit.com", 15_795, InvoiceStatus::Pending, "2022-12-06"),
    ("delba@oliveira.com", 20_348, InvoiceStatus::Pending, "2022-11-14"),
    ("amy@burns.com", 3_040, InvoiceStatus::Paid, "2022-10-29"),
    ("michael@novotny.com", 44_800, InvoiceStatus::Paid, "2023-09-10"),
    ("balazs@orban.com", 34_577, InvoiceStatus::Pending, "2023-08-05"),
    ("lee@robinson.com", 54_246, InvoiceStatus::Pending, "2023-07-16"),
    ("evil@rabbit.com", 666, InvoiceStatus::Pending, "2023-06-27"),
    ("michael@novotny.com", 32_545, InvoiceStatus::Paid, "2023-06-09"),
    ("amy@burns.com", 1_250, InvoiceStatus::Paid, "2023-06-17"),
    ("balazs@orban.com", 8_546, InvoiceStatus::Paid, "2023-06-07"),
    ("delba@oliveira.com", 500, InvoiceStatus::Paid, "2023-08-19"),
    ("balazs@orban.com", 8_945, InvoiceStatus::Paid, "2023-06-03"),
    ("lee@robinson.com", 1_000, InvoiceStatus::Paid, "2022-06-05"),
];

const REVENUE: [(&str, i64); 12] = [
    ("Jan", 2000),
    ("Feb", 1800),
    ("Mar", 2200),
    ("Apr", 2500),
    ("May", 2300),
    ("Jun", 3200),
    ("Jul", 3500),
    ("Aug", 3700),
    ("Sep", 2500),
    ("Oct", 2800),
    ("Nov", 3000),
    ("Dec", 4800),
];

const DEMO_USER: (&str, &str, &str) = ("User", "user@nextmail.com", "123456");

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
pub struct SeedReport {
    pub customers: usize,
    pub invoices: usize,
    pub revenue_months: usize,
    pub user: Option<String>,
}

pub async fn handle(args: &SeedArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let report = seed(&ctx.service, !args.no_user, ctx.config.auth.bcrypt_cost).await?;
    output(&report, flags.format)
}

/// Load the demo data set. Refuses to run against a store that already has
/// customers so it never duplicates rows.
pub async fn seed(
    service: &LedgerService,
    with_user: bool,
    bcrypt_cost: u32,
) -> anyhow::Result<SeedReport> {
    if !service.list_customers().await?.is_empty() {
        anyhow::bail!("database already has customers; seed only runs on an empty store");
    }

    let mut report = SeedReport::default();
    let mut ids = HashMap::new();
    for (name, email, image_url) in CUSTOMERS {
        let customer = service
            .create_customer(name, email, image_url)
            .await
            .with_context(|| format!("failed to seed customer {email}"))?;
        ids.insert(email, customer.id);
        report.customers += 1;
    }

    for (email, amount_cents, status, date) in INVOICES {
        let customer_id = ids
            .get(email)
            .with_context(|| format!("seed invoice references unknown customer {email}"))?;
        let draft = InvoiceDraft {
            customer_id: customer_id.clone(),
            amount_cents,
            status,
        };
        service.create_invoice(&draft, date).await?;
        report.invoices += 1;
    }

    for (month, revenue) in REVENUE {
        service.upsert_revenue(month, revenue).await?;
        report.revenue_months += 1;
    }

    if with_user {
        let (name, email, password) = DEMO_USER;
        let args = UserAddArgs {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        };
        let user = add_user(service, &args, bcrypt_cost).await?;
        report.user = Some(user.email);
    }

    tracing::info!(
        customers = report.customers,
        invoices = report.invoices,
        "demo data seeded"
    );
    Ok(report)
}
