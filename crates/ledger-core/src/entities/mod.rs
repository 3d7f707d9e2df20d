//! Entity structs for all ledger domain objects.
//!
//! Stored entities map to a table in the libSQL database; read models are the
//! shapes the dashboard queries return. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON roundtrip and schema validation.

mod customer;
mod dashboard;
mod invoice;
mod session;
mod user;

pub use customer::{Customer, CustomerField};
pub use dashboard::{CardData, DashboardData, LatestInvoice, Revenue};
pub use invoice::{Invoice, InvoiceDraft, InvoiceRow};
pub use session::UserSession;
pub use user::User;
