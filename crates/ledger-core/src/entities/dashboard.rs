use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Summary counts shown in the dashboard cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CardData {
    pub number_of_invoices: i64,
    pub number_of_customers: i64,
    /// Sum of paid invoice amounts, in cents.
    pub total_paid_cents: i64,
    /// Sum of pending invoice amounts, in cents.
    pub total_pending_cents: i64,
}

/// One point of the monthly revenue series.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Revenue {
    pub month: String,
    pub revenue: i64,
}

/// A recent invoice with its customer, for the "latest invoices" panel.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LatestInvoice {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub amount: i64,
}

/// Everything the dashboard overview needs, fetched as a unit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardData {
    pub cards: CardData,
    pub revenue: Vec<Revenue>,
    pub latest_invoices: Vec<LatestInvoice>,
}
