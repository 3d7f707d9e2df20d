//! General application configuration.

use serde::{Deserialize, Serialize};

/// Invoices per listing page.
const fn default_items_per_page() -> u32 {
    6
}

/// Rows in the dashboard's latest-invoices panel.
const fn default_latest_invoices() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: u32,

    #[serde(default = "default_latest_invoices")]
    pub latest_invoices: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            latest_invoices: default_latest_invoices(),
        }
    }
}
