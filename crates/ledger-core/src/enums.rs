//! Status enums for ledger entities.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and store the same string in SQL.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// InvoiceStatus
// ---------------------------------------------------------------------------

/// Payment status of an invoice.
///
/// Invoices are written as either status and may be moved freely between the two
/// by an update; there is no enforced lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    /// Every variant, in display order.
    pub const ALL: [Self; 2] = [Self::Pending, Self::Paid];

    /// Return the string representation used in SQL storage and form input.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = CoreError;

    /// Exact, case-sensitive match; form values are machine-generated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::UnknownStatus(s.to_string()))
    }
}
