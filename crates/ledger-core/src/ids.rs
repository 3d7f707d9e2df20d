//! ID prefixes for generated identifiers.
//!
//! IDs are produced by `ledger-db` as `{prefix}-{8 hex chars}`, e.g. `inv-a3f8b2c1`.

pub const PREFIX_INVOICE: &str = "inv";
pub const PREFIX_CUSTOMER: &str = "cus";
pub const PREFIX_USER: &str = "usr";

/// Every prefix in use, for exhaustive tests.
pub const ALL_PREFIXES: &[&str] = &[PREFIX_INVOICE, PREFIX_CUSTOMER, PREFIX_USER];
