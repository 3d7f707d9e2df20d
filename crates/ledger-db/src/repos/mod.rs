//! Repository modules implementing CRUD operations for all ledger entities.
//!
//! Each module adds methods to `LedgerService` via `impl LedgerService` blocks.

pub mod customer;
pub mod dashboard;
pub mod invoice;
pub mod session;
pub mod user;
