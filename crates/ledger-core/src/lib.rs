//! # ledger-core
//!
//! Core types, ID prefixes, and error types for the ledger invoicing dashboard.
//!
//! This crate provides the foundational types shared across all ledger crates:
//! - Entity structs for stored rows (invoices, customers, users)
//! - Dashboard read models consumed by the rendering layer
//! - The `InvoiceStatus` enum
//! - ID prefix constants
//! - Money and date helpers used when persisting invoices
//! - Cross-cutting error types

pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod money;
