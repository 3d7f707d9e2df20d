//! # ledger-actions
//!
//! The write side of the ledger dashboard and the page-data reads behind it.
//!
//! Every invoice mutation runs the same pipeline: parse the untyped form into
//! a typed draft, perform one bounded write, invalidate the cached invoice
//! listing, and return an [`ActionOutcome`] telling the caller where to go.
//! Failures never escape as raw errors; they come back as
//! [`ActionOutcome::Failure`] with a message safe to show the submitter.

pub mod error;
pub mod form;
pub mod invoice;
pub mod outcome;
pub mod revalidate;
pub mod session;
pub mod views;

mod bounded;

pub use error::StoreError;
pub use form::{FieldErrors, FormInput, InvoiceForm};
pub use invoice::{INVOICES_PATH, InvoiceActions};
pub use outcome::{ActionError, ActionOutcome};
pub use revalidate::{Revalidate, ViewCache};
