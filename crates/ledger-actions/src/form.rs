//! Invoice form schema.
//!
//! Form submissions arrive as an untyped name→string map. [`InvoiceForm::parse`]
//! is the only way to turn one into an [`InvoiceDraft`]; the raw map never
//! travels past it.

use std::collections::BTreeMap;

use ledger_core::entities::InvoiceDraft;
use ledger_core::enums::InvoiceStatus;
use ledger_core::money::dollars_to_cents;
use serde::{Deserialize, Serialize};

pub const FIELD_CUSTOMER_ID: &str = "customerId";
pub const FIELD_AMOUNT: &str = "amount";
pub const FIELD_STATUS: &str = "status";

const ACCEPTED_FIELDS: [&str; 3] = [FIELD_CUSTOMER_ID, FIELD_AMOUNT, FIELD_STATUS];

const MSG_CUSTOMER: &str = "Please select a customer.";
const MSG_AMOUNT: &str = "Please enter an amount greater than $0.";
const MSG_STATUS: &str = "Please select an invoice status.";
const MSG_UNEXPECTED: &str = "Unexpected field.";

/// Untyped form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormInput(BTreeMap<String, String>);

impl FormInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.0.insert(name.to_string(), value.to_string());
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<BTreeMap<String, String>> for FormInput {
    fn from(fields: BTreeMap<String, String>) -> Self {
        Self(fields)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Field name → messages for every field that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn push(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Schema for the create and update invoice forms.
pub struct InvoiceForm;

impl InvoiceForm {
    /// Validate and coerce `input`.
    ///
    /// - `customerId`: non-empty after trimming
    /// - `amount`: a finite number greater than zero, at least one cent once rounded
    /// - `status`: exactly `pending` or `paid`
    ///
    /// Any other field name is rejected. All failures are collected, not just
    /// the first.
    ///
    /// # Errors
    ///
    /// Returns the per-field messages when any field is missing or invalid.
    pub fn parse(input: &FormInput) -> Result<InvoiceDraft, FieldErrors> {
        let mut errors = FieldErrors::default();

        for name in input.names() {
            if !ACCEPTED_FIELDS.contains(&name) {
                errors.push(name, MSG_UNEXPECTED);
            }
        }

        let customer_id = input
            .get(FIELD_CUSTOMER_ID)
            .map(str::trim)
            .filter(|id| !id.is_empty());
        if customer_id.is_none() {
            errors.push(FIELD_CUSTOMER_ID, MSG_CUSTOMER);
        }

        let amount_cents = input.get(FIELD_AMOUNT).and_then(parse_amount);
        if amount_cents.is_none() {
            errors.push(FIELD_AMOUNT, MSG_AMOUNT);
        }

        let status = input
            .get(FIELD_STATUS)
            .and_then(|s| s.parse::<InvoiceStatus>().ok());
        if status.is_none() {
            errors.push(FIELD_STATUS, MSG_STATUS);
        }

        match (customer_id, amount_cents, status) {
            (Some(customer_id), Some(amount_cents), Some(status)) if errors.is_empty() => {
                Ok(InvoiceDraft {
                    customer_id: customer_id.to_string(),
                    amount_cents,
                    status,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Dollars as typed into the form → positive cents.
fn parse_amount(raw: &str) -> Option<i64> {
    let dollars: f64 = raw.trim().parse().ok()?;
    if !dollars.is_finite() || dollars <= 0.0 {
        return None;
    }
    dollars_to_cents(dollars).filter(|cents| *cents > 0)
}
