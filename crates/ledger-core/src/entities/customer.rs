use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A customer that invoices are billed to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Minimal customer projection used to populate the invoice form's select.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CustomerField {
    pub id: String,
    pub name: String,
}
