use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A dashboard user who signs in with email and password.
///
/// `password_hash` is a bcrypt hash and is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    #[schemars(skip)]
    pub password_hash: String,
}
