//! What a pipeline run tells its caller to do next.

use serde::Serialize;
use thiserror::Error;

use crate::form::FieldErrors;

/// Result of one action. The caller acts on it; the pipeline never performs
/// navigation itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// Navigate to this path.
    Redirect { to: String },
    /// Stay on the current view and show this message.
    Rendered { message: String },
    Failure { error: ActionError },
}

impl ActionOutcome {
    #[must_use]
    pub fn redirect(to: impl Into<String>) -> Self {
        Self::Redirect { to: to.into() }
    }

    #[must_use]
    pub fn rendered(message: impl Into<String>) -> Self {
        Self::Rendered {
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn failure(error: ActionError) -> Self {
        Self::Failure { error }
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }
}

/// Failures a submitter can see. Raw storage errors are never carried here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionError {
    /// Input failed the form schema; nothing was written.
    #[error("{message}")]
    Validation { message: String, errors: FieldErrors },

    /// The store failed or timed out.
    #[error("{message}")]
    Storage { message: String },
}

impl ActionError {
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. } | Self::Storage { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn redirect_serializes_with_kind_tag() {
        let json = serde_json::to_value(ActionOutcome::redirect("/dashboard/invoices")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "redirect", "to": "/dashboard/invoices"})
        );
    }

    #[test]
    fn validation_failure_serializes_field_errors() {
        let mut errors = FieldErrors::default();
        errors.push("amount", "Please enter an amount greater than $0.");
        let outcome = ActionOutcome::failure(ActionError::Validation {
            message: "Missing Fields. Failed to Create Invoice.".into(),
            errors,
        });

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["kind"], "failure");
        assert_eq!(json["error"]["type"], "validation");
        assert_eq!(
            json["error"]["errors"]["amount"][0],
            "Please enter an amount greater than $0."
        );
        assert!(outcome.is_failure());
    }

    #[test]
    fn storage_error_displays_only_its_message() {
        let error = ActionError::Storage {
            message: "Database Error: Failed to Delete Invoice.".into(),
        };
        assert_eq!(error.to_string(), "Database Error: Failed to Delete Invoice.");
        assert!(!error.is_validation());
    }
}
