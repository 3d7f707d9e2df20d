//! Mapping pipeline results onto HTTP.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use ledger_actions::{ActionOutcome, StoreError};
use serde_json::json;
use thiserror::Error;

/// `Redirect` → 303, `Rendered` → 200, validation → 422, storage → 500.
pub fn outcome_response(outcome: ActionOutcome) -> Response {
    match outcome {
        ActionOutcome::Redirect { to } => Redirect::to(&to).into_response(),
        ActionOutcome::Rendered { message } => {
            (StatusCode::OK, Json(json!({ "message": message }))).into_response()
        }
        ActionOutcome::Failure { error } => {
            let status = if error.is_validation() {
                StatusCode::UNPROCESSABLE_ENTITY
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, Json(error)).into_response()
        }
    }
}

/// Read-side failures. The message is all the client sees.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("{0}")]
    Unavailable(&'static str),

    #[error("Invoice not found.")]
    NotFound,
}

impl ViewError {
    /// Convert a store failure, keeping "no such row" distinct.
    pub fn from_store(error: &StoreError, message: &'static str) -> Self {
        if error.is_not_found() {
            Self::NotFound
        } else {
            Self::Unavailable(message)
        }
    }
}

impl IntoResponse for ViewError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound => StatusCode::NOT_FOUND,
        };
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::LOCATION;
    use ledger_actions::{ActionError, FieldErrors};

    #[test]
    fn redirect_is_see_other() {
        let response = outcome_response(ActionOutcome::redirect("/dashboard/invoices"));
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/dashboard/invoices");
    }

    #[test]
    fn failures_map_to_status() {
        let validation = outcome_response(ActionOutcome::failure(ActionError::Validation {
            message: "Missing Fields. Failed to Create Invoice.".into(),
            errors: FieldErrors::default(),
        }));
        assert_eq!(validation.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let storage = outcome_response(ActionOutcome::failure(ActionError::Storage {
            message: "Database Error: Failed to Create Invoice.".into(),
        }));
        assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn rendered_is_ok() {
        let response = outcome_response(ActionOutcome::rendered("Deleted Invoice."));
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn view_errors() {
        assert_eq!(ViewError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ViewError::Unavailable("Failed to fetch invoices.")
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
