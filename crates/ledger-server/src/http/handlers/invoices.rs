use std::collections::BTreeMap;

use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::{Form, Json};
use ledger_actions::FormInput;
use ledger_actions::views::{InvoiceFormView, fetch_create_form, fetch_edit_form, fetch_invoice_page};
use serde::Deserialize;
use serde_json::Value;

use crate::http::response::{ViewError, outcome_response};
use crate::http::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListingParams {
    #[serde(default)]
    pub query: String,
    pub page: Option<String>,
}

impl ListingParams {
    /// Non-numeric or missing pages fall back to the first page.
    fn page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .filter(|p| *p > 0)
            .unwrap_or(1)
    }
}

/// Cache key for one listing view. Lives under the invoices path so that
/// revalidating it drops every cached page.
fn listing_key(query: &str, page: u32) -> String {
    format!("{}?query={query}&page={page}", ledger_actions::INVOICES_PATH)
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Result<Json<Value>, ViewError> {
    let page = params.page();
    let key = listing_key(&params.query, page);
    if let Some(view) = state.cache.get(&key) {
        tracing::trace!(%key, "listing cache hit");
        return Ok(Json(view));
    }

    let listing = fetch_invoice_page(
        &state.service,
        &params.query,
        page,
        state.config.general.items_per_page,
        state.query_timeout(),
    )
    .await
    .map_err(|error| ViewError::from_store(&error, "Failed to fetch invoices."))?;

    let view = serde_json::to_value(listing)
        .map_err(|_| ViewError::Unavailable("Failed to fetch invoices."))?;
    state.cache.insert(key, view.clone());
    Ok(Json(view))
}

pub async fn create_form(State(state): State<AppState>) -> Result<Json<InvoiceFormView>, ViewError> {
    fetch_create_form(&state.service, state.query_timeout())
        .await
        .map(Json)
        .map_err(|error| ViewError::from_store(&error, "Failed to fetch all customers."))
}

pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InvoiceFormView>, ViewError> {
    fetch_edit_form(&state.service, &id, state.query_timeout())
        .await
        .map(Json)
        .map_err(|error| ViewError::from_store(&error, "Failed to fetch invoice."))
}

pub async fn create(
    State(state): State<AppState>,
    Form(fields): Form<BTreeMap<String, String>>,
) -> Response {
    outcome_response(state.actions.create(&FormInput::from(fields)).await)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(fields): Form<BTreeMap<String, String>>,
) -> Response {
    outcome_response(state.actions.update(&id, &FormInput::from(fields)).await)
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    outcome_response(state.actions.delete(&id).await)
}
