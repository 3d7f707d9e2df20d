//! HTTP surface of the dashboard.
//!
//! Pages answer with the JSON view data a rendering layer would consume.
//! Form posts run the mutation pipeline and answer with its outcome.

mod cookies;
mod gate;
mod handlers;
mod response;
mod state;

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use serde_json::json;

pub use state::AppState;

use handlers::{auth, dashboard, invoices};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(|| async { axum::Json(json!({ "status": "ok" })) }))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/dashboard", get(dashboard::overview))
        .route("/dashboard/logout", post(auth::logout))
        .route("/dashboard/invoices", get(invoices::list).post(invoices::create))
        .route("/dashboard/invoices/create", get(invoices::create_form))
        .route("/dashboard/invoices/:id", post(invoices::update))
        .route("/dashboard/invoices/:id/edit", get(invoices::edit_form))
        .route("/dashboard/invoices/:id/delete", post(invoices::delete))
        .layer(middleware::from_fn_with_state(state.clone(), gate::enforce))
        .with_state(state)
}
