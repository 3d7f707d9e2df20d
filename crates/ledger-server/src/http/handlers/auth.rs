use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use ledger_actions::session::{SignInOutcome, sign_in, sign_out};
use serde::Deserialize;
use serde_json::json;

use crate::http::cookies;
use crate::http::response::outcome_response;
use crate::http::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// The login page has no server data beyond its form fields.
pub async fn login_page() -> Json<serde_json::Value> {
    Json(json!({ "fields": ["email", "password"] }))
}

pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let auth = &state.config.auth;
    let limit = state.query_timeout();
    match sign_in(&state.service, auth, &form.email, &form.password, limit).await {
        SignInOutcome::SignedIn { session, redirect } => (
            [(
                SET_COOKIE,
                cookies::set(&auth.session_cookie, &session.token, auth.session_ttl_secs),
            )],
            Redirect::to(&redirect),
        )
            .into_response(),
        SignInOutcome::Rejected { message } => {
            (StatusCode::UNAUTHORIZED, Json(json!({ "message": message }))).into_response()
        }
    }
}

pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let auth = &state.config.auth;
    let token = cookies::read(&headers, &auth.session_cookie);
    let outcome = sign_out(&state.service, auth, token.as_deref(), state.query_timeout()).await;
    (
        [(SET_COOKIE, cookies::clear(&auth.session_cookie))],
        outcome_response(outcome),
    )
        .into_response()
}
