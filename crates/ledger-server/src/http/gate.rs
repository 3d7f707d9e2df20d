//! Access gate middleware.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use chrono::Utc;
use ledger_auth::session::resolve_claim;
use ledger_auth::{GateDecision, RequestContext};

use crate::http::cookies;
use crate::http::state::AppState;

/// Runs before every route. Bypassed paths go straight through; everything
/// else gets a [`RequestContext`] built from the session cookie and the
/// gate's decision. Allowed requests carry the context as an extension.
pub async fn enforce(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    if state.bypass.is_match(&path) {
        return next.run(request).await;
    }

    let token = cookies::read(request.headers(), &state.config.auth.session_cookie);
    let claim = resolve_claim(
        state.service.as_ref(),
        token.as_deref(),
        Utc::now(),
        state.query_timeout(),
    )
    .await;
    let ctx = RequestContext::new(path, claim);

    match state.gate.evaluate(&ctx) {
        GateDecision::Allow => {
            request.extensions_mut().insert(ctx);
            next.run(request).await
        }
        GateDecision::RedirectTo(target) => {
            tracing::debug!(path = %ctx.path, %target, "gate redirect");
            Redirect::to(&target).into_response()
        }
    }
}
