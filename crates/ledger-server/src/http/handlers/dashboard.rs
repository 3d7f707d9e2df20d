use axum::Json;
use axum::extract::State;
use ledger_actions::views::fetch_dashboard;
use ledger_core::entities::DashboardData;

use crate::http::response::ViewError;
use crate::http::state::AppState;

pub async fn overview(State(state): State<AppState>) -> Result<Json<DashboardData>, ViewError> {
    fetch_dashboard(
        &state.service,
        state.config.general.latest_invoices,
        state.query_timeout(),
    )
    .await
    .map(Json)
    .map_err(|error| ViewError::from_store(&error, "Failed to fetch dashboard data."))
}
