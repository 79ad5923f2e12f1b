//! Dashboard routes (e.g., /api/v1/models/*)

use axum::{routing::get, Router};

use crate::api::controller::dashboard::DashboardController;
use crate::app_state::AppState;

/// Build the router for dashboard endpoints under /api/v1/models
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/{model_id}/drift", get(DashboardController::get_drift_dashboard))
        .route("/{model_id}/performance", get(DashboardController::get_performance_dashboard))
}
