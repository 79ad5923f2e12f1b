use axum::extract::{Path, Query, State};
use axum::Json;
use validator::Validate;

use crate::api::dto::dashboard_dto::{ModelPath, PerformanceQuery};
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::drift::dto::DriftDashboardResponseDto;
use crate::domain::performance::dto::PerformanceDashboardResponseDto;
use crate::errors::AppError;

pub struct DashboardController;

impl DashboardController {
    pub async fn get_drift_dashboard(
        State(state): State<AppState>,
        Path(path): Path<ModelPath>,
    ) -> Result<Json<ApiResponse<DriftDashboardResponseDto>>, AppError> {
        path.validate().map_err(|e| AppError::BadRequest(e.to_string()))?;

        to_json(
            state
                .dashboard_service
                .get_drift_dashboard(path.model_id)
                .await,
        )
    }

    pub async fn get_performance_dashboard(
        State(state): State<AppState>,
        Path(path): Path<ModelPath>,
        Query(q): Query<PerformanceQuery>,
    ) -> Result<Json<ApiResponse<PerformanceDashboardResponseDto>>, AppError> {
        path.validate().map_err(|e| AppError::BadRequest(e.to_string()))?;
        q.validate().map_err(|e| AppError::BadRequest(e.to_string()))?;

        to_json(
            state
                .dashboard_service
                .get_performance_dashboard(path.model_id, q.model_type)
                .await,
        )
    }
}
