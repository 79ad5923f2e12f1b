use std::sync::Arc;

use crate::core::client::monitoring_backend_trait::MonitoringBackend;
use crate::core::client::whitebox_client::WhiteboxClient;
use crate::core::config::dashboard_config::DashboardConfig;
use crate::domain::drift::dto::DriftDashboardResponseDto;
use crate::domain::performance::dto::PerformanceDashboardResponseDto;

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: Arc<DashboardService>,
}

pub fn build_app_state(cfg: DashboardConfig) -> anyhow::Result<AppState> {
    let backend = WhiteboxClient::from_config(&cfg)?;
    Ok(build_app_state_with_backend(Arc::new(backend), cfg))
}

pub fn build_app_state_with_backend(
    backend: Arc<dyn MonitoringBackend>,
    cfg: DashboardConfig,
) -> AppState {
    AppState {
        dashboard_service: Arc::new(DashboardService {
            backend,
            config: Arc::new(cfg),
        }),
    }
}

/// Runs one fetch → transform → render pass per call. Holds no per-pass state.
pub struct DashboardService {
    backend: Arc<dyn MonitoringBackend>,
    config: Arc<DashboardConfig>,
}

impl DashboardService {
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub async fn get_drift_dashboard(
        &self,
        model_id: String,
    ) -> anyhow::Result<DriftDashboardResponseDto> {
        crate::domain::drift::service::get_drift_dashboard(
            self.backend.as_ref(),
            &self.config,
            &model_id,
        )
        .await
    }

    pub async fn get_performance_dashboard(
        &self,
        model_id: String,
        model_type: String,
    ) -> anyhow::Result<PerformanceDashboardResponseDto> {
        crate::domain::performance::service::get_performance_dashboard(
            self.backend.as_ref(),
            &self.config,
            &model_id,
            &model_type,
        )
        .await
    }
}
