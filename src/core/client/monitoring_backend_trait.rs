use anyhow::Result;
use async_trait::async_trait;

use super::whitebox_dto::{DriftingMetricDto, PerformanceMetricDto};

/// Source of the metric reports a dashboard pass is built from.
#[async_trait]
pub trait MonitoringBackend: Send + Sync {
    async fn get_drifting_metrics(&self, model_id: &str) -> Result<Vec<DriftingMetricDto>>;

    /// An empty vector means the model has no performance data yet.
    async fn get_performance_metrics(&self, model_id: &str) -> Result<Vec<PerformanceMetricDto>>;
}
