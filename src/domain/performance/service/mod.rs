use std::collections::HashSet;

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::core::client::monitoring_backend_trait::MonitoringBackend;
use crate::core::client::whitebox_dto::PerformanceMetricDto;
use crate::core::config::chart_style::ChartStyle;
use crate::core::config::dashboard_config::DashboardConfig;
use crate::domain::common::error::PipelineError;
use crate::domain::common::model::TimeSeries;
use crate::domain::layout::layout_allocator::{layout_performance, PerformanceLayout};
use crate::domain::metric::metric_extraction::extract_performance_records;
use crate::domain::metric::model_kind::{ModelKind, ModelKindResolution};
use crate::domain::metric::series_builder::build_series;
use crate::domain::performance::dto::PerformanceDashboardResponseDto;
use crate::domain::performance::performance_summarizer::{summarize, PerformanceSummary};
use crate::domain::render::chart_renderer::ChartRenderer;
use crate::domain::render::json_view_renderer::JsonViewRenderer;

pub const PERFORMANCE_VIEW_TITLE: &str = "Performance";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceDashboard {
    pub resolution: ModelKindResolution,
    pub series: Vec<TimeSeries>,
    pub summaries: Vec<PerformanceSummary>,
    pub layout: PerformanceLayout,
}

/// Returns `None` when there is nothing to show; an empty fetch is not an error.
pub fn build_performance_dashboard(
    reports: &[PerformanceMetricDto],
    resolution: ModelKindResolution,
    excluded: &HashSet<String>,
    style: &ChartStyle,
) -> Result<Option<PerformanceDashboard>, PipelineError> {
    if reports.is_empty() {
        return Ok(None);
    }

    let records = extract_performance_records(reports, resolution.kind);
    let series = build_series(&records, excluded)?;
    let summaries = series
        .iter()
        .map(summarize)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        reports = reports.len(),
        series = series.len(),
        kind = ?resolution.kind,
        "Built performance dashboard"
    );

    let layout = layout_performance(&series, &summaries, style);

    Ok(Some(PerformanceDashboard {
        resolution,
        series,
        summaries,
        layout,
    }))
}

pub fn render_performance_dashboard(
    dashboard: &PerformanceDashboard,
    renderer: &mut dyn ChartRenderer,
) {
    renderer.render_title(PERFORMANCE_VIEW_TITLE);

    for placed in &dashboard.layout.charts {
        renderer.render_column(placed.slot.column_index);
        renderer.draw_line_chart(&placed.chart);
    }
}

pub async fn get_performance_dashboard(
    backend: &dyn MonitoringBackend,
    cfg: &DashboardConfig,
    model_id: &str,
    model_type: &str,
) -> Result<PerformanceDashboardResponseDto> {
    let resolution = ModelKind::resolve(model_type);
    let reports = backend.get_performance_metrics(model_id).await?;

    let mut response = PerformanceDashboardResponseDto {
        model_id: model_id.to_string(),
        model_type: model_type.to_string(),
        model_kind: resolution.kind,
        model_type_fallback: resolution.fallback,
        rendered: false,
        summaries: Vec::new(),
        slots: Vec::new(),
        view: None,
    };

    let Some(dashboard) =
        build_performance_dashboard(&reports, resolution, &cfg.excluded_fields, &cfg.chart_style)?
    else {
        debug!(model_id, "No performance reports, skipping view");
        return Ok(response);
    };

    let mut renderer = JsonViewRenderer::new();
    render_performance_dashboard(&dashboard, &mut renderer);

    response.rendered = true;
    response.slots = dashboard.layout.charts.into_iter().map(|c| c.slot).collect();
    response.summaries = dashboard.summaries;
    response.view = Some(renderer.finish());

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::whitebox_dto::DriftingMetricDto;
    use crate::domain::metric::series_builder::{excluded_set, DEFAULT_EXCLUDED_FIELDS};
    use crate::domain::render::json_view_renderer::SectionScope;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockBackend {
        performance: Mutex<Vec<PerformanceMetricDto>>,
    }

    #[async_trait]
    impl MonitoringBackend for MockBackend {
        async fn get_drifting_metrics(&self, _model_id: &str) -> Result<Vec<DriftingMetricDto>> {
            Ok(vec![])
        }

        async fn get_performance_metrics(
            &self,
            _model_id: &str,
        ) -> Result<Vec<PerformanceMetricDto>> {
            Ok(self.performance.lock().unwrap().clone())
        }
    }

    fn classification_reports() -> Vec<PerformanceMetricDto> {
        serde_json::from_value(json!([
            {
                "timestamp": "2024-03-01T00:00:00",
                "accuracy": 0.90,
                "precision": 0.80,
                "recall": 0.70,
                "f1": 0.75,
                "true_positive": 10
            },
            {
                "timestamp": "2024-03-02T00:00:00",
                "accuracy": 0.95,
                "precision": 0.85,
                "recall": 0.72,
                "f1": 0.78,
                "true_positive": 12
            }
        ]))
        .unwrap()
    }

    fn excluded() -> HashSet<String> {
        excluded_set(DEFAULT_EXCLUDED_FIELDS)
    }

    fn classification() -> ModelKindResolution {
        ModelKindResolution {
            kind: ModelKind::Classification,
            fallback: false,
        }
    }

    #[test]
    fn empty_fetch_renders_nothing() {
        let out =
            build_performance_dashboard(&[], classification(), &excluded(), &ChartStyle::default())
                .unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn summarizes_and_pairs_columns() {
        let dashboard = build_performance_dashboard(
            &classification_reports(),
            classification(),
            &excluded(),
            &ChartStyle::default(),
        )
        .unwrap()
        .unwrap();

        assert_eq!(dashboard.summaries[0].metric_name, "accuracy");
        assert_eq!(dashboard.summaries[0].mean_percent, 92.5);
        assert_eq!(dashboard.layout.column(0), vec!["accuracy", "recall"]);
        assert_eq!(dashboard.layout.column(1), vec!["precision", "f1"]);
    }

    #[test]
    fn regression_extraction_of_classification_payload_yields_no_series() {
        let dashboard = build_performance_dashboard(
            &classification_reports(),
            ModelKind::resolve("regresion"),
            &excluded(),
            &ChartStyle::default(),
        )
        .unwrap()
        .unwrap();

        assert!(dashboard.resolution.fallback);
        assert!(dashboard.series.is_empty());
        assert!(dashboard.layout.charts.is_empty());
    }

    #[test]
    fn pipeline_is_idempotent() {
        let reports = classification_reports();
        let style = ChartStyle::default();
        let run = || {
            build_performance_dashboard(&reports, classification(), &excluded(), &style).unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn renders_one_chart_per_series_into_columns() {
        let dashboard = build_performance_dashboard(
            &classification_reports(),
            classification(),
            &excluded(),
            &ChartStyle::default(),
        )
        .unwrap()
        .unwrap();
        let mut renderer = JsonViewRenderer::new();

        render_performance_dashboard(&dashboard, &mut renderer);
        let view = renderer.finish();

        assert_eq!(view.title.as_deref(), Some(PERFORMANCE_VIEW_TITLE));
        assert_eq!(view.section(&SectionScope::Column { index: 0 }).unwrap().charts.len(), 2);
        assert_eq!(view.section(&SectionScope::Column { index: 1 }).unwrap().charts.len(), 2);
    }

    #[tokio::test]
    async fn service_reports_fallback_for_unknown_type() {
        let backend = MockBackend::default();
        *backend.performance.lock().unwrap() = serde_json::from_value(json!([
            {
                "timestamp": "2024-03-01T00:00:00",
                "r_square": 0.5,
                "mean_squared_error": 0.2,
                "mean_absolute_error": 0.1
            }
        ]))
        .unwrap();

        let cfg = DashboardConfig::default();
        let response = get_performance_dashboard(&backend, &cfg, "m1", "ranking")
            .await
            .expect("performance dashboard should build");

        assert!(response.rendered);
        assert!(response.model_type_fallback);
        assert_eq!(response.model_kind, ModelKind::Regression);
        assert_eq!(response.summaries.len(), 3);
        assert_eq!(response.summaries[0].label, "50.0 %");
    }

    #[tokio::test]
    async fn service_skips_view_without_reports() {
        let backend = MockBackend::default();

        let cfg = DashboardConfig::default();
        let response = get_performance_dashboard(&backend, &cfg, "m1", "binary")
            .await
            .unwrap();

        assert!(!response.rendered);
        assert!(!response.model_type_fallback);
        assert!(response.view.is_none());
        assert!(response.slots.is_empty());
    }
}
