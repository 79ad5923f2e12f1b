use std::collections::HashSet;

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::core::client::monitoring_backend_trait::MonitoringBackend;
use crate::core::client::whitebox_dto::DriftingMetricDto;
use crate::core::config::chart_style::ChartStyle;
use crate::core::config::dashboard_config::DashboardConfig;
use crate::domain::common::error::PipelineError;
use crate::domain::common::model::TimeSeries;
use crate::domain::drift::drift_classifier::{classify, DriftAnnotation};
use crate::domain::drift::dto::DriftDashboardResponseDto;
use crate::domain::layout::layout_allocator::{layout_drift, DriftLayout, DriftTab};
use crate::domain::metric::metric_extraction::extract_drift_records;
use crate::domain::metric::series_builder::build_series;
use crate::domain::render::chart_renderer::ChartRenderer;
use crate::domain::render::json_view_renderer::JsonViewRenderer;

pub const DRIFT_VIEW_TITLE: &str = "Drifting";

/// Result of one drift pass, before rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriftDashboard {
    /// Drift scores, each carrying its series' drift flag.
    pub series: Vec<TimeSeries>,
    pub annotation: DriftAnnotation,
    pub layout: DriftLayout,
}

/// Column names come from `drift_by_columns`, so every one of them is a
/// dataset feature and none is filtered out.
pub fn build_drift_dashboard(
    reports: &[DriftingMetricDto],
    style: &ChartStyle,
) -> Result<DriftDashboard, PipelineError> {
    let records = extract_drift_records(reports);
    let keep_all = HashSet::new();

    let mut scores = build_series(&records.scores, &keep_all)?;
    let flags = build_series(&records.flags, &keep_all)?;

    // Both sets come from the same reports, so a name mismatch means the
    // backend broke the column contract.
    for (score, flag) in scores.iter().zip(&flags) {
        if score.metric_name != flag.metric_name {
            return Err(PipelineError::misaligned(
                &flag.metric_name,
                &score.metric_name,
                "drift flags and scores list different columns",
            ));
        }
    }
    if scores.len() != flags.len() {
        return Err(PipelineError::misaligned(
            "drift_detected",
            "drift_score",
            format!("{} flag series for {} score series", flags.len(), scores.len()),
        ));
    }

    let annotation = classify(&flags)?;
    for (score, flag) in scores.iter_mut().zip(&annotation.per_series) {
        score.drift_flag = Some(flag.drift_detected);
    }

    debug!(
        reports = reports.len(),
        series = scores.len(),
        global = annotation.global,
        "Built drift dashboard"
    );

    let layout = layout_drift(&scores, &annotation, style);

    Ok(DriftDashboard {
        series: scores,
        annotation,
        layout,
    })
}

pub fn render_drift_dashboard(dashboard: &DriftDashboard, renderer: &mut dyn ChartRenderer) {
    renderer.render_title(DRIFT_VIEW_TITLE);

    renderer.render_tab(DriftTab::Combined.label());
    renderer.draw_multi_series_chart(&dashboard.layout.combined);

    renderer.render_tab(DriftTab::Separate.label());
    for chart in &dashboard.layout.separate {
        renderer.draw_line_chart(chart);
    }
}

pub async fn get_drift_dashboard(
    backend: &dyn MonitoringBackend,
    cfg: &DashboardConfig,
    model_id: &str,
) -> Result<DriftDashboardResponseDto> {
    let reports = backend.get_drifting_metrics(model_id).await?;
    if reports.is_empty() {
        debug!(model_id, "No drift reports, rendering empty layout");
    }

    let dashboard = build_drift_dashboard(&reports, &cfg.chart_style)?;

    let mut renderer = JsonViewRenderer::new();
    render_drift_dashboard(&dashboard, &mut renderer);

    Ok(DriftDashboardResponseDto {
        model_id: model_id.to_string(),
        annotation: dashboard.annotation,
        slots: dashboard.layout.slots,
        view: renderer.finish(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::whitebox_dto::PerformanceMetricDto;
    use crate::domain::render::json_view_renderer::{RenderedChart, SectionScope};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockBackend {
        drift: Mutex<Vec<DriftingMetricDto>>,
        calls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl MonitoringBackend for MockBackend {
        async fn get_drifting_metrics(&self, model_id: &str) -> Result<Vec<DriftingMetricDto>> {
            self.calls.lock().unwrap().push(model_id.to_string());
            Ok(self.drift.lock().unwrap().clone())
        }

        async fn get_performance_metrics(
            &self,
            _model_id: &str,
        ) -> Result<Vec<PerformanceMetricDto>> {
            Ok(vec![])
        }
    }

    fn report(ts: &str, columns: Value) -> DriftingMetricDto {
        serde_json::from_value(json!({
            "timestamp": ts,
            "data_drift_summary": { "drift_by_columns": columns }
        }))
        .unwrap()
    }

    fn column(score: f64, detected: bool) -> Value {
        json!({ "drift_score": score, "drift_detected": detected })
    }

    fn sample_reports() -> Vec<DriftingMetricDto> {
        vec![
            report(
                "2024-03-02T00:00:00",
                json!({ "age": column(0.1, false), "income": column(0.8, true) }),
            ),
            report(
                "2024-03-01T00:00:00",
                json!({ "age": column(0.2, false), "income": column(0.3, false) }),
            ),
        ]
    }

    #[test]
    fn attaches_flags_to_score_series() {
        let dashboard = build_drift_dashboard(&sample_reports(), &ChartStyle::default()).unwrap();

        let names: Vec<_> = dashboard.series.iter().map(|s| s.metric_name.as_str()).collect();
        assert_eq!(names, vec!["age", "income"]);
        assert_eq!(dashboard.series[0].drift_flag, Some(false));
        assert_eq!(dashboard.series[1].drift_flag, Some(true));
        assert!(dashboard.annotation.global);

        // points sorted ascending, scores kept numeric
        let income = &dashboard.series[1];
        assert!(income.points[0].time < income.points[1].time);
        assert_eq!(income.points[1].value.as_f64(), 0.8);
    }

    #[test]
    fn feature_columns_named_like_row_fields_are_kept() {
        let reports = vec![report(
            "2024-03-01T00:00:00",
            json!({ "timestamp": column(0.9, true), "age": column(0.1, false) }),
        )];

        let dashboard = build_drift_dashboard(&reports, &ChartStyle::default()).unwrap();

        let names: Vec<_> = dashboard.series.iter().map(|s| s.metric_name.as_str()).collect();
        assert_eq!(names, vec!["timestamp", "age"]);
        assert_eq!(dashboard.series[0].drift_flag, Some(true));
        assert!(dashboard.annotation.global);
        assert_eq!(dashboard.annotation.drifted_series_count, 1);
    }

    #[test]
    fn empty_fetch_gives_empty_but_valid_layout() {
        let dashboard = build_drift_dashboard(&[], &ChartStyle::default()).unwrap();

        assert!(dashboard.series.is_empty());
        assert!(!dashboard.annotation.global);
        assert!(dashboard.layout.combined.series.is_empty());
        assert_eq!(dashboard.layout.combined.subtitle, None);
        assert!(dashboard.layout.separate.is_empty());
    }

    #[test]
    fn missing_column_in_one_report_aborts_the_pass() {
        let reports = vec![
            report(
                "2024-03-01T00:00:00",
                json!({ "age": column(0.1, false), "income": column(0.2, false) }),
            ),
            report("2024-03-02T00:00:00", json!({ "age": column(0.1, false) })),
        ];

        let err = build_drift_dashboard(&reports, &ChartStyle::default()).unwrap_err();
        assert!(matches!(err, PipelineError::MisalignedSeries { .. }));
    }

    #[test]
    fn pipeline_is_idempotent() {
        let reports = sample_reports();
        let style = ChartStyle::default();

        let first = build_drift_dashboard(&reports, &style).unwrap();
        let second = build_drift_dashboard(&reports, &style).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn renders_combined_and_separate_tabs() {
        let dashboard = build_drift_dashboard(&sample_reports(), &ChartStyle::default()).unwrap();
        let mut renderer = JsonViewRenderer::new();

        render_drift_dashboard(&dashboard, &mut renderer);
        let view = renderer.finish();

        assert_eq!(view.title.as_deref(), Some(DRIFT_VIEW_TITLE));
        let combined = view
            .section(&SectionScope::Tab {
                name: DriftTab::Combined.label().into(),
            })
            .unwrap();
        assert!(matches!(
            &combined.charts[0],
            RenderedChart::MultiSeries(c) if c.series.len() == 2
        ));
        let separate = view
            .section(&SectionScope::Tab {
                name: DriftTab::Separate.label().into(),
            })
            .unwrap();
        assert_eq!(separate.charts.len(), 2);
    }

    #[tokio::test]
    async fn service_fetches_once_and_renders() {
        let backend = MockBackend::default();
        *backend.drift.lock().unwrap() = sample_reports();

        let response = get_drift_dashboard(&backend, &DashboardConfig::default(), "model-1")
            .await
            .expect("drift dashboard should build");

        assert_eq!(*backend.calls.lock().unwrap(), vec!["model-1".to_string()]);
        assert_eq!(response.model_id, "model-1");
        assert_eq!(response.annotation.drifted_series_count, 1);
        assert_eq!(response.slots.len(), 4);
        assert_eq!(response.view.chart_count(), 3);
    }
}
