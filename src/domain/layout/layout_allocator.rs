use serde::Serialize;

use crate::core::config::chart_style::ChartStyle;
use crate::domain::common::model::TimeSeries;
use crate::domain::drift::drift_classifier::DriftAnnotation;
use crate::domain::performance::performance_summarizer::PerformanceSummary;
use crate::domain::render::chart_renderer::{LineChartSpec, MultiSeriesChartSpec};

pub const COLUMN_COUNT: usize = 2;
pub const DRIFT_SUBTITLE: &str = "Drift detected";
pub const COMBINED_CHART_TITLE: &str = "All variables";
pub const TIME_LABEL: &str = "time";
pub const DRIFT_SCORE_LABEL: &str = "drift_score";
pub const PERFORMANCE_SCORE_LABEL: &str = "score (%)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DriftTab {
    Combined,
    Separate,
}

impl DriftTab {
    pub fn label(&self) -> &'static str {
        match self {
            DriftTab::Combined => "Common representation",
            DriftTab::Separate => "Separated representation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSlot {
    pub series_ref: String,
    pub column_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabSlot {
    pub series_ref: String,
    pub tab: DriftTab,
}

/// Series at even positions go to column 0, odd positions to column 1.
pub fn allocate_paired_columns(series: &[TimeSeries]) -> Vec<ColumnSlot> {
    series
        .iter()
        .enumerate()
        .map(|(position, s)| ColumnSlot {
            series_ref: s.metric_name.clone(),
            column_index: position % COLUMN_COUNT,
        })
        .collect()
}

/// Every series goes to the combined tab and gets its own slot in the
/// separate tab. Combined slots come first.
pub fn allocate_drift_tabs(series: &[TimeSeries]) -> Vec<TabSlot> {
    let slot = |s: &TimeSeries, tab| TabSlot {
        series_ref: s.metric_name.clone(),
        tab,
    };

    series
        .iter()
        .map(|s| slot(s, DriftTab::Combined))
        .chain(series.iter().map(|s| slot(s, DriftTab::Separate)))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedLineChart {
    pub slot: ColumnSlot,
    pub chart: LineChartSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceLayout {
    pub charts: Vec<PlacedLineChart>,
}

impl PerformanceLayout {
    pub fn column(&self, index: usize) -> Vec<&str> {
        self.charts
            .iter()
            .filter(|c| c.slot.column_index == index)
            .map(|c| c.slot.series_ref.as_str())
            .collect()
    }
}

/// `summaries` must be aligned with `series` (same order, same names).
pub fn layout_performance(
    series: &[TimeSeries],
    summaries: &[PerformanceSummary],
    style: &ChartStyle,
) -> PerformanceLayout {
    let charts = allocate_paired_columns(series)
        .into_iter()
        .zip(series.iter().zip(summaries))
        .map(|(slot, (s, summary))| PlacedLineChart {
            chart: LineChartSpec::new(
                s.clone(),
                TIME_LABEL,
                PERFORMANCE_SCORE_LABEL,
                Some(summary.label.clone()),
                style,
            ),
            slot,
        })
        .collect();

    PerformanceLayout { charts }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriftLayout {
    pub slots: Vec<TabSlot>,
    pub combined: MultiSeriesChartSpec,
    pub separate: Vec<LineChartSpec>,
}

/// Builds both drift tabs. The combined chart carries the global flag, each
/// separate chart the flag attached to its own series.
pub fn layout_drift(
    series: &[TimeSeries],
    annotation: &DriftAnnotation,
    style: &ChartStyle,
) -> DriftLayout {
    let subtitle = |detected: bool| detected.then(|| DRIFT_SUBTITLE.to_string());

    let combined = MultiSeriesChartSpec {
        series: series.to_vec(),
        x_label: TIME_LABEL.into(),
        y_labels: series.iter().map(|s| s.metric_name.clone()).collect(),
        title: COMBINED_CHART_TITLE.into(),
        subtitle: subtitle(annotation.global),
        markers: true,
        width: style.chart_width,
        height: style.chart_height,
        line_width: style.line_width,
        marker_style: style.marker_style,
    };

    let separate = series
        .iter()
        .map(|s| {
            LineChartSpec::new(
                s.clone(),
                TIME_LABEL,
                DRIFT_SCORE_LABEL,
                subtitle(s.drift_flag.unwrap_or(false)),
                style,
            )
        })
        .collect();

    DriftLayout {
        slots: allocate_drift_tabs(series),
        combined,
        separate,
    }
}
