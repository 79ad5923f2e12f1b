use serde::Serialize;

use crate::core::config::chart_style::{ChartStyle, MarkerStyle};
use crate::domain::common::model::TimeSeries;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChartSpec {
    pub series: TimeSeries,
    pub x_label: String,
    pub y_label: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub width: u32,
    pub height: u32,
    pub line_width: f32,
    pub marker_style: MarkerStyle,
}

impl LineChartSpec {
    pub fn new(
        series: TimeSeries,
        x_label: &str,
        y_label: &str,
        subtitle: Option<String>,
        style: &ChartStyle,
    ) -> Self {
        Self {
            title: series.metric_name.clone(),
            series,
            x_label: x_label.into(),
            y_label: y_label.into(),
            subtitle,
            width: style.chart_width,
            height: style.chart_height,
            line_width: style.line_width,
            marker_style: style.marker_style,
        }
    }
}

/// Several series overlaid on one shared time axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiSeriesChartSpec {
    pub series: Vec<TimeSeries>,
    pub x_label: String,
    pub y_labels: Vec<String>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub markers: bool,
    pub width: u32,
    pub height: u32,
    pub line_width: f32,
    pub marker_style: MarkerStyle,
}

/// Drawing surface the dashboard views are rendered onto.
///
/// `render_tab` and `render_column` open a content scope; every chart drawn
/// afterwards lands in that scope until the next one is opened.
pub trait ChartRenderer {
    fn render_title(&mut self, title: &str);

    fn render_tab(&mut self, name: &str);

    fn render_column(&mut self, index: usize);

    fn draw_line_chart(&mut self, chart: &LineChartSpec);

    fn draw_multi_series_chart(&mut self, chart: &MultiSeriesChartSpec);
}
