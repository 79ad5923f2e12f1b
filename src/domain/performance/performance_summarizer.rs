use serde::Serialize;

use crate::domain::common::error::PipelineError;
use crate::domain::common::model::TimeSeries;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub metric_name: String,
    /// Mean of the fractional scores, as a percentage rounded to 2 decimals.
    pub mean_percent: f64,
    /// Subtitle text, `"<mean_percent> %"`.
    pub label: String,
}

/// Averages the series and scales it to a percentage.
///
/// Values are taken as reported; nothing outside [0, 1] is clamped.
pub fn summarize(series: &TimeSeries) -> Result<PerformanceSummary, PipelineError> {
    if series.is_empty() {
        return Err(PipelineError::empty(&series.metric_name));
    }

    let sum: f64 = series.points.iter().map(|p| p.value.as_f64()).sum();
    let mean = sum / series.len() as f64;
    let mean_percent = round2(mean * 100.0);

    Ok(PerformanceSummary {
        metric_name: series.metric_name.clone(),
        label: format_percent(mean_percent),
        mean_percent,
    })
}

/// Ties go to the even digit: 90.625 becomes 90.62.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// `92.5 %`, `90.0 %`: always at least one decimal.
fn format_percent(value: f64) -> String {
    format!("{value:?} %")
}
