use serde::Serialize;

use crate::domain::common::error::PipelineError;
use crate::domain::common::model::TimeSeries;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesDrift {
    pub metric_name: String,
    pub drift_detected: bool,
}

/// Drift status of one pass, per series and overall.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriftAnnotation {
    /// Same order as the classified series.
    pub per_series: Vec<SeriesDrift>,
    pub global: bool,
    pub drifted_series_count: usize,
    /// `drifted_series_count / per_series.len()`, 0 when there are no series.
    pub share_of_drifted_series: f64,
}

impl DriftAnnotation {
    pub fn flag_for(&self, metric_name: &str) -> Option<bool> {
        self.per_series
            .iter()
            .find(|s| s.metric_name == metric_name)
            .map(|s| s.drift_detected)
    }
}

/// True iff at least one point of the series is a `true` flag.
pub fn drift_flag(series: &TimeSeries) -> Result<bool, PipelineError> {
    if series.is_empty() {
        return Err(PipelineError::empty(&series.metric_name));
    }

    Ok(series.points.iter().any(|p| p.value.is_true()))
}

pub fn classify(series: &[TimeSeries]) -> Result<DriftAnnotation, PipelineError> {
    let per_series = series
        .iter()
        .map(|s| {
            drift_flag(s).map(|drift_detected| SeriesDrift {
                metric_name: s.metric_name.clone(),
                drift_detected,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let drifted_series_count = per_series.iter().filter(|s| s.drift_detected).count();
    let share_of_drifted_series = if per_series.is_empty() {
        0.0
    } else {
        drifted_series_count as f64 / per_series.len() as f64
    };

    Ok(DriftAnnotation {
        global: drifted_series_count > 0,
        drifted_series_count,
        share_of_drifted_series,
        per_series,
    })
}
