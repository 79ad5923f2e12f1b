use serde_json::Value;

use crate::core::client::whitebox_dto::{DriftingMetricDto, PerformanceMetricDto};
use crate::domain::common::model::{MetricRecord, MetricValue};
use crate::domain::metric::model_kind::ModelKind;

/// Member used when a classification score is reported per averaging method.
const AVERAGED_SCORE_KEY: &str = "weighted";

/// Drift reports split into the plotted scores and the detection flags.
///
/// Both sets list columns in the same order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriftRecords {
    pub scores: Vec<MetricRecord>,
    pub flags: Vec<MetricRecord>,
}

pub fn extract_drift_records(reports: &[DriftingMetricDto]) -> DriftRecords {
    let mut out = DriftRecords::default();

    for report in reports {
        for (column, drift) in &report.data_drift_summary.drift_by_columns {
            out.scores.push(MetricRecord::new(
                report.timestamp,
                column.clone(),
                MetricValue::Number(drift.drift_score),
            ));
            out.flags.push(MetricRecord::new(
                report.timestamp,
                column.clone(),
                MetricValue::Flag(drift.drift_detected),
            ));
        }
    }

    out
}

/// Applies the extraction rule of `kind` to every performance report.
///
/// Fields the rule does not know are ignored, fields the rule knows but the
/// report lacks are skipped; alignment is checked later by the series builder.
pub fn extract_performance_records(
    reports: &[PerformanceMetricDto],
    kind: ModelKind,
) -> Vec<MetricRecord> {
    let fields = kind.metric_fields();
    let mut records = Vec::with_capacity(reports.len() * fields.len());

    for report in reports {
        for field in fields {
            if let Some(value) = report.fields.get(*field).and_then(score_value) {
                records.push(MetricRecord::new(report.timestamp, *field, value));
            }
        }
    }

    records
}

fn score_value(raw: &Value) -> Option<MetricValue> {
    match raw {
        Value::Number(n) => n.as_f64().map(MetricValue::Number),
        Value::Bool(b) => Some(MetricValue::Flag(*b)),
        Value::Object(averages) => averages
            .get(AVERAGED_SCORE_KEY)
            .and_then(Value::as_f64)
            .map(MetricValue::Number),
        _ => None,
    }
}
