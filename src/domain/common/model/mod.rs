//! Shared domain types (MetricRecord, TimeSeries, SeriesPoint)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single metric observation as delivered by the monitoring backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Flag(bool),
    Number(f64),
}

impl MetricValue {
    /// Numeric view used by the summarizer. Flags count as 1/0.
    pub fn as_f64(&self) -> f64 {
        match self {
            MetricValue::Number(v) => *v,
            MetricValue::Flag(true) => 1.0,
            MetricValue::Flag(false) => 0.0,
        }
    }

    /// Only an explicit `true` flag marks drift; numbers never do.
    pub fn is_true(&self) -> bool {
        matches!(self, MetricValue::Flag(true))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub timestamp: DateTime<Utc>,
    pub metric_name: String,
    pub value: MetricValue,
}

impl MetricRecord {
    pub fn new(
        timestamp: DateTime<Utc>,
        metric_name: impl Into<String>,
        value: MetricValue,
    ) -> Self {
        Self {
            timestamp,
            metric_name: metric_name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub time: DateTime<Utc>,
    pub value: MetricValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    pub metric_name: String,
    /// Ascending by `time`.
    pub points: Vec<SeriesPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drift_flag: Option<bool>,
}

impl TimeSeries {
    pub fn new(metric_name: impl Into<String>) -> Self {
        Self {
            metric_name: metric_name.into(),
            points: Vec::new(),
            drift_flag: None,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.points.iter().map(|p| p.time).collect()
    }
}
