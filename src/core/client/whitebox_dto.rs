use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::core::util::time_util::deserialize_utc;

/// One drift report as returned by `GET /v1/drifting-metrics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftingMetricDto {
    #[serde(deserialize_with = "deserialize_utc")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub model_id: Option<String>,
    pub data_drift_summary: DataDriftSummaryDto,
    #[serde(default)]
    pub concept_drift_summary: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataDriftSummaryDto {
    #[serde(default)]
    pub number_of_columns: Option<u32>,
    #[serde(default)]
    pub number_of_drifted_columns: Option<u32>,
    #[serde(default)]
    pub share_of_drifted_columns: Option<f64>,
    #[serde(default)]
    pub dataset_drift: Option<bool>,
    /// Column name → drift result, in the order the backend listed them.
    #[serde(default, deserialize_with = "ordered_columns")]
    pub drift_by_columns: Vec<(String, ColumnDriftDto)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDriftDto {
    #[serde(default)]
    pub column_name: Option<String>,
    #[serde(default)]
    pub column_type: Option<String>,
    #[serde(default)]
    pub stattest_name: Option<String>,
    pub drift_score: f64,
    pub drift_detected: bool,
    #[serde(default)]
    pub threshold: Option<f64>,
}

/// One performance report as returned by `GET /v1/performance-metrics`.
///
/// The metric fields depend on the model type, so they are kept as an ordered
/// JSON object and picked apart by the extraction rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMetricDto {
    #[serde(deserialize_with = "deserialize_utc")]
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

fn ordered_columns<'de, D>(deserializer: D) -> Result<Vec<(String, ColumnDriftDto)>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Map::<String, Value>::deserialize(deserializer)?;

    raw.into_iter()
        .map(|(name, value)| {
            serde_json::from_value::<ColumnDriftDto>(value)
                .map(|column| (name.clone(), column))
                .map_err(|e| serde::de::Error::custom(format!("column '{name}': {e}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn drift_columns_keep_backend_order() {
        let dto: DriftingMetricDto = serde_json::from_value(json!({
            "timestamp": "2024-03-01T12:00:00",
            "model_id": "m1",
            "data_drift_summary": {
                "number_of_columns": 3,
                "number_of_drifted_columns": 1,
                "drift_by_columns": {
                    "zeta": {"column_name": "zeta", "drift_score": 0.1, "drift_detected": false},
                    "alpha": {"column_name": "alpha", "drift_score": 0.9, "drift_detected": true},
                    "mid": {"column_name": "mid", "drift_score": 0.3, "drift_detected": false}
                }
            }
        }))
        .unwrap();

        let names: Vec<_> = dto
            .data_drift_summary
            .drift_by_columns
            .iter()
            .map(|(n, _)| n.as_str())
            .collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
        assert!(dto.data_drift_summary.drift_by_columns[1].1.drift_detected);
    }

    #[test]
    fn malformed_column_is_rejected_with_its_name() {
        let err = serde_json::from_value::<DriftingMetricDto>(json!({
            "timestamp": "2024-03-01T12:00:00Z",
            "data_drift_summary": {
                "drift_by_columns": { "age": {"drift_score": "high"} }
            }
        }))
        .unwrap_err();

        assert!(err.to_string().contains("column 'age'"));
    }

    #[test]
    fn performance_fields_are_flattened_in_order() {
        let dto: PerformanceMetricDto = serde_json::from_value(json!({
            "timestamp": "2024-03-01T12:00:00Z",
            "model_id": "m1",
            "accuracy": 0.9,
            "precision": {"micro": 0.8, "macro": 0.7, "weighted": 0.75}
        }))
        .unwrap();

        let keys: Vec<_> = dto.fields.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["model_id", "accuracy", "precision"]);
    }
}
