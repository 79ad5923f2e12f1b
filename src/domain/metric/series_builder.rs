use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::common::error::PipelineError;
use crate::domain::common::model::{MetricRecord, SeriesPoint, TimeSeries};

/// Field names that never become a series on their own.
pub const DEFAULT_EXCLUDED_FIELDS: &[&str] = &["index", "timestamp"];

/// Groups records into one series per metric name.
///
/// Metric order follows the first appearance of each name in `records`, points
/// are sorted ascending by time. Every series of one pass must cover exactly the
/// same timestamps; anything else is reported as `MisalignedSeries`.
pub fn build_series(
    records: &[MetricRecord],
    excluded: &HashSet<String>,
) -> Result<Vec<TimeSeries>, PipelineError> {
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();
    let mut series: Vec<TimeSeries> = Vec::new();

    for record in records {
        if excluded.contains(&record.metric_name) {
            continue;
        }

        let idx = *index_by_name
            .entry(record.metric_name.as_str())
            .or_insert_with(|| {
                series.push(TimeSeries::new(record.metric_name.clone()));
                series.len() - 1
            });

        series[idx].points.push(SeriesPoint {
            time: record.timestamp,
            value: record.value,
        });
    }

    for s in &mut series {
        s.points.sort_by_key(|p| p.time);

        if let Some(pair) = s.points.windows(2).find(|w| w[0].time == w[1].time) {
            return Err(PipelineError::misaligned(
                &s.metric_name,
                &s.metric_name,
                format!("duplicate timestamp {}", pair[0].time.to_rfc3339()),
            ));
        }
    }

    check_alignment(&series)?;

    debug!(
        series = series.len(),
        points = series.first().map(|s| s.len()).unwrap_or(0),
        "Built time series"
    );

    Ok(series)
}

/// Convenience for callers holding `&str` exclusion lists.
pub fn excluded_set<S: AsRef<str>>(fields: &[S]) -> HashSet<String> {
    fields.iter().map(|f| f.as_ref().to_string()).collect()
}

fn check_alignment(series: &[TimeSeries]) -> Result<(), PipelineError> {
    let Some(reference) = series.first() else {
        return Ok(());
    };
    let expected = reference.timestamps();

    for s in series.iter().skip(1) {
        if s.len() != reference.len() {
            return Err(PipelineError::misaligned(
                &s.metric_name,
                &reference.metric_name,
                format!("{} points, expected {}", s.len(), reference.len()),
            ));
        }

        if let Some(p) = s.points.iter().zip(&expected).find(|(p, t)| p.time != **t) {
            return Err(PipelineError::misaligned(
                &s.metric_name,
                &reference.metric_name,
                format!("unexpected timestamp {}", p.0.time.to_rfc3339()),
            ));
        }
    }

    Ok(())
}
