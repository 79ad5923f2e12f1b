use thiserror::Error;

/// Contract violations detected while shaping metric records into series.
///
/// Both variants abort the render pass of the view that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("series '{metric_name}' has no points")]
    EmptyInput { metric_name: String },

    #[error("series '{metric_name}' is not aligned with '{reference}': {detail}")]
    MisalignedSeries {
        metric_name: String,
        reference: String,
        detail: String,
    },
}

impl PipelineError {
    pub fn empty(metric_name: &str) -> Self {
        Self::EmptyInput {
            metric_name: metric_name.to_string(),
        }
    }

    pub fn misaligned(metric_name: &str, reference: &str, detail: impl Into<String>) -> Self {
        Self::MisalignedSeries {
            metric_name: metric_name.to_string(),
            reference: reference.to_string(),
            detail: detail.into(),
        }
    }
}
