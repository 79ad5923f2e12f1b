//! Dashboard API DTOs

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ModelPath {
    #[validate(length(min = 1, max = 128))]
    pub model_id: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PerformanceQuery {
    /// Registry tag: `binary`, `multi_class` or `regression`. A missing tag
    /// reaches validation as empty so it is answered with the JSON envelope.
    #[serde(default)]
    #[validate(length(min = 1, max = 64))]
    pub model_type: String,
}
