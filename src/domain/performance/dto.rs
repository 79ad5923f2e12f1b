use serde::Serialize;

use crate::domain::layout::layout_allocator::ColumnSlot;
use crate::domain::metric::model_kind::ModelKind;
use crate::domain::performance::performance_summarizer::PerformanceSummary;
use crate::domain::render::json_view_renderer::RenderedView;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceDashboardResponseDto {
    pub model_id: String,
    pub model_type: String,
    pub model_kind: ModelKind,
    /// Set when `model_type` was unknown and the default extraction was used.
    pub model_type_fallback: bool,
    /// False when the backend had no performance reports for the model.
    pub rendered: bool,
    pub summaries: Vec<PerformanceSummary>,
    pub slots: Vec<ColumnSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<RenderedView>,
}
