use serde::Serialize;

use crate::domain::drift::drift_classifier::DriftAnnotation;
use crate::domain::layout::layout_allocator::TabSlot;
use crate::domain::render::json_view_renderer::RenderedView;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriftDashboardResponseDto {
    pub model_id: String,
    pub annotation: DriftAnnotation,
    pub slots: Vec<TabSlot>,
    pub view: RenderedView,
}
