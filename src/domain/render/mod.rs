//! Renderer boundary and the JSON view renderer served over HTTP

pub mod chart_renderer;
pub mod json_view_renderer;
