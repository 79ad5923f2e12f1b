use serde::{Deserialize, Serialize};

/// Point marker drawn on line charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStyle {
    Circle,
    Square,
    Diamond,
    None,
}

impl MarkerStyle {
    pub fn from_code<S: AsRef<str>>(code: S) -> Option<Self> {
        match code.as_ref().trim().to_lowercase().as_str() {
            "circle" => Some(Self::Circle),
            "square" => Some(Self::Square),
            "diamond" => Some(Self::Diamond),
            "none" => Some(Self::None),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Diamond => "diamond",
            Self::None => "none",
        }
    }
}

/// Sizing and styling handed to the layout allocator and the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub line_width: f32,
    pub chart_height: u32,
    pub chart_width: u32,
    pub marker_style: MarkerStyle,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            chart_height: 380,
            chart_width: 400,
            marker_style: MarkerStyle::Circle,
        }
    }
}
