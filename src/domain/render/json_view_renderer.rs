use serde::Serialize;

use super::chart_renderer::{ChartRenderer, LineChartSpec, MultiSeriesChartSpec};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SectionScope {
    Page,
    Tab { name: String },
    Column { index: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderedChart {
    Line(LineChartSpec),
    MultiSeries(MultiSeriesChartSpec),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSection {
    pub scope: SectionScope,
    pub charts: Vec<RenderedChart>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderedView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub sections: Vec<RenderedSection>,
}

impl RenderedView {
    pub fn section(&self, scope: &SectionScope) -> Option<&RenderedSection> {
        self.sections.iter().find(|s| &s.scope == scope)
    }

    pub fn chart_count(&self) -> usize {
        self.sections.iter().map(|s| s.charts.len()).sum()
    }
}

/// Records charts as serializable specs for a browser front-end to draw.
///
/// Re-opening a scope appends to the section created the first time.
#[derive(Debug, Default)]
pub struct JsonViewRenderer {
    view: RenderedView,
    current: Option<usize>,
}

impl JsonViewRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> RenderedView {
        self.view
    }

    fn enter(&mut self, scope: SectionScope) {
        let idx = match self.view.sections.iter().position(|s| s.scope == scope) {
            Some(idx) => idx,
            None => {
                self.view.sections.push(RenderedSection {
                    scope,
                    charts: Vec::new(),
                });
                self.view.sections.len() - 1
            }
        };
        self.current = Some(idx);
    }

    fn push(&mut self, chart: RenderedChart) {
        if self.current.is_none() {
            self.enter(SectionScope::Page);
        }
        if let Some(idx) = self.current {
            self.view.sections[idx].charts.push(chart);
        }
    }
}

impl ChartRenderer for JsonViewRenderer {
    fn render_title(&mut self, title: &str) {
        self.view.title = Some(title.to_string());
    }

    fn render_tab(&mut self, name: &str) {
        self.enter(SectionScope::Tab {
            name: name.to_string(),
        });
    }

    fn render_column(&mut self, index: usize) {
        self.enter(SectionScope::Column { index });
    }

    fn draw_line_chart(&mut self, chart: &LineChartSpec) {
        self.push(RenderedChart::Line(chart.clone()));
    }

    fn draw_multi_series_chart(&mut self, chart: &MultiSeriesChartSpec) {
        self.push(RenderedChart::MultiSeries(chart.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::chart_style::ChartStyle;
    use crate::domain::common::model::TimeSeries;

    fn chart(name: &str) -> LineChartSpec {
        LineChartSpec::new(TimeSeries::new(name), "time", "value", None, &ChartStyle::default())
    }

    #[test]
    fn charts_without_scope_land_on_the_page() {
        let mut r = JsonViewRenderer::new();
        r.draw_line_chart(&chart("a"));

        let view = r.finish();
        assert_eq!(view.sections.len(), 1);
        assert_eq!(view.sections[0].scope, SectionScope::Page);
    }

    #[test]
    fn reentering_a_scope_appends_to_it() {
        let mut r = JsonViewRenderer::new();
        r.render_title("Performance");
        r.render_column(0);
        r.draw_line_chart(&chart("a"));
        r.render_column(1);
        r.draw_line_chart(&chart("b"));
        r.render_column(0);
        r.draw_line_chart(&chart("c"));

        let view = r.finish();
        assert_eq!(view.title.as_deref(), Some("Performance"));
        assert_eq!(view.sections.len(), 2);
        assert_eq!(view.section(&SectionScope::Column { index: 0 }).unwrap().charts.len(), 2);
        assert_eq!(view.chart_count(), 3);
    }

    #[test]
    fn serializes_with_kind_tags() {
        let mut r = JsonViewRenderer::new();
        r.render_tab("Common representation");
        r.draw_line_chart(&chart("a"));

        let json = serde_json::to_value(r.finish()).unwrap();
        assert_eq!(json["sections"][0]["scope"]["type"], "tab");
        assert_eq!(json["sections"][0]["charts"][0]["kind"], "line");
        assert_eq!(json["sections"][0]["charts"][0]["title"], "a");
    }
}
