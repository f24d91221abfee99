//! ECharts chart backend
//!
//! Builds `charming` chart definitions: a box plot from a column's
//! five-number summary and a bar chart of level frequencies for count
//! plots. Charts can be turned into standalone HTML pages with
//! [`EChartsVisualizer::render_html`].

use crate::visualizer::Visualizer;
use charming::component::{Axis, Title};
use charming::element::AxisType;
use charming::series::{Bar, Boxplot};
use charming::{Chart, HtmlRenderer};
use eda_core::{Dataset, Error, Result};
use eda_describe::{describe_quantitative, FrequencyTable};
use tracing::debug;

/// Visualizer producing `charming::Chart` handles
#[derive(Debug, Clone)]
pub struct EChartsVisualizer {
    width: u64,
    height: u64,
}

impl EChartsVisualizer {
    pub fn new(width: u64, height: u64) -> Self {
        Self { width, height }
    }

    /// Render a chart as a standalone HTML page
    pub fn render_html(&self, chart: &Chart, title: &str) -> Result<String> {
        HtmlRenderer::new(title, self.width, self.height)
            .render(chart)
            .map_err(|e| Error::Computation(format!("Failed to render chart: {e:?}")))
    }
}

impl Default for EChartsVisualizer {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl Visualizer for EChartsVisualizer {
    type Chart = Chart;

    fn render_boxplot(&mut self, dataset: &Dataset, column: &str) -> Result<Chart> {
        let summary = describe_quantitative(dataset.column(column)?)?;
        debug!(column, count = summary.count, "building box plot");

        // An all-missing column gets an empty plot
        let boxes = if summary.count == 0 {
            Vec::new()
        } else {
            vec![vec![summary.min, summary.q25, summary.median, summary.q75, summary.max]]
        };
        Ok(Chart::new()
            .title(Title::new().text(column))
            .x_axis(Axis::new().type_(AxisType::Category).data(vec![column]))
            .y_axis(Axis::new().type_(AxisType::Value))
            .series(Boxplot::new().name(column).data(boxes)))
    }

    fn render_countplot(&mut self, dataset: &Dataset, column: &str) -> Result<Chart> {
        let table = FrequencyTable::from_column(dataset.column(column)?);
        debug!(column, levels = table.counts.len(), "building count plot");

        let labels: Vec<String> = table.counts.iter().map(|(level, _)| level.to_string()).collect();
        let counts: Vec<i64> = table.counts.iter().map(|(_, n)| *n as i64).collect();
        Ok(Chart::new()
            .title(Title::new().text(column))
            .x_axis(Axis::new().type_(AxisType::Category).data(labels))
            .y_axis(Axis::new().type_(AxisType::Value))
            .series(Bar::new().name("count").data(counts)))
    }
}
