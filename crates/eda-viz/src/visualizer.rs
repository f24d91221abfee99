//! Chart rendering interface
//!
//! The analysis code requests charts through this trait without depending
//! on a specific plotting library. It passes a dataset and a column name and
//! forwards the returned handle to its caller without inspecting it.

use eda_core::{Dataset, Result};
use std::fmt;

/// Kind of chart requested for a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Distribution of a quantitative column
    BoxPlot,
    /// Level frequencies of a qualitative column
    CountPlot,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoxPlot => f.write_str("boxplot"),
            Self::CountPlot => f.write_str("countplot"),
        }
    }
}

/// Trait for chart backends
pub trait Visualizer {
    /// Handle returned for a rendered chart
    type Chart;

    /// Render a box plot of a quantitative column
    fn render_boxplot(&mut self, dataset: &Dataset, column: &str) -> Result<Self::Chart>;

    /// Render a count plot of a qualitative column
    fn render_countplot(&mut self, dataset: &Dataset, column: &str) -> Result<Self::Chart>;

    /// Render the chart of the given kind
    fn render(&mut self, kind: ChartKind, dataset: &Dataset, column: &str) -> Result<Self::Chart> {
        match kind {
            ChartKind::BoxPlot => self.render_boxplot(dataset, column),
            ChartKind::CountPlot => self.render_countplot(dataset, column),
        }
    }

    /// Check if this visualizer is active
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Null visualizer that renders nothing
///
/// All methods are no-ops returning `()` handles, for callers that only
/// want the numeric summaries.
#[derive(Default, Clone, Copy, Debug)]
pub struct NullVisualizer;

impl Visualizer for NullVisualizer {
    type Chart = ();

    #[inline(always)]
    fn render_boxplot(&mut self, _: &Dataset, _: &str) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn render_countplot(&mut self, _: &Dataset, _: &str) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn is_enabled(&self) -> bool {
        false
    }
}
