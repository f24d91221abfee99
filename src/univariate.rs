//! Per-column summaries paired with charts
//!
//! Each column is summarised according to its [`ColumnKind`] tag and a
//! chart is requested from the visualizer: a box plot for quantitative
//! columns and a count plot for qualitative ones.

use eda_core::{ColumnKind, Dataset, Result};
use eda_describe::{describe_column, ColumnSummary};
use eda_viz::{ChartKind, Visualizer};
use tracing::{debug, instrument};

/// Summary and chart of one column
#[derive(Debug, Clone)]
pub struct UnivariateResult<C> {
    pub summary: ColumnSummary,
    pub kind: ChartKind,
    pub chart: C,
}

/// Chart used for columns of a given kind
pub fn chart_kind(kind: ColumnKind) -> ChartKind {
    match kind {
        ColumnKind::Quantitative => ChartKind::BoxPlot,
        ColumnKind::Qualitative => ChartKind::CountPlot,
    }
}

/// Summarise and chart every column of `dataset`, in column order
#[instrument(skip(dataset, visualizer), fields(columns = dataset.n_columns()))]
pub fn summarize_and_visualize<V: Visualizer>(
    dataset: &Dataset,
    visualizer: &mut V,
) -> Result<Vec<UnivariateResult<V::Chart>>> {
    dataset
        .columns()
        .iter()
        .map(|column| {
            let summary = describe_column(column)?;
            let kind = chart_kind(column.kind());
            debug!(column = column.name(), %kind, "univariate summary");
            let chart = visualizer.render(kind, dataset, column.name())?;
            Ok(UnivariateResult { summary, kind, chart })
        })
        .collect()
}
