//! Output collaborators for exploratory data analysis
//!
//! Two seams keep rendering out of the analysis code:
//!
//! - [`Visualizer`]: turns a dataset column into a chart handle
//!   (box plot for quantitative columns, count plot for qualitative ones)
//! - [`TablePrinter`]: renders any [`eda_core::Tabular`] value as console text
//!
//! [`NullVisualizer`] renders nothing; with the `echarts` feature,
//! [`EChartsVisualizer`] builds ECharts definitions via `charming`.
//! [`ConsoleTablePrinter`] draws tables with `comfy-table`.

#[cfg(feature = "echarts")]
pub mod echarts;
pub mod printer;
pub mod visualizer;

#[cfg(feature = "echarts")]
pub use echarts::EChartsVisualizer;
pub use printer::{ConsoleTablePrinter, TablePrinter};
pub use visualizer::{ChartKind, NullVisualizer, Visualizer};
