//! Exploratory data analysis toolkit
//!
//! This crate re-exports the workspace crates behind one dependency:
//!
//! - [`eda_core`]: dataset model, column kinds, errors
//! - [`eda_describe`]: descriptive statistics for quantitative and qualitative columns
//! - [`eda_viz`]: chart and console table collaborators
//! - [`eda_independence`]: chi-squared test of independence with post-hoc
//!   comparisons and APA reporting
//!
//! and adds the univariate dispatcher, [`summarize_and_visualize`], which
//! summarises and charts every column of a dataset by its kind.
//!
//! # Example
//!
//! ```rust
//! use eda_toolkit::prelude::*;
//!
//! let ds = Dataset::new(vec![
//!     Column::new("group", vec!["A", "A", "B", "B", "B"]),
//!     Column::new("answer", vec!["Yes", "No", "Yes", "No", "No"]),
//! ])
//! .unwrap();
//!
//! let results = summarize_and_visualize(&ds, &mut NullVisualizer).unwrap();
//! assert_eq!(results.len(), 2);
//!
//! let mut test = IndependenceTest::new();
//! test.test_columns(&ds, "group", "answer", TestOptions::default()).unwrap();
//! println!("{}", test.report(false).unwrap());
//! ```

pub mod univariate;

pub use eda_core;
pub use eda_describe;
pub use eda_independence;
#[cfg(feature = "polars")]
pub use eda_polars;
pub use eda_viz;

pub use univariate::{chart_kind, summarize_and_visualize, UnivariateResult};

/// Commonly used items
pub mod prelude {
    pub use crate::univariate::{summarize_and_visualize, UnivariateResult};
    pub use eda_core::{Column, ColumnData, ColumnKind, Dataset, Error, Level, Result, Tabular};
    pub use eda_describe::{
        describe_column, describe_qualitative, describe_quantitative, describe_table,
        ColumnSummary, DescribeTable, QuantileMethod,
    };
    pub use eda_independence::{
        ContingencyTable, IndependenceTest, PairAxis, ReportFormat, Significance, TestOptions,
    };
    #[cfg(feature = "polars")]
    pub use eda_polars::EdaFrameExt;
    pub use eda_viz::{
        ChartKind, ConsoleTablePrinter, EChartsVisualizer, NullVisualizer, TablePrinter,
        Visualizer,
    };
}
