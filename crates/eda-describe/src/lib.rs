//! Descriptive statistics for exploratory data analysis
//!
//! This crate summarises columns of an [`eda_core::Dataset`]:
//!
//! - **Quantitative** columns: count, missing, min, quartiles, mean, max,
//!   skewness and excess kurtosis
//! - **Qualitative** columns: count, unique, top, freq and missing
//!
//! The summary produced for a column is chosen by its
//! [`eda_core::ColumnKind`] tag, never by inspecting values at runtime.
//!
//! # Example
//!
//! ```rust
//! use eda_core::{Column, Dataset};
//! use eda_describe::{describe_column, describe_table};
//!
//! let ds = Dataset::new(vec![
//!     Column::new("score", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
//!     Column::new("group", vec!["a", "b", "a", "a", "b"]),
//! ])
//! .unwrap();
//!
//! let score = describe_column(ds.column("score").unwrap()).unwrap();
//! assert_eq!(score.as_quantitative().unwrap().mean, 3.0);
//!
//! let table = describe_table(&ds, &["score", "group"]).unwrap();
//! assert_eq!(table.len(), 2);
//! ```

pub mod describe;
pub mod moments;
pub mod quantile;
pub mod summary;

pub use describe::{
    describe_column, describe_column_with, describe_dataset, describe_qualitative,
    describe_quantitative, describe_quantitative_with, describe_table, describe_table_with,
    value_counts, FrequencyTable,
};
pub use moments::{kurtosis, mean, skewness};
pub use quantile::{quantile_sorted, sort_sample, QuantileMethod};
pub use summary::{
    ColumnSummary, DescribeTable, QualitativeSummary, QuantitativeSummary, SummaryStats,
    SummaryValue, QUALITATIVE_KEYS, QUANTITATIVE_KEYS,
};
