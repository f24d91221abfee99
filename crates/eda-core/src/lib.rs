//! Core types for exploratory data analysis
//!
//! This crate provides the data model shared by the descriptive,
//! visualisation and inference crates:
//!
//! - [`Dataset`]: ordered, row-aligned named columns
//! - [`Column`] / [`ColumnData`]: typed storage with missing markers
//! - [`ColumnKind`]: the quantitative/qualitative tag fixed at ingestion
//! - [`Level`]: a totally ordered category value
//! - [`Numeric`]: the element trait behind generic numeric summaries
//! - [`Error`]: the error taxonomy used across the workspace
//!
//! # Example
//!
//! ```rust
//! use eda_core::{Column, ColumnKind, Dataset};
//!
//! let ds = Dataset::new(vec![
//!     Column::new("age", vec![Some(31.0), None, Some(45.0)]),
//!     Column::new("smoker", vec!["yes", "no", "no"]),
//! ])
//! .unwrap();
//!
//! assert_eq!(ds.column("age").unwrap().missing(), 1);
//! assert_eq!(ds.column("smoker").unwrap().kind(), ColumnKind::Qualitative);
//! ```

pub mod column;
pub mod dataset;
pub mod error;
pub mod level;
pub mod numeric;
pub mod tabular;

pub use column::{Column, ColumnData, ColumnKind};
pub use dataset::Dataset;
pub use error::{Error, Result};
pub use level::Level;
pub use numeric::{present_values, Numeric};
pub use tabular::{format_cell, format_scientific, Tabular};
