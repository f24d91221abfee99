//! Polars integration for exploratory data analysis
//!
//! A single extension trait, [`EdaFrameExt`], converts Polars DataFrames
//! into [`eda_core::Dataset`]s and runs descriptive summaries and tests of
//! independence directly on frame columns.
//!
//! # Example
//!
//! ```rust
//! use polars::prelude::*;
//! use eda_polars::EdaFrameExt;
//! use eda_independence::TestOptions;
//!
//! let df = df![
//!     "score" => [1.0, 2.0, 3.0, 4.0, 5.0],
//!     "group" => ["a", "b", "a", "b", "b"],
//!     "answer" => ["yes", "no", "no", "yes", "no"],
//! ]
//! .unwrap();
//!
//! let summary = df.describe_columns(&["score"]).unwrap();
//! assert_eq!(summary.width(), 2);
//!
//! let test = df.independence_test("group", "answer", TestOptions::default()).unwrap();
//! assert_eq!(test.sample_size().unwrap(), 5);
//! ```

mod error;
mod methods;
mod traits;

pub use error::{Error, Result};
pub use traits::*;
