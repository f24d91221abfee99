//! Extension trait for exploratory analysis on Polars DataFrames

use crate::Result;
use eda_core::Dataset;
use eda_independence::{IndependenceTest, TestOptions};
use polars::prelude::*;

/// Extension trait for exploratory analysis on Polars DataFrames
pub trait EdaFrameExt {
    /// Convert every column into a kind-tagged dataset column
    ///
    /// Float and integer columns become quantitative; boolean and string
    /// columns qualitative. Nulls become missing entries.
    fn to_dataset(&self) -> Result<Dataset>;

    /// Convert only the named columns, in the given order
    fn select_dataset(&self, columns: &[&str]) -> Result<Dataset>;

    /// Summarise the named columns
    ///
    /// # Returns
    /// DataFrame with a `statistic` column holding the union of summary
    /// keys and one column per input column. Values are `Float64` when
    /// every statistic is numeric and `String` otherwise; keys a column
    /// does not define are null.
    fn describe_columns(&self, columns: &[&str]) -> Result<DataFrame>;

    /// Run a chi-squared test of independence between two columns
    ///
    /// Both columns are treated as categorical, so integer codes can be
    /// tested directly.
    ///
    /// # Returns
    /// The tested [`IndependenceTest`], ready for `post_hoc`, `summary`
    /// and `report`
    fn independence_test(&self, x: &str, y: &str, options: TestOptions) -> Result<IndependenceTest>;
}
