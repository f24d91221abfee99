//! Tests of independence on frame columns

use crate::{Error, Result};
use eda_core::ColumnKind;
use eda_independence::{IndependenceTest, TestOptions};
use polars::prelude::*;
use tracing::debug;

use super::to_eda_column;

pub(super) fn independence_test_impl(
    df: &DataFrame,
    x: &str,
    y: &str,
    options: TestOptions,
) -> Result<IndependenceTest> {
    let categorical = |name: &str| -> Result<eda_core::Column> {
        let column = df
            .column(name)
            .map_err(|_| Error::InvalidColumn(name.to_string()))?;
        Ok(to_eda_column(column)?.with_kind(ColumnKind::Qualitative)?)
    };
    let x_column = categorical(x)?;
    let y_column = categorical(y)?;

    let mut test = IndependenceTest::new();
    let outcome = test.test(&x_column, &y_column, options)?;
    debug!(x, y, p_value = outcome.p_value, "frame independence test");
    Ok(test)
}
