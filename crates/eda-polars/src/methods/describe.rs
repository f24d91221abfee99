//! Descriptive summaries as DataFrames

use crate::{EdaFrameExt, Result};
use eda_describe::{describe_table, DescribeTable, SummaryValue};
use polars::prelude::*;

pub(super) fn describe_columns_impl(df: &DataFrame, columns: &[&str]) -> Result<DataFrame> {
    let dataset = df.select_dataset(columns)?;
    let table = describe_table(&dataset, columns)?;
    summary_frame(&table)
}

/// Lay out a describe table with statistics as rows and columns as columns
fn summary_frame(table: &DescribeTable) -> Result<DataFrame> {
    let keys = table.keys();
    let textual = table
        .summaries()
        .iter()
        .any(|s| keys.iter().any(|k| matches!(s.get(k), Some(SummaryValue::Text(_)))));

    let mut result_columns: Vec<Column> = Vec::with_capacity(table.len() + 1);
    result_columns.push(Column::new("statistic".into(), keys.clone()));

    for summary in table.summaries() {
        let name = PlSmallStr::from(summary.name.as_str());
        let column = if textual {
            let cells: Vec<Option<String>> = keys
                .iter()
                .map(|k| match summary.get(k) {
                    None | Some(SummaryValue::Absent) => None,
                    Some(value) => Some(value.to_string()),
                })
                .collect();
            Column::new(name, cells)
        } else {
            let cells: Vec<Option<f64>> = keys
                .iter()
                .map(|k| match summary.get(k) {
                    Some(SummaryValue::Count(n)) => Some(n as f64),
                    Some(SummaryValue::Number(x)) => Some(x),
                    _ => None,
                })
                .collect();
            Column::new(name, cells)
        };
        result_columns.push(column);
    }

    Ok(DataFrame::new(result_columns)?)
}
