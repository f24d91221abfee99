//! Common test utilities for eda-polars tests

#![allow(dead_code)]

use polars::prelude::*;

/// Survey frame with a numeric score, a group label and a yes/no answer
pub fn survey_df() -> DataFrame {
    df![
        "score" => [Some(1.0), Some(2.0), None, Some(4.0), Some(5.0), Some(6.0)],
        "group" => ["A", "A", "B", "B", "B", "A"],
        "answer" => ["Yes", "No", "Yes", "No", "No", "Yes"],
        "code" => [1i64, 2, 1, 2, 2, 1],
    ]
    .unwrap()
}

/// Look up the value of `column` on the row whose `statistic` is `key`
pub fn stat_f64(df: &DataFrame, column: &str, key: &str) -> Option<f64> {
    let row = statistic_row(df, key)?;
    df.column(column).unwrap().f64().unwrap().get(row)
}

pub fn stat_str(df: &DataFrame, column: &str, key: &str) -> Option<String> {
    let row = statistic_row(df, key)?;
    df.column(column)
        .unwrap()
        .str()
        .unwrap()
        .get(row)
        .map(str::to_string)
}

fn statistic_row(df: &DataFrame, key: &str) -> Option<usize> {
    df.column("statistic")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .position(|s| s == Some(key))
}
