//! Tests for the DataFrame extension trait

mod common;

use approx::assert_relative_eq;
use common::{stat_f64, stat_str, survey_df};
use eda_core::{ColumnKind, Level};
use eda_independence::{PairAxis, TestOptions};
use eda_polars::{EdaFrameExt, Error};
use polars::prelude::*;

#[test]
fn test_to_dataset_kinds_and_missing() {
    let ds = survey_df().to_dataset().unwrap();
    assert_eq!(ds.column_names(), vec!["score", "group", "answer", "code"]);
    assert_eq!(ds.n_rows(), 6);

    let score = ds.column("score").unwrap();
    assert_eq!(score.kind(), ColumnKind::Quantitative);
    assert_eq!(score.missing(), 1);
    assert_eq!(ds.column("group").unwrap().kind(), ColumnKind::Qualitative);
    assert_eq!(ds.column("code").unwrap().kind(), ColumnKind::Quantitative);
}

#[test]
fn test_narrow_integers_widen() {
    let df = DataFrame::new(vec![
        Series::new(PlSmallStr::from("u32"), vec![1u32, 2, 3]).into(),
        Series::new(PlSmallStr::from("u64"), vec![4u64, 5, 6]).into(),
    ])
    .unwrap();
    let ds = df.to_dataset().unwrap();
    assert_eq!(ds.column("u32").unwrap().data().dtype_name(), "i64");
    assert_eq!(ds.column("u64").unwrap().count(), 3);
}

#[test]
fn test_describe_numeric_columns() {
    let df = survey_df();
    let summary = df.describe_columns(&["score", "code"]).unwrap();

    assert_eq!(summary.width(), 3);
    assert_eq!(summary.height(), 10);
    assert_eq!(stat_f64(&summary, "score", "count"), Some(5.0));
    assert_eq!(stat_f64(&summary, "score", "missing"), Some(1.0));
    assert_eq!(stat_f64(&summary, "score", "max"), Some(6.0));
    assert_relative_eq!(stat_f64(&summary, "score", "mean").unwrap(), 3.6);
    assert_relative_eq!(stat_f64(&summary, "code", "mean").unwrap(), 1.5);
}

#[test]
fn test_describe_mixed_columns_as_text() {
    let df = survey_df();
    let summary = df.describe_columns(&["score", "group"]).unwrap();

    // count, missing, min, 25%, mean, 50%, 75%, max, skew, kurtosis, unique, top, freq
    assert_eq!(summary.height(), 13);
    assert_eq!(stat_str(&summary, "group", "top"), Some("A".to_string()));
    assert_eq!(stat_str(&summary, "group", "freq"), Some("3".to_string()));
    assert_eq!(stat_str(&summary, "group", "mean"), None);
    assert_eq!(stat_str(&summary, "score", "count"), Some("5".to_string()));
    assert_eq!(stat_str(&summary, "score", "top"), None);
}

#[test]
fn test_unknown_column() {
    let df = survey_df();
    assert!(matches!(
        df.describe_columns(&["nope"]),
        Err(Error::InvalidColumn(_))
    ));
    assert!(matches!(
        df.independence_test("group", "nope", TestOptions::default()),
        Err(Error::InvalidColumn(_))
    ));
}

#[test]
fn test_independence_on_frame() {
    let df = survey_df();
    let test = df
        .independence_test("group", "answer", TestOptions::default())
        .unwrap();

    assert_eq!(test.sample_size().unwrap(), 6);
    assert_eq!(test.observed().unwrap().row_labels(), &[Level::from("A"), Level::from("B")]);
    assert_eq!(test.post_hoc(PairAxis::Rows, false).unwrap().len(), 1);
    assert!(test.report(false).unwrap().contains("between group and answer"));
}

#[test]
fn test_independence_on_integer_codes() {
    let df = survey_df();
    let test = df
        .independence_test("code", "answer", TestOptions::default())
        .unwrap();
    assert_eq!(test.observed().unwrap().row_labels(), &[Level::Int(1), Level::Int(2)]);
    // code 1 always answers Yes and code 2 always No
    assert_eq!(test.observed().unwrap().counts(), &[vec![0, 3], vec![3, 0]]);
}

#[test]
fn test_degenerate_error_is_wrapped() {
    let df = df![
        "x" => ["a", "a", "a"],
        "y" => ["u", "v", "u"],
    ]
    .unwrap();
    assert!(matches!(
        df.independence_test("x", "y", TestOptions::default()),
        Err(Error::Core(eda_core::Error::DegenerateTable(_)))
    ));
}
