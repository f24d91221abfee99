//! Column and table summarizers
//!
//! Quantitative columns get count, missing, the five-number summary, mean,
//! skewness and excess kurtosis. Qualitative columns get count, unique,
//! top, freq and missing. The column's `ColumnKind` tag decides which
//! summary `describe_column` produces; the kind-specific entry points fail
//! with `TypeMismatch` when the tag disagrees.

use crate::moments::{kurtosis, mean, skewness};
use crate::quantile::{quantile_sorted, sort_sample, QuantileMethod};
use crate::summary::{
    ColumnSummary, DescribeTable, QualitativeSummary, QuantitativeSummary, SummaryStats,
};
use eda_core::{
    present_values, Column, ColumnData, ColumnKind, Dataset, Error, Level, Numeric, Result,
    Tabular,
};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Summarise a column according to its kind tag
pub fn describe_column(column: &Column) -> Result<ColumnSummary> {
    describe_column_with(column, QuantileMethod::default())
}

/// Summarise a column according to its kind tag, with a quantile method
pub fn describe_column_with(column: &Column, method: QuantileMethod) -> Result<ColumnSummary> {
    let stats = match column.kind() {
        ColumnKind::Quantitative => {
            SummaryStats::Quantitative(describe_quantitative_with(column, method)?)
        }
        ColumnKind::Qualitative => SummaryStats::Qualitative(describe_qualitative(column)?),
    };
    Ok(ColumnSummary {
        name: column.name().to_string(),
        stats,
    })
}

/// Quantitative summary of a column tagged `Quantitative`
pub fn describe_quantitative(column: &Column) -> Result<QuantitativeSummary> {
    describe_quantitative_with(column, QuantileMethod::default())
}

/// Quantitative summary with an explicit quantile method
pub fn describe_quantitative_with(
    column: &Column,
    method: QuantileMethod,
) -> Result<QuantitativeSummary> {
    column.expect_kind(ColumnKind::Quantitative)?;

    match column.data() {
        ColumnData::Float64(values) => summarize_numeric(values, method),
        ColumnData::Float32(values) => summarize_numeric(values, method),
        ColumnData::Int64(values) => summarize_numeric(values, method),
        ColumnData::Int32(values) => summarize_numeric(values, method),
        other => Err(Error::TypeMismatch {
            expected: "numeric storage".to_string(),
            got: other.dtype_name().to_string(),
        }),
    }
}

fn summarize_numeric<T: Numeric>(
    values: &[Option<T>],
    method: QuantileMethod,
) -> Result<QuantitativeSummary> {
    let mut sample = present_values(values);
    sort_sample(&mut sample);
    debug!(dtype = T::TYPE_NAME, n = sample.len(), "summarising numeric column");

    let count = sample.len();
    let missing = values.len() - count;

    if sample.is_empty() {
        return Ok(QuantitativeSummary {
            count,
            missing,
            min: f64::NAN,
            q25: f64::NAN,
            mean: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
            skew: f64::NAN,
            kurtosis: f64::NAN,
        });
    }

    Ok(QuantitativeSummary {
        count,
        missing,
        min: sample[0],
        q25: quantile_sorted(&sample, 0.25, method)?,
        mean: mean(&sample)?,
        median: quantile_sorted(&sample, 0.5, method)?,
        q75: quantile_sorted(&sample, 0.75, method)?,
        max: sample[count - 1],
        skew: defined_or_nan(skewness(&sample))?,
        kurtosis: defined_or_nan(kurtosis(&sample))?,
    })
}

/// Map `UndefinedStatistic` to the NaN sentinel, keep other errors
fn defined_or_nan(value: Result<f64>) -> Result<f64> {
    match value {
        Err(Error::UndefinedStatistic(_)) => Ok(f64::NAN),
        other => other,
    }
}

/// Qualitative summary of a column tagged `Qualitative`
pub fn describe_qualitative(column: &Column) -> Result<QualitativeSummary> {
    column.expect_kind(ColumnKind::Qualitative)?;

    let counts = value_counts(column);
    let count = counts.iter().map(|(_, n)| n).sum();

    // value_counts is in first-seen order, so a strict comparison keeps the
    // earliest level among ties
    let mut top: Option<&(Level, usize)> = None;
    for entry in &counts {
        if top.map_or(true, |(_, best)| entry.1 > *best) {
            top = Some(entry);
        }
    }

    Ok(QualitativeSummary {
        count,
        unique: counts.len(),
        top: top.map(|(level, _)| level.to_string()),
        freq: top.map_or(0, |(_, n)| *n),
        missing: column.missing(),
    })
}

/// Frequency of each non-missing level, in order of first appearance
pub fn value_counts(column: &Column) -> Vec<(Level, usize)> {
    let mut index: HashMap<Level, usize> = HashMap::new();
    let mut counts: Vec<(Level, usize)> = Vec::new();

    for level in column.levels().into_iter().flatten() {
        match index.get(&level) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(level.clone(), counts.len());
                counts.push((level, 1));
            }
        }
    }
    counts
}

/// Level frequencies of one column, sorted by level
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    pub column: String,
    pub counts: Vec<(Level, usize)>,
}

impl FrequencyTable {
    pub fn from_column(column: &Column) -> Self {
        let mut counts = value_counts(column);
        counts.sort_by(|a, b| a.0.cmp(&b.0));
        Self {
            column: column.name().to_string(),
            counts,
        }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }
}

impl Tabular for FrequencyTable {
    fn headers(&self) -> Vec<String> {
        vec![self.column.clone(), "count".to_string()]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.counts
            .iter()
            .map(|(level, n)| vec![level.to_string(), n.to_string()])
            .collect()
    }
}

/// Summarise the named columns of a dataset, dispatching per column kind
///
/// Summaries are collected in the requested order and assembled into a
/// single table once.
#[instrument(skip(dataset))]
pub fn describe_table(dataset: &Dataset, columns: &[&str]) -> Result<DescribeTable> {
    describe_table_with(dataset, columns, QuantileMethod::default())
}

/// `describe_table` with an explicit quantile method
pub fn describe_table_with(
    dataset: &Dataset,
    columns: &[&str],
    method: QuantileMethod,
) -> Result<DescribeTable> {
    let summaries = dataset
        .select(columns)?
        .into_iter()
        .map(|column| describe_column_with(column, method))
        .collect::<Result<Vec<_>>>()?;
    Ok(DescribeTable::new(summaries))
}

/// Summarise every column of a dataset
pub fn describe_dataset(dataset: &Dataset) -> Result<DescribeTable> {
    describe_table(dataset, &dataset.column_names())
}
