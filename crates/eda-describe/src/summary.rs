//! Column summary records

use eda_core::{format_cell, Tabular};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Keys of a quantitative summary, in presentation order
pub const QUANTITATIVE_KEYS: [&str; 10] = [
    "count", "missing", "min", "25%", "mean", "50%", "75%", "max", "skew", "kurtosis",
];

/// Keys of a qualitative summary, in presentation order
pub const QUALITATIVE_KEYS: [&str; 5] = ["count", "unique", "top", "freq", "missing"];

/// A single summary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SummaryValue {
    Count(usize),
    Number(f64),
    Text(String),
    Absent,
}

impl fmt::Display for SummaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Number(x) => f.write_str(&format_cell(*x, 6)),
            Self::Text(s) => f.write_str(s),
            Self::Absent => Ok(()),
        }
    }
}

/// Summary of a quantitative column
///
/// Every statistic other than the counts is computed on the non-missing
/// values; they are NaN when there are none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantitativeSummary {
    pub count: usize,
    pub missing: usize,
    pub min: f64,
    pub q25: f64,
    pub mean: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
    pub skew: f64,
    pub kurtosis: f64,
}

impl QuantitativeSummary {
    /// Look up a statistic by its key
    pub fn get(&self, key: &str) -> Option<SummaryValue> {
        let value = match key {
            "count" => SummaryValue::Count(self.count),
            "missing" => SummaryValue::Count(self.missing),
            "min" => SummaryValue::Number(self.min),
            "25%" => SummaryValue::Number(self.q25),
            "mean" => SummaryValue::Number(self.mean),
            "50%" => SummaryValue::Number(self.median),
            "75%" => SummaryValue::Number(self.q75),
            "max" => SummaryValue::Number(self.max),
            "skew" => SummaryValue::Number(self.skew),
            "kurtosis" => SummaryValue::Number(self.kurtosis),
            _ => return None,
        };
        Some(value)
    }
}

/// Summary of a qualitative column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualitativeSummary {
    pub count: usize,
    pub unique: usize,
    /// Most frequent level; ties go to the level seen first
    pub top: Option<String>,
    pub freq: usize,
    pub missing: usize,
}

impl QualitativeSummary {
    /// Look up a statistic by its key
    pub fn get(&self, key: &str) -> Option<SummaryValue> {
        let value = match key {
            "count" => SummaryValue::Count(self.count),
            "unique" => SummaryValue::Count(self.unique),
            "top" => self
                .top
                .clone()
                .map_or(SummaryValue::Absent, SummaryValue::Text),
            "freq" => SummaryValue::Count(self.freq),
            "missing" => SummaryValue::Count(self.missing),
            _ => return None,
        };
        Some(value)
    }
}

/// Statistics for one column, by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SummaryStats {
    Quantitative(QuantitativeSummary),
    Qualitative(QualitativeSummary),
}

/// Named summary of one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub stats: SummaryStats,
}

impl ColumnSummary {
    /// Keys this summary defines, in presentation order
    pub fn keys(&self) -> &'static [&'static str] {
        match self.stats {
            SummaryStats::Quantitative(_) => &QUANTITATIVE_KEYS,
            SummaryStats::Qualitative(_) => &QUALITATIVE_KEYS,
        }
    }

    /// Look up a statistic by its key
    pub fn get(&self, key: &str) -> Option<SummaryValue> {
        match &self.stats {
            SummaryStats::Quantitative(s) => s.get(key),
            SummaryStats::Qualitative(s) => s.get(key),
        }
    }

    /// Non-missing entries
    pub fn count(&self) -> usize {
        match &self.stats {
            SummaryStats::Quantitative(s) => s.count,
            SummaryStats::Qualitative(s) => s.count,
        }
    }

    /// Missing entries
    pub fn missing(&self) -> usize {
        match &self.stats {
            SummaryStats::Quantitative(s) => s.missing,
            SummaryStats::Qualitative(s) => s.missing,
        }
    }

    pub fn as_quantitative(&self) -> Option<&QuantitativeSummary> {
        match &self.stats {
            SummaryStats::Quantitative(s) => Some(s),
            SummaryStats::Qualitative(_) => None,
        }
    }

    pub fn as_qualitative(&self) -> Option<&QualitativeSummary> {
        match &self.stats {
            SummaryStats::Qualitative(s) => Some(s),
            SummaryStats::Quantitative(_) => None,
        }
    }
}

impl Tabular for ColumnSummary {
    fn headers(&self) -> Vec<String> {
        std::iter::once(String::new())
            .chain(self.keys().iter().map(|k| k.to_string()))
            .collect()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let mut row = vec![self.name.clone()];
        row.extend(
            self.keys()
                .iter()
                .map(|k| self.get(k).map(|v| v.to_string()).unwrap_or_default()),
        );
        vec![row]
    }
}

/// Summaries of several columns, one row per column
///
/// Renders as a single table whose headers are the union of every row's
/// keys; cells for keys a row does not define are left blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribeTable {
    summaries: Vec<ColumnSummary>,
}

impl DescribeTable {
    pub fn new(summaries: Vec<ColumnSummary>) -> Self {
        Self { summaries }
    }

    pub fn summaries(&self) -> &[ColumnSummary] {
        &self.summaries
    }

    pub fn get(&self, column: &str) -> Option<&ColumnSummary> {
        self.summaries.iter().find(|s| s.name == column)
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Union of the rows' keys, in first-seen order
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = Vec::new();
        for summary in &self.summaries {
            for &key in summary.keys() {
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
        }
        keys
    }
}

impl IntoIterator for DescribeTable {
    type Item = ColumnSummary;
    type IntoIter = std::vec::IntoIter<ColumnSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.summaries.into_iter()
    }
}

impl Tabular for DescribeTable {
    fn headers(&self) -> Vec<String> {
        std::iter::once(String::new())
            .chain(self.keys().into_iter().map(str::to_string))
            .collect()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let keys = self.keys();
        self.summaries
            .iter()
            .map(|summary| {
                let mut row = vec![summary.name.clone()];
                row.extend(
                    keys.iter()
                        .map(|k| summary.get(k).map(|v| v.to_string()).unwrap_or_default()),
                );
                row
            })
            .collect()
    }
}
