//! Contingency tables of observed and expected counts

use eda_core::{format_cell, Column, ColumnKind, Error, Level, Result, Tabular};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::trace;

/// Cross-tabulated counts of two categorical variables
///
/// Rows are the categories of the first (x) variable and columns those of
/// the second (y) variable, both in ascending [`Level`] order when built
/// from columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContingencyTable {
    row_labels: Vec<Level>,
    col_labels: Vec<Level>,
    counts: Vec<Vec<u64>>,
}

impl ContingencyTable {
    /// Cross-tabulate two aligned qualitative columns
    ///
    /// Categories are the distinct non-missing values of each column.
    /// Rows where either value is missing are not counted.
    pub fn from_columns(x: &Column, y: &Column) -> Result<Self> {
        x.expect_kind(ColumnKind::Qualitative)?;
        y.expect_kind(ColumnKind::Qualitative)?;
        if x.len() != y.len() {
            return Err(Error::size_mismatch(x.len(), y.len(), "column pairing"));
        }

        let xs = x.levels();
        let ys = y.levels();
        let row_labels: Vec<Level> = xs.iter().flatten().cloned().collect::<BTreeSet<_>>().into_iter().collect();
        let col_labels: Vec<Level> = ys.iter().flatten().cloned().collect::<BTreeSet<_>>().into_iter().collect();

        let row_index: BTreeMap<&Level, usize> =
            row_labels.iter().enumerate().map(|(i, l)| (l, i)).collect();
        let col_index: BTreeMap<&Level, usize> =
            col_labels.iter().enumerate().map(|(j, l)| (l, j)).collect();

        let mut counts = vec![vec![0u64; col_labels.len()]; row_labels.len()];
        for (a, b) in xs.iter().zip(&ys) {
            if let (Some(a), Some(b)) = (a, b) {
                // Both maps were built from these very values
                if let (Some(&i), Some(&j)) = (row_index.get(a), col_index.get(b)) {
                    counts[i][j] += 1;
                }
            }
        }
        trace!(
            rows = row_labels.len(),
            cols = col_labels.len(),
            "cross-tabulated {} x {}",
            x.name(),
            y.name()
        );

        Ok(Self {
            row_labels,
            col_labels,
            counts,
        })
    }

    /// Build a table from explicit labels and a row-major count grid
    ///
    /// Labels must be distinct on each axis and the grid must have one row
    /// per row label and one count per column label.
    pub fn from_counts(
        row_labels: Vec<Level>,
        col_labels: Vec<Level>,
        counts: Vec<Vec<u64>>,
    ) -> Result<Self> {
        if counts.len() != row_labels.len() {
            return Err(Error::size_mismatch(row_labels.len(), counts.len(), "contingency rows"));
        }
        if let Some(row) = counts.iter().find(|row| row.len() != col_labels.len()) {
            return Err(Error::size_mismatch(col_labels.len(), row.len(), "contingency columns"));
        }
        ensure_distinct(&row_labels, "row")?;
        ensure_distinct(&col_labels, "column")?;

        Ok(Self {
            row_labels,
            col_labels,
            counts,
        })
    }

    pub fn row_labels(&self) -> &[Level] {
        &self.row_labels
    }

    pub fn col_labels(&self) -> &[Level] {
        &self.col_labels
    }

    pub fn counts(&self) -> &[Vec<u64>] {
        &self.counts
    }

    pub fn n_rows(&self) -> usize {
        self.row_labels.len()
    }

    pub fn n_cols(&self) -> usize {
        self.col_labels.len()
    }

    /// Observed count for a pair of categories
    pub fn get(&self, row: &Level, col: &Level) -> Option<u64> {
        let i = self.row_labels.iter().position(|l| l == row)?;
        let j = self.col_labels.iter().position(|l| l == col)?;
        Some(self.counts[i][j])
    }

    pub fn row_totals(&self) -> Vec<u64> {
        self.counts.iter().map(|row| row.iter().sum()).collect()
    }

    pub fn col_totals(&self) -> Vec<u64> {
        (0..self.n_cols())
            .map(|j| self.counts.iter().map(|row| row[j]).sum())
            .collect()
    }

    pub fn grand_total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// Degrees of freedom of the independence test on this table
    pub fn degrees_of_freedom(&self) -> usize {
        self.n_rows().saturating_sub(1) * self.n_cols().saturating_sub(1)
    }

    /// Fail unless every expected frequency would be positive
    ///
    /// Requires at least two categories on each axis and no zero row or
    /// column total.
    pub fn check_nondegenerate(&self) -> Result<()> {
        if self.n_rows() < 2 || self.n_cols() < 2 {
            return Err(Error::DegenerateTable(format!(
                "need at least 2 x 2 categories, got {} x {}",
                self.n_rows(),
                self.n_cols()
            )));
        }
        if let Some(i) = self.row_totals().iter().position(|&t| t == 0) {
            return Err(Error::DegenerateTable(format!(
                "row '{}' has a zero total",
                self.row_labels[i]
            )));
        }
        if let Some(j) = self.col_totals().iter().position(|&t| t == 0) {
            return Err(Error::DegenerateTable(format!(
                "column '{}' has a zero total",
                self.col_labels[j]
            )));
        }
        Ok(())
    }

    /// Expected frequencies under independence
    ///
    /// `expected[i][j] = row_total[i] * col_total[j] / grand_total`
    pub fn expected(&self) -> Result<ExpectedTable> {
        self.check_nondegenerate()?;

        let rows = self.row_totals();
        let cols = self.col_totals();
        let total = self.grand_total() as f64;
        let values = rows
            .iter()
            .map(|&r| cols.iter().map(|&c| r as f64 * c as f64 / total).collect())
            .collect();

        Ok(ExpectedTable {
            row_labels: self.row_labels.clone(),
            col_labels: self.col_labels.clone(),
            values,
        })
    }

    /// Sub-table restricted to the given rows, in the given order
    pub fn select_rows(&self, indices: &[usize]) -> Result<Self> {
        check_indices(indices, self.n_rows(), "row")?;
        Ok(Self {
            row_labels: indices.iter().map(|&i| self.row_labels[i].clone()).collect(),
            col_labels: self.col_labels.clone(),
            counts: indices.iter().map(|&i| self.counts[i].clone()).collect(),
        })
    }

    /// Sub-table restricted to the given columns, in the given order
    pub fn select_cols(&self, indices: &[usize]) -> Result<Self> {
        check_indices(indices, self.n_cols(), "column")?;
        Ok(Self {
            row_labels: self.row_labels.clone(),
            col_labels: indices.iter().map(|&j| self.col_labels[j].clone()).collect(),
            counts: self
                .counts
                .iter()
                .map(|row| indices.iter().map(|&j| row[j]).collect())
                .collect(),
        })
    }
}

impl Tabular for ContingencyTable {
    fn headers(&self) -> Vec<String> {
        label_headers(&self.col_labels)
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.row_labels
            .iter()
            .zip(&self.counts)
            .map(|(label, row)| {
                std::iter::once(label.to_string())
                    .chain(row.iter().map(|c| c.to_string()))
                    .collect()
            })
            .collect()
    }
}

/// Expected counts under the independence hypothesis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedTable {
    row_labels: Vec<Level>,
    col_labels: Vec<Level>,
    values: Vec<Vec<f64>>,
}

impl ExpectedTable {
    pub fn row_labels(&self) -> &[Level] {
        &self.row_labels
    }

    pub fn col_labels(&self) -> &[Level] {
        &self.col_labels
    }

    /// Row-major expected frequencies
    pub fn values(&self) -> &[Vec<f64>] {
        &self.values
    }

    pub fn get(&self, row: &Level, col: &Level) -> Option<f64> {
        let i = self.row_labels.iter().position(|l| l == row)?;
        let j = self.col_labels.iter().position(|l| l == col)?;
        Some(self.values[i][j])
    }

    pub fn row_sums(&self) -> Vec<f64> {
        self.values.iter().map(|row| row.iter().sum()).collect()
    }

    pub fn col_sums(&self) -> Vec<f64> {
        (0..self.col_labels.len())
            .map(|j| self.values.iter().map(|row| row[j]).sum())
            .collect()
    }

    pub fn total(&self) -> f64 {
        self.values.iter().flatten().sum()
    }
}

impl Tabular for ExpectedTable {
    fn headers(&self) -> Vec<String> {
        label_headers(&self.col_labels)
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.row_labels
            .iter()
            .zip(&self.values)
            .map(|(label, row)| {
                std::iter::once(label.to_string())
                    .chain(row.iter().map(|&v| format_cell(v, 2)))
                    .collect()
            })
            .collect()
    }
}

fn label_headers(labels: &[Level]) -> Vec<String> {
    std::iter::once(String::new())
        .chain(labels.iter().map(|l| l.to_string()))
        .collect()
}

fn ensure_distinct(labels: &[Level], axis: &str) -> Result<()> {
    let mut seen = BTreeSet::new();
    for label in labels {
        if !seen.insert(label) {
            return Err(Error::InvalidInput(format!("Duplicate {axis} label '{label}'")));
        }
    }
    Ok(())
}

fn check_indices(indices: &[usize], len: usize, axis: &str) -> Result<()> {
    match indices.iter().find(|&&i| i >= len) {
        Some(i) => Err(Error::InvalidParameter(format!(
            "{axis} index {i} out of range for {len} categories"
        ))),
        None => Ok(()),
    }
}
