//! Pairwise follow-up comparisons

use crate::chi_square::chi_square;
use crate::config::PairAxis;
use crate::contingency::ContingencyTable;
use eda_core::{format_cell, format_scientific, Level, Result, Tabular};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Chi-squared test on the sub-table of one pair of categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostHocComparison {
    pub level_1: Level,
    pub level_2: Level,
    /// Chi-squared statistic of the pair's sub-table
    pub statistic: f64,
    /// Observations within the pair
    pub n: u64,
    /// Unadjusted p-value
    pub p_value: f64,
}

/// All pairwise comparisons along one axis, in combination order
///
/// For `k` categories there are `k * (k - 1) / 2` comparisons:
/// `(0, 1), (0, 2), ..., (1, 2), ...`. The p-values are raw; no
/// family-wise correction is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostHocResults {
    pub axis: PairAxis,
    pub comparisons: Vec<PostHocComparison>,
}

impl PostHocResults {
    pub fn len(&self) -> usize {
        self.comparisons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comparisons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PostHocComparison> {
        self.comparisons.iter()
    }
}

impl<'a> IntoIterator for &'a PostHocResults {
    type Item = &'a PostHocComparison;
    type IntoIter = std::slice::Iter<'a, PostHocComparison>;

    fn into_iter(self) -> Self::IntoIter {
        self.comparisons.iter()
    }
}

impl Tabular for PostHocResults {
    fn headers(&self) -> Vec<String> {
        ["level_1", "level_2", "x2", "N", "p_value"]
            .iter()
            .map(|h| h.to_string())
            .collect()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.comparisons
            .iter()
            .map(|c| {
                vec![
                    c.level_1.to_string(),
                    c.level_2.to_string(),
                    format_cell(c.statistic, 4),
                    c.n.to_string(),
                    format_scientific(c.p_value, 3),
                ]
            })
            .collect()
    }
}

/// Compare every pair of categories along `axis`
///
/// Each pair's sub-table is tested exactly like the full table; a pair
/// whose sub-table has a zero total makes the whole analysis fail.
pub fn pairwise(
    table: &ContingencyTable,
    axis: PairAxis,
    continuity_correction: bool,
) -> Result<PostHocResults> {
    let labels = match axis {
        PairAxis::Rows => table.row_labels(),
        PairAxis::Columns => table.col_labels(),
    };

    let k = labels.len();
    let mut comparisons = Vec::with_capacity(k * k.saturating_sub(1) / 2);
    for i in 0..k {
        for j in (i + 1)..k {
            let pair = match axis {
                PairAxis::Rows => table.select_rows(&[i, j])?,
                PairAxis::Columns => table.select_cols(&[i, j])?,
            };
            let outcome = chi_square(&pair, continuity_correction)?;
            trace!(
                level_1 = %labels[i],
                level_2 = %labels[j],
                statistic = outcome.statistic,
                p_value = outcome.p_value,
                "pairwise comparison"
            );
            comparisons.push(PostHocComparison {
                level_1: labels[i].clone(),
                level_2: labels[j].clone(),
                statistic: outcome.statistic,
                n: pair.grand_total(),
                p_value: outcome.p_value,
            });
        }
    }

    Ok(PostHocResults { axis, comparisons })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use eda_core::Error;

    fn three_by_two() -> ContingencyTable {
        ContingencyTable::from_counts(
            vec!["a".into(), "b".into(), "c".into()],
            vec!["no".into(), "yes".into()],
            vec![vec![20, 10], vec![10, 20], vec![15, 15]],
        )
        .unwrap()
    }

    #[test]
    fn test_row_pairs_in_combination_order() {
        let results = pairwise(&three_by_two(), PairAxis::Rows, true).unwrap();
        let pairs: Vec<(String, String)> = results
            .iter()
            .map(|c| (c.level_1.to_string(), c.level_2.to_string()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "b".to_string()),
                ("a".to_string(), "c".to_string()),
                ("b".to_string(), "c".to_string()),
            ]
        );
        assert!(results.iter().all(|c| c.n == 60));

        // a vs b is the classic 20/10 vs 10/20 table with Yates' correction
        assert_relative_eq!(results.comparisons[0].statistic, 5.4, epsilon = 1e-12);
    }

    #[test]
    fn test_single_column_pair() {
        let results = pairwise(&three_by_two(), PairAxis::Columns, false).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results.comparisons[0].n, 90);
        assert_eq!(results.axis, PairAxis::Columns);
    }

    #[test]
    fn test_degenerate_pair_fails() {
        let table = ContingencyTable::from_counts(
            vec!["a".into(), "b".into()],
            vec!["u".into(), "v".into(), "w".into()],
            vec![vec![5, 0, 3], vec![2, 0, 4]],
        )
        .unwrap();
        // Rows (a, b) keep the empty column v
        assert!(matches!(
            pairwise(&table, PairAxis::Rows, true),
            Err(Error::DegenerateTable(_))
        ));
    }

    #[test]
    fn test_tabular_rows() {
        let results = pairwise(&three_by_two(), PairAxis::Rows, true).unwrap();
        assert_eq!(results.headers(), vec!["level_1", "level_2", "x2", "N", "p_value"]);
        let row = &results.rows()[0];
        assert_eq!(row[0], "a");
        assert_eq!(row[2], "5.4000");
        assert_eq!(row[3], "60");
        assert_eq!(row[4], "2.01e-02");
    }
}
