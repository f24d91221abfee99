//! Pearson's chi-squared statistic for contingency tables
//!
//! The statistic is `Σ (observed − expected)² / expected` over all cells,
//! with `(rows − 1) × (cols − 1)` degrees of freedom and the p-value taken
//! from the upper tail of the chi-squared distribution.
//!
//! With one degree of freedom, Yates' continuity correction can be applied:
//! each observed count is moved toward its expected value by
//! `min(0.5, |observed − expected|)` before the statistic is computed.

use crate::contingency::{ContingencyTable, ExpectedTable};
use eda_core::{Error, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Result of a chi-squared test on one table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChiSquareOutcome {
    /// Pearson's chi-squared statistic
    pub statistic: f64,
    /// Upper-tail probability of the statistic
    pub p_value: f64,
    /// Degrees of freedom
    pub dof: usize,
    /// Expected frequencies under independence
    pub expected: ExpectedTable,
}

/// Run the chi-squared test of independence on a table
pub fn chi_square(table: &ContingencyTable, continuity_correction: bool) -> Result<ChiSquareOutcome> {
    let expected = table.expected()?;
    let dof = table.degrees_of_freedom();
    let statistic = pearson_statistic(table.counts(), expected.values(), continuity_correction && dof == 1);
    let p_value = upper_tail(statistic, dof)?;

    Ok(ChiSquareOutcome {
        statistic,
        p_value,
        dof,
        expected,
    })
}

/// Sum of squared deviations scaled by the expected counts
///
/// Both grids must have the same shape and `expected` must be positive.
pub fn pearson_statistic(observed: &[Vec<u64>], expected: &[Vec<f64>], yates: bool) -> f64 {
    observed
        .iter()
        .zip(expected)
        .flat_map(|(o_row, e_row)| o_row.iter().zip(e_row))
        .map(|(&o, &e)| {
            let mut deviation = (o as f64 - e).abs();
            if yates {
                deviation -= deviation.min(0.5);
            }
            deviation * deviation / e
        })
        .sum()
}

/// Probability that a chi-squared variable with `dof` degrees of freedom
/// exceeds `statistic`
pub fn upper_tail(statistic: f64, dof: usize) -> Result<f64> {
    let distribution = ChiSquared::new(dof as f64).map_err(|e| {
        Error::Computation(format!("Failed to create chi-squared distribution: {e}"))
    })?;
    Ok(distribution.sf(statistic))
}
