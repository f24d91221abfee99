//! Moment-based statistics: mean, skewness and kurtosis
//!
//! Skewness and kurtosis use the population (biased) moment estimators:
//! skewness is the third standardized moment and kurtosis is the Fisher
//! (excess) form, the fourth standardized moment minus 3.

use eda_core::{Error, Numeric, Result};

/// Arithmetic mean
pub fn mean<T: Numeric>(sample: &[T]) -> Result<f64> {
    if sample.is_empty() {
        return Err(Error::empty_moment("mean"));
    }
    let sum: f64 = sample.iter().map(Numeric::to_f64).sum();
    Ok(sum / sample.len() as f64)
}

/// Central moments of order 2 and `order`, divided by n
fn central_moments<T: Numeric>(sample: &[T], order: i32) -> Result<(f64, f64)> {
    let mean = mean(sample)?;
    let n = sample.len() as f64;

    let (m2, mk) = sample.iter().fold((0.0, 0.0), |(m2, mk), x| {
        let diff = x.to_f64() - mean;
        (m2 + diff * diff, mk + diff.powi(order))
    });
    Ok((m2 / n, mk / n))
}

/// Third standardized moment
///
/// Returns `UndefinedStatistic` for an empty sample and NaN when the sample
/// has zero variance.
pub fn skewness<T: Numeric>(sample: &[T]) -> Result<f64> {
    if sample.is_empty() {
        return Err(Error::empty_moment("skewness"));
    }
    let (variance, m3) = central_moments(sample, 3)?;
    if variance <= f64::EPSILON * f64::EPSILON {
        return Ok(f64::NAN);
    }
    Ok(m3 / variance.powf(1.5))
}

/// Excess kurtosis (fourth standardized moment minus 3)
///
/// Returns `UndefinedStatistic` for an empty sample and NaN when the sample
/// has zero variance.
pub fn kurtosis<T: Numeric>(sample: &[T]) -> Result<f64> {
    if sample.is_empty() {
        return Err(Error::empty_moment("kurtosis"));
    }
    let (variance, m4) = central_moments(sample, 4)?;
    if variance <= f64::EPSILON * f64::EPSILON {
        return Ok(f64::NAN);
    }
    Ok(m4 / (variance * variance) - 3.0)
}
