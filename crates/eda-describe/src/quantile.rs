//! Sample quantiles of sorted data

use eda_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Interpolation used when a quantile falls between two order statistics
///
/// With `h = (n - 1) * p`, `lo = floor(h)` and `hi = ceil(h)`:
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantileMethod {
    /// `x[lo] + (h - lo) * (x[hi] - x[lo])`
    #[default]
    Linear,
    /// `x[lo]`
    Lower,
    /// `x[hi]`
    Higher,
    /// `x[round(h)]`, ties to even
    Nearest,
    /// `(x[lo] + x[hi]) / 2`
    Midpoint,
}

/// Quantile `p` of an ascending, NaN-free sample
pub fn quantile_sorted(sorted: &[f64], p: f64, method: QuantileMethod) -> Result<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidParameter(format!("Quantile {p} must be in [0, 1]")));
    }
    if sorted.is_empty() {
        return Err(Error::InsufficientData { expected: 1, actual: 0 });
    }

    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;

    let value = match method {
        QuantileMethod::Linear => sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo]),
        QuantileMethod::Lower => sorted[lo],
        QuantileMethod::Higher => sorted[hi],
        QuantileMethod::Nearest => sorted[h.round_ties_even() as usize],
        QuantileMethod::Midpoint => (sorted[lo] + sorted[hi]) / 2.0,
    };
    Ok(value)
}

/// Sort a sample ascending in place
///
/// Callers strip NaN first; `total_cmp` keeps the sort panic-free regardless.
pub fn sort_sample(sample: &mut [f64]) {
    sample.sort_by(f64::total_cmp);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DATA: [f64; 4] = [1.0, 2.0, 3.0, 4.0];

    #[test]
    fn test_linear_interpolation() {
        assert_relative_eq!(quantile_sorted(&DATA, 0.25, QuantileMethod::Linear).unwrap(), 1.75);
        assert_relative_eq!(quantile_sorted(&DATA, 0.5, QuantileMethod::Linear).unwrap(), 2.5);
        assert_relative_eq!(quantile_sorted(&DATA, 1.0, QuantileMethod::Linear).unwrap(), 4.0);
    }

    #[test]
    fn test_other_methods() {
        assert_eq!(quantile_sorted(&DATA, 0.5, QuantileMethod::Lower).unwrap(), 2.0);
        assert_eq!(quantile_sorted(&DATA, 0.5, QuantileMethod::Higher).unwrap(), 3.0);
        assert_eq!(quantile_sorted(&DATA, 0.5, QuantileMethod::Midpoint).unwrap(), 2.5);
        // h = 1.5 rounds to the even index 2
        assert_eq!(quantile_sorted(&DATA, 0.5, QuantileMethod::Nearest).unwrap(), 3.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            quantile_sorted(&DATA, 1.5, QuantileMethod::Linear),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            quantile_sorted(&[], 0.5, QuantileMethod::Linear),
            Err(Error::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_single_value() {
        assert_eq!(quantile_sorted(&[42.0], 0.75, QuantileMethod::Linear).unwrap(), 42.0);
    }
}
