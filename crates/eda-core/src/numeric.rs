//! Numeric element types for quantitative columns
//!
//! Quantitative columns store their values in their native width (`f64`,
//! `f32`, `i64`, `i32`). Statistics are computed through this trait so a
//! single generic implementation serves every storage type, with all
//! aggregation carried out in `f64`.

use std::fmt::Debug;

/// Base trait for numeric types that can be summarised
pub trait Numeric: Copy + PartialOrd + Debug + Send + Sync {
    /// Storage type name, used in diagnostics
    const TYPE_NAME: &'static str;

    /// Convert to f64 (for aggregate operations)
    fn to_f64(&self) -> f64;
}

impl Numeric for f64 {
    const TYPE_NAME: &'static str = "f64";

    fn to_f64(&self) -> f64 {
        *self
    }
}

impl Numeric for f32 {
    const TYPE_NAME: &'static str = "f32";

    fn to_f64(&self) -> f64 {
        f64::from(*self)
    }
}

impl Numeric for i64 {
    const TYPE_NAME: &'static str = "i64";

    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

impl Numeric for i32 {
    const TYPE_NAME: &'static str = "i32";

    fn to_f64(&self) -> f64 {
        f64::from(*self)
    }
}

/// Collect the non-missing values of an optional slice as `f64`
///
/// NaN floats count as missing, matching how tabular libraries treat
/// floating point null markers.
pub fn present_values<T: Numeric>(values: &[Option<T>]) -> Vec<f64> {
    values
        .iter()
        .flatten()
        .map(Numeric::to_f64)
        .filter(|v| !v.is_nan())
        .collect()
}
