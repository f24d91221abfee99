//! Category levels for qualitative analysis
//!
//! A `Level` is one observed value of a column viewed as a category.
//! Levels are totally ordered so that contingency tables and frequency
//! tables have a deterministic category order.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single category value
///
/// Ordering is by variant first (booleans, integers, floats, text) and
/// then by value within the variant.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Bool(bool),
    Int(i64),
    Float(OrderedFloat<f64>),
    Text(String),
}

impl Level {
    /// Create a float level
    pub fn float(value: f64) -> Self {
        Self::Float(OrderedFloat(value))
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{}", x.0),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Level {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Level {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Level {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<bool> for Level {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
