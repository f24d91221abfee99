//! Columns and their storage
//!
//! A column owns its values in a typed `ColumnData` buffer and carries a
//! `ColumnKind` tag fixed at construction. The tag, not the storage type,
//! decides whether downstream code treats the column as quantitative or
//! qualitative, so integer-coded categories can be analysed as such.

use crate::{Error, Level, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    /// Numeric measurements (summarised with moments and quantiles)
    Quantitative,
    /// Categories (summarised with frequencies)
    Qualitative,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quantitative => f.write_str("quantitative"),
            Self::Qualitative => f.write_str("qualitative"),
        }
    }
}

/// Typed storage for a column; `None` marks a missing entry
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Float64(Vec<Option<f64>>),
    Float32(Vec<Option<f32>>),
    Int64(Vec<Option<i64>>),
    Int32(Vec<Option<i32>>),
    Boolean(Vec<Option<bool>>),
    Text(Vec<Option<String>>),
}

impl ColumnData {
    /// Number of rows, missing entries included
    pub fn len(&self) -> usize {
        match self {
            Self::Float64(v) => v.len(),
            Self::Float32(v) => v.len(),
            Self::Int64(v) => v.len(),
            Self::Int32(v) => v.len(),
            Self::Boolean(v) => v.len(),
            Self::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Storage type name
    pub fn dtype_name(&self) -> &'static str {
        match self {
            Self::Float64(_) => "f64",
            Self::Float32(_) => "f32",
            Self::Int64(_) => "i64",
            Self::Int32(_) => "i32",
            Self::Boolean(_) => "bool",
            Self::Text(_) => "text",
        }
    }

    /// Whether the storage holds integers or floats
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Boolean(_) | Self::Text(_))
    }

    /// The kind implied by the storage type alone
    pub fn natural_kind(&self) -> ColumnKind {
        if self.is_numeric() {
            ColumnKind::Quantitative
        } else {
            ColumnKind::Qualitative
        }
    }

    /// Number of missing entries (`None`, or NaN for float storage)
    pub fn missing_count(&self) -> usize {
        match self {
            Self::Float64(v) => v.iter().filter(|x| x.map_or(true, f64::is_nan)).count(),
            Self::Float32(v) => v.iter().filter(|x| x.map_or(true, f32::is_nan)).count(),
            Self::Int64(v) => v.iter().filter(|x| x.is_none()).count(),
            Self::Int32(v) => v.iter().filter(|x| x.is_none()).count(),
            Self::Boolean(v) => v.iter().filter(|x| x.is_none()).count(),
            Self::Text(v) => v.iter().filter(|x| x.is_none()).count(),
        }
    }

    /// Values as category levels, row by row; missing entries map to `None`
    pub fn levels(&self) -> Vec<Option<Level>> {
        match self {
            Self::Float64(v) => v
                .iter()
                .map(|x| x.filter(|f| !f.is_nan()).map(Level::float))
                .collect(),
            Self::Float32(v) => v
                .iter()
                .map(|x| x.filter(|f| !f.is_nan()).map(|f| Level::float(f64::from(f))))
                .collect(),
            Self::Int64(v) => v.iter().map(|x| x.map(Level::Int)).collect(),
            Self::Int32(v) => v.iter().map(|x| x.map(|i| Level::Int(i64::from(i)))).collect(),
            Self::Boolean(v) => v.iter().map(|x| x.map(Level::Bool)).collect(),
            Self::Text(v) => v.iter().map(|x| x.clone().map(Level::Text)).collect(),
        }
    }
}

macro_rules! impl_column_data_from {
    ($t:ty, $variant:ident) => {
        impl From<Vec<Option<$t>>> for ColumnData {
            fn from(values: Vec<Option<$t>>) -> Self {
                Self::$variant(values)
            }
        }

        impl From<Vec<$t>> for ColumnData {
            fn from(values: Vec<$t>) -> Self {
                Self::$variant(values.into_iter().map(Some).collect())
            }
        }
    };
}

impl_column_data_from!(f64, Float64);
impl_column_data_from!(f32, Float32);
impl_column_data_from!(i64, Int64);
impl_column_data_from!(i32, Int32);
impl_column_data_from!(bool, Boolean);
impl_column_data_from!(String, Text);

impl From<Vec<&str>> for ColumnData {
    fn from(values: Vec<&str>) -> Self {
        Self::Text(values.into_iter().map(|s| Some(s.to_string())).collect())
    }
}

impl From<Vec<Option<&str>>> for ColumnData {
    fn from(values: Vec<Option<&str>>) -> Self {
        Self::Text(values.into_iter().map(|s| s.map(str::to_string)).collect())
    }
}

/// A named, kind-tagged column
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    kind: ColumnKind,
    data: ColumnData,
}

impl Column {
    /// Create a column tagged with the kind its storage implies
    pub fn new(name: impl Into<String>, data: impl Into<ColumnData>) -> Self {
        let data = data.into();
        Self {
            name: name.into(),
            kind: data.natural_kind(),
            data,
        }
    }

    /// Re-tag the column
    ///
    /// Numeric columns may be tagged either way. Boolean and text columns
    /// can only be qualitative.
    pub fn with_kind(mut self, kind: ColumnKind) -> Result<Self> {
        if kind == ColumnKind::Quantitative && !self.data.is_numeric() {
            return Err(Error::TypeMismatch {
                expected: "numeric storage".to_string(),
                got: self.data.dtype_name().to_string(),
            });
        }
        self.kind = kind;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of missing entries
    pub fn missing(&self) -> usize {
        self.data.missing_count()
    }

    /// Number of non-missing entries
    pub fn count(&self) -> usize {
        self.len() - self.missing()
    }

    /// Values as category levels, row by row
    pub fn levels(&self) -> Vec<Option<Level>> {
        self.data.levels()
    }

    /// Fail with `TypeMismatch` unless the column carries `kind`
    pub fn expect_kind(&self, kind: ColumnKind) -> Result<()> {
        if self.kind == kind {
            Ok(())
        } else {
            Err(Error::TypeMismatch {
                expected: kind.to_string(),
                got: format!("{} column '{}'", self.kind, self.name),
            })
        }
    }
}
