//! Options for running and reporting a test of independence

use eda_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Significance level used when none is given
pub const DEFAULT_SIGNIFICANCE: f64 = 0.05;

/// Options controlling a chi-squared test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestOptions {
    /// Threshold below which the p-value is called significant
    pub significance: f64,
    /// Apply Yates' correction to tables with one degree of freedom
    pub continuity_correction: bool,
}

impl TestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the significance level
    pub fn with_significance(mut self, significance: f64) -> Self {
        self.significance = significance;
        self
    }

    /// Disable Yates' continuity correction
    pub fn without_continuity_correction(mut self) -> Self {
        self.continuity_correction = false;
        self
    }

    /// Check that the significance level lies in (0, 1)
    pub fn validate(&self) -> Result<()> {
        if self.significance > 0.0 && self.significance < 1.0 {
            Ok(())
        } else {
            Err(Error::invalid_significance(self.significance))
        }
    }
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            significance: DEFAULT_SIGNIFICANCE,
            continuity_correction: true,
        }
    }
}

/// Layout of the summary block and the APA sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportFormat {
    /// Target line width for centring, framing and wrapping
    pub width: usize,
    /// Decimals of the statistic in the APA sentence
    pub statistic_decimals: usize,
    /// Decimals of the statistic in the summary banner
    pub summary_statistic_decimals: usize,
    /// Significant digits of p-values
    pub p_value_digits: usize,
}

impl Default for ReportFormat {
    fn default() -> Self {
        Self {
            width: 80,
            statistic_decimals: 2,
            summary_statistic_decimals: 3,
            p_value_digits: 3,
        }
    }
}

/// Which categories a post-hoc analysis compares pairwise
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairAxis {
    /// Pairs of row (x) categories, each compared across all columns
    #[default]
    Rows,
    /// Pairs of column (y) categories, each compared across all rows
    Columns,
}

impl PairAxis {
    /// `true` selects rows, `false` columns
    pub fn from_by_rows(by_rows: bool) -> Self {
        if by_rows {
            Self::Rows
        } else {
            Self::Columns
        }
    }
}
