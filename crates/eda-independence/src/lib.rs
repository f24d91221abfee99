//! Chi-squared test of independence for two categorical variables
//!
//! The workflow is:
//!
//! 1. [`IndependenceTest::test`] cross-tabulates two aligned qualitative
//!    columns into a [`ContingencyTable`], computes expected frequencies,
//!    Pearson's statistic, degrees of freedom and the p-value, and stores
//!    them with a significant / not significant verdict.
//! 2. [`IndependenceTest::post_hoc`] repeats the test on the sub-table of
//!    every pair of row (or column) categories.
//! 3. [`IndependenceTest::summary`] and [`IndependenceTest::report`] render
//!    the stored result as a fixed-width block or an APA-style sentence.
//!
//! Querying a test before it has been run fails with
//! [`eda_core::Error::InvalidState`]; tables with an empty category fail
//! with [`eda_core::Error::DegenerateTable`].

pub mod chi_square;
pub mod config;
pub mod contingency;
pub mod post_hoc;
pub mod report;
pub mod tester;

pub use chi_square::{chi_square, pearson_statistic, upper_tail, ChiSquareOutcome};
pub use config::{PairAxis, ReportFormat, TestOptions, DEFAULT_SIGNIFICANCE};
pub use contingency::{ContingencyTable, ExpectedTable};
pub use post_hoc::{pairwise, PostHocComparison, PostHocResults};
pub use report::{wrap, Hypothesis, Significance};
pub use tester::IndependenceTest;
