//! Stateful chi-squared test of independence
//!
//! An [`IndependenceTest`] starts fresh, is populated by [`IndependenceTest::test`]
//! and can then be queried any number of times. Another `test` call replaces
//! everything stored by the previous one; a failed call leaves the previous
//! state untouched.

use crate::chi_square::{chi_square, ChiSquareOutcome};
use crate::config::{PairAxis, ReportFormat, TestOptions, DEFAULT_SIGNIFICANCE};
use crate::contingency::ContingencyTable;
use crate::post_hoc::{pairwise, PostHocResults};
use crate::report::{apa_sentence, centered, frame, wrap, ApaFields, Hypothesis, Significance};
use eda_core::{format_scientific, Column, Dataset, Error, Result};
use eda_viz::{ConsoleTablePrinter, TablePrinter};
use tracing::{debug, instrument};

/// Everything recorded by one successful test
#[derive(Debug, Clone)]
struct TestState {
    x_name: String,
    y_name: String,
    options: TestOptions,
    observed: ContingencyTable,
    outcome: ChiSquareOutcome,
    verdict: Significance,
}

/// Pearson's chi-squared test of independence between two categorical variables
///
/// # Example
///
/// ```rust
/// use eda_core::Column;
/// use eda_independence::{IndependenceTest, PairAxis, TestOptions};
///
/// let x = Column::new("group", vec!["A", "A", "B", "B", "B"]);
/// let y = Column::new("answer", vec!["Yes", "No", "Yes", "No", "No"]);
///
/// let mut test = IndependenceTest::new();
/// let outcome = test.test(&x, &y, TestOptions::default()).unwrap();
/// assert_eq!(outcome.dof, 1);
///
/// let pairs = test.post_hoc(PairAxis::Rows, false).unwrap();
/// assert_eq!(pairs.len(), 1);
/// assert!(test.report(false).unwrap().starts_with("A Chi-square test"));
/// ```
#[derive(Debug, Clone)]
pub struct IndependenceTest<P: TablePrinter = ConsoleTablePrinter> {
    printer: P,
    state: Option<TestState>,
}

impl IndependenceTest<ConsoleTablePrinter> {
    /// Create a fresh test printing tables to the console
    pub fn new() -> Self {
        Self::with_printer(ConsoleTablePrinter::default())
    }
}

impl Default for IndependenceTest<ConsoleTablePrinter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: TablePrinter> IndependenceTest<P> {
    /// Create a fresh test rendering tables with `printer`
    pub fn with_printer(printer: P) -> Self {
        Self { printer, state: None }
    }

    /// Test two aligned qualitative columns for independence
    ///
    /// Returns the statistic, p-value, degrees of freedom and expected
    /// table, and stores them along with the observed table for the
    /// reporting methods.
    #[instrument(skip(self, x, y), fields(x = x.name(), y = y.name()))]
    pub fn test(&mut self, x: &Column, y: &Column, options: TestOptions) -> Result<ChiSquareOutcome> {
        options.validate()?;
        let observed = ContingencyTable::from_columns(x, y)?;
        self.run(observed, x.name(), y.name(), options)
    }

    /// Test two columns of a dataset, looked up by name
    pub fn test_columns(
        &mut self,
        dataset: &Dataset,
        x: &str,
        y: &str,
        options: TestOptions,
    ) -> Result<ChiSquareOutcome> {
        self.test(dataset.column(x)?, dataset.column(y)?, options)
    }

    /// Test a pre-built contingency table
    ///
    /// `x_name` and `y_name` label the row and column variables in reports.
    #[instrument(skip(self, observed))]
    pub fn test_table(
        &mut self,
        observed: ContingencyTable,
        x_name: &str,
        y_name: &str,
        options: TestOptions,
    ) -> Result<ChiSquareOutcome> {
        options.validate()?;
        self.run(observed, x_name, y_name, options)
    }

    fn run(
        &mut self,
        observed: ContingencyTable,
        x_name: &str,
        y_name: &str,
        options: TestOptions,
    ) -> Result<ChiSquareOutcome> {
        let outcome = chi_square(&observed, options.continuity_correction)?;
        let verdict = Significance::from_p_value(outcome.p_value, options.significance);
        debug!(
            statistic = outcome.statistic,
            p_value = outcome.p_value,
            dof = outcome.dof,
            n = observed.grand_total(),
            %verdict,
            "chi-squared test complete"
        );

        self.state = Some(TestState {
            x_name: x_name.to_string(),
            y_name: y_name.to_string(),
            options,
            observed,
            outcome: outcome.clone(),
            verdict,
        });
        Ok(outcome)
    }

    fn state(&self, operation: &str) -> Result<&TestState> {
        self.state.as_ref().ok_or_else(|| Error::not_tested(operation))
    }

    /// Whether a test has completed
    pub fn is_tested(&self) -> bool {
        self.state.is_some()
    }

    /// Significance level of the last test, or the default before any test
    pub fn significance(&self) -> f64 {
        self.state
            .as_ref()
            .map_or(DEFAULT_SIGNIFICANCE, |s| s.options.significance)
    }

    /// Statistic, p-value, degrees of freedom and expected table of the last test
    pub fn outcome(&self) -> Result<&ChiSquareOutcome> {
        Ok(&self.state("outcome")?.outcome)
    }

    /// Observed counts of the last test
    pub fn observed(&self) -> Result<&ContingencyTable> {
        Ok(&self.state("observed")?.observed)
    }

    /// Number of complete observations in the last test
    pub fn sample_size(&self) -> Result<u64> {
        Ok(self.state("sample_size")?.observed.grand_total())
    }

    /// Names of the row and column variables of the last test
    pub fn variables(&self) -> Result<(&str, &str)> {
        let state = self.state("variables")?;
        Ok((&state.x_name, &state.y_name))
    }

    pub fn result(&self) -> Result<Significance> {
        Ok(self.state("result")?.verdict)
    }

    pub fn hypothesis(&self) -> Result<Hypothesis> {
        Ok(self.state("hypothesis")?.verdict.hypothesis())
    }

    /// Pairwise comparisons between categories of one variable
    ///
    /// Recomputed on each call from the stored observed table, using the
    /// same continuity correction as the test. When `verbose`, the results
    /// are also printed through the table printer.
    #[instrument(skip(self))]
    pub fn post_hoc(&self, axis: PairAxis, verbose: bool) -> Result<PostHocResults> {
        let state = self.state("post_hoc")?;
        let results = pairwise(&state.observed, axis, state.options.continuity_correction)?;
        debug!(comparisons = results.len(), "post-hoc analysis complete");

        if verbose {
            self.printer.print_table(&results);
        }
        Ok(results)
    }

    /// Fixed-width text block with both tables and the test result
    pub fn summary(&self, format: &ReportFormat) -> Result<String> {
        let state = self.state("summary")?;
        let width = format.width;
        let outcome = &state.outcome;

        let banner = format!(
            "Pearson's chi-squared statistic = {statistic:.prec$}, Df = {dof}, p-value = {p}",
            statistic = outcome.statistic,
            prec = format.summary_statistic_decimals,
            dof = outcome.dof,
            p = format_scientific(outcome.p_value, format.p_value_digits),
        );

        let sections = [
            frame(width),
            centered("Pearson's Chi-squared Test of Independence", width),
            centered("Data", width),
            centered(&format!("x = {} y = {}", state.x_name, state.y_name), width),
            String::new(),
            centered("Observed Frequencies", width),
            self.printer.render(&state.observed),
            String::new(),
            centered("Expected Frequencies", width),
            self.printer.render(&outcome.expected),
            String::new(),
            centered(&banner, width),
            String::new(),
            frame(width),
        ];
        Ok(sections.join("\n"))
    }

    /// APA-style sentence describing the result, in the default format
    ///
    /// When `verbose`, the sentence is also printed wrapped to 80 columns.
    pub fn report(&self, verbose: bool) -> Result<String> {
        self.report_with(&ReportFormat::default(), verbose)
    }

    /// APA-style sentence laid out by `format`
    ///
    /// When `verbose`, the sentence is also printed wrapped to `format.width`.
    pub fn report_with(&self, format: &ReportFormat, verbose: bool) -> Result<String> {
        let sentence = self.sentence(format)?;
        if verbose {
            for line in wrap(&sentence, format.width) {
                println!("{line}");
            }
        }
        Ok(sentence)
    }

    /// APA-style sentence wrapped to `format.width`
    pub fn report_lines(&self, format: &ReportFormat) -> Result<Vec<String>> {
        Ok(wrap(&self.sentence(format)?, format.width))
    }

    fn sentence(&self, format: &ReportFormat) -> Result<String> {
        let state = self.state("report")?;
        let fields = ApaFields {
            x_name: &state.x_name,
            y_name: &state.y_name,
            significance: state.verdict,
            dof: state.outcome.dof,
            n: state.observed.grand_total(),
            statistic: state.outcome.statistic,
            p_value: state.outcome.p_value,
        };
        Ok(apa_sentence(&fields, format.statistic_decimals, format.p_value_digits))
    }
}
