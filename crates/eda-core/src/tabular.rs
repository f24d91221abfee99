//! Row/column view used by table printers

/// Anything that can be laid out as a header row plus body rows of text
///
/// Implemented by result types (frequency tables, describe tables,
/// post-hoc result sets) so a single printer can render all of them.
pub trait Tabular {
    /// Header cells, including the leading index column header (may be empty)
    fn headers(&self) -> Vec<String>;

    /// Body rows; each row has the same number of cells as `headers`
    fn rows(&self) -> Vec<Vec<String>>;
}

/// Format a float cell with fixed decimals
pub fn format_cell(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.decimals$}")
    }
}

/// Format a value in scientific notation with `significant` digits
///
/// The exponent always carries a sign and at least two digits
/// (`7.09e-01`), the layout analysts expect from statistics packages.
pub fn format_scientific(value: f64, significant: usize) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let decimals = significant.saturating_sub(1);
    let raw = format!("{value:.decimals$e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => raw,
    }
}
