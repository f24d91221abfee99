//! Chi-squared test of independence on a small survey
//!
//! Run with `RUST_LOG=eda_independence=debug` to see the test's trace events.

use eda_core::{Column, Dataset};
use eda_independence::{IndependenceTest, PairAxis, ReportFormat, TestOptions};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let region = [
        "north", "north", "north", "north", "north", "north", "south", "south", "south", "south",
        "south", "south", "east", "east", "east", "east", "east", "east",
    ];
    let preference = [
        "tea", "tea", "tea", "tea", "coffee", "coffee", "coffee", "coffee", "coffee", "coffee",
        "coffee", "tea", "tea", "coffee", "tea", "coffee", "tea", "coffee",
    ];
    let ds = Dataset::new(vec![
        Column::new("region", region.to_vec()),
        Column::new("preference", preference.to_vec()),
    ])?;

    let mut test = IndependenceTest::new();
    test.test_columns(&ds, "region", "preference", TestOptions::default())?;

    let format = ReportFormat::default();
    println!("{}", test.summary(&format)?);
    println!();

    test.post_hoc(PairAxis::Rows, true)?;
    println!();

    for line in test.report_lines(&format)? {
        println!("{line}");
    }
    Ok(())
}
