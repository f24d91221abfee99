//! Shared fixtures for independence tests

#![allow(dead_code)]

use eda_core::{Column, Dataset, Level};
use eda_independence::ContingencyTable;

pub const EPSILON: f64 = 1e-10;

/// Two-group survey with answers Yes/No
pub fn survey() -> (Column, Column) {
    (
        Column::new("group", vec!["A", "A", "B", "B", "B"]),
        Column::new("answer", vec!["Yes", "No", "Yes", "No", "No"]),
    )
}

/// Treatment outcome data with three arms and two outcomes
pub fn trial() -> Dataset {
    let mut arm = Vec::new();
    let mut outcome = Vec::new();
    for (name, recovered, not_recovered) in [("placebo", 12, 28), ("low", 20, 20), ("high", 31, 9)] {
        for _ in 0..recovered {
            arm.push(name);
            outcome.push("recovered");
        }
        for _ in 0..not_recovered {
            arm.push(name);
            outcome.push("not recovered");
        }
    }
    Dataset::new(vec![Column::new("arm", arm), Column::new("outcome", outcome)])
        .expect("fixture columns are aligned")
}

/// Table with integer labels `0..rows` and `0..cols`
pub fn table(counts: Vec<Vec<u64>>) -> ContingencyTable {
    let rows = (0..counts.len() as i64).map(Level::Int).collect();
    let cols = (0..counts.first().map_or(0, Vec::len) as i64).map(Level::Int).collect();
    ContingencyTable::from_counts(rows, cols, counts).expect("fixture shape is valid")
}
