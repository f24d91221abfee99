//! End-to-end tests of the test -> post-hoc -> report workflow

mod common;

use approx::assert_relative_eq;
use common::{survey, table, trial, EPSILON};
use eda_core::{Column, ColumnKind, Error, Level};
use eda_independence::{
    ContingencyTable, Hypothesis, IndependenceTest, PairAxis, ReportFormat, Significance,
    TestOptions,
};

#[test]
fn test_survey_scenario() {
    let (x, y) = survey();
    let observed = ContingencyTable::from_columns(&x, &y).unwrap();

    assert_eq!(observed.get(&"A".into(), &"Yes".into()), Some(1));
    assert_eq!(observed.get(&"A".into(), &"No".into()), Some(1));
    assert_eq!(observed.get(&"B".into(), &"Yes".into()), Some(1));
    assert_eq!(observed.get(&"B".into(), &"No".into()), Some(2));
    assert_eq!(observed.row_totals(), vec![2, 3]);
    assert_eq!(observed.grand_total(), 5);

    let mut test = IndependenceTest::new();
    let outcome = test.test(&x, &y, TestOptions::default()).unwrap();
    assert_relative_eq!(
        outcome.expected.get(&"A".into(), &"Yes".into()).unwrap(),
        0.8,
        epsilon = EPSILON
    );
    assert_eq!(outcome.dof, 1);
}

#[test]
fn test_trial_is_significant() {
    let ds = trial();
    let mut test = IndependenceTest::new();
    let outcome = test
        .test_columns(&ds, "arm", "outcome", TestOptions::default())
        .unwrap();

    assert_eq!(outcome.dof, 2);
    assert!(outcome.p_value < 0.001);
    assert_eq!(test.result().unwrap(), Significance::Significant);
    assert_eq!(test.hypothesis().unwrap(), Hypothesis::Reject);
    assert_eq!(test.sample_size().unwrap(), 120);

    let report = test.report(false).unwrap();
    assert!(report.contains("between arm and outcome."));
    assert!(report.contains("was significant, X2(2, N = 120) = "));
    assert!(report.ends_with('.'));
}

#[test]
fn test_zero_category_is_degenerate() {
    let declared = ContingencyTable::from_counts(
        vec!["A".into(), "B".into(), "C".into()],
        vec!["Yes".into(), "No".into()],
        vec![vec![3, 4], vec![5, 1], vec![0, 0]],
    )
    .unwrap();

    let mut test = IndependenceTest::new();
    assert!(matches!(
        test.test_table(declared, "x", "y", TestOptions::default()),
        Err(Error::DegenerateTable(_))
    ));
    assert!(!test.is_tested());
}

#[test]
fn test_level_seen_only_with_missing_partner_is_degenerate() {
    let x = Column::new("x", vec![Some("a"), Some("a"), Some("b"), Some("b"), Some("c")]);
    let y = Column::new("y", vec![Some("u"), Some("v"), Some("u"), Some("v"), None]);

    let mut test = IndependenceTest::new();
    assert!(matches!(
        test.test(&x, &y, TestOptions::default()),
        Err(Error::DegenerateTable(_))
    ));
}

#[test]
fn test_single_level_is_degenerate() {
    let x = Column::new("x", vec!["a", "a", "a"]);
    let y = Column::new("y", vec!["u", "v", "u"]);
    let mut test = IndependenceTest::new();
    assert!(matches!(
        test.test(&x, &y, TestOptions::default()),
        Err(Error::DegenerateTable(_))
    ));
}

#[test]
fn test_quantitative_column_rejected() {
    let x = Column::new("score", vec![1.0, 2.0, 3.0]);
    let y = Column::new("y", vec!["u", "v", "u"]);
    let mut test = IndependenceTest::new();
    assert!(matches!(
        test.test(&x, &y, TestOptions::default()),
        Err(Error::TypeMismatch { .. })
    ));

    // Integer codes are accepted once tagged qualitative
    let codes = Column::new("code", vec![1i64, 2, 1, 2])
        .with_kind(ColumnKind::Qualitative)
        .unwrap();
    let y = Column::new("y", vec!["u", "v", "v", "u"]);
    test.test(&codes, &y, TestOptions::default()).unwrap();
    assert_eq!(test.observed().unwrap().row_labels(), &[Level::Int(1), Level::Int(2)]);
}

#[test]
fn test_post_hoc_pair_counts() {
    let ds = trial();
    let mut test = IndependenceTest::new();
    test.test_columns(&ds, "arm", "outcome", TestOptions::default())
        .unwrap();

    let rows = test.post_hoc(PairAxis::Rows, false).unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|c| c.n == 80));
    // Arms sort as high, low, placebo
    assert_eq!(rows.comparisons[0].level_1, Level::from("high"));
    assert_eq!(rows.comparisons[0].level_2, Level::from("low"));
    assert_eq!(rows.comparisons[2].level_2, Level::from("placebo"));

    let cols = test.post_hoc(PairAxis::from_by_rows(false), false).unwrap();
    assert_eq!(cols.len(), 1);
}

#[test]
fn test_post_hoc_by_columns_on_two_by_three() {
    let mut test = IndependenceTest::new();
    test.test_table(
        table(vec![vec![10, 20, 30], vec![25, 15, 20]]),
        "row",
        "col",
        TestOptions::default(),
    )
    .unwrap();

    let results = test.post_hoc(PairAxis::Columns, false).unwrap();
    assert_eq!(results.len(), 3);
    let pairs: Vec<(Level, Level)> = results
        .iter()
        .map(|c| (c.level_1.clone(), c.level_2.clone()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (Level::Int(0), Level::Int(1)),
            (Level::Int(0), Level::Int(2)),
            (Level::Int(1), Level::Int(2)),
        ]
    );
    assert_eq!(results.comparisons[0].n, 70);
}

#[test]
fn test_summary_and_report_are_idempotent() {
    let (x, y) = survey();
    let mut test = IndependenceTest::new();
    test.test(&x, &y, TestOptions::default()).unwrap();

    let format = ReportFormat::default();
    assert_eq!(test.summary(&format).unwrap(), test.summary(&format).unwrap());
    assert_eq!(test.report(false).unwrap(), test.report(false).unwrap());
    assert_eq!(
        test.post_hoc(PairAxis::Rows, false).unwrap(),
        test.post_hoc(PairAxis::Rows, false).unwrap()
    );
}

#[test]
fn test_second_test_overwrites_first() {
    let (x, y) = survey();
    let ds = trial();

    let mut reused = IndependenceTest::new();
    reused.test(&x, &y, TestOptions::new().with_significance(0.1)).unwrap();
    reused
        .test_columns(&ds, "arm", "outcome", TestOptions::default())
        .unwrap();

    let mut fresh = IndependenceTest::new();
    fresh
        .test_columns(&ds, "arm", "outcome", TestOptions::default())
        .unwrap();

    let format = ReportFormat::default();
    assert_eq!(reused.summary(&format).unwrap(), fresh.summary(&format).unwrap());
    assert_eq!(reused.report(false).unwrap(), fresh.report(false).unwrap());
    assert_eq!(reused.significance(), 0.05);
    assert_eq!(reused.observed().unwrap(), fresh.observed().unwrap());
}

#[test]
fn test_report_sentence() {
    let (x, y) = survey();
    let mut test = IndependenceTest::new();
    test.test(&x, &y, TestOptions::new().without_continuity_correction())
        .unwrap();

    assert_eq!(
        test.report(false).unwrap(),
        "A Chi-square test of independence was conducted to examine the relation between \
         group and answer. The relation between the variables was not significant, \
         X2(1, N = 5) = 0.14, p = 7.09e-01."
    );
}
