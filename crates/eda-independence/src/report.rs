//! Verdicts and text layout for test reports

use eda_core::format_scientific;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the association reached the significance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Significance {
    Significant,
    NotSignificant,
}

impl Significance {
    /// Verdict for a p-value at the given level (`p < significance`)
    pub fn from_p_value(p_value: f64, significance: f64) -> Self {
        if p_value < significance {
            Self::Significant
        } else {
            Self::NotSignificant
        }
    }

    /// Decision on the null hypothesis of independence
    pub fn hypothesis(self) -> Hypothesis {
        match self {
            Self::Significant => Hypothesis::Reject,
            Self::NotSignificant => Hypothesis::FailToReject,
        }
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Significant => f.write_str("significant"),
            Self::NotSignificant => f.write_str("not significant"),
        }
    }
}

/// Decision on the null hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hypothesis {
    Reject,
    FailToReject,
}

impl fmt::Display for Hypothesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => f.write_str("reject"),
            Self::FailToReject => f.write_str("fail to reject"),
        }
    }
}

/// `*====...====*` spanning `width` characters
pub(crate) fn frame(width: usize) -> String {
    format!("*{}*", "=".repeat(width.saturating_sub(2)))
}

/// Centre `text` in a field of `width` characters
pub(crate) fn centered(text: &str, width: usize) -> String {
    format!("{text:^width$}")
}

/// Greedy word wrap at `width` columns
///
/// Whitespace runs collapse to single spaces; words longer than a line
/// are split across lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        let used = line.chars().count();
        if used > 0 && used + 1 + word.len() <= width {
            line.push(' ');
            line.extend(&word);
            continue;
        }
        if used > 0 {
            lines.push(std::mem::take(&mut line));
        }
        while word.len() > width {
            lines.push(word.drain(..width).collect());
        }
        line.extend(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Values quoted in the APA sentence
pub(crate) struct ApaFields<'a> {
    pub x_name: &'a str,
    pub y_name: &'a str,
    pub significance: Significance,
    pub dof: usize,
    pub n: u64,
    pub statistic: f64,
    pub p_value: f64,
}

pub(crate) fn apa_sentence(fields: &ApaFields<'_>, statistic_decimals: usize, p_value_digits: usize) -> String {
    format!(
        "A Chi-square test of independence was conducted to examine the relation between {x} and {y}. \
         The relation between the variables was {verdict}, X2({dof}, N = {n}) = {statistic:.prec$}, p = {p}.",
        x = fields.x_name,
        y = fields.y_name,
        verdict = fields.significance,
        dof = fields.dof,
        n = fields.n,
        statistic = fields.statistic,
        prec = statistic_decimals,
        p = format_scientific(fields.p_value, p_value_digits),
    )
}
