//! Confusion matrix.
//!
//! Rows are true labels, columns are predicted labels, cells are counts.
//! The label ordering comes from the fitted model's captured class
//! ordering; it is passed in, never re-derived here.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TribuneError};

/// A confusion matrix over a fixed label ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    labels: Vec<String>,
    counts: Vec<Vec<usize>>,
}

impl ConfusionMatrix {
    /// Build a matrix from parallel true/predicted label sequences.
    ///
    /// Every label in both sequences must appear in `labels`; an unknown
    /// label is a training/setup error, not a counting detail to skip.
    pub fn from_predictions(
        labels: &[String],
        y_true: &[String],
        y_pred: &[String],
    ) -> Result<Self> {
        if y_true.len() != y_pred.len() {
            return Err(TribuneError::training(format!(
                "{} true labels but {} predictions",
                y_true.len(),
                y_pred.len()
            )));
        }

        let index_of = |label: &String| {
            labels.iter().position(|l| l == label).ok_or_else(|| {
                TribuneError::training(format!("label '{label}' not in the class ordering"))
            })
        };

        let mut counts = vec![vec![0usize; labels.len()]; labels.len()];
        for (truth, prediction) in y_true.iter().zip(y_pred) {
            counts[index_of(truth)?][index_of(prediction)?] += 1;
        }

        Ok(Self {
            labels: labels.to_vec(),
            counts,
        })
    }

    /// The label ordering (rows and columns).
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The raw counts, row-major.
    pub fn counts(&self) -> &[Vec<usize>] {
        &self.counts
    }

    /// Total number of counted records.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// Number of true instances of the label at `index`.
    pub fn row_total(&self, index: usize) -> usize {
        self.counts[index].iter().sum()
    }

    /// Number of predictions of the label at `index`.
    pub fn column_total(&self, index: usize) -> usize {
        self.counts.iter().map(|row| row[index]).sum()
    }

    /// Correct predictions of the label at `index`.
    pub fn true_positives(&self, index: usize) -> usize {
        self.counts[index][index]
    }

    /// Overall accuracy (trace over total).
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let trace: usize = (0..self.labels.len()).map(|i| self.counts[i][i]).sum();
        trace as f64 / total as f64
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .labels
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
            .max(6);

        write!(f, "{:width$} ", "")?;
        for label in &self.labels {
            write!(f, " {label:>width$}")?;
        }
        writeln!(f)?;

        for (row, label) in self.labels.iter().enumerate() {
            write!(f, "{label:width$} ")?;
            for col in 0..self.labels.len() {
                write!(f, " {:>width$}", self.counts[row][col])?;
            }
            if row + 1 < self.labels.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
