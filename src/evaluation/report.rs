//! Held-out evaluation report.
//!
//! Per-class precision/recall/F1 from one-vs-rest counts of the confusion
//! matrix, the macro averages, and the micro average (= accuracy).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::evaluation::confusion::ConfusionMatrix;
use crate::model::pipeline::TextPipeline;

/// Precision/recall/F1 for one class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    /// Fraction of predictions of this class that were correct.
    pub precision: f64,
    /// Fraction of true instances of this class that were found.
    pub recall: f64,
    /// Harmonic mean of precision and recall.
    pub f1: f64,
    /// Number of true instances of this class.
    pub support: usize,
}

/// The full evaluation of a fitted pipeline on a held-out set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Overall accuracy (micro average).
    pub accuracy: f64,
    /// Per-class metrics in the model's class ordering.
    pub per_class: Vec<(String, ClassMetrics)>,
    /// Unweighted mean of per-class precision.
    pub macro_precision: f64,
    /// Unweighted mean of per-class recall.
    pub macro_recall: f64,
    /// Unweighted mean of per-class F1.
    pub macro_f1: f64,
    /// The confusion matrix the metrics derive from.
    pub confusion: ConfusionMatrix,
}

/// Evaluate a fitted pipeline on held-out normalized texts.
pub fn evaluate(
    pipeline: &TextPipeline,
    texts: &[String],
    y_true: &[String],
) -> Result<EvaluationReport> {
    let mut y_pred = Vec::with_capacity(texts.len());
    for text in texts {
        y_pred.push(pipeline.predict(text)?.to_string());
    }

    let confusion = ConfusionMatrix::from_predictions(pipeline.classes(), y_true, &y_pred)?;
    Ok(report_from_confusion(confusion))
}

fn report_from_confusion(confusion: ConfusionMatrix) -> EvaluationReport {
    let n_classes = confusion.labels().len();

    let per_class: Vec<(String, ClassMetrics)> = (0..n_classes)
        .map(|idx| {
            let tp = confusion.true_positives(idx) as f64;
            let predicted = confusion.column_total(idx) as f64;
            let support = confusion.row_total(idx);

            let precision = if predicted > 0.0 { tp / predicted } else { 0.0 };
            let recall = if support > 0 { tp / support as f64 } else { 0.0 };
            let f1 = if precision + recall > 0.0 {
                2.0 * precision * recall / (precision + recall)
            } else {
                0.0
            };

            (
                confusion.labels()[idx].clone(),
                ClassMetrics {
                    precision,
                    recall,
                    f1,
                    support,
                },
            )
        })
        .collect();

    let k = per_class.len().max(1) as f64;
    EvaluationReport {
        accuracy: confusion.accuracy(),
        macro_precision: per_class.iter().map(|(_, m)| m.precision).sum::<f64>() / k,
        macro_recall: per_class.iter().map(|(_, m)| m.recall).sum::<f64>() / k,
        macro_f1: per_class.iter().map(|(_, m)| m.f1).sum::<f64>() / k,
        per_class,
        confusion,
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .per_class
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0)
            .max(9);

        writeln!(
            f,
            "{:width$}  precision  recall      f1  support",
            ""
        )?;
        for (label, metrics) in &self.per_class {
            writeln!(
                f,
                "{label:width$}  {:>9.2}  {:>6.2}  {:>6.2}  {:>7}",
                metrics.precision, metrics.recall, metrics.f1, metrics.support
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:width$}  {:>9.2}  {:>6.2}  {:>6.2}  {:>7}",
            "macro avg",
            self.macro_precision,
            self.macro_recall,
            self.macro_f1,
            self.confusion.total()
        )?;
        writeln!(f, "accuracy: {:.4}", self.accuracy)?;
        writeln!(f)?;
        write!(f, "{}", self.confusion)
    }
}
