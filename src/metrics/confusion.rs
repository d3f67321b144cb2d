use std::error::Error;
use std::fmt;

use crate::data::column::{CategoricalValue, Column};

/// Aggregate prediction counts over a held-out set.
///
/// "False positive" is relative to a caller-chosen positive label: a wrong
/// prediction that claimed the positive label. The report never feeds back
/// into training.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusionReport {
    pub total: usize,
    pub correct: usize,
    pub wrong: usize,
    pub false_positives: usize,
}

impl ConfusionReport {
    /// Tallies predictions against the actual target column. The two
    /// sequences must be row-aligned and of equal length.
    pub fn from_predictions<V: CategoricalValue>(
        predictions: &[V],
        actuals: &Column<V>,
        positive_label: &V,
    ) -> Result<Self, Box<dyn Error>> {
        if predictions.len() != actuals.len() {
            return Err("Predictions and labels are of different sizes.".into());
        }

        let mut report = Self {
            total: predictions.len(),
            correct: 0,
            wrong: 0,
            false_positives: 0,
        };

        for (prediction, actual) in predictions.iter().zip(actuals.values()) {
            if prediction == actual {
                report.correct += 1;
            } else {
                report.wrong += 1;
                if prediction == positive_label {
                    report.false_positives += 1;
                }
            }
        }

        Ok(report)
    }

    /// Fraction of correct predictions; 0.0 over an empty report.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64
    }

    /// Fraction of all predictions that were false positives; 0.0 over an
    /// empty report.
    pub fn false_positive_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.false_positives as f64 / self.total as f64
    }
}

impl fmt::Display for ConfusionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total: {}", self.total)?;
        writeln!(f, "Correct: {}", self.correct)?;
        writeln!(f, "Wrong: {}", self.wrong)?;
        writeln!(f, "False positives: {}", self.false_positives)?;
        writeln!(f, "Accuracy: {:.2}%", self.accuracy() * 100.0)?;
        write!(f, "False positive %: {:.2}%", self.false_positive_rate() * 100.0)
    }
}
