// src/engines/metrics/classification.rs
use crate::types::{PredictionRecord, DECISION_THRESHOLD};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// `numerator / denominator`, or 0 when nothing satisfies the denominator
pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// True/false positive/negative counts at one decision threshold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub tp: usize,
    pub fp: usize,
    pub tn: usize,
    #[serde(rename = "fn")]
    pub fn_: usize,
}

impl ConfusionCounts {
    /// Count records, labelling expected values at 0.5 and predicted values
    /// at `predicted_threshold` (`value > threshold` is positive).
    pub fn tally(records: &[PredictionRecord], predicted_threshold: f64) -> Self {
        records
            .par_iter()
            .fold(Self::default, |counts, record| {
                counts.record(record.expected_positive(), record.predicted > predicted_threshold)
            })
            .reduce(Self::default, Self::merge)
    }

    /// Counts at the fixed 0.5 threshold on both sides
    pub fn at_default_threshold(records: &[PredictionRecord]) -> Self {
        Self::tally(records, DECISION_THRESHOLD)
    }

    fn record(mut self, expected: bool, predicted: bool) -> Self {
        match (predicted, expected) {
            (true, true) => self.tp += 1,
            (true, false) => self.fp += 1,
            (false, false) => self.tn += 1,
            (false, true) => self.fn_ += 1,
        }
        self
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            tp: self.tp + other.tp,
            fp: self.fp + other.fp,
            tn: self.tn + other.tn,
            fn_: self.fn_ + other.fn_,
        }
    }

    pub fn total(&self) -> usize {
        self.tp + self.fp + self.tn + self.fn_
    }

    pub fn true_positive_rate(&self) -> f64 {
        ratio(self.tp as f64, (self.tp + self.fn_) as f64)
    }

    pub fn false_positive_rate(&self) -> f64 {
        ratio(self.fp as f64, (self.fp + self.tn) as f64)
    }
}

/// Threshold classification quality derived from confusion counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationMetrics {
    pub threshold: f64,
    pub counts: ConfusionCounts,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl ClassificationMetrics {
    pub fn calculate(records: &[PredictionRecord]) -> Self {
        Self::from_counts(ConfusionCounts::at_default_threshold(records))
    }

    pub fn from_counts(counts: ConfusionCounts) -> Self {
        let tp = counts.tp as f64;
        let accuracy = ratio((counts.tp + counts.tn) as f64, counts.total() as f64);
        let precision = ratio(tp, (counts.tp + counts.fp) as f64);
        let recall = counts.true_positive_rate();
        let f1 = ratio(2.0 * precision * recall, precision + recall);

        Self {
            threshold: DECISION_THRESHOLD,
            counts,
            accuracy,
            precision,
            recall,
            f1,
        }
    }
}
