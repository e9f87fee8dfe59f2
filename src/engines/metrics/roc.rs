// src/engines/metrics/roc.rs
use super::classification::ConfusionCounts;
use crate::fuzzy::linspace;
use crate::types::PredictionRecord;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROC_STEPS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocPoint {
    pub threshold: f64,
    pub fpr: f64,
    pub tpr: f64,
}

/// True/false positive rates as the predicted-side threshold sweeps [0, 1]
///
/// Expected labels stay fixed at `> 0.5`. Raising the threshold can only
/// shrink the set of predicted positives, so both rates are non-increasing
/// along `points`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RocCurve {
    pub points: Vec<RocPoint>,
    pub auc: f64,
}

impl RocCurve {
    pub fn sweep(records: &[PredictionRecord], steps: usize) -> Self {
        let thresholds = linspace(0.0, 1.0, steps);

        let points: Vec<RocPoint> = thresholds
            .par_iter()
            .map(|&threshold| {
                let counts = ConfusionCounts::tally(records, threshold);
                RocPoint {
                    threshold,
                    fpr: counts.false_positive_rate(),
                    tpr: counts.true_positive_rate(),
                }
            })
            .collect();

        let auc = Self::trapezoid_auc(&points);
        log::debug!("ROC sweep over {} thresholds, AUC = {:.4}", points.len(), auc);

        Self { points, auc }
    }

    /// Trapezoidal area, integrating TPR over FPR in ascending FPR order
    fn trapezoid_auc(points: &[RocPoint]) -> f64 {
        let mut sorted: Vec<(f64, f64)> = points.iter().map(|p| (p.fpr, p.tpr)).collect();
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

        sorted
            .windows(2)
            .map(|w| (w[1].0 - w[0].0) * (w[1].1 + w[0].1) / 2.0)
            .sum()
    }
}
