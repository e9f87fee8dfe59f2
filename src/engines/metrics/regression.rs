// src/engines/metrics/regression.rs
use crate::error::{FuzzyevalError, Result};
use crate::types::PredictionRecord;
use serde::{Deserialize, Serialize};

/// Error and goodness-of-fit statistics over a prediction dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorStatistics {
    pub sample_count: usize,
    pub mean_error: f64,
    pub std_error: f64,
    pub mean_abs_error: f64,
    pub max_abs_error: f64,
    pub min_abs_error: f64,
    pub mse: f64,
    pub rmse: f64,
    pub r2: f64,
}

impl ErrorStatistics {
    pub fn calculate(records: &[PredictionRecord]) -> Result<Self> {
        if records.is_empty() {
            return Err(FuzzyevalError::EmptyDataset);
        }

        let errors: Vec<f64> = records.iter().map(|r| r.error).collect();
        let abs_errors: Vec<f64> = records.iter().map(|r| r.abs_error).collect();

        let mean_error = Self::mean(&errors);
        let std_error = Self::sample_std_dev(&errors);

        let mean_abs_error = Self::mean(&abs_errors);
        let max_abs_error = abs_errors.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_abs_error = abs_errors.iter().copied().fold(f64::INFINITY, f64::min);

        let ss_res: f64 = errors.iter().map(|e| e * e).sum();
        let mse = ss_res / errors.len() as f64;
        let rmse = mse.sqrt();

        let mean_expected = records.iter().map(|r| r.expected).sum::<f64>() / records.len() as f64;
        let ss_tot: f64 = records
            .iter()
            .map(|r| (r.expected - mean_expected).powi(2))
            .sum();
        // Constant ground truth leaves R² undefined; report 0.
        let r2 = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 0.0 };

        Ok(Self {
            sample_count: records.len(),
            mean_error,
            std_error,
            mean_abs_error,
            max_abs_error,
            min_abs_error,
            mse,
            rmse,
            r2,
        })
    }

    fn mean(values: &[f64]) -> f64 {
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Sample standard deviation (n - 1); 0 for a single value
    fn sample_std_dev(values: &[f64]) -> f64 {
        if values.len() < 2 {
            return 0.0;
        }

        let mean = Self::mean(values);
        let variance = values.iter()
            .map(|&v| (v - mean).powi(2))
            .sum::<f64>() / (values.len() - 1) as f64;

        variance.sqrt()
    }
}
