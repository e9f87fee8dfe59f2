// src/engines/metrics/correlation.rs
use crate::error::{FuzzyevalError, Result};
use crate::types::PredictionDataset;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCorrelation {
    pub feature: String,
    pub coefficient: f64,
}

pub struct CorrelationAnalyzer;

impl CorrelationAnalyzer {
    /// Pearson correlation of each named feature against the absolute error
    pub fn analyze(dataset: &PredictionDataset, features: &[String]) -> Result<Vec<FeatureCorrelation>> {
        if dataset.is_empty() {
            return Err(FuzzyevalError::EmptyDataset);
        }

        let abs_errors = dataset.abs_errors();
        features
            .iter()
            .map(|feature| {
                let values = dataset.feature_values(feature)?;
                let coefficient = pearson(&values, &abs_errors, feature, "AbsError")?;
                Ok(FeatureCorrelation {
                    feature: feature.clone(),
                    coefficient,
                })
            })
            .collect()
    }
}

/// Pearson correlation coefficient of two equally long columns
pub fn pearson(xs: &[f64], ys: &[f64], x_name: &str, y_name: &str) -> Result<f64> {
    if xs.is_empty() || ys.is_empty() {
        return Err(FuzzyevalError::EmptyDataset);
    }
    if xs.len() != ys.len() {
        return Err(FuzzyevalError::InvalidData(format!(
            "column lengths differ: {} has {}, {} has {}",
            x_name,
            xs.len(),
            y_name,
            ys.len()
        )));
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (&x, &y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x <= 0.0 || var_x.is_nan() {
        return Err(FuzzyevalError::InsufficientVariance { column: x_name.to_string() });
    }
    if var_y <= 0.0 || var_y.is_nan() {
        return Err(FuzzyevalError::InsufficientVariance { column: y_name.to_string() });
    }

    Ok(cov / (var_x.sqrt() * var_y.sqrt()))
}
