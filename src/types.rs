use crate::error::{FuzzyevalError, Result};
use serde::{Deserialize, Serialize};

/// Decision threshold applied to both expected and predicted anomaly levels
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Feature columns correlated against the absolute error by default
pub const DEFAULT_FEATURES: [&str; 5] = [
    "SpeedChange",
    "HeadingChange",
    "VerticalRateChange",
    "AltitudeChange",
    "TimeGap",
];

/// One row of the prediction dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub expected: f64,
    pub predicted: f64,
    pub error: f64,
    pub abs_error: f64,
    pub features: Vec<f64>,
}

impl PredictionRecord {
    /// Build a record from expected/predicted, deriving the error columns
    pub fn new(expected: f64, predicted: f64, features: Vec<f64>) -> Self {
        let error = predicted - expected;
        Self {
            expected,
            predicted,
            error,
            abs_error: error.abs(),
            features,
        }
    }

    pub fn expected_positive(&self) -> bool {
        self.expected > DECISION_THRESHOLD
    }
}

/// Ordered prediction records with their named feature columns
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictionDataset {
    pub feature_names: Vec<String>,
    pub records: Vec<PredictionRecord>,
}

impl PredictionDataset {
    pub fn new(feature_names: Vec<String>, records: Vec<PredictionRecord>) -> Self {
        Self { feature_names, records }
    }

    /// Dataset without feature columns, built from (expected, predicted) pairs
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        let records = pairs
            .iter()
            .map(|&(expected, predicted)| PredictionRecord::new(expected, predicted, Vec::new()))
            .collect();
        Self::new(Vec::new(), records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn feature_index(&self, name: &str) -> Option<usize> {
        self.feature_names.iter().position(|f| f == name)
    }

    pub fn errors(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.error).collect()
    }

    pub fn abs_errors(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.abs_error).collect()
    }

    /// Values of one feature column, in row order
    ///
    /// A name outside `feature_names`, or a record too short to hold the
    /// column, is a `MissingColumn`.
    pub fn feature_values(&self, name: &str) -> Result<Vec<f64>> {
        let missing = || FuzzyevalError::MissingColumn {
            column: name.to_string(),
            available: self.feature_names.clone(),
        };
        let index = self.feature_index(name).ok_or_else(missing)?;

        self.records
            .iter()
            .map(|r| r.features.get(index).copied().ok_or_else(missing))
            .collect()
    }
}

/// Sampled membership curve for one term of a linguistic variable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MembershipCurve {
    pub variable: String,
    pub term: String,
    pub points: Vec<(f64, f64)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_values_by_name() {
        let records = vec![
            PredictionRecord::new(0.2, 0.3, vec![1.0, 10.0]),
            PredictionRecord::new(0.8, 0.6, vec![2.0, 20.0]),
        ];
        let dataset = PredictionDataset::new(vec!["SpeedChange".into(), "TimeGap".into()], records);
        assert_eq!(dataset.feature_values("TimeGap").unwrap(), vec![10.0, 20.0]);
        assert!(matches!(
            dataset.feature_values("HeadingChange"),
            Err(FuzzyevalError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_short_record_is_missing_column() {
        let records = vec![
            PredictionRecord::new(0.2, 0.3, vec![1.0, 10.0]),
            PredictionRecord::new(0.8, 0.6, vec![2.0]),
        ];
        let dataset = PredictionDataset::new(vec!["SpeedChange".into(), "TimeGap".into()], records);
        let err = dataset.feature_values("TimeGap").unwrap_err();
        assert!(matches!(err, FuzzyevalError::MissingColumn { ref column, .. } if column == "TimeGap"));
    }
}
