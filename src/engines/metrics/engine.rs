// src/engines/metrics/engine.rs
use crate::config::AnalysisConfig;
use crate::data::DatasetMetadata;
use crate::engines::metrics::{
    diagnostics::{self, Histogram},
    ClassificationMetrics, CorrelationAnalyzer, ErrorStatistics, FeatureCorrelation, RocCurve,
};
use crate::error::{FuzzyevalError, Result};
use crate::types::{PredictionDataset, PredictionRecord};
use serde::{Deserialize, Serialize};

/// A component that could not produce output for this dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentFailure {
    pub component: String,
    pub message: String,
}

/// Everything computed from one prediction dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub generated_at: String,
    /// Input file description, when the dataset was read from disk
    pub source: Option<DatasetMetadata>,
    pub sample_count: usize,
    pub statistics: Option<ErrorStatistics>,
    pub classification: Option<ClassificationMetrics>,
    pub roc: Option<RocCurve>,
    pub correlations: Option<Vec<FeatureCorrelation>>,
    pub residuals: Vec<(usize, f64)>,
    pub distributions: Option<Vec<Histogram>>,
    pub failures: Vec<ComponentFailure>,
}

pub struct MetricsEngine {
    config: AnalysisConfig,
}

impl MetricsEngine {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Run every component; a failing component is recorded and skipped
    pub fn evaluate(&self, dataset: &PredictionDataset) -> AnalysisReport {
        let mut failures = Vec::new();

        // Error statistics
        let statistics = Self::capture(
            "statistics",
            ErrorStatistics::calculate(&dataset.records),
            &mut failures,
        );

        // Classification at the fixed threshold
        let classification = Self::capture(
            "classification",
            Self::non_empty(dataset).map(ClassificationMetrics::calculate),
            &mut failures,
        );

        // Threshold sweep
        let roc = Self::capture(
            "roc",
            Self::non_empty(dataset).map(|records| RocCurve::sweep(records, self.config.roc_steps)),
            &mut failures,
        );

        // Feature correlations
        let correlations = Self::capture(
            "correlation",
            CorrelationAnalyzer::analyze(dataset, &self.config.feature_columns),
            &mut failures,
        );

        let distributions = Self::capture(
            "distributions",
            diagnostics::distributions(dataset, self.config.histogram_bins),
            &mut failures,
        );

        log::info!(
            "Evaluated {} predictions ({} component failures)",
            dataset.len(),
            failures.len()
        );

        AnalysisReport {
            generated_at: chrono::Utc::now().to_rfc3339(),
            source: None,
            sample_count: dataset.len(),
            statistics,
            classification,
            roc,
            correlations,
            residuals: diagnostics::residuals(dataset),
            distributions,
            failures,
        }
    }

    fn non_empty(dataset: &PredictionDataset) -> Result<&[PredictionRecord]> {
        if dataset.is_empty() {
            Err(FuzzyevalError::EmptyDataset)
        } else {
            Ok(&dataset.records)
        }
    }

    fn capture<T>(component: &str, result: Result<T>, failures: &mut Vec<ComponentFailure>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("{} failed: {}", component, e);
                failures.push(ComponentFailure {
                    component: component.to_string(),
                    message: e.to_string(),
                });
                None
            }
        }
    }
}
