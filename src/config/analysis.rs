use super::traits::ConfigSection;
use crate::engines::metrics::{diagnostics::DEFAULT_HISTOGRAM_BINS, roc::DEFAULT_ROC_STEPS};
use crate::error::FuzzyevalError;
use crate::types::DEFAULT_FEATURES;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub roc_steps: usize,
    pub histogram_bins: usize,
    /// Feature columns required in the dataset and correlated with AbsError
    pub feature_columns: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            roc_steps: DEFAULT_ROC_STEPS,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            feature_columns: DEFAULT_FEATURES.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl ConfigSection for AnalysisConfig {
    fn section_name() -> &'static str {
        "analysis"
    }

    fn validate(&self) -> Result<(), FuzzyevalError> {
        if self.roc_steps < 2 {
            return Err(FuzzyevalError::Configuration(
                "ROC sweep needs at least 2 thresholds".to_string()
            ));
        }
        if self.histogram_bins == 0 {
            return Err(FuzzyevalError::Configuration(
                "Histogram bins must be positive".to_string()
            ));
        }
        Ok(())
    }
}
