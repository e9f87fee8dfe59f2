use super::traits::ConfigSection;
use crate::engines::decoding::find_schema;
use crate::error::FuzzyevalError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MembershipConfig {
    /// Samples per variable when exporting curves
    pub sample_points: usize,
    /// Variable plotted against its default parameters
    pub comparison_variable: String,
}

impl Default for MembershipConfig {
    fn default() -> Self {
        Self {
            sample_points: 1000,
            comparison_variable: "AltitudeChange".to_string(),
        }
    }
}

impl ConfigSection for MembershipConfig {
    fn section_name() -> &'static str {
        "membership"
    }

    fn validate(&self) -> Result<(), FuzzyevalError> {
        if self.sample_points < 2 {
            return Err(FuzzyevalError::Configuration(
                "Sample points must be at least 2".to_string()
            ));
        }
        if find_schema(&self.comparison_variable).is_none() {
            return Err(FuzzyevalError::Configuration(format!(
                "Unknown comparison variable: {}",
                self.comparison_variable
            )));
        }
        Ok(())
    }
}
