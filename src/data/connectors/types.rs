use serde::{Deserialize, Serialize};

/// Columns every prediction dataset must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredColumn {
    Expected,
    Predicted,
    Error,
    AbsError,
}

impl RequiredColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expected => "Expected",
            Self::Predicted => "Predicted",
            Self::Error => "Error",
            Self::AbsError => "AbsError",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::Expected,
            Self::Predicted,
            Self::Error,
            Self::AbsError,
        ]
    }
}

/// Metadata about a loaded prediction file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub file_path: String,
    pub num_rows: usize,
    pub num_columns: usize,
    pub columns: Vec<String>,
    pub expected_range: (f64, f64),  // (min, max)
    pub predicted_range: (f64, f64), // (min, max)
}
