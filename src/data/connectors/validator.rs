use crate::error::{FuzzyevalError, Result};
use crate::types::PredictionRecord;
use polars::prelude::*;
use super::types::RequiredColumn;

/// Tolerance when checking `Error == Predicted - Expected`
pub const ERROR_TOLERANCE: f64 = 1e-6;

pub struct DataValidator;

impl DataValidator {
    /// Validate that the DataFrame has the prediction columns and every
    /// requested feature column, all numeric
    pub fn validate_columns(df: &DataFrame, feature_columns: &[String]) -> Result<()> {
        let required = RequiredColumn::all()
            .into_iter()
            .map(|c| c.as_str().to_string())
            .chain(feature_columns.iter().cloned());

        for name in required {
            let series = df.column(&name).map_err(|_| FuzzyevalError::MissingColumn {
                column: name.clone(),
                available: Self::column_names(df),
            })?;

            let numeric = matches!(
                series.dtype(),
                DataType::Float64
                    | DataType::Float32
                    | DataType::Int64
                    | DataType::Int32
                    | DataType::UInt64
                    | DataType::UInt32
            );
            // A header-only file types its columns as strings
            if df.height() > 0 && !numeric {
                return Err(FuzzyevalError::InvalidData(format!(
                    "Column '{}' must be numeric, found {:?}",
                    name,
                    series.dtype()
                )));
            }
        }

        Ok(())
    }

    /// Check for null values in any column
    pub fn check_nulls(df: &DataFrame) -> Vec<(String, usize)> {
        df.get_columns()
            .iter()
            .filter(|c| c.null_count() > 0)
            .map(|c| (c.name().to_string(), c.null_count()))
            .collect()
    }

    /// Rows whose stored Error/AbsError disagree with Predicted - Expected
    pub fn count_inconsistent_errors(records: &[PredictionRecord]) -> usize {
        records
            .iter()
            .filter(|r| {
                let derived = r.predicted - r.expected;
                (r.error - derived).abs() > ERROR_TOLERANCE
                    || (r.abs_error - derived.abs()).abs() > ERROR_TOLERANCE
            })
            .count()
    }

    pub fn column_names(df: &DataFrame) -> Vec<String> {
        df.get_column_names().iter().map(|s| s.to_string()).collect()
    }
}
