use crate::error::{FuzzyevalError, Result};
use crate::types::{PredictionDataset, PredictionRecord};
use polars::prelude::*;
use std::path::Path;
use super::{
    types::{DatasetMetadata, RequiredColumn},
    validator::DataValidator,
};

pub struct CsvConnector;

impl CsvConnector {
    /// Load CSV file into DataFrame
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(FuzzyevalError::NotFound {
                path: path.display().to_string(),
            });
        }

        // Integer-looking leading rows (`0`, `5`) must not fix a column as i64
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?;

        Ok(df)
    }

    /// Load and validate a prediction file into records
    pub fn load_dataset<P: AsRef<Path>>(
        path: P,
        feature_columns: &[String],
    ) -> Result<PredictionDataset> {
        Self::load_with_metadata(path, feature_columns).map(|(dataset, _)| dataset)
    }

    /// Load a prediction file, also describing the file it came from
    pub fn load_with_metadata<P: AsRef<Path>>(
        path: P,
        feature_columns: &[String],
    ) -> Result<(PredictionDataset, DatasetMetadata)> {
        let df = Self::load(&path)?;
        let dataset = Self::to_dataset(&df, feature_columns)?;
        let metadata = Self::create_metadata(&path, &df)?;
        log::info!(
            "Loaded {} predictions from {}",
            dataset.len(),
            path.as_ref().display()
        );
        Ok((dataset, metadata))
    }

    /// Convert a validated DataFrame into an ordered prediction dataset
    pub fn to_dataset(df: &DataFrame, feature_columns: &[String]) -> Result<PredictionDataset> {
        DataValidator::validate_columns(df, feature_columns)?;

        let null_report = DataValidator::check_nulls(df);
        if !null_report.is_empty() {
            log::warn!("Null values detected: {:?}", null_report);
        }

        let expected = Self::column_values(df, RequiredColumn::Expected.as_str())?;
        let predicted = Self::column_values(df, RequiredColumn::Predicted.as_str())?;
        let error = Self::column_values(df, RequiredColumn::Error.as_str())?;
        let abs_error = Self::column_values(df, RequiredColumn::AbsError.as_str())?;
        let features = feature_columns
            .iter()
            .map(|name| Self::column_values(df, name))
            .collect::<Result<Vec<_>>>()?;

        let records: Vec<PredictionRecord> = (0..df.height())
            .map(|i| PredictionRecord {
                expected: expected[i],
                predicted: predicted[i],
                error: error[i],
                abs_error: abs_error[i],
                features: features.iter().map(|column| column[i]).collect(),
            })
            .collect();

        let inconsistent = DataValidator::count_inconsistent_errors(&records);
        if inconsistent > 0 {
            log::warn!(
                "{} of {} rows have Error/AbsError inconsistent with Predicted - Expected",
                inconsistent,
                records.len()
            );
        }

        Ok(PredictionDataset::new(feature_columns.to_vec(), records))
    }

    /// Create metadata for a loaded DataFrame
    pub fn create_metadata<P: AsRef<Path>>(path: P, df: &DataFrame) -> Result<DatasetMetadata> {
        Ok(DatasetMetadata {
            file_path: path.as_ref().to_string_lossy().to_string(),
            num_rows: df.height(),
            num_columns: df.width(),
            columns: DataValidator::column_names(df),
            expected_range: Self::column_range(df, RequiredColumn::Expected.as_str())?,
            predicted_range: Self::column_range(df, RequiredColumn::Predicted.as_str())?,
        })
    }

    // Helper functions
    fn column_values(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
        let column = df.column(name)?.cast(&DataType::Float64)?;
        let values = column.f64()?;

        values
            .into_iter()
            .enumerate()
            .map(|(row, v)| {
                v.ok_or_else(|| {
                    FuzzyevalError::InvalidData(format!("Null value in column '{}' at row {}", name, row))
                })
            })
            .collect()
    }

    fn column_range(df: &DataFrame, name: &str) -> Result<(f64, f64)> {
        let column = df.column(name)?.cast(&DataType::Float64)?;
        let values = column.f64()?;
        Ok((values.min().unwrap_or(0.0), values.max().unwrap_or(0.0)))
    }
}
