// src/engines/metrics/diagnostics.rs
use crate::error::{FuzzyevalError, Result};
use crate::types::PredictionDataset;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HISTOGRAM_BINS: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub column: String,
    pub bins: Vec<HistogramBin>,
}

/// Residual (error) per row index, in row order
pub fn residuals(dataset: &PredictionDataset) -> Vec<(usize, f64)> {
    dataset
        .records
        .iter()
        .enumerate()
        .map(|(i, r)| (i, r.error))
        .collect()
}

/// Equal-width bins over `[min, max]`; the last bin includes `max`
pub fn histogram(column: &str, values: &[f64], bins: usize) -> Result<Histogram> {
    if values.is_empty() {
        return Err(FuzzyevalError::EmptyDataset);
    }
    if bins == 0 {
        return Err(FuzzyevalError::Configuration("histogram needs at least one bin".to_string()));
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return Ok(Histogram {
            column: column.to_string(),
            bins: vec![HistogramBin { lower: min, upper: max, count: values.len() }],
        });
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + width * i as f64,
            upper: if i == bins - 1 { max } else { min + width * (i + 1) as f64 },
            count,
        })
        .collect();

    Ok(Histogram {
        column: column.to_string(),
        bins,
    })
}

/// Histograms of Error, AbsError and every feature column
pub fn distributions(dataset: &PredictionDataset, bins: usize) -> Result<Vec<Histogram>> {
    let mut histograms = vec![
        histogram("Error", &dataset.errors(), bins)?,
        histogram("AbsError", &dataset.abs_errors(), bins)?,
    ];
    for name in &dataset.feature_names {
        histograms.push(histogram(name, &dataset.feature_values(name)?, bins)?);
    }
    Ok(histograms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PredictionRecord;

    #[test]
    fn test_histogram_counts_everything() {
        let values: Vec<f64> = (0..=100).map(|i| i as f64).collect();
        let hist = histogram("x", &values, 10).unwrap();
        assert_eq!(hist.bins.len(), 10);
        assert_eq!(hist.bins.iter().map(|b| b.count).sum::<usize>(), 101);
        assert_eq!(hist.bins[9].upper, 100.0);
        // max lands in the closed last bin
        assert_eq!(hist.bins[9].count, 11);
    }

    #[test]
    fn test_constant_values_single_bin() {
        let hist = histogram("x", &[2.0, 2.0, 2.0], 50).unwrap();
        assert_eq!(hist.bins.len(), 1);
        assert_eq!(hist.bins[0].count, 3);
    }

    #[test]
    fn test_residuals_keep_row_order() {
        let dataset = PredictionDataset::from_pairs(&[(0.5, 0.5), (0.0, 1.0), (1.0, 0.25)]);
        let res = residuals(&dataset);
        assert_eq!(res, vec![(0, 0.0), (1, 1.0), (2, -0.75)]);
    }

    #[test]
    fn test_distributions_cover_features() {
        let records = vec![
            PredictionRecord::new(0.1, 0.2, vec![1.0]),
            PredictionRecord::new(0.4, 0.2, vec![3.0]),
        ];
        let dataset = PredictionDataset::new(vec!["TimeGap".into()], records);
        let hists = distributions(&dataset, 5).unwrap();
        let columns: Vec<&str> = hists.iter().map(|h| h.column.as_str()).collect();
        assert_eq!(columns, vec!["Error", "AbsError", "TimeGap"]);
    }
}
