pub mod classification;
pub mod correlation;
pub mod diagnostics;
pub mod engine;
pub mod regression;
pub mod roc;

pub use classification::{ClassificationMetrics, ConfusionCounts};
pub use correlation::{pearson, CorrelationAnalyzer, FeatureCorrelation};
pub use diagnostics::{Histogram, HistogramBin};
pub use engine::{AnalysisReport, ComponentFailure, MetricsEngine};
pub use regression::ErrorStatistics;
pub use roc::{RocCurve, RocPoint};
