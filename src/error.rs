use thiserror::Error;

#[derive(Error, Debug)]
pub enum FuzzyevalError {
    #[error("Schema mismatch: expected {expected} genes, got {actual}")]
    SchemaMismatch { expected: usize, actual: usize },

    #[error("Degenerate {shape} membership function with parameters {params:?}")]
    DegenerateShape { shape: &'static str, params: Vec<f64> },

    #[error("Empty dataset: no records to summarize")]
    EmptyDataset,

    #[error("Missing required column: {column} (available: {available:?})")]
    MissingColumn { column: String, available: Vec<String> },

    #[error("Insufficient variance in column '{column}' for correlation")]
    InsufficientVariance { column: String },

    #[error("File not found: {path}")]
    NotFound { path: String },

    #[error("Parse error at line {line}: invalid number '{token}'")]
    Parse { line: usize, token: String },

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unknown term '{label}' in variable {variable}")]
    UnknownTerm { variable: String, label: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, FuzzyevalError>;
