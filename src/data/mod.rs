pub mod connectors;
pub mod genes;

pub use connectors::{CsvConnector, DataValidator, DatasetMetadata};
pub use genes::GeneFileReader;
