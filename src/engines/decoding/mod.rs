pub mod chromosome;
pub mod gene_consumer;
pub mod schema;

pub use chromosome::{decode, decode_variable, Chromosome, DEFAULT_GENES};
pub use gene_consumer::GeneConsumer;
pub use schema::{find_schema, Partition, VariableSchema, TOTAL_GENES, VARIABLE_SCHEMA};
