pub mod decoding;
pub mod metrics;
