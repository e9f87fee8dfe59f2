pub mod cli;
pub mod commands;
pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod fuzzy;
pub mod report;
pub mod types;

pub use error::{FuzzyevalError, Result};
