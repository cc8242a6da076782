//! Ambient I/O for the colocation pipeline: dataset ingestion, configuration
//! loading, and report rendering. Keeps `colocation-core` free of file
//! system and formatting concerns.

pub mod config;
pub mod dataset;
pub mod error;
pub mod report;

pub use config::{load_config, parse_config, MiningConfig};
pub use dataset::{load_dataset, parse_dataset};
pub use error::{ConfigError, DatasetError};
pub use report::render_report;
