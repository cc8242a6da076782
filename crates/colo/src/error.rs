use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Config(#[from] colocation_io::ConfigError),

    #[error(transparent)]
    Dataset(#[from] colocation_io::DatasetError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
