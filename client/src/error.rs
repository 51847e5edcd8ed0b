use thiserror::Error;

#[derive(Error, Debug)]
pub enum DqError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Engine reported failure: {0}")]
    EngineError(String),

    #[error("Transport error: {source}")]
    TransportError {
        #[from]
        source: tonic::Status,
    },

    #[error("Connection error: {source}")]
    ConnectError {
        #[from]
        source: tonic::transport::Error,
    },

    #[error("Response decoding error: {source}")]
    DecodeError {
        #[from]
        source: prost::DecodeError,
    },

    #[error("CSV parsing error: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, DqError>;

impl DqError {
    /// Shorthand for the common "unknown enum string" failure.
    pub fn unknown_name(kind: &str, value: &str) -> Self {
        DqError::InvalidInput(format!("unknown {} '{}'", kind, value))
    }
}
