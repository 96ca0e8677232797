use thiserror::Error;

#[derive(Debug, Error)]
pub enum UsersiftError {
    #[error("Invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
